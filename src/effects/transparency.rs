//! See-through materials on geometry blocking the camera's view.

use rustc_hash::FxHashMap;

use super::{CameraEffect, Frame, PoseFields};
use crate::options::RigOptions;
use crate::post::{Material, MaterialInstance};
use crate::scene::{ComponentId, MaterialHost, TraceChannel};

/// Scalar parameter the transparent material reads.
pub const TRANSPARENCY_PARAMETER: &str = "Transparency";
/// Material slot swapped on occluders.
const OCCLUDED_SLOT: usize = 0;

/// Swap a transparent material onto whatever the forward trace hits and
/// restore each original as soon as the trace stops hitting it.
///
/// Every tracked component is restored with exactly the material it had
/// before it was first hit.
#[derive(Debug, Clone, Default)]
pub struct ObjectTransparency {
    occluded: FxHashMap<ComponentId, Option<Material>>,
}

impl ObjectTransparency {
    /// Components currently showing the transparent material.
    pub fn occluded(&self) -> impl Iterator<Item = ComponentId> + '_ {
        self.occluded.keys().copied()
    }

    /// Number of tracked components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occluded.len()
    }

    /// Whether nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occluded.is_empty()
    }

    /// Put every original material back and stop tracking.
    pub fn restore_all(&mut self, host: &mut dyn MaterialHost) {
        for (component, original) in self.occluded.drain() {
            host.set_material(component, OCCLUDED_SLOT, original);
        }
    }

    /// Restore and forget every tracked component except `keep`.
    fn restore_except(
        &mut self,
        keep: ComponentId,
        host: &mut dyn MaterialHost,
    ) {
        self.occluded.retain(|&component, original| {
            if component == keep {
                return true;
            }
            host.set_material(component, OCCLUDED_SLOT, original.take());
            log::debug!("component {component} no longer occludes");
            false
        });
    }
}

impl CameraEffect for ObjectTransparency {
    fn name(&self) -> &'static str {
        "object_transparency"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::MATERIALS
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.object_transparency.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let settings = &frame.options.effects.object_transparency;
        let hit = frame
            .trace_forward(settings.check_distance, TraceChannel::Visibility);
        let Some(host) = frame.materials.as_deref_mut() else {
            return;
        };
        let Some(component) = hit.and_then(|hit| hit.component) else {
            if !self.occluded.is_empty() {
                log::debug!(
                    "view clear, restoring {} occluders",
                    self.occluded.len()
                );
                self.restore_all(host);
            }
            return;
        };
        self.restore_except(component, host);
        if self.occluded.contains_key(&component) {
            return;
        }
        let Some(material) = settings.material.as_deref() else {
            return;
        };
        let original = host.material(component, OCCLUDED_SLOT);
        let _ = self.occluded.insert(component, original);
        let transparent = MaterialInstance::new(material)
            .with_scalar(TRANSPARENCY_PARAMETER, settings.strength);
        host.set_material(
            component,
            OCCLUDED_SLOT,
            Some(Material::Instance(transparent)),
        );
        log::debug!("component {component} made transparent");
    }

    fn disabled(&mut self, frame: &mut Frame<'_>) {
        if self.occluded.is_empty() {
            return;
        }
        if let Some(host) = frame.materials.as_deref_mut() {
            self.restore_all(host);
        }
    }
}
