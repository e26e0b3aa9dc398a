//! Post-process parameter block and blendable material overlays.
//!
//! The rig owns one [`PostProcessSettings`] when a post-process target is
//! attached; the host copies it to its renderer after each frame. Without
//! one, every post-process write in the rig is skipped.

use rustc_hash::FxHashMap;

/// A material asset with per-instance scalar parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MaterialInstance {
    parent: String,
    scalars: FxHashMap<String, f32>,
}

impl MaterialInstance {
    /// Instance of the named material asset with no parameter overrides.
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            scalars: FxHashMap::default(),
        }
    }

    /// Builder form of [`set_scalar`](Self::set_scalar).
    #[must_use]
    pub fn with_scalar(mut self, name: &str, value: f32) -> Self {
        self.set_scalar(name, value);
        self
    }

    /// Set a scalar parameter.
    pub fn set_scalar(&mut self, name: &str, value: f32) {
        let _ = self.scalars.insert(name.to_owned(), value);
    }

    /// Current value of a scalar parameter.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<f32> {
        self.scalars.get(name).copied()
    }

    /// Name of the material asset this instance was made from.
    #[must_use]
    pub fn parent(&self) -> &str {
        &self.parent
    }
}

/// A surface material: either a shared asset or a dynamic instance.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    /// A shared material asset by name.
    Asset(String),
    /// A dynamic instance with its own parameters.
    Instance(MaterialInstance),
}

/// Identifier of a blendable within one [`PostProcessSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendableId(u32);

/// A material overlay attached to the post-process chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Blendable {
    /// Identifier handed out by [`PostProcessSettings::add_blendable`].
    pub id: BlendableId,
    /// The overlay material.
    pub material: MaterialInstance,
    /// Blend weight in [0, 1].
    pub weight: f32,
}

/// Settable post-process fields plus the ordered overlay list.
#[derive(Debug, Clone, PartialEq)]
pub struct PostProcessSettings {
    /// Depth-of-field focal distance.
    pub depth_of_field_distance: f32,
    /// Depth-of-field focal region.
    pub depth_of_field_region: f32,
    /// Depth-of-field aperture.
    pub depth_of_field_fstop: f32,
    /// Motion blur amount.
    pub motion_blur_amount: f32,
    /// Color grading intensity.
    pub color_grading_intensity: f32,
    /// Vignette intensity.
    pub vignette_intensity: f32,
    blendables: Vec<Blendable>,
    next_id: u32,
}

impl Default for PostProcessSettings {
    fn default() -> Self {
        Self {
            depth_of_field_distance: 0.0,
            depth_of_field_region: 0.0,
            depth_of_field_fstop: 4.0,
            motion_blur_amount: 0.0,
            color_grading_intensity: 1.0,
            vignette_intensity: 0.0,
            blendables: Vec::new(),
            next_id: 0,
        }
    }
}

impl PostProcessSettings {
    /// Append an overlay; later overlays draw on top of earlier ones.
    pub fn add_blendable(
        &mut self,
        material: MaterialInstance,
        weight: f32,
    ) -> BlendableId {
        let id = BlendableId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.blendables.push(Blendable {
            id,
            material,
            weight: weight.clamp(0.0, 1.0),
        });
        id
    }

    /// Detach an overlay. Unknown ids are ignored.
    pub fn remove_blendable(&mut self, id: BlendableId) -> Option<Blendable> {
        let index = self.blendables.iter().position(|b| b.id == id)?;
        Some(self.blendables.remove(index))
    }

    /// Look up an attached overlay.
    #[must_use]
    pub fn blendable(&self, id: BlendableId) -> Option<&Blendable> {
        self.blendables.iter().find(|b| b.id == id)
    }

    /// Look up an attached overlay for editing.
    pub fn blendable_mut(&mut self, id: BlendableId) -> Option<&mut Blendable> {
        self.blendables.iter_mut().find(|b| b.id == id)
    }

    /// Attached overlays in draw order.
    #[must_use]
    pub fn blendables(&self) -> &[Blendable] {
        &self.blendables
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blendables_keep_insertion_order() {
        let mut post = PostProcessSettings::default();
        let a = post.add_blendable(MaterialInstance::new("A"), 1.0);
        let b = post.add_blendable(MaterialInstance::new("B"), 0.5);
        let names: Vec<_> =
            post.blendables().iter().map(|b| b.material.parent()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_ne!(a, b);
    }

    #[test]
    fn removing_unknown_id_is_harmless() {
        let mut post = PostProcessSettings::default();
        let a = post.add_blendable(MaterialInstance::new("A"), 1.0);
        assert!(post.remove_blendable(a).is_some());
        assert!(post.remove_blendable(a).is_none());
        assert!(post.blendables().is_empty());
    }

    #[test]
    fn weight_is_clamped() {
        let mut post = PostProcessSettings::default();
        let id = post.add_blendable(MaterialInstance::new("A"), 3.0);
        assert_eq!(post.blendable(id).unwrap().weight, 1.0);
    }

    #[test]
    fn scalar_parameters_round_trip() {
        let mut inst =
            MaterialInstance::new("M_Fade").with_scalar("FadeAmount", 0.0);
        inst.set_scalar("FadeAmount", 0.25);
        assert_eq!(inst.scalar("FadeAmount"), Some(0.25));
        assert_eq!(inst.scalar("Missing"), None);
    }
}
