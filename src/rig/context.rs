use crate::scene::{CameraSink, MaterialHost, OwnerProvider, SceneProbe};

/// Host collaborators borrowed for one call into the rig.
///
/// Only the probe is required. Every other collaborator is optional and
/// the stages that need a missing one skip themselves.
pub struct RigContext<'a> {
    /// Geometry queries.
    pub probe: &'a dyn SceneProbe,
    /// Character the camera follows.
    pub owner: Option<&'a mut dyn OwnerProvider>,
    /// Scene component materials.
    pub materials: Option<&'a mut dyn MaterialHost>,
    /// Render-facing camera the pose is committed to.
    pub camera: Option<&'a mut dyn CameraSink>,
    /// Host world clock in seconds.
    pub world_time: f32,
}

impl<'a> RigContext<'a> {
    /// Context with only a scene probe.
    #[must_use]
    pub fn new(probe: &'a dyn SceneProbe) -> Self {
        Self {
            probe,
            owner: None,
            materials: None,
            camera: None,
            world_time: 0.0,
        }
    }

    /// Attach the owner.
    #[must_use]
    pub fn with_owner(mut self, owner: &'a mut dyn OwnerProvider) -> Self {
        self.owner = Some(owner);
        self
    }

    /// Attach a material host.
    #[must_use]
    pub fn with_materials(
        mut self,
        materials: &'a mut dyn MaterialHost,
    ) -> Self {
        self.materials = Some(materials);
        self
    }

    /// Attach a render camera.
    #[must_use]
    pub fn with_camera(mut self, camera: &'a mut dyn CameraSink) -> Self {
        self.camera = Some(camera);
        self
    }

    /// Set the world clock.
    #[must_use]
    pub fn at_time(mut self, world_time: f32) -> Self {
        self.world_time = world_time;
        self
    }
}

/// Reborrow an optional material host for a shorter scope.
pub(super) fn materials_of<'b>(
    slot: &'b mut Option<&'_ mut dyn MaterialHost>,
) -> Option<&'b mut dyn MaterialHost> {
    match slot {
        Some(host) => Some(&mut **host),
        None => None,
    }
}

/// Reborrow an optional camera sink for a shorter scope.
pub(super) fn camera_of<'b>(
    slot: &'b mut Option<&'_ mut dyn CameraSink>,
) -> Option<&'b mut dyn CameraSink> {
    match slot {
        Some(camera) => Some(&mut **camera),
        None => None,
    }
}
