//! Camera effects that propose pose and post-process changes each frame.
//!
//! Effects are independent and individually toggled. Each one mutates the
//! shared [`Frame`] in place when its stage runs; later stages override
//! earlier ones. [`EffectSet`] owns one instance of every effect so the
//! frame sequence can address them by [`EffectKind`].

mod collision;
mod fov;
mod frame;
mod motion;
mod orientation;
mod post_fx;
mod transparency;

use bitflags::bitflags;

pub use collision::{
    CollisionPrediction, EnvironmentalAwareness, ObstacleDetection, PushBack,
    PROBE_DISTANCE, PUSH_BACK_DISTANCE,
};
pub use fov::{DynamicFov, DynamicZoom, FocusFov};
pub use frame::{ControlState, Frame};
pub use motion::{ContextualPositioning, HeadBob, OverShoulder, Sway};
pub use orientation::{
    CameraInertia, IntelligentFraming, Recoil, RecoilState, TerrainTilt,
};
pub use post_fx::{
    fstop_for, AdaptiveDepthOfField, AdvancedMotionBlur, FOCAL_REGION,
};
pub use transparency::{ObjectTransparency, TRANSPARENCY_PARAMETER};

use crate::options::RigOptions;

bitflags! {
    /// Parts of the frame an effect writes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PoseFields: u8 {
        /// Owner-relative position.
        const POSITION = 1;
        /// Owner-relative rotation.
        const ROTATION = 1 << 1;
        /// Field of view.
        const FOV = 1 << 2;
        /// Post-process parameters.
        const POST_PROCESS = 1 << 3;
        /// Scene component materials.
        const MATERIALS = 1 << 4;
    }
}

/// A toggleable behavior that adjusts the frame.
pub trait CameraEffect {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Fields this effect may write.
    fn writes(&self) -> PoseFields;

    /// Whether the effect's toggle is on.
    fn enabled(&self, options: &RigOptions) -> bool;

    /// Run the effect for one stage.
    fn apply(&mut self, frame: &mut Frame<'_>);

    /// Called instead of [`apply`](Self::apply) when the stage is reached
    /// with the toggle off. Effects holding scene state release it here.
    fn disabled(&mut self, _frame: &mut Frame<'_>) {}
}

/// Names the effects an [`EffectSet`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectKind {
    /// Aim/sprint/speed driven FOV.
    DynamicFov,
    /// Speed threshold zoom.
    DynamicZoom,
    /// FOV from the distance to what the camera looks at.
    FocusFov,
    /// Vertical head bob.
    HeadBob,
    /// Idle sway.
    Sway,
    /// Forward collision push-back.
    PushBack,
    /// Push-back toward the owner's predicted location.
    CollisionPrediction,
    /// Periodic forward obstacle clamp.
    ObstacleDetection,
    /// Pull in ahead of forward geometry.
    EnvironmentalAwareness,
    /// Ground normal alignment.
    TerrainTilt,
    /// Turn toward the owner.
    IntelligentFraming,
    /// Blend toward the mode's aim or rest position.
    ContextualPositioning,
    /// Depth of field on forward geometry.
    AdaptiveDepthOfField,
    /// Velocity scaled motion blur.
    AdvancedMotionBlur,
    /// Smoothed rotation toward the look target.
    CameraInertia,
    /// See-through occluders.
    ObjectTransparency,
    /// Shoulder offset while aiming.
    OverShoulder,
    /// Recoil decay.
    Recoil,
}

impl EffectKind {
    /// Every effect, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::DynamicFov,
        Self::DynamicZoom,
        Self::FocusFov,
        Self::HeadBob,
        Self::Sway,
        Self::PushBack,
        Self::CollisionPrediction,
        Self::ObstacleDetection,
        Self::EnvironmentalAwareness,
        Self::TerrainTilt,
        Self::IntelligentFraming,
        Self::ContextualPositioning,
        Self::AdaptiveDepthOfField,
        Self::AdvancedMotionBlur,
        Self::CameraInertia,
        Self::ObjectTransparency,
        Self::OverShoulder,
        Self::Recoil,
    ];

    /// Bit of this kind in a per-frame guard mask.
    #[must_use]
    pub const fn bit(self) -> u32 {
        1 << self as u32
    }
}

/// One instance of every effect.
#[derive(Debug, Default)]
pub struct EffectSet {
    /// Aim/sprint/speed driven FOV.
    pub dynamic_fov: DynamicFov,
    /// Speed threshold zoom.
    pub dynamic_zoom: DynamicZoom,
    /// Focus distance FOV.
    pub focus_fov: FocusFov,
    /// Head bob.
    pub head_bob: HeadBob,
    /// Sway.
    pub sway: Sway,
    /// Collision push-back.
    pub push_back: PushBack,
    /// Collision prediction.
    pub collision_prediction: CollisionPrediction,
    /// Obstacle detection.
    pub obstacle_detection: ObstacleDetection,
    /// Environmental awareness.
    pub environmental_awareness: EnvironmentalAwareness,
    /// Terrain tilt.
    pub terrain_tilt: TerrainTilt,
    /// Intelligent framing.
    pub intelligent_framing: IntelligentFraming,
    /// Contextual positioning.
    pub contextual_positioning: ContextualPositioning,
    /// Adaptive depth of field.
    pub adaptive_depth_of_field: AdaptiveDepthOfField,
    /// Advanced motion blur.
    pub advanced_motion_blur: AdvancedMotionBlur,
    /// Camera inertia.
    pub camera_inertia: CameraInertia,
    /// Object transparency.
    pub object_transparency: ObjectTransparency,
    /// Over-shoulder repositioning.
    pub over_shoulder: OverShoulder,
    /// Recoil.
    pub recoil: Recoil,
}

impl EffectSet {
    /// Fresh effects with no carried state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The effect named by `kind`.
    pub fn get_mut(&mut self, kind: EffectKind) -> &mut dyn CameraEffect {
        match kind {
            EffectKind::DynamicFov => &mut self.dynamic_fov,
            EffectKind::DynamicZoom => &mut self.dynamic_zoom,
            EffectKind::FocusFov => &mut self.focus_fov,
            EffectKind::HeadBob => &mut self.head_bob,
            EffectKind::Sway => &mut self.sway,
            EffectKind::PushBack => &mut self.push_back,
            EffectKind::CollisionPrediction => &mut self.collision_prediction,
            EffectKind::ObstacleDetection => &mut self.obstacle_detection,
            EffectKind::EnvironmentalAwareness => {
                &mut self.environmental_awareness
            }
            EffectKind::TerrainTilt => &mut self.terrain_tilt,
            EffectKind::IntelligentFraming => &mut self.intelligent_framing,
            EffectKind::ContextualPositioning => {
                &mut self.contextual_positioning
            }
            EffectKind::AdaptiveDepthOfField => {
                &mut self.adaptive_depth_of_field
            }
            EffectKind::AdvancedMotionBlur => &mut self.advanced_motion_blur,
            EffectKind::CameraInertia => &mut self.camera_inertia,
            EffectKind::ObjectTransparency => &mut self.object_transparency,
            EffectKind::OverShoulder => &mut self.over_shoulder,
            EffectKind::Recoil => &mut self.recoil,
        }
    }

    /// Run the stage for `kind` unless its bit is already set in `ran`.
    ///
    /// Returns whether the effect's `apply` ran.
    pub fn run(
        &mut self,
        kind: EffectKind,
        frame: &mut Frame<'_>,
        ran: &mut u32,
    ) -> bool {
        if *ran & kind.bit() != 0 {
            return false;
        }
        *ran |= kind.bit();
        let options = frame.options;
        let effect = self.get_mut(kind);
        if effect.enabled(options) {
            log::trace!("effect {}", effect.name());
            effect.apply(frame);
            true
        } else {
            effect.disabled(frame);
            false
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use glam::Vec3;

    use super::{ControlState, Frame};
    use crate::camera::mode::CameraMode;
    use crate::camera::pose::CameraPose;
    use crate::options::RigOptions;
    use crate::post::PostProcessSettings;
    use crate::scene::{Kinematics, MaterialHost, SceneProbe};

    /// Owned storage a test [`Frame`] borrows from.
    pub struct Harness {
        pub pose: CameraPose,
        pub post: Option<PostProcessSettings>,
        pub controls: ControlState,
        pub options: RigOptions,
        pub owner: Option<Kinematics>,
        pub dt: f32,
        pub world_time: f32,
        pub mode: CameraMode,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                pose: CameraPose::new(Vec3::ZERO, 90.0),
                post: Some(PostProcessSettings::default()),
                controls: ControlState::default(),
                options: RigOptions::default(),
                owner: None,
                dt: 1.0 / 60.0,
                world_time: 0.0,
                mode: CameraMode::ThirdPerson,
            }
        }

        pub fn frame<'a>(
            &'a mut self,
            probe: &'a dyn SceneProbe,
            materials: Option<&'a mut dyn MaterialHost>,
        ) -> Frame<'a> {
            Frame {
                dt: self.dt,
                world_time: self.world_time,
                mode: self.mode,
                pose: &mut self.pose,
                post: self.post.as_mut(),
                controls: &mut self.controls,
                options: &self.options,
                owner: self.owner,
                owner_actor: None,
                probe,
                materials,
            }
        }
    }
}
