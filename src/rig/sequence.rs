//! Fixed per-frame stage order.
//!
//! Declaration order is priority order: a later stage overwrites what an
//! earlier one wrote to the same field. A few effects appear twice; the
//! second occurrence is a no-op because every effect runs at most once per
//! frame.

use super::context::{camera_of, materials_of};
use super::{CameraRig, RigContext};
use crate::camera::CameraPose;
use crate::effects::{EffectKind, Frame};
use crate::scene::CameraSink;

/// One step of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Advance the mode transition, overwriting position and FOV.
    Transition,
    /// Run one effect if enabled.
    Effect(EffectKind),
    /// Write the pose to the render camera.
    Commit,
}

use EffectKind as E;

/// The frame, in order.
pub const FRAME_SEQUENCE: [Stage; 24] = [
    Stage::Transition,
    Stage::Effect(E::DynamicFov),
    Stage::Effect(E::CollisionPrediction),
    Stage::Effect(E::PushBack),
    Stage::Effect(E::TerrainTilt),
    Stage::Effect(E::DynamicZoom),
    Stage::Effect(E::ContextualPositioning),
    Stage::Effect(E::IntelligentFraming),
    Stage::Effect(E::AdaptiveDepthOfField),
    Stage::Effect(E::CollisionPrediction),
    Stage::Effect(E::EnvironmentalAwareness),
    Stage::Effect(E::FocusFov),
    Stage::Effect(E::AdvancedMotionBlur),
    Stage::Effect(E::CameraInertia),
    Stage::Effect(E::HeadBob),
    Stage::Effect(E::Sway),
    Stage::Effect(E::ObjectTransparency),
    Stage::Effect(E::OverShoulder),
    Stage::Effect(E::Recoil),
    Stage::Effect(E::EnvironmentalAwareness),
    Stage::Effect(E::FocusFov),
    Stage::Effect(E::AdvancedMotionBlur),
    Stage::Effect(E::CameraInertia),
    Stage::Commit,
];

fn commit(camera: Option<&mut dyn CameraSink>, pose: &CameraPose) {
    if let Some(camera) = camera {
        camera.set_relative_location(pose.position);
        camera.set_relative_rotation(pose.rotation);
        camera.set_field_of_view(pose.fov);
    }
}

impl CameraRig {
    /// Run one frame of `dt` seconds.
    ///
    /// Never fails: a missing collaborator only disables the stages that
    /// need it, and negative `dt` is treated as zero.
    pub fn tick(&mut self, dt: f32, ctx: &mut RigContext<'_>) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.last_dt = dt;
        self.frames += 1;
        self.sync_obstacle_timer();

        let owner = ctx.owner.as_deref().map(|owner| owner.kinematics());
        let owner_actor =
            ctx.owner.as_deref().and_then(|owner| owner.actor_id());
        let mut camera = camera_of(&mut ctx.camera);
        let mut frame = Frame {
            dt,
            world_time: ctx.world_time,
            mode: self.modes.mode(),
            pose: &mut self.pose,
            post: self.post.as_mut(),
            controls: &mut self.controls,
            options: &self.options,
            owner,
            owner_actor,
            probe: ctx.probe,
            materials: materials_of(&mut ctx.materials),
        };

        let mut ran = 0;
        for stage in FRAME_SEQUENCE {
            match stage {
                Stage::Transition => {
                    if self.transition.is_active() {
                        let _ = self.transition.tick(dt, frame.pose);
                    }
                }
                Stage::Effect(kind) => {
                    let _ = self.effects.run(kind, &mut frame, &mut ran);
                }
                Stage::Commit => commit(camera.take(), frame.pose),
            }
        }
        self.committed = self.pose;

        log::trace!(
            "frame {} pos {} rot {:?} fov {:.2}",
            self.frames,
            self.pose.position,
            self.pose.rotation,
            self.pose.fov
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_starts_with_transition_and_ends_with_commit() {
        assert_eq!(FRAME_SEQUENCE[0], Stage::Transition);
        assert_eq!(FRAME_SEQUENCE[FRAME_SEQUENCE.len() - 1], Stage::Commit);
        let commits = FRAME_SEQUENCE
            .iter()
            .filter(|s| **s == Stage::Commit)
            .count();
        assert_eq!(commits, 1);
    }

    #[test]
    fn every_effect_except_obstacle_detection_has_a_stage() {
        for kind in EffectKind::ALL {
            let present = FRAME_SEQUENCE.contains(&Stage::Effect(kind));
            let expected = kind != EffectKind::ObstacleDetection;
            assert_eq!(present, expected, "{kind:?}");
        }
    }

    #[test]
    fn stage_priorities_follow_declared_order() {
        let pos = |k| {
            FRAME_SEQUENCE
                .iter()
                .position(|s| *s == Stage::Effect(k))
                .unwrap()
        };
        assert!(pos(EffectKind::PushBack) < pos(EffectKind::TerrainTilt));
        assert!(pos(EffectKind::HeadBob) < pos(EffectKind::ObjectTransparency));
        assert!(pos(EffectKind::OverShoulder) < pos(EffectKind::Recoil));
    }
}
