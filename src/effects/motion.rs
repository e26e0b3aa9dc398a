//! Position offsets: bob, sway and aim-driven repositioning.

use glam::Vec3;

use super::{CameraEffect, Frame, PoseFields};
use crate::options::RigOptions;
use crate::util::interp::interp_vec3;

/// Vertical bob, faster and larger while running.
///
/// The offset is scaled by the frame time and accumulated into the
/// position, so it acts as a vertical rate rather than a displacement.
#[derive(Debug, Clone, Default)]
pub struct HeadBob;

impl HeadBob {
    /// Frequency multiplier while running.
    pub const RUNNING_FREQUENCY_SCALE: f32 = 1.5;
}

impl CameraEffect for HeadBob {
    fn name(&self) -> &'static str {
        "head_bob"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.head_bob.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let bob = &frame.options.effects.head_bob;
        let (magnitude, speed) = if frame.controls.running {
            (
                bob.running_magnitude,
                bob.frequency * Self::RUNNING_FREQUENCY_SCALE,
            )
        } else {
            (bob.walking_magnitude, bob.frequency)
        };
        let offset = (frame.world_time * speed).sin() * magnitude;
        frame.pose.position.z += offset * frame.dt;
    }
}

/// Slow lateral/vertical drift.
#[derive(Debug, Clone, Default)]
pub struct Sway;

impl CameraEffect for Sway {
    fn name(&self) -> &'static str {
        "sway"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.sway.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let sway = &frame.options.effects.sway;
        let phase = frame.world_time * sway.speed;
        let offset = Vec3::new(
            phase.sin() * sway.amount,
            phase.cos() * sway.amount,
            0.0,
        );
        frame.pose.position += offset * frame.dt;
    }
}

/// Blend toward the shoulder offset while aiming.
#[derive(Debug, Clone, Default)]
pub struct OverShoulder;

impl CameraEffect for OverShoulder {
    fn name(&self) -> &'static str {
        "over_shoulder"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.over_shoulder.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        if !frame.controls.aiming {
            return;
        }
        let positions = &frame.options.positions;
        frame.pose.position = interp_vec3(
            frame.pose.position,
            Vec3::from_array(positions.over_shoulder_offset),
            frame.dt,
            positions.repositioning_speed,
        );
    }
}

/// Blend toward the mode's aim position while aiming, else its rest
/// position. Free and cinematic cameras are left alone.
#[derive(Debug, Clone, Default)]
pub struct ContextualPositioning;

impl CameraEffect for ContextualPositioning {
    fn name(&self) -> &'static str {
        "contextual_positioning"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.contextual_positioning.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let positions = &frame.options.positions;
        let target = if frame.controls.aiming {
            positions.aim_position(frame.mode)
        } else {
            positions.mode_position(frame.mode)
        };
        let Some(target) = target else {
            return;
        };
        frame.pose.position = interp_vec3(
            frame.pose.position,
            target,
            frame.dt,
            frame.options.effects.contextual_positioning.speed,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::mode::CameraMode;
    use crate::effects::test_support::Harness;
    use crate::scene::EmptyScene;

    #[test]
    fn head_bob_is_rate_scaled() {
        let mut harness = Harness::new();
        harness.world_time = std::f32::consts::FRAC_PI_2 / 10.0;
        harness.dt = 0.5;
        HeadBob.apply(&mut harness.frame(&EmptyScene, None));
        assert!((harness.pose.position.z - 2.5).abs() < 1e-4);
        assert_eq!(harness.pose.position.x, 0.0);
    }

    #[test]
    fn running_bob_uses_running_magnitude() {
        let mut harness = Harness::new();
        harness.controls.running = true;
        harness.world_time = std::f32::consts::FRAC_PI_2 / 15.0;
        harness.dt = 1.0;
        HeadBob.apply(&mut harness.frame(&EmptyScene, None));
        assert!((harness.pose.position.z - 10.0).abs() < 1e-3);
    }

    #[test]
    fn sway_at_time_zero_is_lateral() {
        let mut harness = Harness::new();
        harness.dt = 0.1;
        Sway.apply(&mut harness.frame(&EmptyScene, None));
        let expected = Vec3::new(0.0, 0.5, 0.0);
        assert!((harness.pose.position - expected).length() < 1e-5);
    }

    #[test]
    fn over_shoulder_only_while_aiming() {
        let mut harness = Harness::new();
        harness.dt = 1.0;
        OverShoulder.apply(&mut harness.frame(&EmptyScene, None));
        assert_eq!(harness.pose.position, Vec3::ZERO);

        harness.controls.aiming = true;
        OverShoulder.apply(&mut harness.frame(&EmptyScene, None));
        assert_eq!(harness.pose.position, Vec3::new(-150.0, 60.0, 70.0));
    }

    #[test]
    fn contextual_positioning_skips_free_camera() {
        let mut harness = Harness::new();
        harness.dt = 1.0;
        harness.mode = CameraMode::FreeCamera;
        ContextualPositioning.apply(&mut harness.frame(&EmptyScene, None));
        assert_eq!(harness.pose.position, Vec3::ZERO);

        harness.mode = CameraMode::ThirdPerson;
        ContextualPositioning.apply(&mut harness.frame(&EmptyScene, None));
        assert_eq!(harness.pose.position, Vec3::new(-300.0, 0.0, 100.0));
    }
}
