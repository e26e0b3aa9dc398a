//! Rotation effects: terrain alignment, framing, inertia and recoil.

use super::{CameraEffect, Frame, PoseFields};
use crate::camera::pose::Rotator;
use crate::options::RigOptions;
use crate::scene::TraceChannel;
use crate::util::interp::{interp_rotator, NEARLY_ZERO};

/// Length of the downward terrain probe.
const TERRAIN_PROBE_DISTANCE: f32 = 100.0;

/// Align yaw and roll with the ground below, keeping pitch level.
#[derive(Debug, Clone, Default)]
pub struct TerrainTilt;

impl CameraEffect for TerrainTilt {
    fn name(&self) -> &'static str {
        "terrain_tilt"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::ROTATION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.terrain_tilt.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let start = frame.camera_location();
        let end = start - glam::Vec3::Z * TERRAIN_PROBE_DISTANCE;
        let Some(hit) = frame.trace(start, end, TraceChannel::Visibility) else {
            return;
        };
        let normal = Rotator::from_direction(hit.normal);
        let target = Rotator::new(0.0, normal.yaw, normal.roll);
        frame.pose.rotation = interp_rotator(
            frame.pose.rotation,
            target,
            frame.dt,
            frame.options.rotation.rotation_speed,
        );
    }
}

/// Turn toward the owner.
#[derive(Debug, Clone, Default)]
pub struct IntelligentFraming;

impl CameraEffect for IntelligentFraming {
    fn name(&self) -> &'static str {
        "intelligent_framing"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::ROTATION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.intelligent_framing.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let Some(owner) = frame.owner else {
            return;
        };
        let direction =
            (owner.location - frame.camera_location()).normalize_or_zero();
        if direction == glam::Vec3::ZERO {
            return;
        }
        let target =
            Rotator::from_direction(owner.to_local_direction(direction));
        frame.pose.rotation = interp_rotator(
            frame.pose.rotation,
            target,
            frame.dt,
            frame.options.rotation.rotation_speed,
        );
    }
}

/// Ease the rotation toward the look target instead of snapping to it.
#[derive(Debug, Clone, Default)]
pub struct CameraInertia;

impl CameraEffect for CameraInertia {
    fn name(&self) -> &'static str {
        "camera_inertia"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::ROTATION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.camera_inertia.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let target = frame.controls.look_target + frame.controls.recoil.applied;
        frame.pose.rotation = interp_rotator(
            frame.pose.rotation,
            target,
            frame.dt,
            frame.options.effects.camera_inertia.strength,
        );
    }
}

/// Outstanding recoil kick and the part of it already in the pose.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecoilState {
    /// Kick still to recover from. Decays toward zero.
    pub offset: Rotator,
    /// Portion of `offset` currently added to the pose rotation.
    pub applied: Rotator,
}

impl RecoilState {
    /// Add a kick on top of whatever is outstanding.
    pub fn kick(&mut self, rotation: Rotator) {
        self.offset += rotation;
    }

    /// Whether nothing is outstanding or applied.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.offset.is_nearly_zero(NEARLY_ZERO)
            && self.applied.is_nearly_zero(NEARLY_ZERO)
    }
}

/// Decay the recoil kick and keep the pose offset by exactly the
/// remaining amount.
///
/// Each frame only the change in the remaining kick is added to the pose,
/// so overlapping kicks accumulate and a kick is never re-applied.
#[derive(Debug, Clone, Default)]
pub struct Recoil;

impl CameraEffect for Recoil {
    fn name(&self) -> &'static str {
        "recoil"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::ROTATION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.recoil.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let recoil = &mut frame.controls.recoil;
        if recoil.is_settled() {
            recoil.offset = Rotator::ZERO;
            recoil.applied = Rotator::ZERO;
            return;
        }
        let remaining = interp_rotator(
            recoil.offset,
            Rotator::ZERO,
            frame.dt,
            frame.options.effects.recoil.recovery_speed,
        );
        frame.pose.rotation =
            (frame.pose.rotation + (remaining - recoil.applied)).normalized();
        recoil.offset = remaining;
        recoil.applied = remaining;
    }

    fn disabled(&mut self, frame: &mut Frame<'_>) {
        let recoil = &mut frame.controls.recoil;
        if !recoil.applied.is_nearly_zero(NEARLY_ZERO) {
            frame.pose.rotation =
                (frame.pose.rotation - recoil.applied).normalized();
        }
        *recoil = RecoilState::default();
    }
}
