//! Geometry-aware position corrections.

use super::{CameraEffect, Frame, PoseFields};
use crate::options::RigOptions;
use crate::scene::TraceChannel;
use crate::util::interp::interp_vec3;

/// Length of the forward collision probes.
pub const PROBE_DISTANCE: f32 = 100.0;
/// Magnitude of a collision push and the clearance kept from obstacles.
pub const PUSH_BACK_DISTANCE: f32 = 50.0;
/// Approach speed of the environmental pull-in.
const AWARENESS_SPEED: f32 = 5.0;

/// Push the camera away from geometry just ahead of it. Always on.
#[derive(Debug, Clone, Default)]
pub struct PushBack;

impl CameraEffect for PushBack {
    fn name(&self) -> &'static str {
        "push_back"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, _options: &RigOptions) -> bool {
        true
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let start = frame.camera_location();
        if let Some(hit) =
            frame.trace_forward(PROBE_DISTANCE, TraceChannel::Camera)
        {
            let push =
                (start - hit.point).normalize_or_zero() * PUSH_BACK_DISTANCE;
            frame.displace_world(push);
        }
    }
}

/// Push away from geometry between the camera and where the owner will
/// be shortly.
#[derive(Debug, Clone, Default)]
pub struct CollisionPrediction;

impl CameraEffect for CollisionPrediction {
    fn name(&self) -> &'static str {
        "collision_prediction"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.collision_prediction.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let Some(owner) = frame.owner else {
            return;
        };
        let lookahead = frame.options.effects.collision_prediction.lookahead;
        let start = frame.camera_location();
        let future = owner.location + owner.velocity * lookahead;
        if let Some(hit) = frame.trace(start, future, TraceChannel::Camera) {
            let push =
                (start - hit.point).normalize_or_zero() * PUSH_BACK_DISTANCE;
            frame.displace_world(push);
        }
    }
}

/// Periodic forward probe that moves the camera up to an obstacle while
/// keeping clearance.
///
/// Runs from its own timer rather than the frame sequence.
#[derive(Debug, Clone, Default)]
pub struct ObstacleDetection {
    last_offset: Option<f32>,
}

impl ObstacleDetection {
    /// Forward offset applied by the most recent hit.
    #[must_use]
    pub fn last_offset(&self) -> Option<f32> {
        self.last_offset
    }
}

impl CameraEffect for ObstacleDetection {
    fn name(&self) -> &'static str {
        "obstacle_detection"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.obstacle_detection.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let Some(hit) =
            frame.trace_forward(PROBE_DISTANCE, TraceChannel::Camera)
        else {
            return;
        };
        log::debug!("obstacle {:?} at {:.1}", hit.actor, hit.distance);
        let offset = (hit.distance - PUSH_BACK_DISTANCE).max(0.0);
        self.last_offset = Some(offset);
        let forward = frame.pose.rotation.forward();
        frame.pose.position += forward * offset;
    }

    fn disabled(&mut self, _frame: &mut Frame<'_>) {
        self.last_offset = None;
    }
}

/// Pull in toward geometry ahead, stopping short of it.
#[derive(Debug, Clone, Default)]
pub struct EnvironmentalAwareness;

impl CameraEffect for EnvironmentalAwareness {
    fn name(&self) -> &'static str {
        "environmental_awareness"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POSITION
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.environmental_awareness.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let distance =
            frame.options.effects.environmental_awareness.check_distance;
        let Some(hit) =
            frame.trace_forward(distance, TraceChannel::Visibility)
        else {
            return;
        };
        let world_target =
            hit.point - frame.camera_forward() * PUSH_BACK_DISTANCE;
        let target = frame.basis().to_local_point(world_target);
        frame.pose.position =
            interp_vec3(frame.pose.position, target, frame.dt, AWARENESS_SPEED);
    }
}
