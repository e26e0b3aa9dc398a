//! Per-frame view handed to every effect.

use glam::Vec3;

use crate::camera::mode::CameraMode;
use crate::camera::pose::{CameraPose, Rotator};
use crate::options::RigOptions;
use crate::post::PostProcessSettings;
use crate::scene::{
    ActorId, Kinematics, MaterialHost, SceneProbe, TraceChannel, TraceHit,
};

use super::orientation::RecoilState;

/// Input-driven state carried between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ControlState {
    /// Aim input held.
    pub aiming: bool,
    /// Run input held.
    pub running: bool,
    /// Rotation the look input asked for, before smoothing and recoil.
    pub look_target: Rotator,
    /// Outstanding recoil.
    pub recoil: RecoilState,
}

/// Everything an effect may read or write during one stage.
pub struct Frame<'a> {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Host world clock in seconds.
    pub world_time: f32,
    /// Active camera mode.
    pub mode: CameraMode,
    /// The pose being built this frame.
    pub pose: &'a mut CameraPose,
    /// Post-process block, when one is attached.
    pub post: Option<&'a mut PostProcessSettings>,
    /// Aim/run/look/recoil state.
    pub controls: &'a mut ControlState,
    /// Active options.
    pub options: &'a RigOptions,
    /// Owner state sampled at the start of the frame.
    pub owner: Option<Kinematics>,
    /// Owner actor, excluded from traces.
    pub owner_actor: Option<ActorId>,
    /// Geometry queries.
    pub probe: &'a dyn SceneProbe,
    /// Surface materials, when the host exposes them.
    pub materials: Option<&'a mut dyn MaterialHost>,
}

impl Frame<'_> {
    /// Owner basis, or the world basis at the origin without an owner.
    #[must_use]
    pub fn basis(&self) -> Kinematics {
        self.owner.unwrap_or_default()
    }

    /// Owner speed, zero without an owner.
    #[must_use]
    pub fn owner_speed(&self) -> f32 {
        self.owner.map_or(0.0, |k| k.speed())
    }

    /// Camera position in world space.
    #[must_use]
    pub fn camera_location(&self) -> Vec3 {
        self.basis().to_world_point(self.pose.position)
    }

    /// Camera view direction in world space.
    #[must_use]
    pub fn camera_forward(&self) -> Vec3 {
        self.basis().to_world_direction(self.pose.rotation.forward())
    }

    /// Camera right axis in world space.
    #[must_use]
    pub fn camera_right(&self) -> Vec3 {
        self.basis().to_world_direction(self.pose.rotation.right())
    }

    /// Trace from `start` to `end`, ignoring the owner.
    #[must_use]
    pub fn trace(
        &self,
        start: Vec3,
        end: Vec3,
        channel: TraceChannel,
    ) -> Option<TraceHit> {
        let ignore: &[ActorId] = match &self.owner_actor {
            Some(actor) => std::slice::from_ref(actor),
            None => &[],
        };
        self.probe.line_trace(start, end, channel, ignore)
    }

    /// Trace `distance` units along the camera view direction.
    #[must_use]
    pub fn trace_forward(
        &self,
        distance: f32,
        channel: TraceChannel,
    ) -> Option<TraceHit> {
        let start = self.camera_location();
        self.trace(start, start + self.camera_forward() * distance, channel)
    }

    /// Add a world-space displacement to the owner-relative position.
    pub fn displace_world(&mut self, offset: Vec3) {
        let local = self.basis().to_local_direction(offset);
        self.pose.position += local;
    }
}
