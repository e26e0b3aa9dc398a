//! Host-side collaborators the rig talks to.
//!
//! Everything here is a narrow trait the host implements over its own
//! engine: geometry queries, the owning character, surface materials, the
//! render camera, audio and camera shakes. The rig never fails when one is
//! missing; the stage that needed it does nothing for that frame.

mod materials;
mod static_scene;

use glam::Vec3;

pub use materials::MaterialTable;
pub use static_scene::{SceneShape, StaticScene};

use crate::camera::pose::Rotator;
use crate::post::Material;

/// Identifier of a scene actor.
pub type ActorId = u64;
/// Identifier of a renderable component on an actor.
pub type ComponentId = u64;

/// Collision channel a trace runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraceChannel {
    /// Geometry that blocks sight.
    #[default]
    Visibility,
    /// Geometry that blocks the camera.
    Camera,
}

/// Nearest blocking hit of a line trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceHit {
    /// World-space impact point.
    pub point: Vec3,
    /// Surface normal at the impact point, facing the trace start.
    pub normal: Vec3,
    /// Distance from the trace start to the impact point.
    pub distance: f32,
    /// Actor that was hit, if the host tracks one.
    pub actor: Option<ActorId>,
    /// Component that was hit, if the host tracks one.
    pub component: Option<ComponentId>,
}

/// Directional line tests against world geometry.
pub trait SceneProbe {
    /// Nearest hit on the segment `start..end`, skipping `ignore`d actors.
    fn line_trace(
        &self,
        start: Vec3,
        end: Vec3,
        channel: TraceChannel,
        ignore: &[ActorId],
    ) -> Option<TraceHit>;
}

/// Probe for a world with nothing in it.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyScene;

impl SceneProbe for EmptyScene {
    fn line_trace(
        &self,
        _start: Vec3,
        _end: Vec3,
        _channel: TraceChannel,
        _ignore: &[ActorId],
    ) -> Option<TraceHit> {
        None
    }
}

/// Owner location, orientation basis and velocity for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kinematics {
    /// World location.
    pub location: Vec3,
    /// Unit forward axis.
    pub forward: Vec3,
    /// Unit right axis.
    pub right: Vec3,
    /// World velocity.
    pub velocity: Vec3,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            location: Vec3::ZERO,
            forward: Vec3::X,
            right: Vec3::Y,
            velocity: Vec3::ZERO,
        }
    }
}

impl Kinematics {
    /// Unit up axis completing the forward/right basis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.forward.cross(self.right)
    }

    /// Speed in units per second.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }

    /// Rotate an owner-local direction into world space.
    #[must_use]
    pub fn to_world_direction(&self, local: Vec3) -> Vec3 {
        self.forward * local.x + self.right * local.y + self.up() * local.z
    }

    /// Rotate a world direction into the owner's local frame.
    #[must_use]
    pub fn to_local_direction(&self, world: Vec3) -> Vec3 {
        Vec3::new(
            world.dot(self.forward),
            world.dot(self.right),
            world.dot(self.up()),
        )
    }

    /// Owner-local point to world space.
    #[must_use]
    pub fn to_world_point(&self, local: Vec3) -> Vec3 {
        self.location + self.to_world_direction(local)
    }

    /// World point to the owner's local frame.
    #[must_use]
    pub fn to_local_point(&self, world: Vec3) -> Vec3 {
        self.to_local_direction(world - self.location)
    }
}

/// The character or pawn the camera is attached to.
pub trait OwnerProvider {
    /// Current location, basis and velocity.
    fn kinematics(&self) -> Kinematics;

    /// Actor to exclude from camera traces.
    fn actor_id(&self) -> Option<ActorId> {
        None
    }

    /// Whether movement input from this machine drives the owner.
    fn is_locally_controlled(&self) -> bool {
        true
    }

    /// Feed movement input along a world direction.
    fn add_movement_input(&mut self, _direction: Vec3, _scale: f32) {}
}

/// Surface materials of scene components.
pub trait MaterialHost {
    /// Material in `slot` of `component`.
    fn material(&self, component: ComponentId, slot: usize) -> Option<Material>;

    /// Replace the material in `slot` of `component`. `None` clears it.
    fn set_material(
        &mut self,
        component: ComponentId,
        slot: usize,
        material: Option<Material>,
    );
}

/// Render-facing camera the final pose is committed to.
pub trait CameraSink {
    /// Offset from the owner.
    fn set_relative_location(&mut self, location: Vec3);
    /// Rotation relative to the owner.
    fn set_relative_rotation(&mut self, rotation: Rotator);
    /// Field of view in degrees.
    fn set_field_of_view(&mut self, fov: f32);
}

/// Plays the warp cue.
pub trait AudioSink {
    /// Start playing a sound asset.
    fn play(&mut self, sound: &str, volume: f32, pitch: f32);
    /// Whether a sound is currently playing.
    fn is_playing(&self) -> bool;
    /// Stop the current sound.
    fn stop(&mut self);
}

/// Plays camera shakes.
pub trait ShakeSink {
    /// Play a world shake centred on `epicenter`.
    fn play_world_shake(&mut self, class: &str, epicenter: Vec3, scale: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_basis_is_identity() {
        let k = Kinematics::default();
        assert_eq!(k.up(), Vec3::Z);
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_eq!(k.to_world_direction(v), v);
        assert_eq!(k.to_local_direction(v), v);
    }

    #[test]
    fn local_world_round_trip_on_turned_owner() {
        let k = Kinematics {
            location: Vec3::new(100.0, 50.0, 0.0),
            forward: Vec3::Y,
            right: -Vec3::X,
            velocity: Vec3::ZERO,
        };
        assert!((k.up() - Vec3::Z).length() < 1e-6);
        let local = Vec3::new(-300.0, 0.0, 100.0);
        let world = k.to_world_point(local);
        assert!((world - Vec3::new(100.0, -250.0, 100.0)).length() < 1e-3);
        assert!((k.to_local_point(world) - local).length() < 1e-3);
    }

    #[test]
    fn empty_scene_never_hits() {
        let hit = EmptyScene.line_trace(
            Vec3::ZERO,
            Vec3::X * 100.0,
            TraceChannel::Camera,
            &[],
        );
        assert!(hit.is_none());
    }
}
