//! Direct input entry points. Each call acts immediately; nothing is
//! queued.

use super::CameraRig;
use crate::camera::{CameraMode, Rotator};
use crate::scene::OwnerProvider;
use crate::util::interp::interp_f32;

/// Clamp to `[-limit, limit]`, tolerating a negative or NaN limit.
fn clamp_symmetric(value: f32, limit: f32) -> f32 {
    let limit = limit.abs();
    if limit.is_nan() {
        value
    } else {
        value.clamp(-limit, limit)
    }
}

impl CameraRig {
    /// Turn the look target by axis input, within the rotation limits.
    ///
    /// Without camera inertia the pose follows the target immediately,
    /// keeping any recoil currently applied.
    pub fn look(&mut self, x: f32, y: f32) {
        let rotation = &self.options.rotation;
        let target = &mut self.controls.look_target;
        target.yaw = clamp_symmetric(
            target.yaw + x * rotation.rotation_speed,
            rotation.max_yaw,
        );
        target.pitch = clamp_symmetric(
            target.pitch + y * rotation.rotation_speed,
            rotation.max_pitch,
        );
        if !self.options.effects.camera_inertia.enabled {
            self.pose.rotation =
                (*target + self.controls.recoil.applied).normalized();
        }
    }

    /// Horizontal look only.
    pub fn look_x(&mut self, x: f32) {
        self.look(x, 0.0);
    }

    /// Vertical look only.
    pub fn look_y(&mut self, y: f32) {
        self.look(0.0, y);
    }

    /// Movement input. The free camera flies along its own axes; every
    /// other mode forwards the input to a locally controlled owner.
    pub fn move_input(
        &mut self,
        x: f32,
        y: f32,
        owner: Option<&mut dyn OwnerProvider>,
    ) {
        if self.modes.mode() == CameraMode::FreeCamera {
            let rotation = self.pose.rotation;
            let step = self.options.rotation.free_move_speed * self.last_dt;
            self.pose.position +=
                (rotation.forward() * y + rotation.right() * x) * step;
            return;
        }
        let Some(owner) = owner else {
            return;
        };
        if owner.is_locally_controlled() {
            let kinematics = owner.kinematics();
            owner.add_movement_input(kinematics.forward, y);
            owner.add_movement_input(kinematics.right, x);
        }
    }

    /// Strafe input only.
    pub fn move_x(&mut self, x: f32, owner: Option<&mut dyn OwnerProvider>) {
        self.move_input(x, 0.0, owner);
    }

    /// Forward input only.
    pub fn move_y(&mut self, y: f32, owner: Option<&mut dyn OwnerProvider>) {
        self.move_input(0.0, y, owner);
    }

    /// Start aiming and nudge the FOV toward the aiming FOV.
    pub fn start_aiming(&mut self) {
        self.controls.aiming = true;
        self.nudge_fov(self.options.fov.aiming_fov);
    }

    /// Stop aiming and nudge the FOV back toward the default.
    pub fn stop_aiming(&mut self) {
        self.controls.aiming = false;
        self.nudge_fov(self.options.fov.default_fov);
    }

    /// Start running.
    pub fn start_running(&mut self) {
        self.controls.running = true;
    }

    /// Stop running.
    pub fn stop_running(&mut self) {
        self.controls.running = false;
    }

    /// Whether aim input is held.
    #[must_use]
    pub fn is_aiming(&self) -> bool {
        self.controls.aiming
    }

    /// Whether run input is held.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.controls.running
    }

    /// Kick the camera up by the configured recoil intensity. Ignored while
    /// recoil is disabled.
    pub fn trigger_recoil(&mut self) {
        let intensity = self.options.effects.recoil.intensity;
        self.add_recoil(Rotator::new(intensity, 0.0, 0.0));
    }

    /// Add an arbitrary recoil kick. Ignored while recoil is disabled.
    pub fn add_recoil(&mut self, kick: Rotator) {
        if self.options.effects.recoil.enabled {
            self.controls.recoil.kick(kick);
        }
    }

    fn nudge_fov(&mut self, target: f32) {
        self.pose.fov = interp_f32(
            self.pose.fov,
            target,
            self.last_dt,
            self.options.fov.approach_speed,
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;
    use crate::options::RigOptions;
    use crate::scene::Kinematics;

    #[derive(Default)]
    struct Pawn {
        remote: bool,
        inputs: Vec<(Vec3, f32)>,
    }

    impl OwnerProvider for Pawn {
        fn kinematics(&self) -> Kinematics {
            Kinematics::default()
        }

        fn is_locally_controlled(&self) -> bool {
            !self.remote
        }

        fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
            self.inputs.push((direction, scale));
        }
    }

    #[test]
    fn look_is_clamped_to_limits() {
        let mut rig = CameraRig::new(RigOptions::default());
        rig.look(100.0, 100.0);
        assert_eq!(rig.controls().look_target, Rotator::new(45.0, 90.0, 0.0));
        assert_eq!(rig.pose().rotation, Rotator::new(45.0, 90.0, 0.0));
        rig.look_y(-100.0);
        assert_eq!(rig.pose().rotation.pitch, -45.0);
    }

    #[test]
    fn look_with_inertia_only_moves_target() {
        let mut options = RigOptions::default();
        options.effects.camera_inertia.enabled = true;
        let mut rig = CameraRig::new(options);
        rig.look_x(5.0);
        assert_eq!(rig.controls().look_target.yaw, 10.0);
        assert_eq!(rig.pose().rotation, Rotator::ZERO);
    }

    #[test]
    fn negative_limits_do_not_panic() {
        let mut options = RigOptions::default();
        options.rotation.max_yaw = -10.0;
        options.rotation.max_pitch = f32::NAN;
        let mut rig = CameraRig::new(options);
        rig.look(50.0, 3.0);
        assert_eq!(rig.controls().look_target.yaw, 10.0);
        assert_eq!(rig.controls().look_target.pitch, 6.0);
    }

    #[test]
    fn movement_goes_to_local_owner_only() {
        let mut rig = CameraRig::new(RigOptions::default());
        let mut pawn = Pawn::default();
        rig.move_input(0.5, 1.0, Some(&mut pawn));
        assert_eq!(pawn.inputs, vec![(Vec3::X, 1.0), (Vec3::Y, 0.5)]);

        let mut remote = Pawn {
            remote: true,
            ..Pawn::default()
        };
        rig.move_y(1.0, Some(&mut remote));
        assert!(remote.inputs.is_empty());
    }

    #[test]
    fn recoil_requires_toggle() {
        let mut rig = CameraRig::new(RigOptions::default());
        rig.trigger_recoil();
        assert_eq!(rig.controls().recoil.offset, Rotator::ZERO);

        let mut options = RigOptions::default();
        options.effects.recoil.enabled = true;
        rig.set_options(options);
        rig.trigger_recoil();
        rig.add_recoil(Rotator::new(0.0, 1.0, 0.0));
        assert_eq!(rig.controls().recoil.offset, Rotator::new(2.0, 1.0, 0.0));
    }
}
