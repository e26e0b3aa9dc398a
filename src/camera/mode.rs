//! Camera mode state machine.

use serde::{Deserialize, Serialize};

use super::pose::CameraPose;
use super::transition::TransitionEngine;
use crate::options::RigOptions;

/// Which kind of camera the rig is acting as.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CameraMode {
    /// Camera trails behind the owner.
    #[default]
    ThirdPerson,
    /// Camera sits at the owner's eyes.
    FirstPerson,
    /// Camera moves independently of the owner.
    FreeCamera,
    /// Camera is driven by a scripted sequence.
    Cinematic,
}

/// Tracks the active mode and starts the blend into it.
#[derive(Debug, Clone, Default)]
pub struct ModeController {
    mode: CameraMode,
    first_person: bool,
}

impl ModeController {
    /// Controller starting in `mode` without any blend.
    #[must_use]
    pub fn new(mode: CameraMode) -> Self {
        Self {
            mode,
            first_person: mode == CameraMode::FirstPerson,
        }
    }

    /// Active mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Whether the last first/third-person switch went to first person.
    #[must_use]
    pub fn is_first_person(&self) -> bool {
        self.first_person
    }

    /// Switch to `mode`. Returns `false` when it is already active.
    ///
    /// First- and third-person modes blend position and FOV to their
    /// configured targets; free and cinematic modes leave the pose alone.
    pub fn set_mode(
        &mut self,
        mode: CameraMode,
        options: &RigOptions,
        pose: &CameraPose,
        transition: &mut TransitionEngine,
    ) -> bool {
        if mode == self.mode {
            return false;
        }
        log::debug!("camera mode {:?} -> {:?}", self.mode, mode);
        self.mode = mode;
        match mode {
            CameraMode::FirstPerson | CameraMode::ThirdPerson => {
                if let Some(target) = options.positions.mode_position(mode) {
                    transition.begin(
                        pose,
                        target,
                        options.fov.default_fov,
                        options.fov.transition_speed,
                    );
                }
                self.first_person = mode == CameraMode::FirstPerson;
            }
            CameraMode::FreeCamera => log::info!("switched to free camera"),
            CameraMode::Cinematic => log::info!("switched to cinematic camera"),
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    #[test]
    fn same_mode_is_a_no_op() {
        let options = RigOptions::default();
        let mut controller = ModeController::new(CameraMode::ThirdPerson);
        let mut transition = TransitionEngine::new();
        let pose = CameraPose::new(Vec3::ZERO, 90.0);
        assert!(!controller.set_mode(
            CameraMode::ThirdPerson,
            &options,
            &pose,
            &mut transition
        ));
        assert!(!transition.is_active());
    }

    #[test]
    fn first_person_starts_blend_to_eye_offset() {
        let options = RigOptions::default();
        let mut controller = ModeController::new(CameraMode::ThirdPerson);
        let mut transition = TransitionEngine::new();
        let pose = CameraPose::new(Vec3::new(-300.0, 0.0, 100.0), 75.0);
        assert!(controller.set_mode(
            CameraMode::FirstPerson,
            &options,
            &pose,
            &mut transition
        ));
        assert!(controller.is_first_person());
        let state = transition.state();
        assert!(state.active);
        assert_eq!(state.target_position, Vec3::ZERO);
        assert_eq!(state.start_fov, 75.0);
        assert_eq!(state.target_fov, options.fov.default_fov);
        assert_eq!(state.duration, options.fov.transition_speed);
    }

    #[test]
    fn free_camera_keeps_pose_and_flag() {
        let options = RigOptions::default();
        let mut controller = ModeController::new(CameraMode::FirstPerson);
        let mut transition = TransitionEngine::new();
        let pose = CameraPose::new(Vec3::ZERO, 90.0);
        assert!(controller.set_mode(
            CameraMode::FreeCamera,
            &options,
            &pose,
            &mut transition
        ));
        assert_eq!(controller.mode(), CameraMode::FreeCamera);
        assert!(controller.is_first_person());
        assert!(!transition.is_active());
    }
}
