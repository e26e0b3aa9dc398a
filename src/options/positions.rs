use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::mode::CameraMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Camera offsets relative to the owner for each mode.
pub struct PositionOptions {
    /// Offset used in first-person mode.
    pub first_person: [f32; 3],
    /// Offset used in third-person mode.
    pub third_person: [f32; 3],
    /// First-person offset while aiming.
    pub aim_first_person: [f32; 3],
    /// Third-person offset while aiming.
    pub aim_third_person: [f32; 3],
    /// Offset blended toward by over-the-shoulder repositioning.
    pub over_shoulder_offset: [f32; 3],
    /// Approach speed of over-the-shoulder repositioning.
    pub repositioning_speed: f32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            first_person: [0.0, 0.0, 0.0],
            third_person: [-300.0, 0.0, 100.0],
            aim_first_person: [0.0, 0.0, 0.0],
            aim_third_person: [-300.0, 0.0, 100.0],
            over_shoulder_offset: [-150.0, 60.0, 70.0],
            repositioning_speed: 5.0,
        }
    }
}

impl PositionOptions {
    /// Resting offset for `mode`, if the mode has one.
    ///
    /// Free and cinematic cameras keep wherever they are.
    #[must_use]
    pub fn mode_position(&self, mode: CameraMode) -> Option<Vec3> {
        match mode {
            CameraMode::FirstPerson => {
                Some(Vec3::from_array(self.first_person))
            }
            CameraMode::ThirdPerson => {
                Some(Vec3::from_array(self.third_person))
            }
            CameraMode::FreeCamera | CameraMode::Cinematic => None,
        }
    }

    /// Aiming offset for `mode`, if the mode has one.
    #[must_use]
    pub fn aim_position(&self, mode: CameraMode) -> Option<Vec3> {
        match mode {
            CameraMode::FirstPerson => {
                Some(Vec3::from_array(self.aim_first_person))
            }
            CameraMode::ThirdPerson => {
                Some(Vec3::from_array(self.aim_third_person))
            }
            CameraMode::FreeCamera | CameraMode::Cinematic => None,
        }
    }
}
