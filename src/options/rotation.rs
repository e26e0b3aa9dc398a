use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Rotation", inline)]
#[serde(default)]
/// Look-input sensitivity and rotation limits.
pub struct RotationOptions {
    /// Yaw limit in degrees either side of the owner's heading.
    #[schemars(title = "Max Yaw", range(min = 0.0, max = 180.0), extend("step" = 1.0))]
    pub max_yaw: f32,
    /// Pitch limit in degrees above and below the horizon.
    #[schemars(title = "Max Pitch", range(min = 0.0, max = 89.0), extend("step" = 1.0))]
    pub max_pitch: f32,
    /// Degrees of rotation per unit of look input; also the approach
    /// speed of framing and terrain tilt.
    #[schemars(title = "Rotation Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub rotation_speed: f32,
    /// Free-camera movement speed per unit of move input.
    #[schemars(title = "Free Move Speed", range(min = 0.0, max = 50.0), extend("step" = 0.5))]
    pub free_move_speed: f32,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            max_yaw: 90.0,
            max_pitch: 45.0,
            rotation_speed: 2.0,
            free_move_speed: 5.0,
        }
    }
}
