use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Field of View", inline)]
#[serde(default)]
/// Field-of-view targets and blend rates.
pub struct FovOptions {
    /// Resting field of view in degrees.
    #[schemars(title = "Default FOV", range(min = 40.0, max = 120.0), extend("step" = 1.0))]
    pub default_fov: f32,
    /// Field of view while aiming.
    #[schemars(title = "Aiming FOV", range(min = 20.0, max = 120.0), extend("step" = 1.0))]
    pub aiming_fov: f32,
    /// Field of view while moving faster than the zoom threshold.
    #[schemars(title = "Zoomed FOV", range(min = 20.0, max = 140.0), extend("step" = 1.0))]
    pub zoomed_fov: f32,
    /// Field of view while running faster than the zoom threshold.
    #[schemars(title = "Sprint FOV", range(min = 20.0, max = 140.0), extend("step" = 1.0))]
    pub sprint_fov: f32,
    /// Duration in seconds of the blend performed on a mode switch.
    #[schemars(title = "Transition Time", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub transition_speed: f32,
    /// Approach speed used when easing toward a desired FOV.
    #[schemars(skip)]
    pub approach_speed: f32,
}

impl Default for FovOptions {
    fn default() -> Self {
        Self {
            default_fov: 90.0,
            aiming_fov: 60.0,
            zoomed_fov: 80.0,
            sprint_fov: 70.0,
            transition_speed: 5.0,
            approach_speed: 5.0,
        }
    }
}
