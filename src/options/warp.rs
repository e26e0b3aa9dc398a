use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Warp", inline)]
#[serde(default)]
/// Warp sequence targets, timing and audio cue.
pub struct WarpOptions {
    /// Degrees added to the FOV at the peak of the warp.
    #[schemars(title = "FOV Increase", range(min = 0.0, max = 60.0), extend("step" = 1.0))]
    pub max_fov_increase: f32,
    /// Duration in seconds of each of the two phases.
    #[schemars(title = "Duration", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub duration: f32,
    /// Vignette intensity at the peak of the warp.
    #[schemars(title = "Vignette", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub vignette_intensity: f32,
    /// Motion blur amount at the peak of the warp.
    #[schemars(title = "Motion Blur", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub motion_blur_amount: f32,
    /// Seconds between warp updates.
    #[schemars(skip)]
    pub callback_period: f32,
    /// Sound cue played when the warp begins.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    /// Volume multiplier for the warp cue.
    #[schemars(skip)]
    pub sound_volume: f32,
    /// Pitch multiplier for the warp cue.
    #[schemars(skip)]
    pub sound_pitch: f32,
}

impl Default for WarpOptions {
    fn default() -> Self {
        Self {
            max_fov_increase: 30.0,
            duration: 2.0,
            vignette_intensity: 1.0,
            motion_blur_amount: 2.0,
            callback_period: 0.01,
            sound: None,
            sound_volume: 1.0,
            sound_pitch: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Fade overlay material and update cadence.
pub struct FadeOptions {
    /// Material asset instanced as the fade overlay. Fades are skipped
    /// while unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Seconds between fade updates.
    pub callback_period: f32,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            material: None,
            callback_period: 0.01,
        }
    }
}
