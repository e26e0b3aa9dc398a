use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Effects", inline)]
#[serde(default)]
/// Values pushed to the post-process block by the explicit apply actions.
pub struct PostProcessingOptions {
    /// Focal distance written by `apply_depth_of_field`.
    #[schemars(title = "Focal Distance", range(min = 0.0, max = 10000.0), extend("step" = 10.0))]
    pub depth_of_field: f32,
    /// Focal region written alongside the focal distance.
    #[schemars(skip)]
    pub focal_region: f32,
    /// Motion blur amount written by `apply_motion_blur`.
    #[schemars(title = "Motion Blur", range(min = 0.0, max = 4.0), extend("step" = 0.05))]
    pub motion_blur_amount: f32,
    /// Color grading intensity written by `apply_color_grading`.
    #[schemars(title = "Color Grading", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub color_grading_intensity: f32,
    /// Vignette intensity written by `apply_vignette`.
    #[schemars(title = "Vignette", range(min = 0.0, max = 2.0), extend("step" = 0.05))]
    pub vignette_intensity: f32,
    /// Material asset instanced by `apply_occlusion_overlay`.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occlusion_material: Option<String>,
    /// Material asset attached once at initialization.
    #[schemars(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post_process_material: Option<String>,
}

impl Default for PostProcessingOptions {
    fn default() -> Self {
        Self {
            depth_of_field: 1000.0,
            focal_region: 10.0,
            motion_blur_amount: 1.0,
            color_grading_intensity: 1.0,
            vignette_intensity: 0.5,
            occlusion_material: None,
            post_process_material: None,
        }
    }
}
