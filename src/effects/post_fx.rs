//! Effects that only write the post-process block.

use super::{CameraEffect, Frame, PoseFields};
use crate::options::RigOptions;
use crate::scene::TraceChannel;

/// Focal region written with every focal distance.
pub const FOCAL_REGION: f32 = 10.0;
/// Owner speed at which advanced motion blur reaches full strength.
const FULL_BLUR_SPEED: f32 = 1000.0;

/// Aperture for a focal distance: one stop per 1000 units, within [1, 16].
#[must_use]
pub fn fstop_for(distance: f32) -> f32 {
    (distance / 1000.0).clamp(1.0, 16.0)
}

/// Focus on whatever the camera looks at, out to the configured distance.
#[derive(Debug, Clone, Default)]
pub struct AdaptiveDepthOfField;

impl CameraEffect for AdaptiveDepthOfField {
    fn name(&self) -> &'static str {
        "adaptive_depth_of_field"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POST_PROCESS
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.adaptive_depth_of_field.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let focus =
            frame.options.effects.adaptive_depth_of_field.focus_distance;
        let distance = frame
            .trace_forward(focus, TraceChannel::Visibility)
            .map_or(focus, |hit| hit.distance);
        let Some(post) = frame.post.as_deref_mut() else {
            return;
        };
        post.depth_of_field_distance = distance;
        post.depth_of_field_region = FOCAL_REGION;
        post.depth_of_field_fstop = fstop_for(distance);
    }
}

/// Motion blur proportional to owner speed.
#[derive(Debug, Clone, Default)]
pub struct AdvancedMotionBlur;

impl CameraEffect for AdvancedMotionBlur {
    fn name(&self) -> &'static str {
        "advanced_motion_blur"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::POST_PROCESS
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.advanced_motion_blur.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let multiplier =
            frame.options.effects.advanced_motion_blur.intensity_multiplier;
        let amount = (frame.owner_speed() / FULL_BLUR_SPEED).clamp(0.0, 1.0)
            * multiplier;
        if let Some(post) = frame.post.as_deref_mut() {
            post.motion_blur_amount = amount;
        }
    }
}
