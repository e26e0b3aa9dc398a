//! Field-of-view effects.

use super::{CameraEffect, Frame, PoseFields};
use crate::options::RigOptions;
use crate::scene::TraceChannel;
use crate::util::interp::interp_f32;

/// FOV follows aim, sprint and movement speed.
///
/// Aiming wins over sprinting, sprinting over plain speed. Below the speed
/// threshold the default FOV is the target.
#[derive(Debug, Clone, Default)]
pub struct DynamicFov;

impl DynamicFov {
    /// FOV the current controls and owner speed ask for.
    #[must_use]
    pub fn desired_fov(frame: &Frame<'_>) -> f32 {
        let fov = &frame.options.fov;
        let threshold = frame.options.effects.dynamic_zoom.threshold;
        let speed = frame.owner_speed();
        if frame.controls.aiming {
            fov.aiming_fov
        } else if frame.controls.running && speed > threshold {
            fov.sprint_fov
        } else if speed > threshold {
            fov.zoomed_fov
        } else {
            fov.default_fov
        }
    }
}

impl CameraEffect for DynamicFov {
    fn name(&self) -> &'static str {
        "dynamic_fov"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::FOV
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.dynamic_fov.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let desired = Self::desired_fov(frame);
        frame.pose.fov = interp_f32(
            frame.pose.fov,
            desired,
            frame.dt,
            frame.options.fov.approach_speed,
        );
    }
}

/// Zoom out above a speed threshold, back to default below it.
#[derive(Debug, Clone, Default)]
pub struct DynamicZoom;

impl CameraEffect for DynamicZoom {
    fn name(&self) -> &'static str {
        "dynamic_zoom"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::FOV
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.dynamic_zoom.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let Some(owner) = frame.owner else {
            return;
        };
        let zoom = &frame.options.effects.dynamic_zoom;
        let target = if owner.speed() > zoom.threshold {
            frame.options.fov.zoomed_fov
        } else {
            frame.options.fov.default_fov
        };
        frame.pose.fov =
            interp_f32(frame.pose.fov, target, frame.dt, zoom.speed);
    }
}

/// Narrow the FOV on close geometry, widen it on distant geometry.
#[derive(Debug, Clone, Default)]
pub struct FocusFov;

impl FocusFov {
    /// Closest and widest FOV the focus distance maps to.
    pub const RANGE: (f32, f32) = (60.0, 90.0);
}

impl CameraEffect for FocusFov {
    fn name(&self) -> &'static str {
        "focus_based_fov"
    }

    fn writes(&self) -> PoseFields {
        PoseFields::FOV
    }

    fn enabled(&self, options: &RigOptions) -> bool {
        options.effects.focus_based_fov.enabled
    }

    fn apply(&mut self, frame: &mut Frame<'_>) {
        let focus =
            frame.options.effects.adaptive_depth_of_field.focus_distance;
        let distance = frame
            .trace_forward(focus, TraceChannel::Visibility)
            .map_or(focus, |hit| hit.distance);
        let desired = (distance / 10.0).clamp(Self::RANGE.0, Self::RANGE.1);
        frame.pose.fov = interp_f32(
            frame.pose.fov,
            desired,
            frame.dt,
            frame.options.fov.approach_speed,
        );
    }
}
