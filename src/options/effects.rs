//! Per-effect toggles and parameters.
//!
//! Toggles are orthogonal: nothing prevents two enabled effects from
//! writing the same pose field in one frame. The frame sequence decides
//! which write wins.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
/// One table per effect module.
pub struct EffectOptions {
    /// Speed-, aim- and sprint-driven FOV.
    pub dynamic_fov: DynamicFovOptions,
    /// Speed-threshold zoom.
    pub dynamic_zoom: DynamicZoomOptions,
    /// FOV driven by the distance to what the camera looks at.
    pub focus_based_fov: ToggleOptions,
    /// Vertical bob while moving.
    pub head_bob: HeadBobOptions,
    /// Idle lateral/vertical sway.
    pub sway: SwayOptions,
    /// Periodic forward obstacle probe.
    pub obstacle_detection: ObstacleDetectionOptions,
    /// Probe toward the owner's predicted location.
    pub collision_prediction: CollisionPredictionOptions,
    /// Pull in ahead of forward geometry.
    pub environmental_awareness: EnvironmentalAwarenessOptions,
    /// Align roll/yaw with the ground normal.
    pub terrain_tilt: ToggleOptions,
    /// Turn toward the owner.
    pub intelligent_framing: ToggleOptions,
    /// Blend toward the mode's aim or rest position.
    pub contextual_positioning: ContextualPositioningOptions,
    /// Depth-of-field focused on forward geometry.
    pub adaptive_depth_of_field: AdaptiveDepthOfFieldOptions,
    /// Velocity-scaled motion blur.
    pub advanced_motion_blur: AdvancedMotionBlurOptions,
    /// Smoothed rotation toward the look target.
    pub camera_inertia: CameraInertiaOptions,
    /// See-through materials on occluding geometry.
    pub object_transparency: ObjectTransparencyOptions,
    /// Shoulder offset while aiming.
    pub over_shoulder: ToggleOptions,
    /// Firing kick and recovery.
    pub recoil: RecoilOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
/// An effect with no parameters beyond its toggle.
pub struct ToggleOptions {
    /// Whether the effect runs.
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Dynamic FOV toggle.
pub struct DynamicFovOptions {
    /// Whether the effect runs.
    pub enabled: bool,
}

impl Default for DynamicFovOptions {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Speed-threshold zoom. The threshold is shared with dynamic FOV.
pub struct DynamicZoomOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Owner speed above which the camera counts as fast.
    pub threshold: f32,
    /// Approach speed toward the zoomed or default FOV.
    pub speed: f32,
}

impl Default for DynamicZoomOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 500.0,
            speed: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Head bob magnitudes and frequency.
pub struct HeadBobOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Bob magnitude while running.
    pub running_magnitude: f32,
    /// Bob magnitude while walking.
    pub walking_magnitude: f32,
    /// Base bob frequency in radians per second.
    pub frequency: f32,
}

impl Default for HeadBobOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            running_magnitude: 10.0,
            walking_magnitude: 5.0,
            frequency: 10.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Sway amount and speed.
pub struct SwayOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Sway amplitude.
    pub amount: f32,
    /// Sway angular speed in radians per second.
    pub speed: f32,
}

impl Default for SwayOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            amount: 5.0,
            speed: 2.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Periodic forward obstacle probe.
pub struct ObstacleDetectionOptions {
    /// Whether the probe is scheduled.
    pub enabled: bool,
    /// Seconds between probes.
    pub interval: f32,
}

impl Default for ObstacleDetectionOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            interval: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Predictive collision probe.
pub struct CollisionPredictionOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Seconds of owner velocity to look ahead.
    pub lookahead: f32,
}

impl Default for CollisionPredictionOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            lookahead: 0.5,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Forward environment probe.
pub struct EnvironmentalAwarenessOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Probe length.
    pub check_distance: f32,
}

impl Default for EnvironmentalAwarenessOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            check_distance: 500.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Aim/rest position blending.
pub struct ContextualPositioningOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Approach speed toward the contextual position.
    pub speed: f32,
}

impl Default for ContextualPositioningOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            speed: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Adaptive depth of field.
pub struct AdaptiveDepthOfFieldOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Focus distance used when nothing is hit, and the probe length.
    pub focus_distance: f32,
}

impl Default for AdaptiveDepthOfFieldOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            focus_distance: 1000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Velocity-driven motion blur.
pub struct AdvancedMotionBlurOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Scale applied to the normalized speed.
    pub intensity_multiplier: f32,
}

impl Default for AdvancedMotionBlurOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity_multiplier: 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Rotational inertia.
pub struct CameraInertiaOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Approach speed toward the look target.
    pub strength: f32,
}

impl Default for CameraInertiaOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 5.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Dynamic object transparency.
pub struct ObjectTransparencyOptions {
    /// Whether the effect runs.
    pub enabled: bool,
    /// Value written to the transparent instance's `Transparency` scalar.
    pub strength: f32,
    /// Probe length along the view direction.
    pub check_distance: f32,
    /// Material asset instanced onto occluders. Nothing is swapped while
    /// unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl Default for ObjectTransparencyOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            strength: 0.5,
            check_distance: 1000.0,
            material: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Recoil kick and recovery.
pub struct RecoilOptions {
    /// Whether recoil decays and applies.
    pub enabled: bool,
    /// Upward pitch kick in degrees per trigger.
    pub intensity: f32,
    /// Approach speed of the recovery toward zero.
    pub recovery_speed: f32,
}

impl Default for RecoilOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            intensity: 2.0,
            recovery_speed: 10.0,
        }
    }
}
