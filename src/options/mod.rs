//! Centralized camera rig options with TOML preset support.
//!
//! All tweakable settings (FOV targets, mode positions, rotation limits,
//! effect toggles, warp/fade timing, post-process values, shakes) are
//! consolidated here. Options serialize to/from TOML so a rig can be tuned
//! from preset files.

mod effects;
mod fov;
mod positions;
mod post_processing;
mod rotation;
mod shake;
mod warp;

use std::path::Path;

pub use effects::{
    AdaptiveDepthOfFieldOptions, AdvancedMotionBlurOptions,
    CameraInertiaOptions, CollisionPredictionOptions,
    ContextualPositioningOptions, DynamicFovOptions, DynamicZoomOptions,
    EffectOptions, EnvironmentalAwarenessOptions, HeadBobOptions,
    ObjectTransparencyOptions, ObstacleDetectionOptions, RecoilOptions,
    SwayOptions, ToggleOptions,
};
pub use fov::FovOptions;
pub use positions::PositionOptions;
pub use post_processing::PostProcessingOptions;
pub use rotation::RotationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use shake::{ShakeAction, ShakeMapping, ShakeOptions};
pub use warp::{FadeOptions, WarpOptions};

use crate::error::CamRigError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[fov]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct RigOptions {
    /// Field-of-view targets.
    pub fov: FovOptions,
    /// Per-mode camera offsets.
    #[schemars(skip)]
    pub positions: PositionOptions,
    /// Look sensitivity and limits.
    pub rotation: RotationOptions,
    /// Effect toggles and parameters.
    pub effects: EffectOptions,
    /// Warp sequence.
    pub warp: WarpOptions,
    /// Fade overlay.
    #[schemars(skip)]
    pub fade: FadeOptions,
    /// Post-process values.
    pub post_processing: PostProcessingOptions,
    /// Camera shakes.
    #[schemars(skip)]
    pub shake: ShakeOptions,
}

impl RigOptions {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(RigOptions)
    }

    /// The schema as a JSON string, for tuning front ends.
    pub fn schema_json() -> Result<String, CamRigError> {
        serde_json::to_string(&Self::json_schema())
            .map_err(|e| CamRigError::OptionsParse(e.to_string()))
    }

    /// Current values as a JSON string.
    pub fn to_json(&self) -> Result<String, CamRigError> {
        serde_json::to_string(self)
            .map_err(|e| CamRigError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, CamRigError> {
        let content = std::fs::read_to_string(path).map_err(CamRigError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, CamRigError> {
        toml::from_str(content)
            .map_err(|e| CamRigError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), CamRigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CamRigError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(CamRigError::Io)?;
        }
        std::fs::write(path, content).map_err(CamRigError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Values the rig will tolerate but probably not as intended.
    ///
    /// The rig never rejects these; durations at or below zero complete
    /// immediately and non-positive periods disable the timer.
    #[must_use]
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        let mut check = |ok: bool, what: &str| {
            if !ok {
                problems.push(what.to_owned());
            }
        };
        check(
            self.fov.transition_speed > 0.0,
            "fov.transition_speed <= 0: mode switches snap",
        );
        check(self.warp.duration > 0.0, "warp.duration <= 0: warp snaps");
        check(
            self.warp.callback_period > 0.0,
            "warp.callback_period <= 0: warp never runs",
        );
        check(
            self.fade.callback_period > 0.0,
            "fade.callback_period <= 0: fades never run",
        );
        check(
            !self.effects.obstacle_detection.enabled
                || self.effects.obstacle_detection.interval > 0.0,
            "effects.obstacle_detection.interval <= 0: probe never runs",
        );
        check(
            !self.effects.object_transparency.enabled
                || self.effects.object_transparency.material.is_some(),
            "effects.object_transparency.material unset: nothing is swapped",
        );
        check(
            self.rotation.max_pitch >= 0.0 && self.rotation.max_yaw >= 0.0,
            "rotation limits are negative",
        );
        problems
    }

    /// Fail with the collected [`problems`](Self::problems), if any.
    pub fn validate(&self) -> Result<(), CamRigError> {
        let problems = self.problems();
        if problems.is_empty() {
            Ok(())
        } else {
            Err(CamRigError::InvalidOption(problems.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = RigOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: RigOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[fov]
aiming_fov = 55.0

[effects.recoil]
enabled = true
";
        let opts = RigOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.fov.aiming_fov, 55.0);
        assert!(opts.effects.recoil.enabled);
        // Everything else should be default
        assert_eq!(opts.fov.default_fov, 90.0);
        assert_eq!(opts.effects.recoil.recovery_speed, 10.0);
        assert!(opts.effects.head_bob.enabled);
        assert!(!opts.effects.terrain_tilt.enabled);
    }

    #[test]
    fn shake_mappings_parse_and_lookup() {
        let toml_str = r#"
[shake]
shake_class = "ShakeHeavy"

[[shake.mappings]]
action = "land"
intensity = 2.5

[[shake.mappings]]
action = "damage"
intensity = 4.0
"#;
        let opts = RigOptions::from_toml(toml_str).unwrap();
        assert_eq!(opts.shake.shake_class.as_deref(), Some("ShakeHeavy"));
        let land = opts.shake.mapping(ShakeAction::Land).unwrap();
        assert_eq!(land.intensity, 2.5);
        assert_eq!(land.frequency, 10.0);
        assert!(opts.shake.mapping(ShakeAction::Jump).is_none());
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RigOptions::from_toml("[fov\naiming_fov = ").unwrap_err();
        assert!(matches!(err, CamRigError::OptionsParse(_)));
    }

    #[test]
    fn defaults_have_no_problems() {
        assert!(RigOptions::default().validate().is_ok());
    }

    #[test]
    fn degenerate_durations_are_reported() {
        let mut opts = RigOptions::default();
        opts.warp.duration = 0.0;
        opts.fov.transition_speed = -1.0;
        let problems = opts.problems();
        assert_eq!(problems.len(), 2);
        assert!(matches!(
            opts.validate(),
            Err(CamRigError::InvalidOption(_))
        ));
    }

    #[test]
    fn save_then_load_preserves_options() {
        let dir = std::env::temp_dir()
            .join(format!("camrig-options-{}", std::process::id()));
        let path = dir.join("aim_heavy.toml");
        let mut opts = RigOptions::default();
        opts.fov.aiming_fov = 42.0;
        opts.effects.object_transparency.material =
            Some("M_SeeThrough".into());
        opts.save(&path).unwrap();

        let loaded = RigOptions::load(&path).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(RigOptions::list_presets(&dir), vec!["aim_heavy"]);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(RigOptions::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("fov"));
        assert!(props.contains_key("rotation"));
        assert!(props.contains_key("warp"));
        assert!(props.contains_key("effects"));

        // Skipped sections should be absent
        assert!(!props.contains_key("positions"));
        assert!(!props.contains_key("shake"));
        assert!(!props.contains_key("fade"));

        let warp = &props["warp"]["properties"];
        assert!(warp.get("max_fov_increase").is_some());
        assert!(warp.get("callback_period").is_none());
    }

    #[test]
    fn json_exports_carry_current_values() {
        let mut opts = RigOptions::default();
        opts.fov.default_fov = 75.0;
        let json: serde_json::Value =
            serde_json::from_str(&opts.to_json().unwrap()).unwrap();
        assert_eq!(json["fov"]["default_fov"], 75.0);

        let schema = RigOptions::schema_json().unwrap();
        assert!(schema.contains("max_fov_increase"));
    }
}
