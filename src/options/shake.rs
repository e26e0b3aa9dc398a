use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Gameplay actions that can be mapped to a camera shake.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ShakeAction {
    /// No action.
    #[default]
    None,
    /// Walking footfall.
    Walk,
    /// Running footfall.
    Run,
    /// Jump take-off.
    Jump,
    /// Landing impact.
    Land,
    /// Attack swing or shot.
    Attack,
    /// Taking damage.
    Damage,
    /// Death.
    Death,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
/// Shake parameters for one action.
pub struct ShakeMapping {
    /// Action that triggers this shake.
    pub action: ShakeAction,
    /// Scale passed to the shake sink.
    pub intensity: f32,
    /// Oscillation frequency hint for the shake sink.
    pub frequency: f32,
    /// Whether the shake layers on top of running shakes.
    pub additive: bool,
}

impl Default for ShakeMapping {
    fn default() -> Self {
        Self {
            action: ShakeAction::None,
            intensity: 1.0,
            frequency: 10.0,
            additive: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema)]
#[serde(default)]
/// Shake class and per-action mappings.
pub struct ShakeOptions {
    /// Shake asset triggered for mapped actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shake_class: Option<String>,
    /// Per-action shake parameters; the first match wins.
    pub mappings: Vec<ShakeMapping>,
}

impl ShakeOptions {
    /// First mapping registered for `action`.
    #[must_use]
    pub fn mapping(&self, action: ShakeAction) -> Option<&ShakeMapping> {
        self.mappings.iter().find(|m| m.action == action)
    }
}
