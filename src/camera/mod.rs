//! Camera pose, mode and the timed sequences that move it.

/// Fade overlay sequence.
pub mod fade;
/// Camera modes and the controller that switches between them.
pub mod mode;
/// Pose and Euler rotation types.
pub mod pose;
/// Timed position/FOV blend.
pub mod transition;
/// Two-phase warp ramp.
pub mod warp;

pub use fade::FadeSequence;
pub use mode::{CameraMode, ModeController};
pub use pose::{CameraPose, Rotator};
pub use transition::{TransitionEngine, TransitionState};
pub use warp::{WarpPhase, WarpSequence, WarpStep};
