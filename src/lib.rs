// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Per-frame camera state blender for third- and first-person game cameras.
//!
//! A [`rig::CameraRig`] owns one [`camera::CameraPose`] (owner-relative
//! position, rotation and field of view). Every simulation frame, a fixed
//! sequence of toggleable [`effects`] proposes adjustments to it, the mode
//! [`camera::TransitionEngine`] blends toward mode offsets, collision
//! push-back keeps the camera out of geometry, and the result is committed
//! to a host camera. Warp and fade ramps run from a [`timer::TimerQueue`]
//! at their own cadence.
//!
//! # Key entry points
//!
//! - [`rig::CameraRig`] - the frame orchestrator and input surface
//! - [`rig::RigContext`] - host collaborators borrowed per call
//! - [`options::RigOptions`] - TOML-backed configuration
//! - [`scene`] - traits the host implements (probe, owner, materials,
//!   camera, audio, shakes)
//!
//! # Axis convention
//!
//! X forward, Y right, Z up. Angles are in degrees.

pub mod camera;
pub mod effects;
pub mod error;
pub mod options;
pub mod post;
pub mod rig;
pub mod scene;
pub mod timer;
pub mod util;

pub use camera::{CameraMode, CameraPose, Rotator};
pub use error::CamRigError;
pub use options::RigOptions;
pub use rig::{CameraRig, RigContext};
