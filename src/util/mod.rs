//! Shared utilities for the camera rig.

pub mod interp;
