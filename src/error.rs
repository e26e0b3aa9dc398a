//! Crate-level error types.

use std::fmt;

/// Errors produced by the camrig crate.
///
/// Only configuration I/O surfaces errors; the per-frame path degrades to
/// no-ops instead of failing.
#[derive(Debug)]
pub enum CamRigError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// An option value that cannot be used as configured.
    InvalidOption(String),
}

impl fmt::Display for CamRigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::InvalidOption(msg) => write!(f, "invalid option: {msg}"),
        }
    }
}

impl std::error::Error for CamRigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for CamRigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn display_includes_message() {
        let err = CamRigError::InvalidOption("warp.duration".into());
        assert_eq!(err.to_string(), "invalid option: warp.duration");
    }

    #[test]
    fn io_error_exposes_source() {
        let err: CamRigError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(err.source().is_some());
        assert!(CamRigError::OptionsParse("x".into()).source().is_none());
    }
}
