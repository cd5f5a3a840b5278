//! Crate-level error types.

use std::fmt;

/// Errors produced by the noclip crate.
///
/// Cursor-capture failures are deliberately absent: the rig logs them and
/// keeps running (see [`CameraRig::on_lock_error`]).
///
/// [`CameraRig::on_lock_error`]: crate::camera::CameraRig::on_lock_error
#[derive(Debug)]
pub enum NoclipError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Registering or removing a DOM event listener failed.
    Listener(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for NoclipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Listener(msg) => {
                write!(f, "event listener error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for NoclipError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for NoclipError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
