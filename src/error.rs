//! Crate-level error types.

use std::fmt;

/// Errors produced by the gyrolook crate.
///
/// Sensor absence is deliberately *not* an error: the tracker degrades to
/// pointer mode instead (see
/// [`OrientationTracker::initialize`](crate::tracker::OrientationTracker::initialize)).
#[derive(Debug)]
pub enum GyrolookError {
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for GyrolookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for GyrolookError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for GyrolookError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
