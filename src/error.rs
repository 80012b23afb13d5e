// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Error types for the pose classifier.

use std::fmt;

use crate::joint::Joint;

/// Result type alias for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifyError>;

/// Main error type for the pose classifier.
#[derive(Debug)]
pub enum ClassifyError {
    /// A required joint was absent from the landmark input.
    IncompleteInput(Joint),
    /// A joint name did not match any known joint.
    UnknownJoint(String),
    /// Invalid classifier configuration provided.
    Config(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
    /// Malformed landmark frame data.
    Parse(String),
}

impl fmt::Display for ClassifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteInput(joint) => write!(f, "Incomplete landmarks: missing {joint}"),
            Self::UnknownJoint(name) => write!(f, "Unknown joint: {name}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClassifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ClassifyError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ClassifyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
