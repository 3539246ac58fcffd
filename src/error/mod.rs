//! Error handling module for djiutil

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for djiutil operations
#[derive(Error, Debug)]
pub enum DjiError {
    /// Malformed subtitle cue text
    #[error("Invalid subtitle format: {message}")]
    Format { message: String },

    /// Frame counter discontinuity inside one subtitle file
    #[error("Unexpected frame count: expected {expected} but got {actual}")]
    Sequence { expected: u64, actual: u64 },

    /// A telemetry record cannot become a track point
    #[error("Malformed telemetry record at frame {frame}: missing {field}")]
    MalformedRecord { frame: u64, field: String },

    /// Ambiguous or mutually exclusive arguments
    #[error("Usage error: {message}")]
    Usage { message: String },

    /// Malformed filter expression
    #[error("Invalid value: {message}")]
    Value { message: String },

    /// I/O failure bound to a path
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Listing could not be serialized
    #[error("Failed to render output: {message}")]
    Render { message: String },

    /// External tool failed
    #[error("Command failed: {message}")]
    Command { message: String },
}

impl DjiError {
    pub fn format(message: impl Into<String>) -> Self {
        DjiError::Format {
            message: message.into(),
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        DjiError::Usage {
            message: message.into(),
        }
    }

    pub fn value(message: impl Into<String>) -> Self {
        DjiError::Value {
            message: message.into(),
        }
    }

    pub fn render(message: impl Into<String>) -> Self {
        DjiError::Render {
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DjiError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for djiutil operations
pub type DjiResult<T> = std::result::Result<T, DjiError>;
