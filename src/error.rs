//! Error types for Typeahead
//!
//! Host-level failures (terminal, configuration, I/O) live in [`TypeaheadError`].
//! Failures reported by a caller's lookup are [`LookupError`]s; the controller
//! treats those as opaque and recovers from them locally, so they never reach
//! the host.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Typeahead operations
#[derive(Error, Debug)]
pub enum TypeaheadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to read settings from '{}': {}", .path.display(), .source)]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings in '{}': {}", .path.display(), .source)]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for Typeahead operations
pub type Result<T> = std::result::Result<T, TypeaheadError>;

/// Failure of a caller-supplied option lookup.
///
/// The controller never inspects the detail; it only logs it and shows a
/// generic message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{0}")]
    Failed(String),

    #[error("lookup was dropped before it completed")]
    Abandoned,
}

impl LookupError {
    pub fn failed(message: impl Into<String>) -> Self {
        LookupError::Failed(message.into())
    }
}

impl From<String> for LookupError {
    fn from(message: String) -> Self {
        LookupError::Failed(message)
    }
}

impl From<&str> for LookupError {
    fn from(message: &str) -> Self {
        LookupError::Failed(message.to_string())
    }
}
