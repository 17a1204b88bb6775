//! Error types for the CLI

use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// A script character with no matching key
    #[error("Invalid key {key:?} in {script:?}")]
    InvalidKey {
        /// The unrecognised character
        key: char,
        /// The script it appeared in
        script: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid key error
    #[must_use]
    pub fn invalid_key(key: char, script: impl Into<String>) -> Self {
        Self::InvalidKey {
            key,
            script: script.into(),
        }
    }
}
