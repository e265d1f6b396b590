//! Error types for the update subsystem.
//!
//! Nothing in here is fatal to the host: download failures are logged and
//! the batch continues, metadata failures collapse to "no update available".

use thiserror::Error;

/// Result type alias for update operations
pub type Result<T> = std::result::Result<T, UpdateError>;

/// Error type for update operations
#[derive(Error, Debug)]
pub enum UpdateError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
