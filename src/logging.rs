//! Console logging setup.
//!
//! The subsystem itself only emits `tracing` events; hosts that do not
//! install their own subscriber can call [`init`] once to get filtered
//! console output.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Logging setup errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    Initialization(String),
}

/// Install a console subscriber.
///
/// `default_directive` applies when `RUST_LOG` is unset, e.g.
/// `"coffer_updater=info"`. Fails if a global subscriber is already set.
pub fn init(default_directive: &str) -> Result<(), LoggingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| LoggingError::Initialization(e.to_string()))
}
