//! Coffer self-update subsystem
//!
//! This crate keeps a Coffer installation's support files in order and tells
//! the host when a newer release has been published:
//! - Verification of required support files (driver artifact, native library)
//! - FIFO download queue drained off the host's startup path
//! - Streaming downloads with throttled progress reporting
//! - Release metadata check against the running version
//!
//! The host activates the subsystem once via [`Updater::activate`]; every
//! failure degrades to "skip and continue" or "report nothing", so nothing
//! in here can take the host process down.

pub mod config;
pub mod download;
pub mod error;
pub mod logging;
pub mod platform;
pub mod queue;
pub mod updater;
pub mod verifier;
pub mod version;


// Re-export commonly used items
pub use config::{NotifierConfig, StorageBackend, UpdaterConfig};
pub use download::{DownloadProgress, DownloadWorker, ProgressCallback};
pub use error::{Result, UpdateError};
pub use platform::{Platform, PlatformResolver};
pub use queue::{DownloadDescriptor, DownloadQueue};
pub use updater::Updater;
pub use verifier::FileVerifier;
pub use version::{UpdateNotice, VersionChecker};
