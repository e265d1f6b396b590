//! Configuration for the update subsystem.
//!
//! The host supplies this at construction; the subsystem holds no other
//! knobs. Covers the distribution server, the local library root, the
//! active storage backend, and the release-notification settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the updater
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Base URL of the file distribution server
    pub update_site: String,

    /// Path segment on the distribution server holding shared libraries
    pub remote_lib_path: String,

    /// Local root directory for support files
    pub lib_root: PathBuf,

    /// Active storage backend
    pub backend: StorageBackend,

    /// Release-notification settings
    pub notifier: NotifierConfig,
}

/// Storage backend selected by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageBackend {
    Sqlite,
    Mysql,
}

impl StorageBackend {
    /// Whether this backend needs the bundled driver plus a native library
    pub fn requires_native_driver(&self) -> bool {
        matches!(self, StorageBackend::Sqlite)
    }
}

/// Release-notification configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// Whether the update check runs at all
    pub enabled: bool,

    /// Version string of the running host
    pub running_version: String,

    /// Endpoint returning the ordered version listing
    pub versions_url: String,

    /// Endpoint returning the ordered changelog listing
    pub updates_url: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        let lib_root = directories::BaseDirs::new()
            .map(|dirs| dirs.data_local_dir().join("Coffer").join("lib"))
            .unwrap_or_else(|| PathBuf::from("lib"));

        Self {
            update_site: "https://updates.coffer.dev".to_string(),
            remote_lib_path: "shared/lib".to_string(),
            lib_root,
            backend: StorageBackend::Sqlite,
            notifier: NotifierConfig::default(),
        }
    }
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            running_version: "0.0".to_string(),
            versions_url: "https://api.coffer.dev/v2/releases/versions".to_string(),
            updates_url: "https://api.coffer.dev/v2/releases/updates".to_string(),
        }
    }
}
