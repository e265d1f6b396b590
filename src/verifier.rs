//! Support-file verification.
//!
//! Checks that the files the active storage backend needs are present on
//! disk and enqueues any that are missing. Runs synchronously on the host's
//! initialization path; the actual transfers happen later when the worker
//! drains the queue.

use crate::config::UpdaterConfig;
use crate::platform::PlatformResolver;
use crate::queue::{DownloadDescriptor, DownloadQueue};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Generic driver artifact required by the SQLite backend
pub const SQLITE_DRIVER_ARTIFACT: &str = "sqlite.jar";

/// Verifies local support files and feeds the download queue
pub struct FileVerifier {
    config: Arc<UpdaterConfig>,
    resolver: PlatformResolver,
    queue: Arc<DownloadQueue>,
}

impl FileVerifier {
    pub fn new(
        config: Arc<UpdaterConfig>,
        resolver: PlatformResolver,
        queue: Arc<DownloadQueue>,
    ) -> Self {
        Self {
            config,
            resolver,
            queue,
        }
    }

    /// Enqueue a descriptor unless its local file already exists.
    ///
    /// Returns true when the descriptor was queued for download.
    pub fn verify(&self, descriptor: DownloadDescriptor) -> bool {
        if descriptor.local_path().exists() {
            return false;
        }

        self.queue.offer(descriptor);
        true
    }

    /// Verify every support file the configured backend requires.
    ///
    /// For SQLite that is the generic driver artifact plus, on supported
    /// platforms, the native library. On unsupported platforms the legacy
    /// native binary is removed instead. Returns the number of descriptors
    /// enqueued.
    pub fn verify_support_files(&self) -> usize {
        if !self.config.backend.requires_native_driver() {
            return 0;
        }

        let mut enqueued = 0;

        let driver = self.config.lib_root.join(SQLITE_DRIVER_ARTIFACT);
        if self.verify(DownloadDescriptor::new(
            driver,
            self.remote_url(SQLITE_DRIVER_ARTIFACT),
        )) {
            enqueued += 1;
        }

        match self.resolver.native_lib_path() {
            Some(native) => {
                let relative = self.relative_to_lib_root(&native);
                let remote = self.remote_url(&relative);
                if self.verify(DownloadDescriptor::new(native, remote)) {
                    enqueued += 1;
                }
            }
            None => self.remove_legacy_native_library(),
        }

        enqueued
    }

    /// Remote location of a library file, derived by swapping the local
    /// library root for the distribution server's shared path.
    fn remote_url(&self, relative: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.update_site.trim_end_matches('/'),
            self.config.remote_lib_path.trim_matches('/'),
            relative
        )
    }

    fn relative_to_lib_root(&self, path: &Path) -> String {
        let relative = path.strip_prefix(&self.config.lib_root).unwrap_or(path);
        relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Old installs shipped a Linux/amd64 binary; on platforms without
    /// native support the host would still find and load it, crashing the
    /// process. The path is the fixed historical one.
    fn remove_legacy_native_library(&self) {
        let legacy = self
            .config
            .lib_root
            .join("native")
            .join("Linux")
            .join("amd64")
            .join("libsqlitejdbc.so");

        if legacy.exists() {
            match fs::remove_file(&legacy) {
                Ok(()) => tracing::info!("Removed stale native library {}", legacy.display()),
                Err(e) => tracing::warn!(
                    "Failed to remove stale native library {}: {}",
                    legacy.display(),
                    e
                ),
            }
        }
    }
}
