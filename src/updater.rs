//! Updater activation.
//!
//! Wires the verifier, queue, worker, and version checker together around
//! one shared HTTP client, and exposes the single entry point the host
//! calls during startup. Verification runs on the caller's path; the drain
//! pass and the release check are spawned as detached tasks so startup is
//! never blocked on the network. Neither task is cancellable; both run to
//! completion or to failure.

use crate::config::UpdaterConfig;
use crate::download::{DownloadWorker, ProgressCallback};
use crate::error::Result;
use crate::platform::PlatformResolver;
use crate::queue::DownloadQueue;
use crate::verifier::FileVerifier;
use crate::version::{UpdateNotice, VersionChecker};
use std::sync::Arc;

/// The host-facing handle to the update subsystem
pub struct Updater {
    config: Arc<UpdaterConfig>,
    queue: Arc<DownloadQueue>,
    verifier: FileVerifier,
    worker: DownloadWorker,
    checker: VersionChecker,
}

impl Updater {
    /// Build an updater for the running platform
    pub fn new(config: UpdaterConfig) -> Result<Self> {
        let resolver = PlatformResolver::current(config.lib_root.clone());
        Self::with_resolver(config, resolver)
    }

    /// Build an updater with an explicit platform resolver
    pub fn with_resolver(config: UpdaterConfig, resolver: PlatformResolver) -> Result<Self> {
        let config = Arc::new(config);
        let client = reqwest::Client::builder()
            .user_agent(format!("Coffer/{}", config.notifier.running_version))
            .build()?;

        let queue = Arc::new(DownloadQueue::new());
        let verifier = FileVerifier::new(
            Arc::clone(&config),
            resolver.clone(),
            Arc::clone(&queue),
        );
        let worker = DownloadWorker::new(
            Arc::clone(&config),
            resolver,
            Arc::clone(&queue),
            client.clone(),
        );
        let checker = VersionChecker::new(Arc::clone(&config), client);

        Ok(Self {
            config,
            queue,
            verifier,
            worker,
            checker,
        })
    }

    /// Set progress callback
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.worker = self.worker.with_progress_callback(callback);
        self
    }

    /// Activate the subsystem.
    ///
    /// Verifies support files synchronously, then spawns the download pass
    /// and, when the notifier is enabled, the release check. Must be called
    /// from within the host's async runtime. Returns the number of files
    /// queued for download.
    pub fn activate(self: &Arc<Self>) -> usize {
        let enqueued = self.verifier.verify_support_files();

        let updater = Arc::clone(self);
        tokio::spawn(async move {
            updater.worker.drain_and_download().await;
        });

        if self.config.notifier.enabled {
            let updater = Arc::clone(self);
            tokio::spawn(async move {
                if let Some(notice) = updater.checker.get_latest_update().await {
                    updater.log_update_notice(&notice);
                }
            });
        }

        enqueued
    }

    /// Verify support files without spawning anything
    pub fn verify_support_files(&self) -> usize {
        self.verifier.verify_support_files()
    }

    /// Drain the queue on the caller's task
    pub async fn drain_and_download(&self) {
        self.worker.drain_and_download().await;
    }

    /// Run the release check on the caller's task
    pub async fn check_for_update(&self) -> Option<UpdateNotice> {
        self.checker.get_latest_update().await
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    pub fn queue(&self) -> &DownloadQueue {
        &self.queue
    }

    fn log_update_notice(&self, notice: &UpdateNotice) {
        tracing::info!("A new Coffer release is available");
        tracing::info!("Latest version: {}", notice.version);
        tracing::info!("Your version: {}", self.config.notifier.running_version);
        tracing::info!("What's new: {}", notice.description);
    }
}
