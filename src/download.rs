//! Download worker.
//!
//! Drains the queue and streams each remote file to its local destination:
//! - Single drain pass at a time, guarded by an async mutex
//! - Overwrite semantics: an existing local file is always replaced
//! - Progress reporting throttled to one notification per 500 ms
//! - A failed transfer is logged and skipped; the batch keeps going
//!
//! There is no timeout on network reads: a stalled remote stalls its own
//! drain pass until the transport gives up, and nothing else.

use crate::config::UpdaterConfig;
use crate::error::{Result, UpdateError};
use crate::platform::PlatformResolver;
use crate::queue::{DownloadDescriptor, DownloadQueue};
use futures::StreamExt;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

/// Minimum wall-clock gap between two progress notifications
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Progress snapshot handed to the observer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadProgress {
    /// File being transferred
    pub file_name: String,
    /// Bytes transferred so far
    pub transferred: u64,
    /// Advertised total size
    pub total: u64,
    /// Completed percentage (0-100)
    pub percentage: u8,
}

impl DownloadProgress {
    /// Percentage floor of `transferred / total`, capped at 100
    pub fn percentage(transferred: u64, total: u64) -> u8 {
        if total == 0 {
            return 0;
        }
        ((transferred as f64 / total as f64) * 100.0).min(100.0) as u8
    }
}

/// Progress callback type
pub type ProgressCallback = Arc<dyn Fn(DownloadProgress) + Send + Sync>;

/// Drains the download queue and writes files to disk
pub struct DownloadWorker {
    config: Arc<UpdaterConfig>,
    resolver: PlatformResolver,
    queue: Arc<DownloadQueue>,
    client: reqwest::Client,
    drain_lock: Mutex<()>,
    progress_callback: Option<ProgressCallback>,
}

impl DownloadWorker {
    pub fn new(
        config: Arc<UpdaterConfig>,
        resolver: PlatformResolver,
        queue: Arc<DownloadQueue>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            config,
            resolver,
            queue,
            client,
            drain_lock: Mutex::new(()),
            progress_callback: None,
        }
    }

    /// Set progress callback
    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Download every queued file, in order, until the queue is empty.
    ///
    /// Only one drain pass runs at a time; concurrent callers wait for the
    /// current pass to finish and then drain whatever is left. A failed
    /// download never aborts the batch.
    pub async fn drain_and_download(&self) {
        let _guard = self.drain_lock.lock().await;

        while let Some(descriptor) = self.queue.poll() {
            tracing::info!("Downloading file {}", descriptor.file_name());

            if let Err(e) = self.download(&descriptor).await {
                tracing::warn!("The updater ran into a minor issue: {}", e);
                tracing::warn!("This can probably be ignored.");
            }
        }
    }

    async fn download(&self, descriptor: &DownloadDescriptor) -> Result<()> {
        tokio::fs::create_dir_all(&self.config.lib_root).await?;
        if let Some(native_folder) = self.resolver.native_folder() {
            tokio::fs::create_dir_all(&native_folder).await?;
        }

        let local = descriptor.local_path();
        if local.exists() {
            tokio::fs::remove_file(local).await?;
        }

        let response = self.client.get(descriptor.remote_url()).send().await?;
        if !response.status().is_success() {
            return Err(UpdateError::InvalidResponse {
                reason: format!("HTTP {} from {}", response.status(), descriptor.remote_url()),
            });
        }

        let total = response.content_length().unwrap_or(0);
        let mut file = tokio::fs::File::create(local).await?;
        let mut stream = response.bytes_stream();

        let mut transferred: u64 = 0;
        let mut last_report: Option<Instant> = None;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            transferred += chunk.len() as u64;

            if total > 0 && last_report.map_or(true, |at| at.elapsed() >= REPORT_INTERVAL) {
                last_report = Some(Instant::now());
                let percentage = DownloadProgress::percentage(transferred, total);

                // 100 is implied by the stream ending, never announced
                if percentage != 100 {
                    self.report_progress(DownloadProgress {
                        file_name: descriptor.file_name(),
                        transferred,
                        total,
                        percentage,
                    });
                }
            }
        }

        file.flush().await?;

        Ok(())
    }

    fn report_progress(&self, progress: DownloadProgress) {
        match &self.progress_callback {
            Some(callback) => callback(progress),
            None => tracing::info!("{}: {}%", progress.file_name, progress.percentage),
        }
    }
}
