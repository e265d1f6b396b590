//! Pending-download queue.
//!
//! A strict FIFO of download descriptors, safe for insertion from multiple
//! producers while a single consumer drains it. Unbounded, no priorities,
//! no deduplication: a descriptor offered twice is downloaded twice.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// One file needing transfer: where it lives locally and where to fetch it.
///
/// Immutable once created; consumed and discarded by the download worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadDescriptor {
    local_path: PathBuf,
    remote_url: String,
}

impl DownloadDescriptor {
    pub fn new(local_path: impl Into<PathBuf>, remote_url: impl Into<String>) -> Self {
        Self {
            local_path: local_path.into(),
            remote_url: remote_url.into(),
        }
    }

    pub fn local_path(&self) -> &Path {
        &self.local_path
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    /// Final path component, for status lines
    pub fn file_name(&self) -> String {
        self.local_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.local_path.display().to_string())
    }
}

/// Concurrency-safe FIFO of pending downloads
#[derive(Debug, Default)]
pub struct DownloadQueue {
    inner: Mutex<VecDeque<DownloadDescriptor>>,
}

impl DownloadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a descriptor. Non-blocking, callable from any thread.
    pub fn offer(&self, descriptor: DownloadDescriptor) {
        self.inner.lock().push_back(descriptor);
    }

    /// Remove and return the head, or `None` when empty. Non-blocking.
    pub fn poll(&self) -> Option<DownloadDescriptor> {
        self.inner.lock().pop_front()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}
