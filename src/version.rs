//! Release metadata check.
//!
//! Queries the two release-listing endpoints (versions and changelog, both
//! ordered oldest-to-newest JSON arrays) and compares the newest published
//! version against the running one. Every failure mode -- network error,
//! malformed JSON, empty listing, non-numeric version -- collapses to
//! "no update available"; the host cannot tell a failed check apart from
//! being up to date, and that is intentional.

use crate::config::UpdaterConfig;
use crate::error::{Result, UpdateError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A newer published release, ready for the host to log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateNotice {
    /// Version number of the newest release
    pub version: f64,
    /// Human-readable description of what changed
    pub description: String,
}

/// One entry of the version listing
#[derive(Debug, Clone, Deserialize)]
struct VersionEntry {
    name: String,
}

/// One entry of the changelog listing
#[derive(Debug, Clone, Deserialize)]
struct ChangelogEntry {
    title: String,
}

/// Checks the release metadata API for a newer version
pub struct VersionChecker {
    config: Arc<UpdaterConfig>,
    client: reqwest::Client,
}

impl VersionChecker {
    pub fn new(config: Arc<UpdaterConfig>, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Latest published release, if strictly newer than the running one.
    ///
    /// Returns `None` when up to date and on any check failure.
    pub async fn get_latest_update(&self) -> Option<UpdateNotice> {
        match self.try_get_latest_update().await {
            Ok(notice) => notice,
            Err(e) => {
                tracing::debug!("Release check failed: {}", e);
                None
            }
        }
    }

    async fn try_get_latest_update(&self) -> Result<Option<UpdateNotice>> {
        let versions: Vec<VersionEntry> =
            self.fetch_entries(&self.config.notifier.versions_url).await?;
        let newest = match versions.last() {
            Some(entry) => entry,
            None => return Ok(None),
        };

        let latest = parse_version(&newest.name)?;
        let running = parse_version(&self.config.notifier.running_version)?;
        if latest <= running {
            return Ok(None);
        }

        // Only worth a second request once we know there is something new.
        let changelog: Vec<ChangelogEntry> =
            self.fetch_entries(&self.config.notifier.updates_url).await?;
        let description = match changelog.last() {
            Some(entry) => entry.title.clone(),
            None => return Ok(None),
        };

        Ok(Some(UpdateNotice {
            version: latest,
            description,
        }))
    }

    async fn fetch_entries<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(UpdateError::InvalidResponse {
                reason: format!("HTTP {} from {}", response.status(), url),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn parse_version(value: &str) -> Result<f64> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| UpdateError::InvalidVersion(value.to_string()))
}
