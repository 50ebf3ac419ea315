//! Fetching component sources.
//!
//! [`Fetcher`] is the seam between the installer and the outside world. The
//! production implementation, [`HttpFetcher`], speaks HTTP(S) through
//! `reqwest` and also accepts `file://` URLs so a registry can point at a local
//! checkout.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::USER_AGENT;
use crate::core::HextaError;

/// One entry of a folder listing.
///
/// HTTP folders are read from GitHub's contents API, whose entries look like
/// `{ "name": "...", "type": "file", "download_url": "..." }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FolderEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl FolderEntry {
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.kind == "file"
    }
}

/// Source of component file contents.
pub trait Fetcher: Sync {
    /// Download a text file.
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send;

    /// List the entries of a folder.
    fn list_folder(&self, url: &str) -> impl Future<Output = Result<Vec<FolderEntry>>> + Send;
}

/// Fetches over HTTP(S), or from disk for `file://` URLs.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
        })
    }
}

fn download_failed(url: &str, reason: impl ToString) -> HextaError {
    HextaError::DownloadFailed {
        url: url.to_string(),
        reason: reason.to_string(),
    }
}

fn local_path(url: &str) -> Option<PathBuf> {
    url.strip_prefix("file://").map(PathBuf::from)
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> impl Future<Output = Result<String>> + Send {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            if let Some(path) = local_path(&url) {
                return tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|e| download_failed(&url, e).into());
            }

            tracing::debug!("GET {url}");
            let response = client.get(&url).send().await.map_err(|e| download_failed(&url, e))?;
            let status = response.status();
            if !status.is_success() {
                return Err(download_failed(&url, status).into());
            }
            Ok(response.text().await.map_err(|e| download_failed(&url, e))?)
        }
    }

    fn list_folder(&self, url: &str) -> impl Future<Output = Result<Vec<FolderEntry>>> + Send {
        let client = self.client.clone();
        let url = url.to_string();
        async move {
            if let Some(path) = local_path(&url) {
                return list_local_folder(&url, path).await;
            }

            tracing::debug!("GET {url} (folder listing)");
            let response = client.get(&url).send().await.map_err(|e| download_failed(&url, e))?;
            let status = response.status();
            if !status.is_success() {
                return Err(download_failed(&url, status).into());
            }
            Ok(response.json().await.map_err(|e| download_failed(&url, e))?)
        }
    }
}

async fn list_local_folder(url: &str, path: PathBuf) -> Result<Vec<FolderEntry>> {
    let mut reader = tokio::fs::read_dir(&path).await.map_err(|e| download_failed(url, e))?;
    let base = url.trim_end_matches('/');

    let mut entries = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(|e| download_failed(url, e))? {
        let name = entry.file_name().to_string_lossy().into_owned();
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        entries.push(FolderEntry {
            download_url: is_file.then(|| format!("{base}/{name}")),
            kind: if is_file { "file" } else { "dir" }.to_string(),
            name,
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
