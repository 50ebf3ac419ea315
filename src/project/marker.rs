//! The `.hextaui` marker file written by `hextaui init`.
//!
//! ```json
//! {
//!   "initialized": true,
//!   "version": "1.0.0",
//!   "timestamp": "2025-01-01T12:00:00Z",
//!   "framework": "nextjs"
//! }
//! ```

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Framework;
use crate::constants::{MARKER_FILE_NAME, MARKER_VERSION};
use crate::utils::fs::atomic_write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMarker {
    pub initialized: bool,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Older markers have no framework; they were always Next.js projects.
    #[serde(default)]
    pub framework: Framework,
}

impl ProjectMarker {
    #[must_use]
    pub fn new(framework: Framework) -> Self {
        Self {
            initialized: true,
            version: MARKER_VERSION.to_string(),
            timestamp: Utc::now(),
            framework,
        }
    }

    #[must_use]
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(MARKER_FILE_NAME)
    }

    /// Read the marker, or `None` if the project has none.
    pub fn load(project_root: &Path) -> Result<Option<Self>> {
        let path = Self::path(project_root);
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let marker = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(Some(marker))
    }

    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let content = serde_json::to_string_pretty(self).context("Failed to serialize project marker")?;
        atomic_write(&path, content.as_bytes())
    }
}
