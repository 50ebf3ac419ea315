//! Global (per-user) configuration.
//!
//! Stored at `~/.hextaui/config.toml` (`%LOCALAPPDATA%\hextaui\config.toml` on
//! Windows). A different file can be chosen with `--config` or the
//! `HEXTAUI_CONFIG` environment variable. A missing file means defaults.
//!
//! ```toml
//! # Use a private registry instead of the built-in one
//! registry = "~/work/ui-registry/components.toml"
//! # Override the base for relative file URLs
//! base_url = "https://raw.githubusercontent.com/acme/ui/main/src/components/ui/"
//! # Always use this package manager instead of detecting it
//! package_manager = "pnpm"
//! max_parallel_downloads = 8
//! request_timeout_secs = 60
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;

use crate::constants::{CONFIG_ENV, DEFAULT_MAX_PARALLEL_DOWNLOADS, DEFAULT_REQUEST_TIMEOUT};
use crate::core::HextaError;
use crate::package_manager::PackageManager;
use crate::registry::Registry;

const fn default_max_parallel_downloads() -> usize {
    DEFAULT_MAX_PARALLEL_DOWNLOADS
}

const fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Path to a registry TOML file replacing the built-in registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,

    /// Base URL for relative file URLs, overriding the registry's own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Package manager to use instead of lockfile detection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<PackageManager>,

    #[serde(default = "default_max_parallel_downloads")]
    pub max_parallel_downloads: usize,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            registry: None,
            base_url: None,
            package_manager: None,
            max_parallel_downloads: default_max_parallel_downloads(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl GlobalConfig {
    /// Load from `path`, else `HEXTAUI_CONFIG`, else the default location.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => match std::env::var(CONFIG_ENV) {
                Ok(env_path) => expand_path(&env_path),
                Err(_) => Self::default_path()?,
            },
        };

        if path.exists() {
            Self::load_from(&path).await
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read global config from {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse global config from {}", path.display()))?;
        config.check()?;
        Ok(config)
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize global config")?;
        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write global config to {}", path.display()))
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("hextaui")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".hextaui")
        };

        Ok(config_dir.join("config.toml"))
    }

    fn check(&self) -> Result<(), HextaError> {
        if self.max_parallel_downloads == 0 {
            return Err(HextaError::ConfigError {
                message: "max_parallel_downloads must be at least 1".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(HextaError::ConfigError {
                message: "request_timeout_secs must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// The package manager to use in `project_root`.
    #[must_use]
    pub fn package_manager_for(&self, project_root: &Path) -> PackageManager {
        self.package_manager.unwrap_or_else(|| PackageManager::detect(project_root))
    }

    /// Load the configured registry (or the built-in one) and apply `base_url`.
    pub fn load_registry(&self) -> Result<Registry> {
        let mut registry = match &self.registry {
            Some(path) => Registry::load(&expand_path(path))?,
            None => Registry::builtin()?,
        };
        if let Some(base_url) = &self.base_url {
            registry.base_url = Some(base_url.clone());
        }
        Ok(registry)
    }
}

/// Expand `~` and environment variables in a user-supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(path).as_ref()),
    }
}
