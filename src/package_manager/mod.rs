//! npm-compatible package manager detection and invocation.
//!
//! The manager is picked from the project's lockfile (`pnpm-lock.yaml`,
//! `yarn.lock`, `bun.lockb`/`bun.lock`, otherwise npm) unless the global config
//! forces one. Installs run the manager binary in the project root; if a
//! non-npm manager fails, the install is retried once with npm.

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use tokio::process::Command;

use crate::core::HextaError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    #[must_use]
    pub const fn binary(self) -> &'static str {
        match self {
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
            Self::Bun => "bun",
        }
    }

    /// Detect the manager from lockfiles in `project_root`.
    #[must_use]
    pub fn detect(project_root: &Path) -> Self {
        let has = |file: &str| project_root.join(file).exists();
        if has("pnpm-lock.yaml") {
            Self::Pnpm
        } else if has("yarn.lock") {
            Self::Yarn
        } else if has("bun.lockb") || has("bun.lock") {
            Self::Bun
        } else {
            Self::Npm
        }
    }

    /// Arguments (after the binary) that add `packages` to the project.
    #[must_use]
    pub fn install_args(self, packages: &[String], dev: bool) -> Vec<String> {
        let mut args = vec![match self {
            Self::Npm => "install".to_string(),
            Self::Pnpm | Self::Yarn | Self::Bun => "add".to_string(),
        }];
        if dev {
            args.push(match self {
                Self::Bun => "-d".to_string(),
                Self::Npm | Self::Pnpm | Self::Yarn => "-D".to_string(),
            });
        }
        args.extend(packages.iter().cloned());
        args
    }

    /// The full command line, for telling users what to run by hand.
    #[must_use]
    pub fn manual_install_hint(self, packages: &[String], dev: bool) -> String {
        let mut parts = vec![self.binary().to_string()];
        parts.extend(self.install_args(packages, dev));
        parts.join(" ")
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.binary())
    }
}

/// Install `packages` in `project_root` with `manager`, falling back to npm.
///
/// Returns the manager that succeeded.
pub async fn install_packages(
    project_root: &Path,
    manager: PackageManager,
    packages: &[String],
    dev: bool,
) -> Result<PackageManager> {
    if packages.is_empty() {
        return Ok(manager);
    }

    match run_install(project_root, manager, packages, dev).await {
        Ok(()) => Ok(manager),
        Err(e) if manager != PackageManager::Npm => {
            tracing::warn!("{manager} failed, retrying with npm: {e}");
            run_install(project_root, PackageManager::Npm, packages, dev).await?;
            Ok(PackageManager::Npm)
        }
        Err(e) => Err(e),
    }
}

async fn run_install(
    project_root: &Path,
    manager: PackageManager,
    packages: &[String],
    dev: bool,
) -> Result<()> {
    let binary = which::which(manager.binary()).map_err(|e| HextaError::PackageManagerFailed {
        manager: manager.to_string(),
        reason: format!("{} not found on PATH: {e}", manager.binary()),
    })?;

    let args = manager.install_args(packages, dev);
    tracing::info!("Running {} {}", manager.binary(), args.join(" "));

    let output = Command::new(binary)
        .args(&args)
        .current_dir(project_root)
        .output()
        .await
        .map_err(|e| HextaError::PackageManagerFailed {
            manager: manager.to_string(),
            reason: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(HextaError::PackageManagerFailed {
            manager: manager.to_string(),
            reason: format!("{}: {}", output.status, stderr.trim()),
        }
        .into());
    }

    Ok(())
}
