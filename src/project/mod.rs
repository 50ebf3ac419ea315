//! The consuming project: its root, framework, and initialization state.
//!
//! - [`find_project_root`] locates the nearest `package.json`
//! - [`Framework`] decides where components and utilities go
//! - [`ProjectMarker`] records that `hextaui init` ran
//! - [`package_json`] reports which npm packages are already declared

mod framework;
mod marker;
pub mod package_json;

pub use framework::{Framework, FrameworkConfig};
pub use marker::ProjectMarker;
pub use package_json::{PackageStatus, check_missing_packages};

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::core::HextaError;

/// Walk up from `start` to the nearest directory containing `package.json`.
pub fn find_project_root(start: &Path) -> Result<PathBuf, HextaError> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if dir.join("package.json").is_file() {
            tracing::debug!("Found project root at {}", dir.display());
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }
    Err(HextaError::ProjectNotFound)
}

/// An initialized (or about to be initialized) project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub root: PathBuf,
    pub framework: Framework,
}

impl Project {
    #[must_use]
    pub const fn new(root: PathBuf, framework: Framework) -> Self {
        Self {
            root,
            framework,
        }
    }

    /// Open an initialized project, reading the framework from its marker.
    ///
    /// Fails with [`HextaError::NotInitialized`] unless both the marker and
    /// the scaffolded files are present.
    pub fn open(root: PathBuf) -> Result<Self> {
        let Some(marker) = ProjectMarker::load(&root)? else {
            return Err(HextaError::NotInitialized {
                path: root.display().to_string(),
            }
            .into());
        };

        let project = Self::new(root, marker.framework);
        if !project.is_scaffolded() {
            return Err(HextaError::NotInitialized {
                path: project.root.display().to_string(),
            }
            .into());
        }
        Ok(project)
    }

    #[must_use]
    pub fn components_dir(&self) -> PathBuf {
        self.root.join(self.framework.config().components_path)
    }

    #[must_use]
    pub fn utils_dir(&self) -> PathBuf {
        self.root.join(self.framework.config().utils_path)
    }

    /// Whether the components directory and both utility files exist.
    #[must_use]
    pub fn is_scaffolded(&self) -> bool {
        let utils = self.utils_dir();
        self.components_dir().is_dir()
            && utils.join("utils.ts").is_file()
            && utils.join("color-utils.ts").is_file()
    }
}
