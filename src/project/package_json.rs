//! Reading installed packages from the project's `package.json`.

use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

/// Which of a set of required packages are already declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageStatus {
    pub missing: Vec<String>,
    pub existing: Vec<String>,
}

impl PackageStatus {
    #[must_use]
    pub fn all_installed(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Names in `dependencies` and `devDependencies` of `<root>/package.json`.
///
/// A missing or unreadable `package.json` counts as "nothing installed", so
/// every required package is then reported missing.
#[must_use]
pub fn installed_packages(project_root: &Path) -> HashSet<String> {
    let path = project_root.join("package.json");
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) => {
            tracing::debug!("Could not read {}: {e}", path.display());
            return HashSet::new();
        }
    };

    match serde_json::from_str::<PackageJson>(&content) {
        Ok(package) => package.dependencies.into_keys().chain(package.dev_dependencies.into_keys()).collect(),
        Err(e) => {
            tracing::warn!("Ignoring malformed {}: {e}", path.display());
            HashSet::new()
        }
    }
}

/// Split `required` into missing and existing packages, keeping input order.
#[must_use]
pub fn partition_packages(required: &[String], installed: &HashSet<String>) -> PackageStatus {
    let (existing, missing) = required.iter().cloned().partition(|p| installed.contains(p));
    PackageStatus {
        missing,
        existing,
    }
}

/// [`partition_packages`] against the project's `package.json`.
#[must_use]
pub fn check_missing_packages(required: &[String], project_root: &Path) -> PackageStatus {
    partition_packages(required, &installed_packages(project_root))
}
