//! File system helpers.
//!
//! Writes performed on a user's project go through [`atomic_write`] so an
//! interrupted download never leaves a half-written component file behind.
//! Destination paths taken from the registry are checked with
//! [`validate_relative_path`] before they are joined to a project directory.

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use crate::core::HextaError;

/// Create a directory and all of its parents if it does not exist yet.
///
/// # Examples
///
/// ```rust,no_run
/// use hextaui_cli::utils::fs::ensure_dir;
/// use std::path::Path;
///
/// # fn example() -> anyhow::Result<()> {
/// ensure_dir(Path::new("src/components/ui"))?;
/// # Ok(())
/// # }
/// ```
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        if !path.is_dir() {
            return Err(anyhow::anyhow!(
                "Path exists but is not a directory: {}",
                path.display()
            ));
        }
        return Ok(());
    }

    fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory: {}", path.display()))
}

/// Write `content` to `path` atomically.
///
/// The content goes to a temporary file in the destination directory, is
/// synced, and then renamed over the destination. Parent directories are
/// created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<()> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir(parent)?;

    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("Failed to create temp file in: {}", parent.display()))?;

    temp.write_all(content)
        .with_context(|| format!("Failed to write to temp file for: {}", path.display()))?;
    temp.as_file().sync_all().with_context(|| "Failed to sync file to disk")?;

    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("Failed to rename temp file to: {}", path.display()))?;

    Ok(())
}

/// Check that a registry-supplied path is relative and stays inside its base.
///
/// Rejects empty paths, absolute paths, and any `..` or root component.
pub fn validate_relative_path(path: &str) -> Result<PathBuf, HextaError> {
    let invalid = |reason: &str| HextaError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.trim().is_empty() {
        return Err(invalid("path is empty"));
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() || path.starts_with('/') || path.starts_with('\\') {
        return Err(invalid("absolute paths are not allowed"));
    }

    let mut normalized = PathBuf::new();
    for component in candidate.components() {
        match component {
            Component::Normal(part) => normalized.push(part),
            Component::CurDir => {}
            Component::ParentDir => return Err(invalid("parent directory references are not allowed")),
            Component::RootDir | Component::Prefix(_) => {
                return Err(invalid("absolute paths are not allowed"));
            }
        }
    }

    if normalized.as_os_str().is_empty() {
        return Err(invalid("path is empty"));
    }
    Ok(normalized)
}

/// Join a registry-supplied relative path onto `base` after validating it.
pub fn safe_join(base: &Path, relative: &str) -> Result<PathBuf, HextaError> {
    Ok(base.join(validate_relative_path(relative)?))
}

/// Render `path` relative to `root` for display, falling back to the full path.
#[must_use]
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
