//! Component registry
//!
//! The registry is the static catalog of every installable component. It is
//! parsed once at startup, either from the copy embedded in the binary
//! (`registry/components.toml`) or from a file named in the global config, and
//! is then passed by reference to everything that needs it. Nothing mutates it
//! after loading.
//!
//! # Registry format
//!
//! ```toml
//! base_url = "https://raw.githubusercontent.com/org/repo/main/src/components/ui/"
//!
//! [[components]]
//! name = "Modal"
//! description = "Dialog overlay"
//! dependencies = ["@radix-ui/react-dialog"]
//! requires = ["Button"]
//!
//! [[components.files]]
//! path = "modal.tsx"
//! url = "modal.tsx"          # relative to base_url
//! ```
//!
//! # Name matching
//!
//! Two lookups exist on purpose:
//! - [`Registry::get`] matches the exact registry name. The resolver uses it.
//! - [`Registry::find`] ignores case. The CLI uses it through
//!   [`Registry::validate_names`] to turn user input into exact names before
//!   anything is resolved.

mod suggest;
mod validation;


pub use validation::RegistryIssue;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::HextaError;

/// The registry shipped inside the binary.
const BUILTIN_REGISTRY: &str = include_str!("../../registry/components.toml");

/// How a file entry is materialized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    /// A single file downloaded from `url`.
    #[default]
    File,
    /// A directory listing (GitHub contents API JSON); every file entry is downloaded.
    Folder,
}

/// One artifact of a component's file manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentFile {
    /// Destination relative to the project's components directory.
    pub path: String,
    /// Absolute URL, or a URL relative to the registry's `base_url`.
    pub url: String,
    #[serde(default, skip_serializing_if = "is_file_kind")]
    pub kind: FileKind,
}

fn is_file_kind(kind: &FileKind) -> bool {
    *kind == FileKind::File
}

impl ComponentFile {
    /// Resolve this file's URL against the registry base URL.
    ///
    /// URLs with a scheme (`https://`, `file://`, ...) are returned unchanged.
    #[must_use]
    pub fn resolve_url(&self, base_url: Option<&str>) -> String {
        if self.url.contains("://") {
            return self.url.clone();
        }
        match base_url {
            Some(base) if base.ends_with('/') => format!("{base}{}", self.url),
            Some(base) => format!("{base}/{}", self.url),
            None => self.url.clone(),
        }
    }
}

/// An immutable registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Unique, case-sensitive display name.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub files: Vec<ComponentFile>,
    /// npm packages needed at runtime. Opaque to the resolver.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
    /// Other components that must be installed alongside this one, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub requires: Vec<String>,
}

impl Component {
    /// Create a component with no files, dependencies or requirements.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            files: Vec::new(),
            dependencies: Vec::new(),
            requires: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_requires<I, S>(mut self, requires: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires = requires.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_file(mut self, path: impl Into<String>, url: impl Into<String>) -> Self {
        self.files.push(ComponentFile {
            path: path.into(),
            url: url.into(),
            kind: FileKind::File,
        });
        self
    }
}

/// Result of mapping user-typed names onto registry names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameValidation {
    /// Registry-exact names, in input order, without duplicates.
    pub valid: Vec<String>,
    /// Input names with no case-insensitive match, in input order.
    pub invalid: Vec<String>,
}

/// The complete catalog of known components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registry {
    /// Base for relative file URLs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Registry {
    /// Build a registry from components, without a base URL.
    #[must_use]
    pub const fn new(components: Vec<Component>) -> Self {
        Self {
            base_url: None,
            components,
        }
    }

    /// Parse the registry embedded in the binary.
    pub fn builtin() -> Result<Self, HextaError> {
        Self::from_toml_str(BUILTIN_REGISTRY, "<builtin>")
    }

    /// Parse a registry from TOML text. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, HextaError> {
        toml::from_str(content).map_err(|e| HextaError::RegistryParseError {
            file: origin.to_string(),
            reason: e.to_string(),
        })
    }

    /// Read and parse a registry file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry from {}", path.display()))?;
        let registry = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::debug!(
            "Loaded registry with {} components from {}",
            registry.components.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Look up a component by exact name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Look up a component ignoring ASCII case.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.name.eq_ignore_ascii_case(name))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.iter().map(|c| c.name.as_str())
    }

    /// Map user input onto registry-exact names.
    ///
    /// Matching is case-insensitive. Names that match the same component more
    /// than once are kept at their first position only.
    #[must_use]
    pub fn validate_names<S: AsRef<str>>(&self, names: &[S]) -> NameValidation {
        let mut result = NameValidation::default();
        for name in names {
            let name = name.as_ref();
            match self.find(name) {
                Some(component) => {
                    if !result.valid.contains(&component.name) {
                        result.valid.push(component.name.clone());
                    }
                }
                None => result.invalid.push(name.to_string()),
            }
        }
        result
    }

    /// Validate user input, failing with [`HextaError::UnknownComponents`] if
    /// any name is unknown. Suggestions for every unknown name are attached.
    pub fn require_names<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<String>, HextaError> {
        let validation = self.validate_names(names);
        if validation.invalid.is_empty() {
            return Ok(validation.valid);
        }

        let mut suggestions: Vec<String> = Vec::new();
        for name in &validation.invalid {
            for candidate in self.suggest(name) {
                if !suggestions.contains(&candidate) {
                    suggestions.push(candidate);
                }
            }
        }

        Err(HextaError::UnknownComponents {
            names: validation.invalid,
            suggestions,
        })
    }

    /// Every integrity problem in the registry. Empty means valid.
    #[must_use]
    pub fn check(&self) -> Vec<RegistryIssue> {
        validation::check(self)
    }

    /// Fail with [`HextaError::RegistryValidationError`] if [`check`](Self::check)
    /// reports any problem.
    pub fn validate(&self) -> Result<(), HextaError> {
        let issues = self.check();
        if issues.is_empty() {
            return Ok(());
        }
        Err(HextaError::RegistryValidationError {
            reason: issues.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"),
        })
    }
}
