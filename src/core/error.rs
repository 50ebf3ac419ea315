//! Error handling for HextaUI
//!
//! This module provides the typed error enum used across the crate and the
//! user-facing error reporting used by the CLI. The error system follows two rules:
//! 1. **Strongly-typed errors** for precise error handling in library code
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`HextaError`] - Enumerated error types for every failure case
//! - [`ErrorContext`] - Wrapper that adds a suggestion and details for display
//!
//! Library functions return `Result<T, HextaError>` where the failure mode matters
//! to callers (the resolver, registry loading), and `anyhow::Result` with
//! `.context(...)` everywhere else. [`user_friendly_error`] turns either into an
//! [`ErrorContext`] at the binary boundary.
//!
//! # Examples
//!
//! ```rust,no_run
//! use hextaui_cli::core::{HextaError, ErrorContext, user_friendly_error};
//!
//! let error = HextaError::ComponentNotFound { name: "Foo".to_string() };
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for HextaUI operations.
///
/// Each variant carries the data needed to produce an actionable message:
/// component names, file paths, URLs, or the underlying reason.
///
/// # Error Categories
///
/// ## Components and registry
/// - [`ComponentNotFound`] - A name reached during resolution is not in the registry
/// - [`UnknownComponents`] - User-typed names that failed validation
/// - [`RegistryParseError`] / [`RegistryValidationError`] - Broken registry data
///
/// ## Project
/// - [`ProjectNotFound`], [`NotInitialized`], [`AlreadyInitialized`]
///
/// ## Collaborators
/// - [`DownloadFailed`], [`PackageManagerFailed`], [`ConfigError`], [`InvalidPath`]
///
/// [`ComponentNotFound`]: HextaError::ComponentNotFound
/// [`UnknownComponents`]: HextaError::UnknownComponents
/// [`RegistryParseError`]: HextaError::RegistryParseError
/// [`RegistryValidationError`]: HextaError::RegistryValidationError
/// [`ProjectNotFound`]: HextaError::ProjectNotFound
/// [`NotInitialized`]: HextaError::NotInitialized
/// [`AlreadyInitialized`]: HextaError::AlreadyInitialized
/// [`DownloadFailed`]: HextaError::DownloadFailed
/// [`PackageManagerFailed`]: HextaError::PackageManagerFailed
/// [`ConfigError`]: HextaError::ConfigError
/// [`InvalidPath`]: HextaError::InvalidPath
#[derive(Error, Debug)]
pub enum HextaError {
    /// A component name has no matching registry entry.
    ///
    /// Raised by the resolver for both requested and transitively required
    /// names. An unknown *transitive* name is a registry authoring defect.
    #[error("Component \"{name}\" not found")]
    ComponentNotFound {
        /// The exact name that failed to resolve
        name: String,
    },

    /// One or more user-supplied names did not match any component.
    #[error("Unknown component(s): {}", names.join(", "))]
    UnknownComponents {
        /// Names as typed by the user
        names: Vec<String>,
        /// Close matches from the registry, across all unknown names
        suggestions: Vec<String>,
    },

    /// No `package.json` was found in the start directory or any parent.
    #[error("Could not find a project (package.json) in the current directory or any parent directory")]
    ProjectNotFound,

    /// `add` was run in a project that has not been initialized.
    #[error("HextaUI is not initialized in {path}")]
    NotInitialized {
        /// Project root that was checked
        path: String,
    },

    /// `init` was run in a project that already has a marker file.
    #[error("HextaUI is already initialized in {path}")]
    AlreadyInitialized {
        /// Project root that was checked
        path: String,
    },

    #[error("Invalid registry syntax in {file}")]
    RegistryParseError {
        /// Registry file (or `<builtin>`)
        file: String,
        /// Parser message
        reason: String,
    },

    #[error("Registry validation failed: {reason}")]
    RegistryValidationError {
        /// Every problem found, joined with newlines
        reason: String,
    },

    #[error("Failed to download {url}")]
    DownloadFailed {
        /// URL that failed
        url: String,
        /// HTTP status or transport error
        reason: String,
    },

    #[error("{manager} failed to install packages")]
    PackageManagerFailed {
        /// Package manager binary name
        manager: String,
        /// Exit status and stderr
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        /// What is wrong with the configuration
        message: String,
    },

    #[error("Invalid path '{path}': {reason}")]
    InvalidPath {
        /// Offending path as written in the registry
        path: String,
        /// Why it was rejected
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{message}")]
    Other {
        /// Free-form message
        message: String,
    },
}

impl Clone for HextaError {
    fn clone(&self) -> Self {
        match self {
            Self::ComponentNotFound {
                name,
            } => Self::ComponentNotFound {
                name: name.clone(),
            },
            Self::UnknownComponents {
                names,
                suggestions,
            } => Self::UnknownComponents {
                names: names.clone(),
                suggestions: suggestions.clone(),
            },
            Self::ProjectNotFound => Self::ProjectNotFound,
            Self::NotInitialized {
                path,
            } => Self::NotInitialized {
                path: path.clone(),
            },
            Self::AlreadyInitialized {
                path,
            } => Self::AlreadyInitialized {
                path: path.clone(),
            },
            Self::RegistryParseError {
                file,
                reason,
            } => Self::RegistryParseError {
                file: file.clone(),
                reason: reason.clone(),
            },
            Self::RegistryValidationError {
                reason,
            } => Self::RegistryValidationError {
                reason: reason.clone(),
            },
            Self::DownloadFailed {
                url,
                reason,
            } => Self::DownloadFailed {
                url: url.clone(),
                reason: reason.clone(),
            },
            Self::PackageManagerFailed {
                manager,
                reason,
            } => Self::PackageManagerFailed {
                manager: manager.clone(),
                reason: reason.clone(),
            },
            Self::ConfigError {
                message,
            } => Self::ConfigError {
                message: message.clone(),
            },
            Self::InvalidPath {
                path,
                reason,
            } => Self::InvalidPath {
                path: path.clone(),
                reason: reason.clone(),
            },
            // For errors that don't implement Clone, convert to Other
            Self::IoError(e) => Self::Other {
                message: format!("IO error: {e}"),
            },
            Self::TomlError(e) => Self::Other {
                message: format!("TOML parsing error: {e}"),
            },
            Self::JsonError(e) => Self::Other {
                message: format!("JSON error: {e}"),
            },
            Self::Other {
                message,
            } => Self::Other {
                message: message.clone(),
            },
        }
    }
}

/// An error paired with optional details and a suggested fix.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: HextaError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(error: HextaError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Print the error to stderr with colors.
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into an [`ErrorContext`] with a suggestion where one is known.
///
/// [`HextaError`] values anywhere in the `anyhow` chain are recognised first,
/// then common IO and parse errors. Anything else is reported with its full
/// cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(hexta_error) = error.chain().find_map(|cause| cause.downcast_ref::<HextaError>()) {
        return create_error_context(hexta_error.clone());
    }

    if let Some(io_error) = error.downcast_ref::<std::io::Error>() {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(HextaError::Other {
                    message: format!("Permission denied: {io_error}"),
                })
                .with_suggestion("Check file ownership and permissions in the project directory");
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(HextaError::Other {
                    message: format!("File not found: {io_error}"),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct");
            }
            _ => {}
        }
    }

    if let Some(toml_error) = error.downcast_ref::<toml::de::Error>() {
        return ErrorContext::new(HextaError::ConfigError {
            message: toml_error.to_string(),
        })
        .with_suggestion("Check the TOML syntax of your config.toml. Verify quotes and brackets");
    }

    // Generic error - include the full error chain for better diagnostics
    let mut message = error.to_string();
    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    ErrorContext::new(HextaError::Other {
        message,
    })
}

fn create_error_context(error: HextaError) -> ErrorContext {
    match &error {
        HextaError::ComponentNotFound {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'hextaui list' to see the available components")
            .with_details(
                "A component requires another component that is missing from the registry. \
                 If you use a custom registry, run 'hextaui validate'",
            ),
        HextaError::UnknownComponents {
            suggestions,
            ..
        } => {
            let suggestion = if suggestions.is_empty() {
                "Run 'hextaui list' to see the available components".to_string()
            } else {
                format!("Did you mean: {}?", suggestions.join(", "))
            };
            ErrorContext::new(error).with_suggestion(suggestion)
        }
        HextaError::ProjectNotFound => ErrorContext::new(error)
            .with_suggestion("Run this command inside a Next.js, Vite or Astro project")
            .with_details("HextaUI looks for package.json in the current and parent directories"),
        HextaError::NotInitialized {
            ..
        } => ErrorContext::new(error)
            .with_suggestion(
                "Run 'hextaui init --framework <nextjs|vite|astro>' first, or pass --init <FRAMEWORK> to 'hextaui add'",
            ),
        HextaError::AlreadyInitialized {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Use 'hextaui init --force' to re-run initialization"),
        HextaError::RegistryParseError {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check the registry file referenced by your config.toml")
                .with_details(details)
        }
        HextaError::RegistryValidationError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Run 'hextaui validate' to list every registry problem"),
        HextaError::DownloadFailed {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Check your network connection and the registry base_url")
                .with_details(details)
        }
        HextaError::PackageManagerFailed {
            reason,
            ..
        } => {
            let details = reason.clone();
            ErrorContext::new(error)
                .with_suggestion("Install the packages manually, or re-run with --skip-deps")
                .with_details(details)
        }
        HextaError::ConfigError {
            ..
        } => ErrorContext::new(error)
            .with_suggestion("Check ~/.hextaui/config.toml or the file passed with --config"),
        _ => ErrorContext::new(error),
    }
}
