//! Registry integrity checks.
//!
//! Cycles are deliberately absent from this list: a requirement cycle is
//! tolerated by the resolver and only reported as a warning by
//! `hextaui validate` (see [`crate::resolver::graph`]).

use regex::Regex;
use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

use super::Registry;
use crate::utils::fs::validate_relative_path;

/// npm package name, optionally scoped (`@scope/name`).
const NPM_PACKAGE_PATTERN: &str = r"^(@[a-z0-9~-][a-z0-9._~-]*/)?[a-z0-9~-][a-z0-9._~-]*$";

fn is_npm_package_name(name: &str) -> bool {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(NPM_PACKAGE_PATTERN).ok())
        .as_ref()
        .is_some_and(|re| re.is_match(name))
}

/// A single problem found in a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryIssue {
    EmptyName {
        index: usize,
    },
    DuplicateName {
        name: String,
    },
    NoFiles {
        component: String,
    },
    UnknownRequirement {
        component: String,
        requirement: String,
    },
    InvalidPackageName {
        component: String,
        package: String,
    },
    UnsafePath {
        component: String,
        path: String,
    },
}

impl fmt::Display for RegistryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName {
                index,
            } => write!(f, "component #{index} has an empty name"),
            Self::DuplicateName {
                name,
            } => write!(f, "component '{name}' is defined more than once"),
            Self::NoFiles {
                component,
            } => write!(f, "component '{component}' has no files"),
            Self::UnknownRequirement {
                component,
                requirement,
            } => write!(f, "component '{component}' requires unknown component '{requirement}'"),
            Self::InvalidPackageName {
                component,
                package,
            } => write!(f, "component '{component}' depends on invalid package name '{package}'"),
            Self::UnsafePath {
                component,
                path,
            } => write!(f, "component '{component}' writes outside the components directory: '{path}'"),
        }
    }
}

pub(super) fn check(registry: &Registry) -> Vec<RegistryIssue> {
    let mut issues = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (index, component) in registry.components.iter().enumerate() {
        if component.name.trim().is_empty() {
            issues.push(RegistryIssue::EmptyName {
                index,
            });
            continue;
        }

        if !seen.insert(component.name.to_lowercase()) {
            issues.push(RegistryIssue::DuplicateName {
                name: component.name.clone(),
            });
        }

        if component.files.is_empty() {
            issues.push(RegistryIssue::NoFiles {
                component: component.name.clone(),
            });
        }

        for file in &component.files {
            if validate_relative_path(&file.path).is_err() {
                issues.push(RegistryIssue::UnsafePath {
                    component: component.name.clone(),
                    path: file.path.clone(),
                });
            }
        }

        for requirement in &component.requires {
            if registry.get(requirement).is_none() {
                issues.push(RegistryIssue::UnknownRequirement {
                    component: component.name.clone(),
                    requirement: requirement.clone(),
                });
            }
        }

        for package in &component.dependencies {
            if !is_npm_package_name(package) {
                issues.push(RegistryIssue::InvalidPackageName {
                    component: component.name.clone(),
                    package: package.clone(),
                });
            }
        }
    }

    issues
}
