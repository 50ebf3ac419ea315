//! Component requirement resolution
//!
//! Given the registry and a list of requested component names, [`resolve`]
//! computes the full installation set: every requested component plus
//! everything it transitively requires, each exactly once, ordered so that a
//! component always comes after the components it requires.
//!
//! # Algorithm
//!
//! A depth-first expansion with a visited set:
//! 1. A name that is already visited is skipped. This guards both against
//!    duplicates and against requirement cycles.
//! 2. A name is marked visited *before* its requirements are expanded.
//! 3. Requirements are expanded in declaration order.
//! 4. The component itself is appended after all of its requirements
//!    (post-order), which yields a dependency-first order.
//!
//! Requirement cycles are tolerated. The member that closes a cycle is skipped
//! at its re-entry point and still appears once in the result. The relative
//! order of cycle members is not part of the contract.
//!
//! # Name matching
//!
//! Names are matched exactly. User input must be mapped to registry names
//! first (see [`Registry::validate_names`](crate::registry::Registry::validate_names)).
//! An unknown name anywhere in the traversal aborts resolution with
//! [`HextaError::ComponentNotFound`].
//!
//! # Example
//!
//! ```rust
//! use hextaui_cli::registry::{Component, Registry};
//! use hextaui_cli::resolver::resolve;
//!
//! let registry = Registry::new(vec![
//!     Component::new("Tooltip", ""),
//!     Component::new("Avatar", "").with_requires(["Tooltip"]),
//! ]);
//!
//! let resolution = resolve(&registry, &["Avatar"]).unwrap();
//! assert_eq!(resolution.requested, vec!["Avatar"]);
//! assert_eq!(resolution.required, vec!["Tooltip"]);
//! assert_eq!(resolution.names(), vec!["Tooltip", "Avatar"]);
//! ```

pub mod graph;


use std::collections::{HashMap, HashSet};

use crate::core::HextaError;
use crate::registry::{Component, Registry};

/// The outcome of one resolution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// Requested names, in the caller's order, each once.
    pub requested: Vec<String>,
    /// Names pulled in only as requirements, in discovery order.
    pub required: Vec<String>,
    /// Every component to install, dependency-first.
    pub total: Vec<&'a Component>,
}

impl Resolution<'_> {
    /// Names of [`total`](Self::total) in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.total.iter().map(|c| c.name.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total.is_empty()
    }
}

/// Resolve `requested` against `registry`.
///
/// Fails with [`HextaError::ComponentNotFound`] if any requested or
/// transitively required name is missing. No partial result is returned.
pub fn resolve<'a, S: AsRef<str>>(
    registry: &'a Registry,
    requested: &[S],
) -> Result<Resolution<'a>, HextaError> {
    let mut expansion = Expansion {
        index: index_by_name(registry),
        visited: HashSet::new(),
        ordered: Vec::new(),
    };

    for name in requested {
        expansion.expand(name.as_ref())?;
    }

    let mut requested_names: Vec<String> = Vec::with_capacity(requested.len());
    for name in requested {
        let name = name.as_ref();
        if !requested_names.iter().any(|n| n == name) {
            requested_names.push(name.to_string());
        }
    }

    let required = expansion
        .ordered
        .iter()
        .filter(|c| !requested_names.contains(&c.name))
        .map(|c| c.name.clone())
        .collect();

    tracing::debug!(
        "Resolved {} requested component(s) into {} total",
        requested_names.len(),
        expansion.ordered.len()
    );

    Ok(Resolution {
        requested: requested_names,
        required,
        total: expansion.ordered,
    })
}

/// Exact-name index. The first entry wins if a custom registry repeats a name,
/// matching [`Registry::get`].
fn index_by_name(registry: &Registry) -> HashMap<&str, &Component> {
    let mut index = HashMap::with_capacity(registry.components.len());
    for component in &registry.components {
        index.entry(component.name.as_str()).or_insert(component);
    }
    index
}

/// Traversal state for a single [`resolve`] call.
///
/// The depth-first walk keeps its own stack of frames instead of recursing, so
/// a long requirement chain in a custom registry cannot overflow the call stack.
struct Expansion<'a> {
    /// Exact-name lookup over the registry, built once per call.
    index: HashMap<&'a str, &'a Component>,
    visited: HashSet<&'a str>,
    /// Insertion-ordered and unique: a component is only pushed once its
    /// (single) expansion completes.
    ordered: Vec<&'a Component>,
}

/// A component whose requirements are being expanded, and the index of the
/// next requirement to visit.
struct Frame<'a> {
    component: &'a Component,
    next: usize,
}

impl<'a> Expansion<'a> {
    fn expand(&mut self, name: &str) -> Result<(), HextaError> {
        let Some(root) = self.enter(name)? else {
            return Ok(());
        };
        let mut stack = vec![Frame {
            component: root,
            next: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let component = frame.component;
            if let Some(requirement) = component.requires.get(frame.next) {
                frame.next += 1;
                if let Some(required) = self.enter(requirement)? {
                    stack.push(Frame {
                        component: required,
                        next: 0,
                    });
                }
            } else {
                stack.pop();
                self.ordered.push(component);
            }
        }

        Ok(())
    }

    /// Mark `name` visited and return its component, or `None` if it was
    /// already visited (finished, or still on the stack in a cycle).
    fn enter(&mut self, name: &str) -> Result<Option<&'a Component>, HextaError> {
        if self.visited.contains(name) {
            return Ok(None);
        }

        let component = *self.index.get(name).ok_or_else(|| HextaError::ComponentNotFound {
            name: name.to_string(),
        })?;
        self.visited.insert(component.name.as_str());
        Ok(Some(component))
    }
}
