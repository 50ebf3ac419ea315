//! HextaUI - copy-in React components with their requirements
//!
//! HextaUI is a scaffolding CLI: instead of depending on a component library,
//! a project copies component source files into its own tree. Components build
//! on each other (a `Modal` uses a `Button`), so adding one component means
//! adding everything it transitively requires, plus the npm packages all of
//! them need.
//!
//! # Architecture Overview
//!
//! - A static [`registry`] lists every component: files, npm dependencies and
//!   the other components it requires.
//! - The [`resolver`] expands a request into the full, dependency-first
//!   installation set. It is pure: no I/O, no mutation of the registry.
//! - The [`installer`] downloads files for that set and writes them into the
//!   [`project`].
//! - The [`package_manager`] module installs missing npm packages with
//!   whatever manager the project uses.
//!
//! # Core Modules
//!
//! - [`cli`] - `init`, `add`, `list`, `tree`, `validate`
//! - [`config`] - global configuration (`~/.hextaui/config.toml`)
//! - [`core`] - error types and user-facing error formatting
//! - [`registry`] - the component catalog, name validation and suggestions
//! - [`resolver`] - requirement resolution and the requirement graph
//! - [`installer`] - concurrent downloads and ordered, atomic writes
//! - [`project`] - project root discovery, framework layout, init marker
//! - [`package_manager`] - npm/pnpm/yarn/bun detection and invocation
//! - [`utils`] - file system helpers and progress indicators
//!
//! # Example
//!
//! ```rust
//! use hextaui_cli::registry::Registry;
//! use hextaui_cli::resolver::resolve;
//!
//! let registry = Registry::builtin()?;
//! let resolution = resolve(&registry, &["ColorPicker"])?;
//! assert_eq!(resolution.names(), vec!["Button", "Input", "ColorPicker"]);
//! # Ok::<(), hextaui_cli::core::HextaError>(())
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod installer;
pub mod package_manager;
pub mod project;
pub mod registry;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
