//! Integration test suite for HextaUI
//!
//! End-to-end tests that run the `hextaui` binary against temporary projects.
//! Component sources are served from a local directory through `file://`
//! URLs, so no test needs network access.
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! - **add**: resolution, downloads, dry runs, name suggestions
//! - **init**: scaffolding and the project marker
//! - **list**: table/JSON/YAML output and search
//! - **tree**: requirement trees and install order
//! - **validate**: registry integrity checks

#[path = "../common/mod.rs"]
mod common;

mod add;
mod init;
mod list;
mod tree;
mod validate;
