//! Test utilities for HextaUI
//!
//! Helpers shared by unit tests and the `tests/` suites (through the
//! `test-utils` feature):
//! - [`TestEnvironment`] - a temporary project plus a local component source
//!   served through `file://` URLs, so `add` runs without network access
//! - [`RegistryFixture`] - small registries built in code or written as TOML
//!
//! # Example
//!
//! ```rust,no_run
//! use hextaui_cli::test_utils::{RegistryFixture, TestEnvironment};
//!
//! let env = TestEnvironment::initialized().unwrap();
//! env.install_registry(&RegistryFixture::ui()).unwrap();
//! assert!(env.project_path("package.json").exists());
//! ```

pub mod environment;
pub mod fixtures;

pub use environment::TestEnvironment;
pub use fixtures::RegistryFixture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests, once per process.
///
/// Uses `level` if given, otherwise `RUST_LOG`; with neither, logging stays off.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}
