//! Global constants used throughout the HextaUI codebase.
//!
//! File names, environment variables, and numeric defaults that are used
//! across multiple modules live here so they stay discoverable.

use std::time::Duration;

/// Name of the marker file written to the project root by `hextaui init`.
pub const MARKER_FILE_NAME: &str = ".hextaui";

/// Version recorded in the marker file.
pub const MARKER_VERSION: &str = "1.0.0";

/// Environment variable that disables spinners when set to any value.
pub const NO_PROGRESS_ENV: &str = "HEXTAUI_NO_PROGRESS";

/// Environment variable pointing at an alternative global config file.
pub const CONFIG_ENV: &str = "HEXTAUI_CONFIG";

/// Default number of concurrent file downloads.
pub const DEFAULT_MAX_PARALLEL_DOWNLOADS: usize = 4;

/// Default timeout for a single HTTP request (30 seconds).
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum number of "did you mean" suggestions per unknown name.
pub const MAX_SUGGESTIONS: usize = 3;

/// Minimum Jaro-Winkler similarity for a registry name to be suggested.
pub const SUGGESTION_SIMILARITY_THRESHOLD: f64 = 0.8;

/// User agent sent with registry downloads.
pub const USER_AGENT: &str = concat!("hextaui-cli/", env!("CARGO_PKG_VERSION"));
