//! Cross-cutting utilities
//!
//! - [`fs`] - Atomic writes, directory creation and path validation
//! - [`progress`] - Spinners and progress bars that honour `--no-progress`

pub mod fs;
pub mod progress;

pub use fs::{atomic_write, ensure_dir, safe_join, validate_relative_path};
pub use progress::{ProgressBar, spinner_with_message};
