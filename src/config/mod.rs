//! Configuration
//!
//! HextaUI has one configuration layer, the per-user [`GlobalConfig`]. Project
//! state lives in the `.hextaui` marker (see [`crate::project::ProjectMarker`]).

mod global;

pub use global::{GlobalConfig, expand_path};
