//! Unit test suite for HextaUI
//!
//! Library-level tests against the public API, most of them over the
//! built-in component catalog.
//!
//! ```bash
//! cargo test --test unit
//! ```

mod registry;
mod resolver;
