//! Core types for HextaUI
//!
//! This module holds the error types shared by every other module:
//! - [`HextaError`] - Enumerated error types covering all failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to the user-friendly format
//!
//! Every operation that can fail returns a [`Result`] with meaningful error
//! information, and every user-facing error carries a suggestion where one exists.

pub mod error;

pub use error::{ErrorContext, HextaError, user_friendly_error};
