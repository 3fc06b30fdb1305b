//! Common utilities and shared functionality.
//!
//! Logging setup, timestamps and the `CustomError` type used by the binary's
//! start-up path.

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for common utilities.
pub mod tests;
