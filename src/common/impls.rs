//! Implementation blocks for common types.

/// CustomError construction, Display and Error.
pub mod custom_error;
