//! Keyed store enumerations.

/// Result of a successful insert.
pub mod insert_outcome;

/// Error taxonomy of the storage engine.
pub mod store_error;
