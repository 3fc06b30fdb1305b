//! Common data structures.

/// Free-form error for start-up failures outside the store.
pub mod custom_error;
