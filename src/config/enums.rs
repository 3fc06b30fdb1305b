//! Configuration enumerations.

/// Handling of keys that share a sort key.
pub mod collision_policy;

/// Errors raised while loading, saving or validating a configuration.
pub mod configuration_error;
