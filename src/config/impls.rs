//! Implementation blocks for configuration loading and saving.

/// CollisionPolicy helpers.
pub mod collision_policy;

/// Configuration defaults, file IO and validation.
pub mod configuration;

/// Display and Error for ConfigurationError.
pub mod configuration_error;

/// StoreConfig defaults and growth policy mapping.
pub mod store_config;
