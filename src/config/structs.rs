//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Keyed store sizing, growth and collision settings.
pub mod store_config;
