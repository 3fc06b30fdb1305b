//! Configuration management module.
//!
//! Loads, saves and validates the engine configuration from TOML.
//!
//! ```toml
//! log_level = "info"
//! log_console_interval = 60
//!
//! [store]
//! peers_capacity = 128
//! torrents_capacity = 128
//! growth_enabled = true
//! collision_policy = "chained"
//! ```
//!
//! Leaving out `max_capacity` lets both stores double without bound.

/// Configuration enumerations (collision policy, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
