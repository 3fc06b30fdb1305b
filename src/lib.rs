//! # Torrust-Memstore
//!
//! The in-memory storage engine of a BitTorrent tracker: a fixed-record slot
//! arena combined with a hash table whose buckets are index-based AVL trees.
//!
//! ## Layers
//!
//! Leaf first, each layer only uses the ones above it:
//!
//! - [`arena`] - slot storage with a LIFO free stack and doubling growth
//! - [`tree`] - AVL tree over arena slots, linked by index, without parent links
//! - [`store`] - FNV-1a hashed table of 100 AVL buckets, generic over the record kind
//! - [`tracker`] - peer and torrent stores behind one mutex, the only entry point for a network layer
//!
//! Around them sit [`config`] (TOML configuration), [`common`] (logging
//! setup), [`stats`] (atomic counters) and [`structs`] (the CLI).
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use torrust_memstore::config::structs::configuration::Configuration;
//! use torrust_memstore::tracker::structs::info_hash::InfoHash;
//! use torrust_memstore::tracker::structs::tracker_store::TrackerStore;
//!
//! let store = TrackerStore::new(Arc::new(Configuration::init())).unwrap();
//! let info_hash = InfoHash([1u8; 20]);
//! store.add_torrent(info_hash).unwrap();
//! store.update_torrent(info_hash, |torrent| torrent.seeders += 1).unwrap();
//! assert_eq!(store.get_torrent(info_hash).unwrap().unwrap().seeders, 1);
//! ```

/// Fixed-record slot arena.
///
/// Owns every record of a keyed store, hands out and takes back slot indices,
/// and grows without invalidating issued indices.
pub mod arena;

/// Common utilities and shared functionality.
///
/// Logging setup, timestamps and the start-up error type.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validating and saving the TOML configuration.
pub mod config;

/// Statistics tracking module.
///
/// Atomic counters for store activity and their JSON-serializable snapshot.
pub mod stats;

/// Hash-bucketed keyed store.
///
/// Maps 20-byte keys to records through FNV-1a hashing and per-bucket AVL trees.
pub mod store;

/// CLI argument parsing.
pub mod structs;

/// Tracker store.
///
/// The lock-guarded pair of peer and torrent stores and the record types.
pub mod tracker;

/// Index-based AVL tree over arena slots.
pub mod tree;
