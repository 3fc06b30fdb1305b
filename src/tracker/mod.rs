//! The tracker-facing store.
//!
//! [`TrackerStore`](structs::tracker_store::TrackerStore) pairs one keyed
//! store for peers with one for torrents behind a single `parking_lot`
//! mutex. It is the only component a network layer talks to: requests come
//! in as a key (peer id or info hash) plus a record payload, and results go
//! back as copies of the stored records.
//!
//! # Example
//!
//! ```rust
//! use std::net::Ipv4Addr;
//! use std::sync::Arc;
//! use torrust_memstore::config::structs::configuration::Configuration;
//! use torrust_memstore::tracker::structs::peer_id::PeerId;
//! use torrust_memstore::tracker::structs::tracker_store::TrackerStore;
//!
//! let store = Arc::new(TrackerStore::new(Arc::new(Configuration::init())).unwrap());
//! let peer_id = PeerId([7u8; 20]);
//! store.add_user(peer_id, Ipv4Addr::LOCALHOST, 6881, 50).unwrap();
//! assert_eq!(store.get_user(peer_id).unwrap().unwrap().port, 6881);
//! ```

/// Enumerations for tracker records.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Identifiers, records and the tracker store itself.
pub mod structs;

/// Unit tests for tracker functionality.
pub mod tests;
