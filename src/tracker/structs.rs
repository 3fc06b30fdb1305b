//! Data structures for the tracker store.
//!
//! The three 20-byte identifiers, the three record kinds a slot can hold and
//! the lock-guarded pair of stores.

/// 20-byte authentication key of an account.
pub mod auth_key;

/// 20-byte torrent info hash identifier.
pub mod info_hash;

/// 20-byte peer identifier.
pub mod peer_id;

/// Cumulative account transfer totals.
pub mod account_record;

/// A peer as last announced.
pub mod peer_record;

/// Swarm counters of a torrent.
pub mod torrent_record;

/// Audit reports of both stores.
pub mod tracker_audit;

/// Main tracker store instance.
pub mod tracker_store;

/// The peer and torrent stores guarded by the lock.
pub mod tracker_stores;

/// Totals of a synthetic load run.
pub mod self_test_report;
