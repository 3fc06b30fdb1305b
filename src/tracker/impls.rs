//! Implementation blocks for tracker data structures.

/// AccountRecord construction and StoredRecord.
pub mod account_record;

/// AnnounceEvent: Display, FromStr.
pub mod announce_event;

/// AuthKey implementation: Display, FromStr, Serialize, Deserialize.
pub mod auth_key;

/// InfoHash implementation: Display, FromStr, Serialize, Deserialize.
pub mod info_hash;

/// PeerId implementation: Display, FromStr, Serialize, Deserialize.
pub mod peer_id;

/// PeerRecord construction, defaults and StoredRecord.
pub mod peer_record;

/// TorrentRecord construction and StoredRecord.
pub mod torrent_record;

/// TrackerStore construction, audit and failure reporting.
pub mod tracker_store;

/// Torrent operations of the tracker store.
pub mod tracker_store_torrents;

/// User (peer) operations of the tracker store.
pub mod tracker_store_users;

/// Summing of per-worker load run totals.
pub mod self_test_report;

/// Multi-threaded synthetic load run.
pub mod tracker_store_self_test;
