//! Statistics event types for tracking store activity.

use serde::{Deserialize, Serialize};

/// Enumeration of all trackable statistics events.
///
/// Used with `TrackerStore::update_stats()` to move a counter by a signed delta.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    Started,
    Peers,
    Torrents,
    PeerInserts,
    PeerRemovals,
    TorrentInserts,
    TorrentRemovals,
    ArenaGrowths,
    Exhausted,
    Collisions,
    Failures,
}
