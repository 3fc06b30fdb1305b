use serde::{Deserialize, Serialize};
use crate::tracker::structs::info_hash::InfoHash;

/// Swarm counters of a single torrent.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct TorrentRecord {
    pub info_hash: InfoHash,
    pub seeders: u64,
    pub leechers: u64,
    pub completed: u64,
}
