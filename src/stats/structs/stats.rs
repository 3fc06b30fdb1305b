use serde::{Deserialize, Serialize};

/// Point-in-time copy of [`StatsAtomics`](crate::stats::structs::stats_atomics::StatsAtomics).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub peers: i64,
    pub torrents: i64,
    pub peer_inserts: i64,
    pub peer_removals: i64,
    pub torrent_inserts: i64,
    pub torrent_removals: i64,
    pub arena_growths: i64,
    pub exhausted: i64,
    pub collisions: i64,
    pub failures: i64,
}
