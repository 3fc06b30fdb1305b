use std::sync::atomic::AtomicI64;
use serde::Serialize;

/// Live counters, updated without taking the store lock.
#[derive(Serialize, Debug, Default)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub peers: AtomicI64,
    pub torrents: AtomicI64,
    pub peer_inserts: AtomicI64,
    pub peer_removals: AtomicI64,
    pub torrent_inserts: AtomicI64,
    pub torrent_removals: AtomicI64,
    pub arena_growths: AtomicI64,
    pub exhausted: AtomicI64,
    pub collisions: AtomicI64,
    pub failures: AtomicI64,
}
