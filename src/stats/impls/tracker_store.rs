use std::sync::atomic::{AtomicI64, Ordering};
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::tracker::structs::tracker_store::TrackerStore;

impl TrackerStore {
    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.stats.started.load(Ordering::SeqCst),
            peers: self.stats.peers.load(Ordering::SeqCst),
            torrents: self.stats.torrents.load(Ordering::SeqCst),
            peer_inserts: self.stats.peer_inserts.load(Ordering::SeqCst),
            peer_removals: self.stats.peer_removals.load(Ordering::SeqCst),
            torrent_inserts: self.stats.torrent_inserts.load(Ordering::SeqCst),
            torrent_removals: self.stats.torrent_removals.load(Ordering::SeqCst),
            arena_growths: self.stats.arena_growths.load(Ordering::SeqCst),
            exhausted: self.stats.exhausted.load(Ordering::SeqCst),
            collisions: self.stats.collisions.load(Ordering::SeqCst),
            failures: self.stats.failures.load(Ordering::SeqCst),
        }
    }

    /// Moves the counter behind `event` by `value`; `Started` is set rather than added to.
    pub fn update_stats(&self, event: StatsEvent, value: i64) -> Stats
    {
        let counter: &AtomicI64 = match event {
            StatsEvent::Started => {
                self.stats.started.store(value, Ordering::SeqCst);
                return self.get_stats();
            }
            StatsEvent::Peers => &self.stats.peers,
            StatsEvent::Torrents => &self.stats.torrents,
            StatsEvent::PeerInserts => &self.stats.peer_inserts,
            StatsEvent::PeerRemovals => &self.stats.peer_removals,
            StatsEvent::TorrentInserts => &self.stats.torrent_inserts,
            StatsEvent::TorrentRemovals => &self.stats.torrent_removals,
            StatsEvent::ArenaGrowths => &self.stats.arena_growths,
            StatsEvent::Exhausted => &self.stats.exhausted,
            StatsEvent::Collisions => &self.stats.collisions,
            StatsEvent::Failures => &self.stats.failures,
        };
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
        self.get_stats()
    }
}
