use crate::stats::enums::stats_event::StatsEvent;
use crate::store::enums::insert_outcome::InsertOutcome;
use crate::store::enums::store_error::StoreError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_record::TorrentRecord;
use crate::tracker::structs::tracker_store::TrackerStore;

impl TrackerStore {
    /// Registers a torrent with zeroed swarm counters.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_torrent(&self, info_hash: InfoHash) -> Result<InsertOutcome, StoreError>
    {
        let mut lock = self.stores.lock();
        let before = lock.torrents.arena().growths();
        let result = lock.torrents.insert(info_hash, TorrentRecord::new(info_hash));
        self.count_growths(before, lock.torrents.arena().growths());
        drop(lock);

        let outcome = result.map_err(|e| self.report("add torrent", e))?;
        if outcome.is_inserted() {
            self.update_stats(StatsEvent::Torrents, 1);
            self.update_stats(StatsEvent::TorrentInserts, 1);
        }
        Ok(outcome)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_torrent(&self, info_hash: InfoHash) -> Result<Option<TorrentRecord>, StoreError>
    {
        let removed = self.stores.lock().torrents.remove(&info_hash).map_err(|e| self.report("remove torrent", e))?;
        if removed.is_some() {
            self.update_stats(StatsEvent::Torrents, -1);
            self.update_stats(StatsEvent::TorrentRemovals, 1);
        }
        Ok(removed)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_torrent(&self, info_hash: InfoHash) -> Result<Option<TorrentRecord>, StoreError>
    {
        self.stores.lock().torrents.get(&info_hash).map_err(|e| self.report("get torrent", e))
    }

    /// Applies `f` to the stored torrent counters.
    #[tracing::instrument(level = "debug", skip(self, f))]
    pub fn update_torrent<F>(&self, info_hash: InfoHash, f: F) -> Result<Option<TorrentRecord>, StoreError>
    where
        F: FnOnce(&mut TorrentRecord),
    {
        self.stores.lock().torrents.update(&info_hash, f).map_err(|e| self.report("update torrent", e))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_torrents(&self) -> Result<Vec<TorrentRecord>, StoreError>
    {
        self.stores.lock().torrents.records().map_err(|e| self.report("list torrents", e))
    }
}
