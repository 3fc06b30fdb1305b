use std::sync::Arc;
use log::{error, info, warn};
use parking_lot::Mutex;
use crate::common::common::current_time;
use crate::config::structs::configuration::Configuration;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::keyed_store::KeyedStore;
use crate::tracker::structs::tracker_audit::TrackerAudit;
use crate::tracker::structs::tracker_store::TrackerStore;
use crate::tracker::structs::tracker_stores::TrackerStores;

impl TrackerStore {
    #[tracing::instrument(level = "debug")]
    pub fn new(config: Arc<Configuration>) -> Result<TrackerStore, StoreError>
    {
        let settings = &config.store;
        let growth = settings.growth_policy();
        let peers = KeyedStore::new(settings.peers_capacity, growth, settings.collision_policy)?;
        let torrents = KeyedStore::new(settings.torrents_capacity, growth, settings.collision_policy)?;
        info!(
            "[TRACKER] store ready: {} peer slots, {} torrent slots, {:?} growth, {:?} collisions",
            settings.peers_capacity, settings.torrents_capacity, growth, settings.collision_policy
        );

        let store = TrackerStore {
            config,
            stores: Mutex::new(TrackerStores { peers, torrents }),
            stats: Arc::new(StatsAtomics::default()),
        };
        store.update_stats(StatsEvent::Started, current_time() as i64);
        Ok(store)
    }

    /// Audits both stores while holding the lock once.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn audit(&self) -> Result<TrackerAudit, StoreError>
    {
        let lock = self.stores.lock();
        let peers = lock.peers.audit().map_err(|e| self.report("audit peers", e))?;
        let torrents = lock.torrents.audit().map_err(|e| self.report("audit torrents", e))?;
        Ok(TrackerAudit { peers, torrents })
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn users_count(&self) -> usize
    {
        self.stores.lock().peers.len()
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn torrents_count(&self) -> usize
    {
        self.stores.lock().torrents.len()
    }

    /// Logs and counts a failed operation before it is handed back to the caller.
    pub(crate) fn report(&self, operation: &str, error: StoreError) -> StoreError
    {
        match &error {
            StoreError::ResourceExhausted { .. } => {
                warn!("[TRACKER] {operation}: {error}");
                self.update_stats(StatsEvent::Exhausted, 1);
            }
            StoreError::KeyCollision { .. } => {
                warn!("[TRACKER] {operation}: {error}");
                self.update_stats(StatsEvent::Collisions, 1);
            }
            e if e.is_logic_fault() => {
                error!("[TRACKER] {operation}: {error}");
                self.update_stats(StatsEvent::Failures, 1);
            }
            _ => {
                warn!("[TRACKER] {operation}: {error}");
                self.update_stats(StatsEvent::Failures, 1);
            }
        }
        error
    }

    pub(crate) fn count_growths(&self, before: u64, after: u64)
    {
        if after > before {
            self.update_stats(StatsEvent::ArenaGrowths, (after - before) as i64);
        }
    }
}
