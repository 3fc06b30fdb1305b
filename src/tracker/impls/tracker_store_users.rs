use std::net::Ipv4Addr;
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::enums::insert_outcome::InsertOutcome;
use crate::store::enums::store_error::StoreError;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::tracker_store::TrackerStore;

impl TrackerStore {
    /// Registers a peer from the fields of a fresh announce.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn add_user(&self, peer_id: PeerId, address: Ipv4Addr, port: u16, numwant: u32) -> Result<InsertOutcome, StoreError>
    {
        self.insert_user(PeerRecord::new(peer_id, address, port, numwant))
    }

    /// Stores a complete peer record under its own peer id.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn insert_user(&self, record: PeerRecord) -> Result<InsertOutcome, StoreError>
    {
        let mut lock = self.stores.lock();
        let before = lock.peers.arena().growths();
        let result = lock.peers.insert(record.peer_id, record);
        self.count_growths(before, lock.peers.arena().growths());
        drop(lock);

        let outcome = result.map_err(|e| self.report("insert user", e))?;
        if outcome.is_inserted() {
            self.update_stats(StatsEvent::Peers, 1);
            self.update_stats(StatsEvent::PeerInserts, 1);
        }
        Ok(outcome)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn remove_user(&self, peer_id: PeerId) -> Result<Option<PeerRecord>, StoreError>
    {
        let removed = self.stores.lock().peers.remove(&peer_id).map_err(|e| self.report("remove user", e))?;
        if removed.is_some() {
            self.update_stats(StatsEvent::Peers, -1);
            self.update_stats(StatsEvent::PeerRemovals, 1);
        }
        Ok(removed)
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_user(&self, peer_id: PeerId) -> Result<Option<PeerRecord>, StoreError>
    {
        self.stores.lock().peers.get(&peer_id).map_err(|e| self.report("get user", e))
    }

    /// Applies `f` to the stored peer; its peer id cannot be changed this way.
    #[tracing::instrument(level = "debug", skip(self, f))]
    pub fn update_user<F>(&self, peer_id: PeerId, f: F) -> Result<Option<PeerRecord>, StoreError>
    where
        F: FnOnce(&mut PeerRecord),
    {
        self.stores.lock().peers.update(&peer_id, f).map_err(|e| self.report("update user", e))
    }

    #[tracing::instrument(level = "debug", skip(self))]
    pub fn get_users(&self) -> Result<Vec<PeerRecord>, StoreError>
    {
        self.stores.lock().peers.records().map_err(|e| self.report("list users", e))
    }
}
