use std::sync::Arc;
use parking_lot::Mutex;
use crate::config::structs::configuration::Configuration;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::tracker::structs::tracker_stores::TrackerStores;

/// The peer and torrent stores behind one lock.
///
/// Constructed once and shared as `Arc<TrackerStore>`. Every public method
/// takes the lock for its whole duration, so operations are linearizable.
#[derive(Debug)]
pub struct TrackerStore {
    pub config: Arc<Configuration>,
    pub(crate) stores: Mutex<TrackerStores>,
    pub stats: Arc<StatsAtomics>,
}
