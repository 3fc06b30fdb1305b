use crate::store::structs::keyed_store::KeyedStore;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_record::TorrentRecord;

/// The state guarded by the tracker store lock.
#[derive(Debug)]
pub struct TrackerStores {
    pub peers: KeyedStore<PeerRecord>,
    pub torrents: KeyedStore<TorrentRecord>,
}
