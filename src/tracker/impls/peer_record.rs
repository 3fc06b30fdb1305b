use std::net::Ipv4Addr;
use crate::arena::enums::record::Record;
use crate::arena::enums::storage_kind::StorageKind;
use crate::store::traits::stored_record::StoredRecord;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::peer_record::PeerRecord;

impl PeerRecord {
    /// A freshly announced peer: counters zeroed, event `started`, no back-references.
    pub fn new(peer_id: PeerId, address: Ipv4Addr, port: u16, numwant: u32) -> PeerRecord
    {
        PeerRecord {
            peer_id,
            address,
            port,
            numwant,
            ..Default::default()
        }
    }

    pub fn is_seeder(&self) -> bool
    {
        self.left == 0 && self.event != AnnounceEvent::Stopped
    }
}

impl Default for PeerRecord {
    fn default() -> Self {
        PeerRecord {
            peer_id: PeerId::default(),
            address: Ipv4Addr::UNSPECIFIED,
            port: 0,
            downloaded: 0,
            uploaded: 0,
            left: 0,
            event: AnnounceEvent::default(),
            numwant: 0,
            torrent: None,
            account: None,
        }
    }
}

impl StoredRecord for PeerRecord {
    type Key = PeerId;

    const KIND: StorageKind = StorageKind::Peer;

    fn key(&self) -> PeerId {
        self.peer_id
    }

    fn set_key(&mut self, key: PeerId) {
        self.peer_id = key;
    }

    fn into_record(self) -> Record {
        Record::Peer(self)
    }

    fn from_record(record: &Record) -> Option<&Self> {
        match record {
            Record::Peer(peer) => Some(peer),
            _ => None,
        }
    }

    fn from_record_mut(record: &mut Record) -> Option<&mut Self> {
        match record {
            Record::Peer(peer) => Some(peer),
            _ => None,
        }
    }
}
