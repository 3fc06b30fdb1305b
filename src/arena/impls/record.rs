use crate::arena::enums::record::Record;
use crate::arena::enums::storage_kind::StorageKind;
use crate::tracker::structs::account_record::AccountRecord;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_record::TorrentRecord;

impl Record {
    pub fn default_for(kind: StorageKind) -> Record {
        match kind {
            StorageKind::Peer => Record::Peer(PeerRecord::default()),
            StorageKind::Torrent => Record::Torrent(TorrentRecord::default()),
            StorageKind::Account => Record::Account(AccountRecord::default()),
        }
    }

    pub fn kind(&self) -> Option<StorageKind> {
        match self {
            Record::Vacant => None,
            Record::Peer(_) => Some(StorageKind::Peer),
            Record::Torrent(_) => Some(StorageKind::Torrent),
            Record::Account(_) => Some(StorageKind::Account),
        }
    }

    /// The 20 key bytes of the stored record, `None` for a vacant slot.
    pub fn key_bytes(&self) -> Option<&[u8]> {
        match self {
            Record::Vacant => None,
            Record::Peer(peer) => Some(&peer.peer_id.0),
            Record::Torrent(torrent) => Some(&torrent.info_hash.0),
            Record::Account(account) => Some(&account.auth_key.0),
        }
    }
}
