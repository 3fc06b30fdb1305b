use crate::arena::enums::record::Record;
use crate::arena::enums::storage_kind::StorageKind;
use crate::store::traits::stored_record::StoredRecord;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_record::TorrentRecord;

impl TorrentRecord {
    pub fn new(info_hash: InfoHash) -> TorrentRecord
    {
        TorrentRecord { info_hash, ..Default::default() }
    }

    pub fn peers(&self) -> u64
    {
        self.seeders + self.leechers
    }
}

impl StoredRecord for TorrentRecord {
    type Key = InfoHash;

    const KIND: StorageKind = StorageKind::Torrent;

    fn key(&self) -> InfoHash {
        self.info_hash
    }

    fn set_key(&mut self, key: InfoHash) {
        self.info_hash = key;
    }

    fn into_record(self) -> Record {
        Record::Torrent(self)
    }

    fn from_record(record: &Record) -> Option<&Self> {
        match record {
            Record::Torrent(torrent) => Some(torrent),
            _ => None,
        }
    }

    fn from_record_mut(record: &mut Record) -> Option<&mut Self> {
        match record {
            Record::Torrent(torrent) => Some(torrent),
            _ => None,
        }
    }
}
