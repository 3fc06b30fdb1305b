use crate::arena::enums::record::Record;
use crate::arena::enums::storage_kind::StorageKind;
use crate::store::traits::stored_record::StoredRecord;
use crate::tracker::structs::account_record::AccountRecord;
use crate::tracker::structs::auth_key::AuthKey;

impl AccountRecord {
    pub fn new(auth_key: AuthKey) -> AccountRecord
    {
        AccountRecord { auth_key, ..Default::default() }
    }

    /// Adds one announce worth of transfer to the running totals.
    pub fn credit(&mut self, downloaded: u64, uploaded: u64)
    {
        self.total_downloaded = self.total_downloaded.saturating_add(downloaded);
        self.total_uploaded = self.total_uploaded.saturating_add(uploaded);
    }
}

impl StoredRecord for AccountRecord {
    type Key = AuthKey;

    const KIND: StorageKind = StorageKind::Account;

    fn key(&self) -> AuthKey {
        self.auth_key
    }

    fn set_key(&mut self, key: AuthKey) {
        self.auth_key = key;
    }

    fn into_record(self) -> Record {
        Record::Account(self)
    }

    fn from_record(record: &Record) -> Option<&Self> {
        match record {
            Record::Account(account) => Some(account),
            _ => None,
        }
    }

    fn from_record_mut(record: &mut Record) -> Option<&mut Self> {
        match record {
            Record::Account(account) => Some(account),
            _ => None,
        }
    }
}
