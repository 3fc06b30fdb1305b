use std::fmt::{Debug, Display};
use crate::arena::enums::record::Record;
use crate::arena::enums::storage_kind::StorageKind;

/// A record kind a [`KeyedStore`](crate::store::structs::keyed_store::KeyedStore) can hold.
///
/// Ties the record to its key type and to its variant of [`Record`].
pub trait StoredRecord: Copy + Debug + Send + 'static {
    type Key: Copy + Eq + AsRef<[u8]> + Debug + Display;

    const KIND: StorageKind;

    fn key(&self) -> Self::Key;

    fn set_key(&mut self, key: Self::Key);

    fn into_record(self) -> Record;

    fn from_record(record: &Record) -> Option<&Self>;

    fn from_record_mut(record: &mut Record) -> Option<&mut Self>;
}
