use serde::Serialize;

/// What [`KeyedStore::audit`](crate::store::structs::keyed_store::KeyedStore::audit) found.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct StoreAudit {
    pub capacity: usize,
    pub occupied: usize,
    pub free: usize,
    pub buckets_used: usize,
    pub overflow_entries: usize,
    pub max_tree_height: i32,
}
