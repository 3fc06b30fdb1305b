use std::marker::PhantomData;
use crate::arena::structs::arena::Arena;
use crate::arena::structs::slot_index::SlotIndex;
use crate::config::enums::collision_policy::CollisionPolicy;
use crate::store::structs::fnv1a_hasher::Fnv1aHasher;

/// Number of buckets of every keyed store.
pub const BUCKET_COUNT: usize = 100;

/// Arena-backed hash table with one AVL tree per bucket.
///
/// The union of all bucket trees (plus their overflow chains) is exactly the
/// set of occupied arena slots.
#[derive(Debug)]
pub struct KeyedStore<R, H = Fnv1aHasher> {
    pub(crate) arena: Arena,
    pub(crate) buckets: [Option<SlotIndex>; BUCKET_COUNT],
    pub(crate) policy: CollisionPolicy,
    pub(crate) hasher: H,
    pub(crate) len: usize,
    pub(crate) _record: PhantomData<R>,
}
