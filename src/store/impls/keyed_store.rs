use std::marker::PhantomData;
use log::debug;
use crate::arena::enums::growth_policy::GrowthPolicy;
use crate::arena::enums::slot_state::SlotState;
use crate::arena::structs::arena::Arena;
use crate::arena::structs::slot_index::SlotIndex;
use crate::config::enums::collision_policy::CollisionPolicy;
use crate::store::enums::insert_outcome::InsertOutcome;
use crate::store::enums::store_error::StoreError;
use crate::store::structs::fnv1a_hasher::Fnv1aHasher;
use crate::store::structs::keyed_store::{KeyedStore, BUCKET_COUNT};
use crate::store::structs::store_audit::StoreAudit;
use crate::store::traits::key_hasher::KeyHasher;
use crate::store::traits::stored_record::StoredRecord;
use crate::tree::avl;

/// Where a key was found: the bucket tree node carrying its sort key, the
/// overflow entry right before the match (`None` when the match is the tree
/// node itself) and the matching slot.
type Hit = (SlotIndex, Option<SlotIndex>, SlotIndex);

impl<R: StoredRecord> KeyedStore<R, Fnv1aHasher> {
    pub fn new(capacity: usize, growth: GrowthPolicy, policy: CollisionPolicy) -> Result<Self, StoreError>
    {
        Self::with_hasher(capacity, growth, policy, Fnv1aHasher)
    }
}

impl<R: StoredRecord, H: KeyHasher> KeyedStore<R, H> {
    pub fn with_hasher(capacity: usize, growth: GrowthPolicy, policy: CollisionPolicy, hasher: H) -> Result<Self, StoreError>
    {
        Ok(KeyedStore {
            arena: Arena::new(capacity, growth)?,
            buckets: [None; BUCKET_COUNT],
            policy,
            hasher,
            len: 0,
            _record: PhantomData,
        })
    }

    /// Stores `payload` under `key`. The key is copied into the record.
    ///
    /// An already stored key is left untouched and reported as
    /// `InsertOutcome::AlreadyPresent`. Nothing is modified when an error is
    /// returned.
    pub fn insert(&mut self, key: R::Key, mut payload: R) -> Result<InsertOutcome, StoreError>
    {
        let (bucket, sort_key) = self.locate(&key);
        payload.set_key(key);

        if let Some(head) = avl::find(&self.arena, self.buckets[bucket], sort_key)? {
            if self.policy.is_reference() {
                if self.stored_key(head)? == key {
                    return Ok(InsertOutcome::AlreadyPresent(head));
                }
                return Err(StoreError::KeyCollision { sort_key });
            }

            let mut tail = head;
            loop {
                if self.stored_key(tail)? == key {
                    return Ok(InsertOutcome::AlreadyPresent(tail));
                }
                match self.arena.get(tail)?.overflow {
                    Some(next) => tail = next,
                    None => break,
                }
            }
            let index = self.occupy(sort_key, payload)?;
            self.arena.get_mut(index)?.state = SlotState::Linked;
            self.arena.get_mut(tail)?.overflow = Some(index);
            self.len += 1;
            debug!("[STORE] {key} chained behind slot {tail} (sort key {sort_key})");
            return Ok(InsertOutcome::Inserted(index));
        }

        let index = self.occupy(sort_key, payload)?;
        match avl::insert(&mut self.arena, self.buckets[bucket], index) {
            Ok(root) => self.buckets[bucket] = root,
            Err(error) => {
                let _ = self.arena.release(index);
                return Err(error);
            }
        }
        self.len += 1;
        Ok(InsertOutcome::Inserted(index))
    }

    /// Copy of the record stored under `key`.
    pub fn get(&self, key: &R::Key) -> Result<Option<R>, StoreError>
    {
        match self.lookup(key)? {
            None => Ok(None),
            Some((_, _, index)) => Ok(Some(*self.record_at(index)?)),
        }
    }

    pub fn contains(&self, key: &R::Key) -> Result<bool, StoreError>
    {
        Ok(self.lookup(key)?.is_some())
    }

    /// Mutates the record stored under `key` in place and returns the result.
    ///
    /// The stored key is restored after `f` runs, so a record can never move
    /// to a different key this way.
    pub fn update<F>(&mut self, key: &R::Key, f: F) -> Result<Option<R>, StoreError>
    where
        F: FnOnce(&mut R),
    {
        let Some((_, _, index)) = self.lookup(key)? else {
            return Ok(None);
        };
        let slot = self.arena.get_mut(index)?;
        let record = R::from_record_mut(&mut slot.record).ok_or(StoreError::KindMismatch { index, expected: R::KIND })?;
        let stored_key = record.key();
        f(record);
        record.set_key(stored_key);
        Ok(Some(*record))
    }

    /// Unlinks and frees the slot holding `key`, returning its record.
    ///
    /// Removing an absent key is not an error and changes nothing.
    pub fn remove(&mut self, key: &R::Key) -> Result<Option<R>, StoreError>
    {
        let (bucket, _) = self.locate(key);
        let Some((head, previous, index)) = self.lookup(key)? else {
            debug!("[STORE] nothing to remove for {key}");
            return Ok(None);
        };
        let record = *self.record_at(index)?;

        match previous {
            Some(previous) => {
                let next = self.arena.get(index)?.overflow;
                self.arena.get_mut(previous)?.overflow = next;
                let slot = self.arena.get_mut(index)?;
                slot.overflow = None;
                slot.state = SlotState::Detached;
            }
            None => {
                let next = self.arena.get(head)?.overflow;
                let mut root = avl::remove(&mut self.arena, self.buckets[bucket], head)?;
                self.arena.get_mut(head)?.overflow = None;
                if let Some(next) = next {
                    // The first overflow entry takes over the tree position, dragging the rest of the chain along.
                    self.arena.get_mut(next)?.state = SlotState::Detached;
                    root = avl::insert(&mut self.arena, root, next)?;
                }
                self.buckets[bucket] = root;
            }
        }

        self.arena.release(index)?;
        self.len -= 1;
        Ok(Some(record))
    }

    /// Every stored record, bucket by bucket in ascending sort key order.
    pub fn records(&self) -> Result<Vec<R>, StoreError>
    {
        let mut records = Vec::with_capacity(self.len);
        let mut nodes = Vec::new();
        for root in self.buckets.iter() {
            nodes.clear();
            avl::in_order(&self.arena, *root, &mut nodes)?;
            for &node in nodes.iter() {
                let mut current = Some(node);
                while let Some(index) = current {
                    records.push(*self.record_at(index)?);
                    current = self.arena.get(index)?.overflow;
                }
            }
        }
        Ok(records)
    }

    /// Verifies every bucket tree and the partition of slots into free and occupied.
    pub fn audit(&self) -> Result<StoreAudit, StoreError>
    {
        let capacity = self.arena.capacity();
        let mut seen = vec![false; capacity];
        let mut report = StoreAudit {
            capacity,
            free: self.arena.free_count(),
            ..Default::default()
        };

        let mut nodes = Vec::new();
        for (bucket, root) in self.buckets.iter().enumerate() {
            let tree = avl::audit(&self.arena, *root)?;
            if root.is_some() {
                report.buckets_used += 1;
            }
            report.max_tree_height = report.max_tree_height.max(tree.height);

            nodes.clear();
            avl::in_order(&self.arena, *root, &mut nodes)?;
            for &node in nodes.iter() {
                let node_key = self.arena.get(node)?.sort_key;
                let mut current = Some(node);
                while let Some(index) = current {
                    let slot = self.arena.get(index)?;
                    if std::mem::replace(&mut seen[index.as_usize()], true) {
                        return Err(StoreError::InvariantViolation { index, reason: "slot reachable twice" });
                    }
                    if slot.state != SlotState::Linked {
                        return Err(StoreError::InvariantViolation { index, reason: "reachable slot is not linked" });
                    }
                    if index != node {
                        report.overflow_entries += 1;
                        if slot.left.is_some() || slot.right.is_some() || slot.sort_key != node_key {
                            return Err(StoreError::InvariantViolation { index, reason: "malformed overflow entry" });
                        }
                    }
                    let (expected_bucket, expected_sort_key) = self.locate(&self.stored_key(index)?);
                    if expected_bucket != bucket || expected_sort_key != slot.sort_key {
                        return Err(StoreError::InvariantViolation { index, reason: "record stored under the wrong hash" });
                    }
                    report.occupied += 1;
                    current = slot.overflow;
                }
            }
        }

        for &index in self.arena.free_indices() {
            let slot = self.arena.get(index)?;
            if std::mem::replace(&mut seen[index.as_usize()], true) {
                return Err(StoreError::InvariantViolation { index, reason: "free slot is also occupied or listed twice" });
            }
            if slot.state != SlotState::Free {
                return Err(StoreError::InvariantViolation { index, reason: "free stack entry is not free" });
            }
        }

        if let Some(position) = seen.iter().position(|reached| !reached) {
            return Err(StoreError::InvariantViolation { index: SlotIndex(position as u32), reason: "slot is neither free nor reachable" });
        }
        if report.occupied != self.len || report.occupied != self.arena.in_use() {
            return Err(StoreError::InvariantViolation { index: SlotIndex(0), reason: "occupied count out of sync" });
        }
        Ok(report)
    }

    pub fn len(&self) -> usize
    {
        self.len
    }

    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    pub fn capacity(&self) -> usize
    {
        self.arena.capacity()
    }

    pub fn arena(&self) -> &Arena
    {
        &self.arena
    }

    pub fn policy(&self) -> CollisionPolicy
    {
        self.policy
    }

    /// Bucket index and sort key for `key`.
    pub fn locate(&self, key: &R::Key) -> (usize, u64)
    {
        let hash = self.hasher.hash_key(key.as_ref());
        let reduced = hash % BUCKET_COUNT as u64;
        let sort_key = match self.policy {
            CollisionPolicy::reference => reduced,
            CollisionPolicy::chained => hash,
        };
        (reduced as usize, sort_key)
    }

    fn lookup(&self, key: &R::Key) -> Result<Option<Hit>, StoreError>
    {
        let (bucket, sort_key) = self.locate(key);
        let Some(head) = avl::find(&self.arena, self.buckets[bucket], sort_key)? else {
            return Ok(None);
        };
        // The reference policy trusts the sort key alone.
        if self.policy.is_reference() {
            return Ok(Some((head, None, head)));
        }
        let mut previous = None;
        let mut current = Some(head);
        while let Some(index) = current {
            if self.stored_key(index)? == *key {
                return Ok(Some((head, previous, index)));
            }
            previous = Some(index);
            current = self.arena.get(index)?.overflow;
        }
        Ok(None)
    }

    fn occupy(&mut self, sort_key: u64, payload: R) -> Result<SlotIndex, StoreError>
    {
        let index = self.arena.allocate(R::KIND)?;
        let slot = self.arena.get_mut(index)?;
        slot.sort_key = sort_key;
        slot.record = payload.into_record();
        Ok(index)
    }

    fn record_at(&self, index: SlotIndex) -> Result<&R, StoreError>
    {
        R::from_record(&self.arena.get(index)?.record).ok_or(StoreError::KindMismatch { index, expected: R::KIND })
    }

    fn stored_key(&self, index: SlotIndex) -> Result<R::Key, StoreError>
    {
        Ok(self.record_at(index)?.key())
    }
}
