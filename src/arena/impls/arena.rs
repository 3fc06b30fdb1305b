use log::{debug, info};
use crate::arena::enums::growth_policy::GrowthPolicy;
use crate::arena::enums::record::Record;
use crate::arena::enums::slot_state::SlotState;
use crate::arena::enums::storage_kind::StorageKind;
use crate::arena::structs::arena::Arena;
use crate::arena::structs::slot::Slot;
use crate::arena::structs::slot_index::SlotIndex;
use crate::store::enums::store_error::StoreError;

/// Largest number of slots addressable by a `SlotIndex`.
pub const MAX_SLOTS: usize = u32::MAX as usize;

impl Arena {
    #[tracing::instrument(level = "debug")]
    pub fn new(capacity: usize, growth: GrowthPolicy) -> Result<Arena, StoreError>
    {
        let mut arena = Arena {
            slots: Vec::new(),
            free_stack: Vec::new(),
            in_use: 0,
            growth,
            growths: 0,
        };
        arena.extend_to(capacity)?;
        Ok(arena)
    }

    /// Hands out a free slot initialised for `kind`, growing the arena first if needed.
    ///
    /// The slot comes back `Detached`: it is not part of any tree yet.
    pub fn allocate(&mut self, kind: StorageKind) -> Result<SlotIndex, StoreError>
    {
        if self.free_stack.is_empty() {
            match self.growth.next_capacity(self.capacity()) {
                None => {
                    debug!("[ARENA] pool is full ({} slots) and cannot grow", self.capacity());
                    return Err(StoreError::ResourceExhausted { capacity: self.capacity() });
                }
                Some(target) => self.grow(target)?,
            }
        }

        let capacity = self.capacity();
        let index = self.free_stack.pop().ok_or(StoreError::ResourceExhausted { capacity })?;
        let slot = self.get_mut(index)?;
        slot.reset_links();
        slot.sort_key = 0;
        slot.state = SlotState::Detached;
        slot.record = Record::default_for(kind);
        self.in_use += 1;
        Ok(index)
    }

    /// Returns a detached slot to the free stack.
    pub fn release(&mut self, index: SlotIndex) -> Result<(), StoreError>
    {
        let slot = self.get_mut(index)?;
        match slot.state {
            SlotState::Free => return Err(StoreError::SlotAlreadyFree(index)),
            SlotState::Linked => return Err(StoreError::SlotStillLinked(index)),
            SlotState::Detached => {}
        }
        *slot = Slot::vacant();
        self.free_stack.push(index);
        self.in_use -= 1;
        Ok(())
    }

    pub fn get(&self, index: SlotIndex) -> Result<&Slot, StoreError>
    {
        self.slots.get(index.as_usize()).ok_or(StoreError::OutOfRange { index, capacity: self.slots.len() })
    }

    pub fn get_mut(&mut self, index: SlotIndex) -> Result<&mut Slot, StoreError>
    {
        let capacity = self.slots.len();
        self.slots.get_mut(index.as_usize()).ok_or(StoreError::OutOfRange { index, capacity })
    }

    /// Grows to `new_capacity` slots, keeping every existing slot at its index.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn grow(&mut self, new_capacity: usize) -> Result<(), StoreError>
    {
        let current = self.capacity();
        if new_capacity <= current {
            return Err(StoreError::InvalidCapacity { current, requested: new_capacity });
        }
        self.extend_to(new_capacity)?;
        self.growths += 1;
        info!("[ARENA] grew from {current} to {new_capacity} slots");
        Ok(())
    }

    fn extend_to(&mut self, new_capacity: usize) -> Result<(), StoreError>
    {
        let current = self.slots.len();
        if new_capacity > MAX_SLOTS {
            return Err(StoreError::ResourceExhausted { capacity: current });
        }
        let additional = new_capacity.saturating_sub(current);
        if additional == 0 {
            return Ok(());
        }
        if self.slots.try_reserve_exact(additional).is_err() || self.free_stack.try_reserve_exact(additional).is_err() {
            return Err(StoreError::ResourceExhausted { capacity: current });
        }
        self.slots.resize_with(new_capacity, Slot::vacant);
        // Pushed highest first so allocation hands out ascending indices.
        self.free_stack.extend((current..new_capacity).rev().map(|i| SlotIndex(i as u32)));
        Ok(())
    }

    pub fn capacity(&self) -> usize
    {
        self.slots.len()
    }

    pub fn in_use(&self) -> usize
    {
        self.in_use
    }

    pub fn free_count(&self) -> usize
    {
        self.free_stack.len()
    }

    /// The free stack, bottom first.
    pub fn free_indices(&self) -> &[SlotIndex]
    {
        &self.free_stack
    }

    pub fn growth_policy(&self) -> GrowthPolicy
    {
        self.growth
    }

    /// Number of successful `grow` calls since construction.
    pub fn growths(&self) -> u64
    {
        self.growths
    }
}
