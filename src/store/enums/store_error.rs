use thiserror::Error;
use crate::arena::enums::storage_kind::StorageKind;
use crate::arena::structs::slot_index::SlotIndex;

/// Every failure the storage engine can report.
///
/// A missing key is not an error: lookups and removals return `Option::None`
/// for it. `OutOfRange`, `TreeCorrupted`, `InvariantViolation` and
/// `KindMismatch` can only be produced by an internal logic fault, never by
/// external input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("arena exhausted at {capacity} slots")]
    ResourceExhausted { capacity: usize },

    #[error("slot {index} out of range (capacity {capacity})")]
    OutOfRange { index: SlotIndex, capacity: usize },

    #[error("distinct key already stored under sort key {sort_key}")]
    KeyCollision { sort_key: u64 },

    #[error("slot {0} is still linked into a bucket")]
    SlotStillLinked(SlotIndex),

    #[error("slot {0} is already free")]
    SlotAlreadyFree(SlotIndex),

    #[error("cannot grow arena from {current} to {requested} slots")]
    InvalidCapacity { current: usize, requested: usize },

    #[error("tree structure corrupted at slot {0}")]
    TreeCorrupted(SlotIndex),

    #[error("invariant violated at slot {index}: {reason}")]
    InvariantViolation { index: SlotIndex, reason: &'static str },

    #[error("slot {index} does not hold a {expected:?} record")]
    KindMismatch { index: SlotIndex, expected: StorageKind },

    #[error("key must be 20 bytes, got {0}")]
    InvalidKeyLength(usize),
}

impl StoreError {
    /// Faults that indicate a broken invariant rather than a resource or input problem.
    pub fn is_logic_fault(&self) -> bool {
        matches!(
            self,
            StoreError::OutOfRange { .. }
                | StoreError::SlotStillLinked(_)
                | StoreError::SlotAlreadyFree(_)
                | StoreError::TreeCorrupted(_)
                | StoreError::InvariantViolation { .. }
                | StoreError::KindMismatch { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_exhausted_display() {
        let error = StoreError::ResourceExhausted { capacity: 4 };
        assert_eq!(format!("{}", error), "arena exhausted at 4 slots");
    }

    #[test]
    fn test_out_of_range_display() {
        let error = StoreError::OutOfRange { index: SlotIndex(9), capacity: 8 };
        assert_eq!(format!("{}", error), "slot 9 out of range (capacity 8)");
    }

    #[test]
    fn test_invalid_key_length_display() {
        let error = StoreError::InvalidKeyLength(3);
        assert_eq!(format!("{}", error), "key must be 20 bytes, got 3");
    }

    #[test]
    fn test_logic_fault_classification() {
        assert!(StoreError::TreeCorrupted(SlotIndex(1)).is_logic_fault());
        assert!(StoreError::SlotStillLinked(SlotIndex(1)).is_logic_fault());
        assert!(!StoreError::ResourceExhausted { capacity: 1 }.is_logic_fault());
        assert!(!StoreError::KeyCollision { sort_key: 7 }.is_logic_fault());
        assert!(!StoreError::InvalidKeyLength(0).is_logic_fault());
    }
}
