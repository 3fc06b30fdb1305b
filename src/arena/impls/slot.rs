use crate::arena::enums::record::Record;
use crate::arena::enums::slot_state::SlotState;
use crate::arena::enums::storage_kind::StorageKind;
use crate::arena::structs::slot::Slot;

impl Slot {
    pub fn vacant() -> Slot {
        Slot {
            sort_key: 0,
            height: 0,
            left: None,
            right: None,
            overflow: None,
            state: SlotState::Free,
            record: Record::Vacant,
        }
    }

    pub fn kind(&self) -> Option<StorageKind> {
        self.record.kind()
    }

    /// Turns the slot back into a single-node tree with no overflow entries.
    pub fn reset_links(&mut self) {
        self.height = 1;
        self.left = None;
        self.right = None;
        self.overflow = None;
    }
}

impl Default for Slot {
    fn default() -> Self {
        Self::vacant()
    }
}
