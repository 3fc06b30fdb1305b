use crate::arena::enums::record::Record;
use crate::arena::enums::slot_state::SlotState;
use crate::arena::structs::slot_index::SlotIndex;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Ordering key inside the bucket tree.
    pub sort_key: u64,
    /// AVL height of the subtree rooted here, 1 for a leaf.
    pub height: i32,
    pub left: Option<SlotIndex>,
    pub right: Option<SlotIndex>,
    /// Next record sharing this slot's sort key (chained collision policy).
    pub overflow: Option<SlotIndex>,
    pub state: SlotState,
    pub record: Record,
}
