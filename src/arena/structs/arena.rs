use crate::arena::enums::growth_policy::GrowthPolicy;
use crate::arena::structs::slot::Slot;
use crate::arena::structs::slot_index::SlotIndex;

/// Growable array of uniform record slots plus a LIFO stack of free indices.
///
/// Every index below `capacity()` is either on the free stack (state `Free`)
/// or handed out (state `Detached` or `Linked`), never both.
#[derive(Clone, Debug)]
pub struct Arena {
    pub(crate) slots: Vec<Slot>,
    pub(crate) free_stack: Vec<SlotIndex>,
    pub(crate) in_use: usize,
    pub(crate) growth: GrowthPolicy,
    pub(crate) growths: u64,
}
