use crate::arena::structs::slot_index::SlotIndex;

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum InsertOutcome {
    /// A new slot now holds the record.
    Inserted(SlotIndex),
    /// The key was already stored; nothing changed.
    AlreadyPresent(SlotIndex),
}
