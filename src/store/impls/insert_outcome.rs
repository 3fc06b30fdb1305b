use crate::arena::structs::slot_index::SlotIndex;
use crate::store::enums::insert_outcome::InsertOutcome;

impl InsertOutcome {
    pub fn is_inserted(&self) -> bool {
        matches!(self, InsertOutcome::Inserted(_))
    }

    pub fn index(&self) -> SlotIndex {
        match self {
            InsertOutcome::Inserted(index) | InsertOutcome::AlreadyPresent(index) => *index,
        }
    }
}
