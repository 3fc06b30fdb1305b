use std::fmt;
use std::fmt::Formatter;
use crate::arena::structs::slot_index::SlotIndex;

impl SlotIndex {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl From<u32> for SlotIndex {
    fn from(index: u32) -> Self {
        SlotIndex(index)
    }
}

impl fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
