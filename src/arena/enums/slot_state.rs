use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Clone, Copy, Debug, Default)]
pub enum SlotState {
    /// On the free stack.
    #[default]
    Free,
    /// Allocated but not reachable from any bucket.
    Detached,
    /// Reachable from exactly one bucket, as a tree node or overflow entry.
    Linked,
}
