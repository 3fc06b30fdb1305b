use serde::{Deserialize, Serialize};

/// Position of a slot inside an [`Arena`](crate::arena::structs::arena::Arena).
///
/// Stays valid across arena growth. An absent child is expressed as
/// `Option::<SlotIndex>::None` rather than a sentinel value.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct SlotIndex(pub u32);
