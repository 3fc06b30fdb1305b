//! Arena enumerations.

/// How the arena behaves once the free stack is empty.
pub mod growth_policy;

/// Record payload held by a slot.
pub mod record;

/// Membership state of a slot.
pub mod slot_state;

/// Kind of record a keyed store holds.
pub mod storage_kind;
