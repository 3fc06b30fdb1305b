//! Arena data structures.

/// The slot arena with its free stack.
pub mod arena;

/// A single record slot plus its tree fields.
pub mod slot;

/// Integer handle for a slot.
pub mod slot_index;
