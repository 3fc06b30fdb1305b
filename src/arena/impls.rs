//! Implementation blocks for arena data structures.

/// Arena allocation, release, access and growth.
pub mod arena;

/// GrowthPolicy: next-capacity computation.
pub mod growth_policy;

/// Record: kind inspection and default construction.
pub mod record;

/// Slot: construction and link helpers.
pub mod slot;

/// SlotIndex: conversions and Display.
pub mod slot_index;
