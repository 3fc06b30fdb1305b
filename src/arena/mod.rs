//! Fixed-record slot arena.
//!
//! The arena owns the only storage for every record held by a keyed store.
//! Records live in uniformly sized [`Slot`](structs::slot::Slot)s and are
//! addressed by [`SlotIndex`](structs::slot_index::SlotIndex) handles instead
//! of references, so growing the backing vector never invalidates a handle.
//!
//! # Slot lifecycle
//!
//! ```text
//!   Free ──allocate──► Detached ──tree insert──► Linked
//!    ▲                    │  ▲                      │
//!    └──────release───────┘  └─────tree remove──────┘
//! ```
//!
//! Free indices are kept on a LIFO stack. When the stack runs dry the arena
//! either grows (doubling, optionally capped) or reports
//! `StoreError::ResourceExhausted`, depending on its
//! [`GrowthPolicy`](enums::growth_policy::GrowthPolicy).

/// Enumerations for slot contents and arena behaviour.
pub mod enums;

/// Implementation blocks for arena structs and enums.
pub mod impls;

/// Arena, slot and slot index definitions.
pub mod structs;
