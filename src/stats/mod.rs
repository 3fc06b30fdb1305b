//! Store statistics.
//!
//! Atomic counters for inserts, removals, arena growth and failures of the
//! tracker store. They are updated outside the store lock and read as a
//! [`Stats`](structs::stats::Stats) snapshot, which the binary prints as JSON.
//!
//! ```rust,ignore
//! use torrust_memstore::stats::enums::stats_event::StatsEvent;
//!
//! store.update_stats(StatsEvent::Failures, 1);
//! let stats = store.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters).
pub mod structs;
