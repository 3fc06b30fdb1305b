//! Implementation blocks for statistics operations.

/// Reading and updating the tracker store counters.
pub mod tracker_store;
