//! Enumerations for tracker records.

/// Last announce event of a peer: `started`, `completed` or `stopped`.
pub mod announce_event;
