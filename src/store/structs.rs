//! Keyed store data structures.

/// The FNV-1a key hasher.
pub mod fnv1a_hasher;

/// The bucketed store itself.
pub mod keyed_store;

/// Whole-store invariant report.
pub mod store_audit;
