//! Implementation blocks for keyed store data structures.

/// Fnv1aHasher: 64-bit FNV-1a.
pub mod fnv1a_hasher;

/// InsertOutcome helpers.
pub mod insert_outcome;

/// KeyedStore insert, get, update, remove and audit.
pub mod keyed_store;
