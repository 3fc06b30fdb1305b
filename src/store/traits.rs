//! Traits the keyed store is generic over.

/// Hashing of byte-string keys.
pub mod key_hasher;

/// Records that can live in a keyed store.
pub mod stored_record;
