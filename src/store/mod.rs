//! Hash table whose buckets are index-based AVL trees.
//!
//! A [`KeyedStore`](structs::keyed_store::KeyedStore) owns one arena and a
//! fixed array of [`BUCKET_COUNT`](structs::keyed_store::BUCKET_COUNT) bucket
//! roots. A key is hashed with 64-bit FNV-1a; the hash picks the bucket and
//! yields the sort key that orders the bucket's tree. Worst-case bucket
//! lookups stay logarithmic even under heavy hash skew.
//!
//! Each store is monomorphic: a peer store only ever yields peer records, a
//! torrent store only torrent records. How two distinct keys that land on the
//! same sort key are handled is selected by
//! [`CollisionPolicy`](crate::config::enums::collision_policy::CollisionPolicy).

/// Store error and insert outcome enumerations.
pub mod enums;

/// Implementation blocks for the keyed store and its hasher.
pub mod impls;

/// Keyed store, hasher and audit report definitions.
pub mod structs;

/// Record and hasher traits the store is generic over.
pub mod traits;
