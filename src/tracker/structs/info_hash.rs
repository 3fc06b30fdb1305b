//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash, the key of the torrent store.
///
/// Rendered as 40 lowercase hex characters by `Display` and serde.
///
/// ```rust
/// use torrust_memstore::tracker::structs::info_hash::InfoHash;
///
/// let hash: InfoHash = "0102030405060708090a0b0c0d0e0f1011121314".parse().unwrap();
/// assert_eq!(hash.0[0], 1);
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct InfoHash(pub [u8; 20]);
