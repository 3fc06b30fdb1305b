//! BitTorrent peer identifier.

/// The 20-byte peer id a client sends with every announce; key of the peer store.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct PeerId(pub [u8; 20]);
