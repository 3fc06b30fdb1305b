//! Peer (user) record stored in the peer keyed store.

use std::net::Ipv4Addr;
use serde::{Deserialize, Serialize};
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::auth_key::AuthKey;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;

/// A peer as last announced.
///
/// The torrent and account back-references are stored as keys into their own
/// stores, never as slot indices: slot indices are only meaningful inside the
/// arena that issued them.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerRecord {
    pub peer_id: PeerId,
    pub address: Ipv4Addr,
    pub port: u16,
    pub downloaded: u64,
    pub uploaded: u64,
    pub left: u64,
    pub event: AnnounceEvent,
    /// Number of peers the client asked for.
    pub numwant: u32,
    pub torrent: Option<InfoHash>,
    pub account: Option<AuthKey>,
}
