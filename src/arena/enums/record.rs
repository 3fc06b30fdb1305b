use crate::tracker::structs::account_record::AccountRecord;
use crate::tracker::structs::peer_record::PeerRecord;
use crate::tracker::structs::torrent_record::TorrentRecord;

/// Payload of a slot. Free slots hold `Vacant`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Record {
    #[default]
    Vacant,
    Peer(PeerRecord),
    Torrent(TorrentRecord),
    Account(AccountRecord),
}
