/// 20-byte authentication key of a private tracker account.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Default)]
pub struct AuthKey(pub [u8; 20]);
