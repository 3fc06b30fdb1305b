use serde::{Deserialize, Serialize};
use crate::tracker::structs::auth_key::AuthKey;

/// Cumulative transfer totals of a private tracker account.
#[derive(Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct AccountRecord {
    pub auth_key: AuthKey,
    pub total_downloaded: u64,
    pub total_uploaded: u64,
}
