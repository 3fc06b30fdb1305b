use serde::{Deserialize, Serialize};
use crate::config::enums::collision_policy::CollisionPolicy;

/// Sizing and hashing settings shared by the peer and torrent stores.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub peers_capacity: usize,
    pub torrents_capacity: usize,
    pub growth_enabled: bool,
    /// Upper bound for doubling growth, unbounded when absent.
    pub max_capacity: Option<usize>,
    pub collision_policy: CollisionPolicy,
}
