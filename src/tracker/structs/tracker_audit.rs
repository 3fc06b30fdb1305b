use serde::Serialize;
use crate::store::structs::store_audit::StoreAudit;

/// Audit reports of both stores, taken under a single lock acquisition.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackerAudit {
    pub peers: StoreAudit,
    pub torrents: StoreAudit,
}
