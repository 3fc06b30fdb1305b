use serde::Serialize;

/// Totals of a synthetic load run over a tracker store.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    pub threads: usize,
    pub operations: u64,
    pub inserted: u64,
    pub found: u64,
    pub removed: u64,
    pub failed: u64,
}
