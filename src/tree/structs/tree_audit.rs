use serde::Serialize;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TreeAudit {
    pub nodes: usize,
    pub height: i32,
}
