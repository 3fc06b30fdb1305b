/// Result of a successful tree audit.
pub mod tree_audit;
