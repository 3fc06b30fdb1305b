//! AVL tree addressed entirely by arena slot indices.
//!
//! Nodes live in [`Arena`](crate::arena::structs::arena::Arena) slots and link
//! to their children through `Option<SlotIndex>`. There are no parent links:
//! every mutating operation takes the current root and returns the new one,
//! and rebalancing happens on the way back up the recursion.
//!
//! All functions are free functions over an arena and a root so that one
//! arena can carry many independent trees, one per hash bucket.

/// Find, insert, remove, traversal and audit.
pub mod avl;

/// Audit report structure.
pub mod structs;
