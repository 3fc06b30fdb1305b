use std::cmp::Ordering;
use crate::arena::enums::slot_state::SlotState;
use crate::arena::structs::arena::Arena;
use crate::arena::structs::slot_index::SlotIndex;
use crate::store::enums::store_error::StoreError;
use crate::tree::structs::tree_audit::TreeAudit;

type Link = Option<SlotIndex>;

/// Binary search for `key` below `root`.
pub fn find(arena: &Arena, root: Link, key: u64) -> Result<Link, StoreError>
{
    let mut current = root;
    while let Some(index) = current {
        let slot = arena.get(index)?;
        current = match key.cmp(&slot.sort_key) {
            Ordering::Equal => return Ok(Some(index)),
            Ordering::Less => slot.left,
            Ordering::Greater => slot.right,
        };
    }
    Ok(None)
}

/// Links the detached slot `node` into the tree by its stored sort key.
///
/// Returns the new root. If the key is already present the tree is left
/// untouched and `node` stays `Detached`; releasing it is up to the caller.
pub fn insert(arena: &mut Arena, root: Link, node: SlotIndex) -> Result<Link, StoreError>
{
    let slot = arena.get(node)?;
    if slot.state != SlotState::Detached {
        return Err(StoreError::InvariantViolation { index: node, reason: "inserted node is not detached" });
    }
    let key = slot.sort_key;
    insert_at(arena, root, node, key).map(Some)
}

/// Unlinks `node` from the tree, locating it by its stored sort key.
///
/// Returns the new root; `node` comes back `Detached` with no children. A
/// node with two children is replaced in place by its in-order successor, so
/// every other index keeps its own record. Removing a key that is not in the
/// tree leaves it unchanged.
pub fn remove(arena: &mut Arena, root: Link, node: SlotIndex) -> Result<Link, StoreError>
{
    let key = arena.get(node)?.sort_key;
    remove_at(arena, root, node, key)
}

/// Appends the indices below `root` to `out` in ascending key order.
pub fn in_order(arena: &Arena, root: Link, out: &mut Vec<SlotIndex>) -> Result<(), StoreError>
{
    let mut stack = Vec::new();
    let mut current = root;
    loop {
        while let Some(index) = current {
            stack.push(index);
            current = arena.get(index)?.left;
        }
        match stack.pop() {
            None => return Ok(()),
            Some(index) => {
                out.push(index);
                current = arena.get(index)?.right;
            }
        }
    }
}

/// Checks ordering, stored heights and balance factors of every node.
pub fn audit(arena: &Arena, root: Link) -> Result<TreeAudit, StoreError>
{
    let (nodes, height) = audit_at(arena, root, None, None)?;
    Ok(TreeAudit { nodes, height })
}

fn insert_at(arena: &mut Arena, root: Link, node: SlotIndex, key: u64) -> Result<SlotIndex, StoreError>
{
    let Some(current) = root else {
        let slot = arena.get_mut(node)?;
        slot.height = 1;
        slot.left = None;
        slot.right = None;
        slot.state = SlotState::Linked;
        return Ok(node);
    };

    let slot = arena.get(current)?;
    let (current_key, left, right) = (slot.sort_key, slot.left, slot.right);
    match key.cmp(&current_key) {
        Ordering::Equal => return Ok(current),
        Ordering::Less => {
            let new_left = insert_at(arena, left, node, key)?;
            arena.get_mut(current)?.left = Some(new_left);
        }
        Ordering::Greater => {
            let new_right = insert_at(arena, right, node, key)?;
            arena.get_mut(current)?.right = Some(new_right);
        }
    }

    update_height(arena, current)?;
    let balance = balance_factor(arena, current)?;

    if balance > 1 {
        let left = required(arena.get(current)?.left, current)?;
        if key < arena.get(left)?.sort_key {
            return rotate_right(arena, current);
        }
        let new_left = rotate_left(arena, left)?;
        arena.get_mut(current)?.left = Some(new_left);
        return rotate_right(arena, current);
    }

    if balance < -1 {
        let right = required(arena.get(current)?.right, current)?;
        if key > arena.get(right)?.sort_key {
            return rotate_left(arena, current);
        }
        let new_right = rotate_right(arena, right)?;
        arena.get_mut(current)?.right = Some(new_right);
        return rotate_left(arena, current);
    }

    Ok(current)
}

fn remove_at(arena: &mut Arena, root: Link, node: SlotIndex, key: u64) -> Result<Link, StoreError>
{
    let Some(current) = root else {
        return Ok(None);
    };

    let slot = arena.get(current)?;
    let (current_key, left, right) = (slot.sort_key, slot.left, slot.right);
    match key.cmp(&current_key) {
        Ordering::Less => {
            let new_left = remove_at(arena, left, node, key)?;
            arena.get_mut(current)?.left = new_left;
        }
        Ordering::Greater => {
            let new_right = remove_at(arena, right, node, key)?;
            arena.get_mut(current)?.right = new_right;
        }
        Ordering::Equal => {
            if current != node {
                return Err(StoreError::TreeCorrupted(current));
            }
            detach(arena, current)?;
            return match (left, right) {
                (None, only) | (only, None) => Ok(only),
                (Some(left), Some(right)) => {
                    let (new_right, successor) = take_min(arena, right)?;
                    let slot = arena.get_mut(successor)?;
                    slot.left = Some(left);
                    slot.right = new_right;
                    rebalance_after_remove(arena, successor).map(Some)
                }
            };
        }
    }

    rebalance_after_remove(arena, current).map(Some)
}

/// Unhooks the leftmost node below `root`, returning the rebalanced remainder and that node.
fn take_min(arena: &mut Arena, root: SlotIndex) -> Result<(Link, SlotIndex), StoreError>
{
    let slot = arena.get(root)?;
    let (left, right) = (slot.left, slot.right);
    match left {
        None => Ok((right, root)),
        Some(left) => {
            let (new_left, min) = take_min(arena, left)?;
            arena.get_mut(root)?.left = new_left;
            Ok((Some(rebalance_after_remove(arena, root)?), min))
        }
    }
}

fn rebalance_after_remove(arena: &mut Arena, node: SlotIndex) -> Result<SlotIndex, StoreError>
{
    update_height(arena, node)?;
    let balance = balance_factor(arena, node)?;

    if balance > 1 {
        let left = required(arena.get(node)?.left, node)?;
        if balance_factor(arena, left)? >= 0 {
            return rotate_right(arena, node);
        }
        let new_left = rotate_left(arena, left)?;
        arena.get_mut(node)?.left = Some(new_left);
        return rotate_right(arena, node);
    }

    if balance < -1 {
        let right = required(arena.get(node)?.right, node)?;
        if balance_factor(arena, right)? <= 0 {
            return rotate_left(arena, node);
        }
        let new_right = rotate_right(arena, right)?;
        arena.get_mut(node)?.right = Some(new_right);
        return rotate_left(arena, node);
    }

    Ok(node)
}

fn rotate_left(arena: &mut Arena, x: SlotIndex) -> Result<SlotIndex, StoreError>
{
    let y = required(arena.get(x)?.right, x)?;
    let t2 = arena.get(y)?.left;
    arena.get_mut(x)?.right = t2;
    arena.get_mut(y)?.left = Some(x);
    update_height(arena, x)?;
    update_height(arena, y)?;
    Ok(y)
}

fn rotate_right(arena: &mut Arena, y: SlotIndex) -> Result<SlotIndex, StoreError>
{
    let x = required(arena.get(y)?.left, y)?;
    let t2 = arena.get(x)?.right;
    arena.get_mut(y)?.left = t2;
    arena.get_mut(x)?.right = Some(y);
    update_height(arena, y)?;
    update_height(arena, x)?;
    Ok(x)
}

fn detach(arena: &mut Arena, node: SlotIndex) -> Result<(), StoreError>
{
    let slot = arena.get_mut(node)?;
    slot.state = SlotState::Detached;
    slot.height = 1;
    slot.left = None;
    slot.right = None;
    Ok(())
}

#[inline]
fn height(arena: &Arena, link: Link) -> Result<i32, StoreError>
{
    match link {
        None => Ok(0),
        Some(index) => Ok(arena.get(index)?.height),
    }
}

fn update_height(arena: &mut Arena, node: SlotIndex) -> Result<(), StoreError>
{
    let slot = arena.get(node)?;
    let (left, right) = (slot.left, slot.right);
    let new_height = 1 + height(arena, left)?.max(height(arena, right)?);
    arena.get_mut(node)?.height = new_height;
    Ok(())
}

fn balance_factor(arena: &Arena, node: SlotIndex) -> Result<i32, StoreError>
{
    let slot = arena.get(node)?;
    Ok(height(arena, slot.left)? - height(arena, slot.right)?)
}

#[inline]
fn required(link: Link, parent: SlotIndex) -> Result<SlotIndex, StoreError>
{
    link.ok_or(StoreError::TreeCorrupted(parent))
}

fn audit_at(arena: &Arena, link: Link, lower: Option<u64>, upper: Option<u64>) -> Result<(usize, i32), StoreError>
{
    let Some(index) = link else {
        return Ok((0, 0));
    };
    let slot = arena.get(index)?;
    if slot.state != SlotState::Linked {
        return Err(StoreError::InvariantViolation { index, reason: "tree node is not linked" });
    }
    // Strict bounds also reject cycles: a node revisited below itself meets its own key as a bound.
    if lower.is_some_and(|bound| slot.sort_key <= bound) || upper.is_some_and(|bound| slot.sort_key >= bound) {
        return Err(StoreError::InvariantViolation { index, reason: "sort keys out of order" });
    }
    let (left_nodes, left_height) = audit_at(arena, slot.left, lower, Some(slot.sort_key))?;
    let (right_nodes, right_height) = audit_at(arena, slot.right, Some(slot.sort_key), upper)?;
    let expected = 1 + left_height.max(right_height);
    if slot.height != expected {
        return Err(StoreError::InvariantViolation { index, reason: "stored height is stale" });
    }
    if (left_height - right_height).abs() > 1 {
        return Err(StoreError::InvariantViolation { index, reason: "balance factor out of range" });
    }
    Ok((1 + left_nodes + right_nodes, expected))
}
