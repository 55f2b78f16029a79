//! Rotation primitives and rebalance dispatch.
//!
//! These only touch links and cached heights, never values, so they are
//! generic over any [`AvlNodeLike`] arena. The tree origin is passed in as
//! `&mut Option<u32>` and rewritten whenever a rotation lifts a new node into
//! the parentless position.

use log::trace;

use crate::arena::Arena;

use super::types::AvlNodeLike;

/// Cached height of `node`, `-1` for an absent subtree.
#[inline]
pub fn height<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>) -> i32 {
    node.map_or(-1, |i| arena[i].height())
}

/// Recomputes the cached height of `node` from its children.
#[inline]
pub fn update_height<N: AvlNodeLike>(arena: &mut Arena<N>, node: u32) {
    let h = 1 + height(arena, arena[node].l()).max(height(arena, arena[node].r()));
    arena[node].set_height(h);
}

/// `height(left) - height(right)`, `0` for an absent node.
#[inline]
pub fn balance_factor<N: AvlNodeLike>(arena: &Arena<N>, node: Option<u32>) -> i32 {
    match node {
        None => 0,
        Some(i) => height(arena, arena[i].l()) - height(arena, arena[i].r()),
    }
}

/// Puts `new` where `old` hangs: takes over its parent and the parent's
/// child link, or the origin if `old` had no parent.
fn transplant<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    origin: &mut Option<u32>,
    old: u32,
    new: u32,
) {
    let p = arena[old].p();
    arena[new].set_p(p);
    match p {
        Some(p) => {
            if arena[p].l() == Some(old) {
                arena[p].set_l(Some(new));
            } else {
                arena[p].set_r(Some(new));
            }
        }
        None => *origin = Some(new),
    }
}

/// Left rotation around `root`; its right child becomes the local root.
///
/// Returns the new local root. Heights of the two rotated nodes are
/// refreshed; ancestors are left to the caller.
pub fn rotate_left<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    origin: &mut Option<u32>,
    root: Option<u32>,
) -> Option<u32> {
    let root = root?;
    let Some(new_root) = arena[root].r() else {
        debug_assert!(false, "left rotation of node {root} without right child");
        return Some(root);
    };

    let rl = arena[new_root].l();
    arena[root].set_r(rl);
    if let Some(rl) = rl {
        arena[rl].set_p(Some(root));
    }

    arena[new_root].set_l(Some(root));
    transplant(arena, origin, root, new_root);
    arena[root].set_p(Some(new_root));

    update_height(arena, root);
    update_height(arena, new_root);
    trace!("rotate_left: node {root} -> local root {new_root}");
    Some(new_root)
}

/// Right rotation around `root`; its left child becomes the local root.
pub fn rotate_right<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    origin: &mut Option<u32>,
    root: Option<u32>,
) -> Option<u32> {
    let root = root?;
    let Some(new_root) = arena[root].l() else {
        debug_assert!(false, "right rotation of node {root} without left child");
        return Some(root);
    };

    let lr = arena[new_root].r();
    arena[root].set_l(lr);
    if let Some(lr) = lr {
        arena[lr].set_p(Some(root));
    }

    arena[new_root].set_r(Some(root));
    transplant(arena, origin, root, new_root);
    arena[root].set_p(Some(new_root));

    update_height(arena, root);
    update_height(arena, new_root);
    trace!("rotate_right: node {root} -> local root {new_root}");
    Some(new_root)
}

/// Restores the balance condition at `node`, whose children must already be
/// balanced, and returns the root of the resulting subtree.
pub fn rebalance<N: AvlNodeLike>(
    arena: &mut Arena<N>,
    origin: &mut Option<u32>,
    node: u32,
) -> u32 {
    let bf = balance_factor(arena, Some(node));
    debug_assert!(
        (-2..=2).contains(&bf),
        "balance factor {bf} at node {node} is out of reach of a single rebalance"
    );

    match bf {
        2 => {
            let l = arena[node].l();
            if balance_factor(arena, l) >= 0 {
                trace!("rebalance: left-left at node {node}");
            } else {
                trace!("rebalance: left-right at node {node}");
                rotate_left(arena, origin, l);
            }
            rotate_right(arena, origin, Some(node)).unwrap_or(node)
        }
        -2 => {
            let r = arena[node].r();
            if balance_factor(arena, r) <= 0 {
                trace!("rebalance: right-right at node {node}");
            } else {
                trace!("rebalance: right-left at node {node}");
                rotate_right(arena, origin, r);
            }
            rotate_left(arena, origin, Some(node)).unwrap_or(node)
        }
        _ => node,
    }
}
