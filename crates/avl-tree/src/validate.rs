//! Structural validators.
//!
//! [`is_avl_tree`] answers the classic question "is this a valid AVL tree?"
//! from values and shape alone. [`check_avl_tree`] additionally checks the
//! bookkeeping this crate maintains (cached heights, parent links, size) and
//! reports the first problem it finds.

use thiserror::Error;

use crate::avl::{AvlNode, AvlTree};
use crate::arena::Arena;
use crate::util::size;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AvlViolation {
    #[error("node {node} breaks binary search order")]
    OrderViolated { node: u32 },
    #[error("node {node} has subtree heights {left} and {right}")]
    Unbalanced { node: u32, left: i32, right: i32 },
    #[error("node {node} caches height {cached}, actual height is {actual}")]
    HeightMismatch { node: u32, cached: i32, actual: i32 },
    #[error("node {node} should have parent {expected:?}, found {found:?}")]
    BrokenParentLink {
        node: u32,
        expected: Option<u32>,
        found: Option<u32>,
    },
    #[error("tree records {recorded} values but {reachable} nodes are reachable")]
    SizeMismatch { recorded: usize, reachable: usize },
}

/// Whether `tree` satisfies strict BST ordering and the AVL height balance
/// at every node.
///
/// Heights are recomputed from the shape; cached heights and parent links
/// are ignored.
pub fn is_avl_tree<T: Ord>(tree: &AvlTree<T>) -> bool {
    fn inner<T: Ord>(
        arena: &Arena<AvlNode<T>>,
        node: Option<u32>,
        low: Option<&T>,
        high: Option<&T>,
    ) -> Option<i32> {
        let Some(i) = node else {
            return Some(-1);
        };
        let n = &arena[i];
        if low.is_some_and(|low| n.v <= *low) || high.is_some_and(|high| n.v >= *high) {
            return None;
        }
        let lh = inner(arena, n.l, low, Some(&n.v))?;
        let rh = inner(arena, n.r, Some(&n.v), high)?;
        if (lh - rh).abs() > 1 {
            return None;
        }
        Some(1 + lh.max(rh))
    }

    inner(tree.arena(), tree.origin_index(), None, None).is_some()
}

/// Full structural check of `tree`.
///
/// Walks the tree once, checking at every node: the parent link points back
/// at the node it hangs from, the value lies strictly inside the bounds
/// inherited from its ancestors, the cached height matches the shape, and
/// the two subtree heights differ by at most one. Finally the recorded size
/// must match the number of reachable nodes.
pub fn check_avl_tree<T: Ord>(tree: &AvlTree<T>) -> Result<(), AvlViolation> {
    fn inner<T: Ord>(
        arena: &Arena<AvlNode<T>>,
        node: Option<u32>,
        parent: Option<u32>,
        low: Option<&T>,
        high: Option<&T>,
    ) -> Result<i32, AvlViolation> {
        let Some(i) = node else {
            return Ok(-1);
        };
        let n = &arena[i];
        if n.p != parent {
            return Err(AvlViolation::BrokenParentLink {
                node: i,
                expected: parent,
                found: n.p,
            });
        }
        if low.is_some_and(|low| n.v <= *low) || high.is_some_and(|high| n.v >= *high) {
            return Err(AvlViolation::OrderViolated { node: i });
        }

        let left = inner(arena, n.l, Some(i), low, Some(&n.v))?;
        let right = inner(arena, n.r, Some(i), Some(&n.v), high)?;
        let actual = 1 + left.max(right);
        if n.h != actual {
            return Err(AvlViolation::HeightMismatch {
                node: i,
                cached: n.h,
                actual,
            });
        }
        if (left - right).abs() > 1 {
            return Err(AvlViolation::Unbalanced {
                node: i,
                left,
                right,
            });
        }
        Ok(actual)
    }

    let arena = tree.arena();
    let origin = tree.origin_index();
    inner(arena, origin, None, None, None)?;

    let reachable = size(arena, origin);
    if reachable != tree.len() {
        return Err(AvlViolation::SizeMismatch {
            recorded: tree.len(),
            reachable,
        });
    }
    Ok(())
}
