use std::fmt;

use crate::traverse;
use crate::util::{first, last, next, prev};

use super::tree::AvlTree;
use super::types::AvlNode;
use super::util::balance_factor;

/// Read-only view of one node of an [`AvlTree`].
///
/// Two refs are equal when they point at the same slot of the same tree.
pub struct NodeRef<'a, T> {
    tree: &'a AvlTree<T>,
    idx: u32,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a AvlTree<T>, idx: u32) -> Self {
        Self { tree, idx }
    }

    fn node(&self) -> &'a AvlNode<T> {
        &self.tree.arena()[self.idx]
    }

    fn at(&self, idx: Option<u32>) -> Option<Self> {
        idx.map(|i| Self::new(self.tree, i))
    }

    /// Arena slot of this node. Stable for the node's lifetime.
    pub fn index(&self) -> u32 {
        self.idx
    }

    pub fn value(&self) -> &'a T {
        &self.node().v
    }

    pub fn height(&self) -> i32 {
        self.node().h
    }

    pub fn balance_factor(&self) -> i32 {
        balance_factor(self.tree.arena(), Some(self.idx))
    }

    pub fn parent(&self) -> Option<Self> {
        self.at(self.node().p)
    }

    pub fn left(&self) -> Option<Self> {
        self.at(self.node().l)
    }

    pub fn right(&self) -> Option<Self> {
        self.at(self.node().r)
    }

    /// In-order successor, found by walking links.
    pub fn next(&self) -> Option<Self> {
        self.at(next(self.tree.arena(), self.idx))
    }

    /// In-order predecessor.
    pub fn prev(&self) -> Option<Self> {
        self.at(prev(self.tree.arena(), self.idx))
    }

    /// Smallest node of the subtree rooted here.
    pub fn min(&self) -> Self {
        Self::new(
            self.tree,
            first(self.tree.arena(), Some(self.idx)).unwrap_or(self.idx),
        )
    }

    /// Largest node of the subtree rooted here.
    pub fn max(&self) -> Self {
        Self::new(
            self.tree,
            last(self.tree.arena(), Some(self.idx)).unwrap_or(self.idx),
        )
    }

    pub fn inorder(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        tree.nodes(traverse::inorder(tree.arena(), Some(self.idx)))
    }

    pub fn preorder(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        tree.nodes(traverse::preorder(tree.arena(), Some(self.idx)))
    }

    pub fn postorder(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        tree.nodes(traverse::postorder(tree.arena(), Some(self.idx)))
    }

    pub fn levelorder(&self) -> impl Iterator<Item = NodeRef<'a, T>> + 'a {
        let tree = self.tree;
        tree.nodes(traverse::levelorder(tree.arena(), Some(self.idx)))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.idx == other.idx
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("index", &self.idx)
            .field("value", self.value())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AvlTree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
    }

    #[test]
    fn successor_and_predecessor_follow_value_order() {
        let tree = sample();
        let mut forward = Vec::new();
        let mut curr = tree.min();
        while let Some(n) = curr {
            forward.push(*n.value());
            curr = n.next();
        }
        assert_eq!(forward, vec![1, 3, 4, 5, 7, 8, 9]);

        let mut backward = Vec::new();
        let mut curr = tree.max();
        while let Some(n) = curr {
            backward.push(*n.value());
            curr = n.prev();
        }
        assert_eq!(backward, vec![9, 8, 7, 5, 4, 3, 1]);
    }

    #[test]
    fn subtree_queries_stay_inside_the_subtree() {
        let tree = sample();
        let left = tree.origin().unwrap().left().unwrap();
        assert_eq!(*left.value(), 3);
        assert_eq!(*left.min().value(), 1);
        assert_eq!(*left.max().value(), 4);
        let values: Vec<i32> = left.inorder().map(|n| *n.value()).collect();
        assert_eq!(values, vec![1, 3, 4]);
        let values: Vec<i32> = left.postorder().map(|n| *n.value()).collect();
        assert_eq!(values, vec![1, 4, 3]);
    }

    #[test]
    fn refs_from_different_trees_differ() {
        let a = sample();
        let b = sample();
        assert_eq!(a.origin(), a.search(&5));
        assert_ne!(a.origin(), b.origin());
    }

    #[test]
    fn leaf_reports_height_zero_and_balance_zero() {
        let tree = sample();
        let leaf = tree.search(&9).unwrap();
        assert_eq!(leaf.height(), 0);
        assert_eq!(leaf.balance_factor(), 0);
        assert!(leaf.left().is_none() && leaf.right().is_none());
        assert_eq!(leaf.parent().map(|p| *p.value()), Some(8));
    }
}
