use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::path::Path;

use log::{debug, trace};

use crate::arena::Arena;
use crate::error::Result;
use crate::print::{self, SvgOptions};
use crate::traverse::{self, DepthFirst};
use crate::util::{first, last};
use crate::validate::check_avl_tree;

use super::node_ref::NodeRef;
use super::types::AvlNode;
use super::util::{height, rebalance, update_height};

/// AVL tree set.
///
/// Values are unique: inserting a value that is already present leaves the
/// tree untouched. All nodes live in an [`Arena`] owned by the tree; the
/// tree's root node is called the *origin*.
#[derive(Clone)]
pub struct AvlTree<T> {
    arena: Arena<AvlNode<T>>,
    origin: Option<u32>,
    size: usize,
}

impl<T> AvlTree<T> {
    pub const fn new() -> Self {
        Self {
            arena: Arena::new(),
            origin: None,
            size: 0,
        }
    }

    /// Wraps a hand-assembled node graph without checking any invariant.
    ///
    /// Meant for feeding deliberately broken trees to the validator.
    #[doc(hidden)]
    pub fn from_raw_parts(arena: Arena<AvlNode<T>>, origin: Option<u32>) -> Self {
        let size = arena.len();
        Self {
            arena,
            origin,
            size,
        }
    }

    pub(crate) fn arena(&self) -> &Arena<AvlNode<T>> {
        &self.arena
    }

    pub(crate) fn origin_index(&self) -> Option<u32> {
        self.origin
    }

    /// Number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Alias of [`len`](Self::len).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.origin.is_none()
    }

    /// Height of the whole tree, `-1` when empty.
    pub fn height(&self) -> i32 {
        height(&self.arena, self.origin)
    }

    /// The root node.
    pub fn origin(&self) -> Option<NodeRef<'_, T>> {
        self.origin.map(|i| NodeRef::new(self, i))
    }

    /// Looks up a node by arena index.
    pub fn node(&self, idx: u32) -> Option<NodeRef<'_, T>> {
        self.arena.contains(idx).then(|| NodeRef::new(self, idx))
    }

    pub fn min(&self) -> Option<NodeRef<'_, T>> {
        first(&self.arena, self.origin).map(|i| NodeRef::new(self, i))
    }

    pub fn max(&self) -> Option<NodeRef<'_, T>> {
        last(&self.arena, self.origin).map(|i| NodeRef::new(self, i))
    }

    pub(crate) fn nodes<'a, I>(&'a self, indices: I) -> impl Iterator<Item = NodeRef<'a, T>> + 'a
    where
        I: Iterator<Item = u32> + 'a,
    {
        indices.map(move |i| NodeRef::new(self, i))
    }

    /// Left, node, right.
    pub fn inorder(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        self.nodes(traverse::inorder(&self.arena, self.origin))
    }

    /// Node, left, right.
    pub fn preorder(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        self.nodes(traverse::preorder(&self.arena, self.origin))
    }

    /// Left, right, node.
    pub fn postorder(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        self.nodes(traverse::postorder(&self.arena, self.origin))
    }

    /// Breadth-first, top level first, left to right within a level.
    pub fn levelorder(&self) -> impl Iterator<Item = NodeRef<'_, T>> + '_ {
        self.nodes(traverse::levelorder(&self.arena, self.origin))
    }

    /// Values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            arena: &self.arena,
            nodes: traverse::inorder(&self.arena, self.origin),
            len: self.size,
        }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.origin = None;
        self.size = 0;
    }

    /// Renders the tree as SVG and writes it to `path`.
    ///
    /// Returns the rendered document.
    pub fn visualize<P: AsRef<Path>>(&self, path: P, options: &SvgOptions) -> Result<String>
    where
        T: fmt::Display,
    {
        let svg = print::svg(self, options);
        std::fs::write(path.as_ref(), &svg)?;
        debug!(
            "visualize: wrote {} nodes to {}",
            self.size,
            path.as_ref().display()
        );
        Ok(svg)
    }

    fn alloc(&mut self, value: T, parent: Option<u32>) -> u32 {
        let idx = self.arena.alloc(AvlNode::with_parent(value, parent));
        self.size += 1;
        trace!("alloc: node {idx} under {parent:?}");
        idx
    }

    fn release(&mut self, idx: u32) -> Option<T> {
        let node = self.arena.release(idx)?;
        self.size -= 1;
        trace!("release: node {idx}");
        Some(node.v)
    }
}

impl<T: Ord> AvlTree<T> {
    /// Adds `value`. Returns `false`, dropping `value`, if an equal value is
    /// already present.
    pub fn insert(&mut self, value: T) -> bool {
        let before = self.size;
        self.origin = self.insert_at(self.origin, value);
        self.size > before
    }

    fn insert_at(&mut self, root: Option<u32>, value: T) -> Option<u32> {
        let Some(root) = root else {
            return Some(self.alloc(value, None));
        };

        match value.cmp(&self.arena[root].v) {
            Ordering::Equal => {
                trace!("insert: value already held by node {root}");
                return Some(root);
            }
            Ordering::Greater => {
                let r = self.arena[root].r;
                let r = match r {
                    None => self.alloc(value, Some(root)),
                    Some(r) => self.insert_at(Some(r), value).unwrap_or(r),
                };
                self.arena[root].r = Some(r);
            }
            Ordering::Less => {
                let l = self.arena[root].l;
                let l = match l {
                    None => self.alloc(value, Some(root)),
                    Some(l) => self.insert_at(Some(l), value).unwrap_or(l),
                };
                self.arena[root].l = Some(l);
            }
        }

        update_height(&mut self.arena, root);
        Some(rebalance(&mut self.arena, &mut self.origin, root))
    }

    /// Removes `value`. Returns whether it was present.
    pub fn remove(&mut self, value: &T) -> bool {
        self.take(value).is_some()
    }

    /// Removes `value` and hands it back.
    pub fn take(&mut self, value: &T) -> Option<T> {
        let mut removed = None;
        self.origin = self.remove_at(self.origin, value, &mut removed);
        removed
    }

    fn remove_at(&mut self, root: Option<u32>, value: &T, removed: &mut Option<T>) -> Option<u32> {
        let root = root?;

        match value.cmp(&self.arena[root].v) {
            Ordering::Less => {
                let l = self.arena[root].l;
                self.arena[root].l = self.remove_at(l, value, removed);
            }
            Ordering::Greater => {
                let r = self.arena[root].r;
                self.arena[root].r = self.remove_at(r, value, removed);
            }
            Ordering::Equal => {
                let node = &self.arena[root];
                let (p, l, r) = (node.p, node.l, node.r);

                if let (Some(l), Some(_)) = (l, r) {
                    // The predecessor is the rightmost node of the left
                    // subtree. After the swap it holds `value`, which is still
                    // the largest value there, so removing `value` from the
                    // left subtree walks the same path and splices it out.
                    let pred = last(&self.arena, Some(l)).unwrap_or(l);
                    debug!("remove: node {root} takes the value of predecessor {pred}");
                    if let Some((held, donor)) = self.arena.pair_mut(root, pred) {
                        std::mem::swap(&mut held.v, &mut donor.v);
                    }
                    self.arena[root].l = self.remove_at(Some(l), value, removed);
                } else {
                    let child = l.or(r);
                    if let Some(c) = child {
                        self.arena[c].p = p;
                    }
                    if self.origin == Some(root) {
                        self.origin = child;
                    }
                    *removed = self.release(root);
                    return child;
                }
            }
        }

        update_height(&mut self.arena, root);
        Some(rebalance(&mut self.arena, &mut self.origin, root))
    }

    /// Finds the node holding `value`.
    ///
    /// On a miss this does *not* return `None`: it returns the last node
    /// visited, i.e. the node under which `value` would be inserted. `None`
    /// means the tree is empty. Use [`get`](Self::get) or
    /// [`contains`](Self::contains) for exact lookups.
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        let mut curr = self.origin?;
        loop {
            let node = &self.arena[curr];
            let next = match value.cmp(&node.v) {
                Ordering::Equal => None,
                Ordering::Less => node.l,
                Ordering::Greater => node.r,
            };
            match next {
                Some(next) => curr = next,
                None => return Some(NodeRef::new(self, curr)),
            }
        }
    }

    pub fn get(&self, value: &T) -> Option<&T> {
        self.search(value)
            .map(|n| n.value())
            .filter(|v| *v == value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.get(value).is_some()
    }

    /// Runs the full structural check, see [`check_avl_tree`].
    pub fn validate(&self) -> Result<()> {
        check_avl_tree(self)?;
        Ok(())
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: fmt::Display> fmt::Display for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print::render(self, |v| v.to_string()))
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print::render(self, |v| format!("{v:?}")))
    }
}

/// Borrowing in-order iterator over the values of an [`AvlTree`].
pub struct Iter<'a, T> {
    arena: &'a Arena<AvlNode<T>>,
    nodes: DepthFirst<'a, AvlNode<T>>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let arena = self.arena;
        let i = self.nodes.next()?;
        self.len -= 1;
        Some(&arena[i].v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Owning in-order iterator over the values of an [`AvlTree`].
pub struct IntoIter<T> {
    arena: Arena<AvlNode<T>>,
    order: std::vec::IntoIter<u32>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let i = self.order.next()?;
        self.arena.release(i).map(|n| n.v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for AvlTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let order: Vec<u32> = traverse::inorder(&self.arena, self.origin).collect();
        IntoIter {
            arena: self.arena,
            order: order.into_iter(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values<T: Clone>(tree: &AvlTree<T>) -> Vec<T> {
        tree.iter().cloned().collect()
    }

    #[test]
    fn new_tree_is_empty() {
        let tree = AvlTree::<i32>::new();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.height(), -1);
        assert!(tree.origin().is_none());
        assert!(tree.search(&1).is_none());
        assert!(tree.min().is_none());
        assert!(tree.max().is_none());
    }

    #[test]
    fn insert_reports_new_values_only() {
        let mut tree = AvlTree::new();
        assert!(tree.insert(3));
        assert!(tree.insert(1));
        assert!(!tree.insert(3));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn nodes_keep_parent_links_after_rotation() {
        let tree: AvlTree<i32> = [1, 2, 3].into_iter().collect();
        let origin = tree.origin().unwrap();
        assert!(origin.parent().is_none());
        assert_eq!(origin.left().unwrap().parent(), Some(origin));
        assert_eq!(origin.right().unwrap().parent(), Some(origin));
    }

    #[test]
    fn take_returns_the_removed_value() {
        let mut tree: AvlTree<String> = ["b", "a", "c"].iter().map(|s| s.to_string()).collect();
        assert_eq!(tree.take(&"b".to_string()), Some("b".to_string()));
        assert_eq!(tree.take(&"b".to_string()), None);
        assert_eq!(values(&tree), vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn removing_origin_leaf_empties_tree() {
        let mut tree = AvlTree::new();
        tree.insert(7);
        assert!(tree.remove(&7));
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert!(tree.search(&7).is_none());
    }

    #[test]
    fn removing_origin_with_one_child_promotes_it() {
        let mut tree: AvlTree<i32> = [1, 2].into_iter().collect();
        assert!(tree.remove(&1));
        let origin = tree.origin().unwrap();
        assert_eq!(*origin.value(), 2);
        assert!(origin.parent().is_none());
        assert_eq!(origin.height(), 0);
    }

    #[test]
    fn arena_slots_are_recycled() {
        let mut tree: AvlTree<i32> = (0..10).collect();
        for v in 0..5 {
            tree.remove(&v);
        }
        assert_eq!(tree.arena().len(), 5);
        for v in 10..15 {
            tree.insert(v);
        }
        assert_eq!(tree.arena().len(), 10);
        assert!(tree.node(9).is_some());
        assert!(tree.node(10).is_none());
    }

    #[test]
    fn clear_resets_everything() {
        let mut tree: AvlTree<i32> = (0..32).collect();
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.len(), 0);
        assert_eq!(tree.iter().next(), None);
        tree.insert(1);
        assert_eq!(values(&tree), vec![1]);
    }

    #[test]
    fn iterators_report_exact_len() {
        let tree: AvlTree<i32> = (0..20).rev().collect();
        let mut it = tree.iter();
        assert_eq!(it.len(), 20);
        it.next();
        assert_eq!(it.len(), 19);
        let owned = tree.into_iter();
        assert_eq!(owned.len(), 20);
        assert_eq!(owned.collect::<Vec<_>>(), (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn validate_accepts_built_tree() {
        let tree: AvlTree<i32> = (0..100).map(|v| (v * 37) % 101).collect();
        assert!(tree.validate().is_ok());
    }
}
