//! Lazy traversal iterators over node indices.
//!
//! Depth-first orders keep an explicit work stack whose size is bounded by
//! the tree height; level order keeps a FIFO queue seeded with the root.
//! Every iterator is pull-based, finite and fused: once it returns `None` it
//! keeps returning `None`.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::arena::Arena;
use crate::types::Node;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Order {
    /// Node, left, right.
    Pre,
    /// Left, node, right.
    In,
    /// Left, right, node.
    Post,
}

#[derive(Clone, Copy, Debug)]
enum Step {
    Descend(u32),
    Yield(u32),
}

/// Depth-first traversal in one of the three [`Order`]s.
#[derive(Clone, Debug)]
pub struct DepthFirst<'a, N> {
    arena: &'a Arena<N>,
    order: Order,
    work: Vec<Step>,
}

impl<'a, N: Node> DepthFirst<'a, N> {
    pub fn new(arena: &'a Arena<N>, root: Option<u32>, order: Order) -> Self {
        Self {
            arena,
            order,
            work: root.map(Step::Descend).into_iter().collect(),
        }
    }
}

impl<N: Node> Iterator for DepthFirst<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        loop {
            let i = match self.work.pop()? {
                Step::Yield(i) => return Some(i),
                Step::Descend(i) => i,
            };
            let node = &self.arena[i];
            let (l, r) = (node.l().map(Step::Descend), node.r().map(Step::Descend));
            // Pushed in reverse of the visiting order.
            match self.order {
                Order::Pre => {
                    self.work.extend(r);
                    self.work.extend(l);
                    return Some(i);
                }
                Order::In => {
                    self.work.extend(r);
                    self.work.push(Step::Yield(i));
                    self.work.extend(l);
                }
                Order::Post => {
                    self.work.push(Step::Yield(i));
                    self.work.extend(r);
                    self.work.extend(l);
                }
            }
        }
    }
}

impl<N: Node> FusedIterator for DepthFirst<'_, N> {}

/// Breadth-first traversal.
#[derive(Clone, Debug)]
pub struct LevelOrder<'a, N> {
    arena: &'a Arena<N>,
    queue: VecDeque<u32>,
}

impl<'a, N: Node> LevelOrder<'a, N> {
    pub fn new(arena: &'a Arena<N>, root: Option<u32>) -> Self {
        Self {
            arena,
            queue: root.into_iter().collect(),
        }
    }
}

impl<N: Node> Iterator for LevelOrder<'_, N> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let i = self.queue.pop_front()?;
        let node = &self.arena[i];
        self.queue.extend(node.l());
        self.queue.extend(node.r());
        Some(i)
    }
}

impl<N: Node> FusedIterator for LevelOrder<'_, N> {}

pub fn preorder<N: Node>(arena: &Arena<N>, root: Option<u32>) -> DepthFirst<'_, N> {
    DepthFirst::new(arena, root, Order::Pre)
}

pub fn inorder<N: Node>(arena: &Arena<N>, root: Option<u32>) -> DepthFirst<'_, N> {
    DepthFirst::new(arena, root, Order::In)
}

pub fn postorder<N: Node>(arena: &Arena<N>, root: Option<u32>) -> DepthFirst<'_, N> {
    DepthFirst::new(arena, root, Order::Post)
}

pub fn levelorder<N: Node>(arena: &Arena<N>, root: Option<u32>) -> LevelOrder<'_, N> {
    LevelOrder::new(arena, root)
}
