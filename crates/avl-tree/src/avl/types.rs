use crate::types::Node;

/// AVL tree node: value, links and cached height.
#[derive(Clone, Debug)]
pub struct AvlNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub v: T,
    /// Height of the subtree rooted here. A leaf has height `0`, an absent
    /// child counts as `-1`.
    pub h: i32,
}

impl<T> AvlNode<T> {
    pub fn new(v: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            v,
            h: 0,
        }
    }

    pub fn with_parent(v: T, p: Option<u32>) -> Self {
        Self { p, ..Self::new(v) }
    }
}

impl<T> Node for AvlNode<T> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

/// AVL-specific node behavior.
pub trait AvlNodeLike: Node {
    fn height(&self) -> i32;
    fn set_height(&mut self, h: i32);
}

impl<T> AvlNodeLike for AvlNode<T> {
    fn height(&self) -> i32 {
        self.h
    }

    fn set_height(&mut self, h: i32) {
        self.h = h;
    }
}
