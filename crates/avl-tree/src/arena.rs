//! Slot arena owning tree nodes.
//!
//! Indices handed out by [`Arena::alloc`] stay valid until the slot is
//! released, so nodes can refer to each other by `u32` index without any
//! shared ownership. Released slots are recycled by later allocations.

use std::ops::{Index, IndexMut};

/// Vector of node slots plus a free list of vacant indices.
#[derive(Clone, Debug)]
pub struct Arena<N> {
    slots: Vec<Option<N>>,
    free: Vec<u32>,
    len: usize,
}

impl<N> Arena<N> {
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Stores `node` and returns its slot index.
    pub fn alloc(&mut self, node: N) -> u32 {
        self.len += 1;
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    /// Vacates slot `idx`, handing the node back to the caller.
    ///
    /// Returns `None` if the slot is already vacant or out of range.
    pub fn release(&mut self, idx: u32) -> Option<N> {
        let node = self.slots.get_mut(idx as usize)?.take()?;
        self.free.push(idx);
        self.len -= 1;
        Some(node)
    }

    pub fn get(&self, idx: u32) -> Option<&N> {
        self.slots.get(idx as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, idx: u32) -> Option<&mut N> {
        self.slots.get_mut(idx as usize)?.as_mut()
    }

    /// Mutable access to two distinct occupied slots at once.
    pub fn pair_mut(&mut self, a: u32, b: u32) -> Option<(&mut N, &mut N)> {
        if a == b {
            return None;
        }
        let (lo, hi) = (a.min(b) as usize, a.max(b) as usize);
        if hi >= self.slots.len() {
            return None;
        }
        let (head, tail) = self.slots.split_at_mut(hi);
        let lo_node = head[lo].as_mut()?;
        let hi_node = tail[0].as_mut()?;
        Some(if a < b {
            (lo_node, hi_node)
        } else {
            (hi_node, lo_node)
        })
    }

    pub fn contains(&self, idx: u32) -> bool {
        self.get(idx).is_some()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.len = 0;
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<u32> for Arena<N> {
    type Output = N;

    fn index(&self, idx: u32) -> &N {
        match self.get(idx) {
            Some(node) => node,
            None => panic!("arena slot {idx} is vacant"),
        }
    }
}

impl<N> IndexMut<u32> for Arena<N> {
    fn index_mut(&mut self, idx: u32) -> &mut N {
        match self.get_mut(idx) {
            Some(node) => node,
            None => panic!("arena slot {idx} is vacant"),
        }
    }
}
