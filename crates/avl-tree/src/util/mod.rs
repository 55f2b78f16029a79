//! Link-walking helpers shared by every [`Node`] layout.
//!
//! None of these look at node values: they only follow `p` / `l` / `r`
//! links, so they work for any arena of binary tree nodes.

use crate::arena::Arena;
use crate::types::Node;

#[inline]
pub(crate) fn get_p<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &Arena<N>, idx: u32) -> Option<u32> {
    arena[idx].r()
}

/// Leftmost node under `root`.
pub fn first<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost node under `root`.
pub fn last<N: Node>(arena: &Arena<N>, root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &Arena<N>, node: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, node) {
        return first(arena, Some(r));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &Arena<N>, node: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, node) {
        return last(arena, Some(l));
    }
    let mut curr = node;
    let mut p = get_p(arena, node);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

fn size_inner<N: Node>(arena: &Arena<N>, root: u32) -> usize {
    1 + get_l(arena, root).map_or(0, |l| size_inner(arena, l))
        + get_r(arena, root).map_or(0, |r| size_inner(arena, r))
}

/// Number of nodes reachable from `root`.
pub fn size<N: Node>(arena: &Arena<N>, root: Option<u32>) -> usize {
    root.map_or(0, |r| size_inner(arena, r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Link {
        p: Option<u32>,
        l: Option<u32>,
        r: Option<u32>,
    }

    impl Node for Link {
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

    //        0
    //      /   \
    //     1     2
    //      \   /
    //       3 4
    fn fixture() -> Arena<Link> {
        let mut arena = Arena::new();
        for _ in 0..5 {
            arena.alloc(Link::default());
        }
        arena[0].l = Some(1);
        arena[0].r = Some(2);
        arena[1].p = Some(0);
        arena[1].r = Some(3);
        arena[2].p = Some(0);
        arena[2].l = Some(4);
        arena[3].p = Some(1);
        arena[4].p = Some(2);
        arena
    }

    fn walk<F: Fn(&Arena<Link>, u32) -> Option<u32>>(
        arena: &Arena<Link>,
        start: Option<u32>,
        step: F,
    ) -> Vec<u32> {
        let mut out = Vec::new();
        let mut curr = start;
        while let Some(i) = curr {
            out.push(i);
            curr = step(arena, i);
        }
        out
    }

    #[test]
    fn successor_walk_is_in_order() {
        let arena = fixture();
        assert_eq!(first(&arena, Some(0)), Some(1));
        assert_eq!(walk(&arena, Some(1), next), vec![1, 3, 0, 4, 2]);
    }

    #[test]
    fn predecessor_walk_is_reverse_in_order() {
        let arena = fixture();
        assert_eq!(last(&arena, Some(0)), Some(2));
        assert_eq!(walk(&arena, Some(2), prev), vec![2, 4, 0, 3, 1]);
    }

    #[test]
    fn size_counts_reachable_nodes() {
        let arena = fixture();
        assert_eq!(size(&arena, Some(0)), 5);
        assert_eq!(size(&arena, Some(2)), 2);
        assert_eq!(size(&arena, None), 0);
        assert_eq!(first(&arena, None), None);
    }
}
