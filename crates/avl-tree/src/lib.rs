//! Arena-backed AVL tree.
//!
//! [`AvlTree`] is an ordered set over any `T: Ord`. Every node caches its
//! height, and every insert or removal recomputes heights bottom-up along the
//! visited path and restores the AVL balance condition with rotations.
//!
//! Nodes live in an [`Arena`] owned by the tree. Child and parent "pointers"
//! are `Option<u32>` slot indices, so the parent back-link is purely
//! navigational and never takes part in ownership.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`types`] | [`Node`] link trait (`p` / `l` / `r`) |
//! | [`arena`] | [`Arena`] slot storage with a free list |
//! | [`util`] | `first`, `last`, `next`, `prev`, `size` over any [`Node`] arena |
//! | [`avl`] | rotations, rebalance dispatch, [`AvlTree`], [`NodeRef`] |
//! | [`traverse`] | lazy depth-first and breadth-first index iterators |
//! | [`validate`] | [`is_avl_tree`] and [`check_avl_tree`] |
//! | [`print`] | box-layout pretty printer and SVG rendering |
//!
//! # Example
//!
//! ```
//! use avl_tree::AvlTree;
//!
//! let mut tree = AvlTree::new();
//! for v in [1, 2, 3] {
//!     tree.insert(v);
//! }
//!
//! let origin = tree.origin().unwrap();
//! assert_eq!(*origin.value(), 2);
//! assert_eq!(origin.height(), 1);
//! assert!(tree.iter().eq([1, 2, 3].iter()));
//! ```

pub mod arena;
pub mod avl;
pub mod error;
pub mod print;
pub mod traverse;
pub mod types;
pub mod util;
pub mod validate;

pub use arena::Arena;
pub use avl::{AvlNode, AvlNodeLike, AvlTree, IntoIter, Iter, NodeRef};
pub use error::{Error, Result};
pub use print::SvgOptions;
pub use types::Node;
pub use validate::{check_avl_tree, is_avl_tree, AvlViolation};
