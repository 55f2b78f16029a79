//! AVL tree: node type, rotation/rebalance primitives and the tree itself.

pub mod node_ref;
pub mod tree;
pub mod types;
pub mod util;

pub use node_ref::NodeRef;
pub use tree::{AvlTree, IntoIter, Iter};
pub use types::{AvlNode, AvlNodeLike};
pub use util::{balance_factor, height, rebalance, rotate_left, rotate_right};
