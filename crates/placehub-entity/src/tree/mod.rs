//! Derived tree structures for hierarchical display.

pub mod forest;
pub mod node;

pub use forest::{Forest, IndexEntry};
pub use node::{NodeKind, TreeNode};
