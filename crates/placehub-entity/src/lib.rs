//! # placehub-entity
//!
//! Domain models for PlaceHub. [`item`] holds the store-owned entity and
//! the request bodies that mutate it; [`tree`] holds the client-only view
//! structures derived from a flat item list.

pub mod item;
pub mod tree;

pub use item::{CreateItem, Item, RenameItem, UpdateItemPath};
pub use tree::{Forest, IndexEntry, NodeKind, TreeNode};
