//! Placed item entities.

pub mod model;

pub use model::{CreateItem, Item, RenameItem, UpdateItemPath};
