//! Shared domain types used across PlaceHub crates.

pub mod id;

pub use id::{ContainerId, ItemId, NodeId};
