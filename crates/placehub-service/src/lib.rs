//! # placehub-service
//!
//! The path-addressing and reconciliation engine. [`path`] parses and
//! formats dot-segmented paths, [`tree`] derives a forest from a flat item
//! list and resolves drop targets to paths, and [`reconcile`] pushes
//! changes to the remote store and re-derives state from its response.
//!
//! Services follow constructor injection; the store is provided at
//! construction time via an `Arc`.

pub mod path;
pub mod reconcile;
pub mod tree;

pub use path::{ItemPath, PathCodec, ROOT_SENTINEL};
pub use reconcile::{
    MoveReport, ReconciliationClient, TreeSnapshot, TreeState, UpdateFailure, UpdateOutcome,
};
pub use tree::{PlacementResolver, TreeBuilder};
