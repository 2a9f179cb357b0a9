//! Process-wide snapshot of items and their derived forest.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use tokio::sync::{broadcast, watch};

use placehub_core::events::Notice;
use placehub_core::types::NodeId;
use placehub_entity::item::Item;
use placehub_entity::tree::Forest;

use crate::tree::TreeBuilder;

/// One successful read of the store and the forest derived from it.
#[derive(Debug, Clone)]
pub struct TreeSnapshot {
    /// Increases with every published snapshot; 0 before the first fetch.
    pub generation: u64,
    /// The flat list exactly as the store returned it.
    pub items: Vec<Item>,
    /// The forest built from `items`.
    pub forest: Forest,
    /// When the read completed. `None` before the first fetch.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl TreeSnapshot {
    /// The snapshot shown before anything has been fetched.
    pub fn empty() -> Self {
        Self {
            generation: 0,
            items: Vec::new(),
            forest: Forest::empty(),
            fetched_at: None,
        }
    }

    /// Build a snapshot from a freshly fetched item list.
    pub fn from_items(generation: u64, items: Vec<Item>) -> Self {
        let forest = TreeBuilder::build(&items);
        Self {
            generation,
            items,
            forest,
            fetched_at: Some(Utc::now()),
        }
    }

    /// Keep only the selected node ids that still exist in this snapshot.
    ///
    /// Node ids derive from paths and item ids, so a selection survives a
    /// rebuild exactly when the node it names still exists.
    pub fn retain_selection(&self, selection: &[NodeId]) -> Vec<NodeId> {
        let mut seen = HashSet::new();
        selection
            .iter()
            .filter(|id| self.forest.contains(id) && seen.insert((*id).clone()))
            .cloned()
            .collect()
    }
}

/// Holder of the current snapshot and the notice channel.
///
/// Snapshots are replaced wholesale, never merged. When two fetches race,
/// the one that completes last is the one that stays.
#[derive(Debug)]
pub struct TreeState {
    tree_tx: watch::Sender<Arc<TreeSnapshot>>,
    notice_tx: broadcast::Sender<Notice>,
    generation: AtomicU64,
}

impl TreeState {
    /// Create a state holding an empty snapshot.
    pub fn new(notice_buffer: usize) -> Self {
        let (tree_tx, _) = watch::channel(Arc::new(TreeSnapshot::empty()));
        let (notice_tx, _) = broadcast::channel(notice_buffer.max(1));
        Self {
            tree_tx,
            notice_tx,
            generation: AtomicU64::new(0),
        }
    }

    /// The current snapshot.
    pub fn current(&self) -> Arc<TreeSnapshot> {
        self.tree_tx.borrow().clone()
    }

    /// Rebuild from a fetched list and replace the current snapshot.
    pub fn publish(&self, items: Vec<Item>) -> Arc<TreeSnapshot> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let snapshot = Arc::new(TreeSnapshot::from_items(generation, items));
        self.tree_tx.send_replace(snapshot.clone());
        snapshot
    }

    /// Subscribe to snapshot replacements.
    pub fn subscribe_tree(&self) -> watch::Receiver<Arc<TreeSnapshot>> {
        self.tree_tx.subscribe()
    }

    /// Publish a transient notice. Dropped when nobody is listening.
    pub fn notify(&self, notice: Notice) {
        let _ = self.notice_tx.send(notice);
    }

    /// Subscribe to notices.
    pub fn subscribe_notices(&self) -> broadcast::Receiver<Notice> {
        self.notice_tx.subscribe()
    }
}

impl Default for TreeState {
    fn default() -> Self {
        Self::new(64)
    }
}
