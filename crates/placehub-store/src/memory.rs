//! In-memory item store backed by dashmap.
//!
//! Used by the CLI's `memory` backend and by tests. Supports injecting
//! failures for individual item updates and for fetches.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::{DashMap, DashSet};
use tracing::debug;
use uuid::Uuid;

use placehub_core::error::AppError;
use placehub_core::result::AppResult;
use placehub_core::types::{ContainerId, ItemId};
use placehub_entity::item::{CreateItem, Item, RenameItem, UpdateItemPath};

use crate::traits::ItemStore;

#[derive(Debug, Clone)]
struct StoredItem {
    seq: u64,
    item: Item,
}

/// In-memory item store.
///
/// Items are listed in insertion order, which stands in for the "natural
/// order" of a real engine.
#[derive(Debug, Clone, Default)]
pub struct MemoryItemStore {
    items: Arc<DashMap<ItemId, StoredItem>>,
    next_seq: Arc<AtomicU64>,
    failing_updates: Arc<DashSet<ItemId>>,
    fail_fetches: Arc<AtomicBool>,
}

impl MemoryItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with items.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let store = Self::new();
        for item in items {
            store.insert(item);
        }
        store
    }

    /// Create a store from a JSON file containing an array of items.
    pub fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        debug!(count = items.len(), "Seeded memory store");
        Ok(Self::with_items(items))
    }

    /// Insert or replace an item directly, bypassing failure injection.
    pub fn insert(&self, item: Item) {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.items.insert(item.id.clone(), StoredItem { seq, item });
    }

    /// Read an item directly, bypassing failure injection.
    pub fn get(&self, item_id: &ItemId) -> Option<Item> {
        self.items.get(item_id).map(|entry| entry.item.clone())
    }

    /// Make every future write to this item fail.
    pub fn fail_updates_for(&self, item_id: impl Into<ItemId>) {
        self.failing_updates.insert(item_id.into());
    }

    /// Make every future `list_items` call fail (or succeed again).
    pub fn set_fetch_failure(&self, fail: bool) {
        self.fail_fetches.store(fail, Ordering::SeqCst);
    }

    /// Remove all injected failures.
    pub fn clear_failures(&self) {
        self.failing_updates.clear();
        self.set_fetch_failure(false);
    }

    fn check_writable(&self, item_id: &ItemId, op: &str) -> AppResult<()> {
        if self.failing_updates.contains(item_id) {
            return Err(AppError::remote_update(format!(
                "{op} rejected for item '{item_id}'"
            )));
        }
        if !self.items.contains_key(item_id) {
            return Err(AppError::not_found(format!(
                "{op} failed: item '{item_id}' does not exist"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemStore for MemoryItemStore {
    fn backend_name(&self) -> &str {
        "memory"
    }

    async fn list_items(&self, container_id: &ContainerId) -> AppResult<Vec<Item>> {
        if self.fail_fetches.load(Ordering::SeqCst) {
            return Err(AppError::remote_fetch(format!(
                "listItems failed for container '{container_id}'"
            )));
        }

        let mut stored: Vec<StoredItem> = self
            .items
            .iter()
            .filter(|entry| &entry.item.container_id == container_id)
            .map(|entry| entry.value().clone())
            .collect();
        stored.sort_by_key(|s| s.seq);

        Ok(stored.into_iter().map(|s| s.item).collect())
    }

    async fn update_item_path(&self, item_id: &ItemId, update: &UpdateItemPath) -> AppResult<()> {
        self.check_writable(item_id, "updateItemPath")?;
        if update.path.is_empty() {
            return Err(AppError::remote_update("updateItemPath failed: empty path"));
        }

        if let Some(mut entry) = self.items.get_mut(item_id) {
            entry.item.path = update.path.clone();
            entry.item.container_id = update.container_id.clone();
            entry.item.updated_at = Some(Utc::now());
        }
        debug!(item_id = %item_id, path = %update.path, "Memory store path updated");
        Ok(())
    }

    async fn rename_item(&self, item_id: &ItemId, rename: &RenameItem) -> AppResult<()> {
        self.check_writable(item_id, "renameItem")?;

        if let Some(mut entry) = self.items.get_mut(item_id) {
            entry.item.display_name = rename.display_name.clone();
            entry.item.updated_at = Some(Utc::now());
        }
        Ok(())
    }

    async fn create_item(
        &self,
        container_id: &ContainerId,
        create: &CreateItem,
    ) -> AppResult<Item> {
        if create.path.is_empty() {
            return Err(AppError::remote_update("createItem failed: empty path"));
        }

        let now = Utc::now();
        let item = Item {
            id: ItemId::new(Uuid::now_v7().simple().to_string()),
            container_id: container_id.clone(),
            path: create.path.clone(),
            display_name: create.display_name.clone(),
            version: None,
            owner: None,
            created_at: Some(now),
            updated_at: Some(now),
        };
        self.insert(item.clone());
        Ok(item)
    }

    async fn delete_item(&self, item_id: &ItemId) -> AppResult<()> {
        self.check_writable(item_id, "deleteItem")?;
        self.items.remove(item_id);
        Ok(())
    }
}
