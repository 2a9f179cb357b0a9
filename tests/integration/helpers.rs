//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::{Mutex, oneshot};

use placehub_core::result::AppResult;
use placehub_core::types::{ContainerId, ItemId};
use placehub_entity::item::{CreateItem, Item, RenameItem, UpdateItemPath};
use placehub_service::{ReconciliationClient, TreeState};
use placehub_store::ItemStore;
use placehub_store::memory::MemoryItemStore;

/// Container used by every test.
pub const CONTAINER: &str = "workspace";

/// Test application context
pub struct TestApp {
    /// The backing store, for direct inspection and failure injection
    pub store: MemoryItemStore,
    /// The client under test
    pub client: ReconciliationClient,
}

impl TestApp {
    /// Create a test application over a seeded memory store and load the
    /// first snapshot
    pub async fn new(items: &[(&str, &str)]) -> Self {
        let store = MemoryItemStore::with_items(items.iter().map(|(id, path)| item(id, path)));
        let client = ReconciliationClient::new(
            Arc::new(store.clone()),
            ContainerId::from(CONTAINER),
            Arc::new(TreeState::new(16)),
        );
        client
            .refresh()
            .await
            .expect("Initial refresh should succeed");
        Self { store, client }
    }

    /// Current stored path of an item
    pub fn path_of(&self, id: &str) -> String {
        self.store
            .get(&ItemId::from(id))
            .expect("Item should exist")
            .path
    }

    /// Current stored display name of an item
    pub fn name_of(&self, id: &str) -> String {
        self.store
            .get(&ItemId::from(id))
            .expect("Item should exist")
            .display_name
    }
}

/// Build an item in the test container, named after its id
pub fn item(id: &str, path: &str) -> Item {
    Item {
        id: ItemId::from(id),
        container_id: ContainerId::from(CONTAINER),
        path: path.to_string(),
        display_name: format!("Item {id}"),
        version: Some("1.0.0".to_string()),
        owner: Some("tester".to_string()),
        created_at: None,
        updated_at: None,
    }
}

/// A store whose next `list_items` reads immediately but does not return
/// until the gate is opened, simulating a slow response.
#[derive(Debug)]
pub struct GatedStore {
    pub inner: MemoryItemStore,
    gate: Mutex<Option<oneshot::Receiver<()>>>,
}

impl GatedStore {
    /// Wrap a store; returns the sender that releases the held read
    pub fn new(inner: MemoryItemStore) -> (Self, oneshot::Sender<()>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                inner,
                gate: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl ItemStore for GatedStore {
    fn backend_name(&self) -> &str {
        "gated"
    }

    async fn list_items(&self, container_id: &ContainerId) -> AppResult<Vec<Item>> {
        let items = self.inner.list_items(container_id).await?;
        let gate = self.gate.lock().await.take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        Ok(items)
    }

    async fn update_item_path(&self, item_id: &ItemId, update: &UpdateItemPath) -> AppResult<()> {
        self.inner.update_item_path(item_id, update).await
    }

    async fn rename_item(&self, item_id: &ItemId, rename: &RenameItem) -> AppResult<()> {
        self.inner.rename_item(item_id, rename).await
    }

    async fn create_item(
        &self,
        container_id: &ContainerId,
        create: &CreateItem,
    ) -> AppResult<Item> {
        self.inner.create_item(container_id, create).await
    }

    async fn delete_item(&self, item_id: &ItemId) -> AppResult<()> {
        self.inner.delete_item(item_id).await
    }
}
