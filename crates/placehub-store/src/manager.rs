//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use placehub_core::config::store::StoreConfig;
use placehub_core::error::AppError;
use placehub_core::result::AppResult;
use placehub_core::types::{ContainerId, ItemId};
use placehub_entity::item::{CreateItem, Item, RenameItem, UpdateItemPath};

use crate::traits::ItemStore;

/// Store manager that wraps the configured item store.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    inner: Arc<dyn ItemStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    pub fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn ItemStore> = match config.backend.as_str() {
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory item store");
                let store = match &config.seed_file {
                    Some(path) => crate::memory::MemoryItemStore::from_seed_file(path)?,
                    None => crate::memory::MemoryItemStore::new(),
                };
                Arc::new(store)
            }
            #[cfg(feature = "http")]
            "http" => {
                info!(base_url = %config.base_url, "Initializing HTTP item store");
                Arc::new(crate::http::HttpItemStore::new(&config.base_url)?)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store backend: '{other}'. Supported: memory, http"
                )));
            }
        };

        Ok(Self { inner })
    }
}

#[async_trait]
impl ItemStore for StoreManager {
    fn backend_name(&self) -> &str {
        self.inner.backend_name()
    }

    async fn list_items(&self, container_id: &ContainerId) -> AppResult<Vec<Item>> {
        self.inner.list_items(container_id).await
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
