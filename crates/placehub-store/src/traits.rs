//! Item store trait for the external engine that owns items.

use async_trait::async_trait;

use placehub_core::result::AppResult;
use placehub_core::types::{ContainerId, ItemId};
use placehub_entity::item::{CreateItem, Item, RenameItem, UpdateItemPath};

/// Read/update operations offered by the remote item store.
///
/// Writes report any non-success as [`ErrorKind::RemoteUpdateFailed`] and
/// reads as [`ErrorKind::RemoteFetchFailed`]. Implementations do not retry
/// and impose no client-side timeout.
///
/// [`ErrorKind::RemoteUpdateFailed`]: placehub_core::ErrorKind::RemoteUpdateFailed
/// [`ErrorKind::RemoteFetchFailed`]: placehub_core::ErrorKind::RemoteFetchFailed
#[async_trait]
pub trait ItemStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the backend name (e.g., "memory", "http").
    fn backend_name(&self) -> &str;

    /// List every item in a container, in the store's natural order.
    async fn list_items(&self, container_id: &ContainerId) -> AppResult<Vec<Item>>;

    /// Replace an item's path.
    async fn update_item_path(&self, item_id: &ItemId, update: &UpdateItemPath) -> AppResult<()>;

    /// Replace an item's display name.
    async fn rename_item(&self, item_id: &ItemId, rename: &RenameItem) -> AppResult<()>;

    /// Create a new item in a container.
    async fn create_item(&self, container_id: &ContainerId, create: &CreateItem)
    -> AppResult<Item>;

    /// Delete an item.
    async fn delete_item(&self, item_id: &ItemId) -> AppResult<()>;
}
