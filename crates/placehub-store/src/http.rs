//! HTTP/JSON client for the external item engine.

use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use tracing::debug;

use placehub_core::error::{AppError, ErrorKind};
use placehub_core::result::AppResult;
use placehub_core::types::{ContainerId, ItemId};
use placehub_entity::item::{CreateItem, Item, RenameItem, UpdateItemPath};

use crate::traits::ItemStore;

/// Item store that talks to the engine's REST API.
#[derive(Debug, Clone)]
pub struct HttpItemStore {
    client: Client,
    base_url: Url,
}

impl HttpItemStore {
    /// Create a client for the engine at `base_url`.
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| AppError::configuration(format!("Invalid store base URL: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::configuration(format!(
                "Store base URL '{base_url}' cannot be a base"
            )));
        }
        Ok(Self {
            client: Client::new(),
            base_url,
        })
    }

    /// Build an endpoint URL by appending percent-encoded segments.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    fn check_write(op: &str, result: reqwest::Result<Response>) -> AppResult<Response> {
        let response = result.map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteUpdateFailed,
                format!("{op} request failed: {e}"),
                e,
            )
        })?;
        if !response.status().is_success() {
            return Err(AppError::remote_update(format!(
                "{op} returned {}",
                response.status()
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl ItemStore for HttpItemStore {
    fn backend_name(&self) -> &str {
        "http"
    }

    async fn list_items(&self, container_id: &ContainerId) -> AppResult<Vec<Item>> {
        let url = self.endpoint(&["containers", container_id.as_str(), "items"]);
        debug!(url = %url, "listItems");

        let response = self.client.get(url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteFetchFailed,
                format!("listItems request failed: {e}"),
                e,
            )
        })?;
        if !response.status().is_success() {
            return Err(AppError::remote_fetch(format!(
                "listItems returned {}",
                response.status()
            )));
        }

        response.json::<Vec<Item>>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteFetchFailed,
                format!("listItems returned an unreadable body: {e}"),
                e,
            )
        })
    }

    async fn update_item_path(&self, item_id: &ItemId, update: &UpdateItemPath) -> AppResult<()> {
        let url = self.endpoint(&["items", item_id.as_str(), "path"]);
        let result = self.client.put(url).json(update).send().await;
        Self::check_write("updateItemPath", result)?;
        Ok(())
    }

    async fn rename_item(&self, item_id: &ItemId, rename: &RenameItem) -> AppResult<()> {
        let url = self.endpoint(&["items", item_id.as_str(), "name"]);
        let result = self.client.put(url).json(rename).send().await;
        Self::check_write("renameItem", result)?;
        Ok(())
    }

    async fn create_item(
        &self,
        container_id: &ContainerId,
        create: &CreateItem,
    ) -> AppResult<Item> {
        let url = self.endpoint(&["containers", container_id.as_str(), "items"]);
        let result = self.client.post(url).json(create).send().await;
        let response = Self::check_write("createItem", result)?;
        response.json::<Item>().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::RemoteUpdateFailed,
                format!("createItem returned an unreadable body: {e}"),
                e,
            )
        })
    }

    async fn delete_item(&self, item_id: &ItemId) -> AppResult<()> {
        let url = self.endpoint(&["items", item_id.as_str()]);
        let result = self.client.delete(url).send().await;
        Self::check_write("deleteItem", result)?;
        Ok(())
    }
}
