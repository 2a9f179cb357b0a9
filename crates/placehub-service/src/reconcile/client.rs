//! Issues remote mutations and re-derives local state from a fresh read.
//!
//! Every operation ends with a full re-fetch, whether or not its writes
//! succeeded. No local patch is ever applied ahead of that read.

use std::sync::Arc;

use tracing::{debug, info, warn};

use placehub_core::error::{AppError, ErrorKind};
use placehub_core::events::{Notice, NoticeLevel};
use placehub_core::result::AppResult;
use placehub_core::types::{ContainerId, ItemId, NodeId};
use placehub_entity::item::{CreateItem, Item, RenameItem, UpdateItemPath};
use placehub_entity::tree::NodeKind;
use placehub_store::ItemStore;

use super::outcome::{MoveReport, UpdateFailure, UpdateOutcome};
use super::state::{TreeSnapshot, TreeState};
use crate::path::{ItemPath, PathCodec};
use crate::tree::PlacementResolver;

/// Orchestrates moves, renames, creation and deletion against the store.
#[derive(Debug, Clone)]
pub struct ReconciliationClient {
    /// The remote item store.
    store: Arc<dyn ItemStore>,
    /// The container whose items form the namespace.
    container_id: ContainerId,
    /// Shared snapshot and notice channel.
    state: Arc<TreeState>,
}

impl ReconciliationClient {
    /// Creates a new reconciliation client.
    pub fn new(
        store: Arc<dyn ItemStore>,
        container_id: ContainerId,
        state: Arc<TreeState>,
    ) -> Self {
        Self {
            store,
            container_id,
            state,
        }
    }

    /// The container this client operates on.
    pub fn container_id(&self) -> &ContainerId {
        &self.container_id
    }

    /// The shared state.
    pub fn state(&self) -> &Arc<TreeState> {
        &self.state
    }

    /// The current read-only snapshot.
    pub fn snapshot(&self) -> Arc<TreeSnapshot> {
        self.state.current()
    }

    /// Re-fetch the item list and replace the snapshot.
    ///
    /// On failure the previous snapshot stays in place and a notice is
    /// published; a later refresh can retry.
    pub async fn refresh(&self) -> AppResult<Arc<TreeSnapshot>> {
        match self.store.list_items(&self.container_id).await {
            Ok(items) => {
                let snapshot = self.state.publish(items);
                info!(
                    container_id = %self.container_id,
                    generation = snapshot.generation,
                    items = snapshot.items.len(),
                    "Tree refreshed"
                );
                Ok(snapshot)
            }
            Err(e) => {
                let err = with_kind(e, ErrorKind::RemoteFetchFailed);
                warn!(container_id = %self.container_id, error = %err, "Tree refresh failed");
                self.state.notify(Notice::from_error(&err));
                Err(err)
            }
        }
    }

    /// Move dragged items into a folder, or to the top level when `target`
    /// is `None`.
    ///
    /// The destination is resolved once, from the first dragged id, and
    /// every dragged item receives it. Folder nodes in `dragged` are
    /// skipped. Updates run one at a time and stop at the first failure;
    /// the tree is re-fetched afterwards in every case. `drop_index` does
    /// not influence the result.
    pub async fn move_items(
        &self,
        dragged: &[NodeId],
        target: Option<&NodeId>,
        drop_index: usize,
    ) -> MoveReport {
        let snapshot = self.snapshot();
        let new_path = match dragged.first() {
            Some(first) => PlacementResolver::resolve(&snapshot.forest, first, target, drop_index),
            None => PlacementResolver::target_path(&snapshot.forest, target),
        };

        let mut skipped = Vec::new();
        let mut updates = Vec::with_capacity(dragged.len());
        for node in dragged {
            match node.item_id() {
                Some(item_id) => updates.push((item_id, new_path.clone())),
                None => {
                    debug!(node_id = %node, "Skipping non-item node in move");
                    skipped.push(node.clone());
                }
            }
        }

        let mut report = self
            .apply_path_updates(Some(new_path.clone()), updates)
            .await;
        report.skipped = skipped;

        if report.failed.is_none() && !report.applied.is_empty() {
            self.state.notify(Notice::info(format!(
                "Moved {} item(s) to '{new_path}'",
                report.applied.len()
            )));
        }
        report
    }

    /// Set an item's path directly.
    ///
    /// Typed input is validated before it gets here, see
    /// [`ItemPath::from_input`].
    pub async fn set_path(&self, item_id: &ItemId, path: &ItemPath) -> MoveReport {
        let path = path.as_str().to_string();
        self.apply_path_updates(Some(path.clone()), vec![(item_id.clone(), path)])
            .await
    }

    /// Rename a folder by moving every item currently under it.
    ///
    /// Folders are not stored, so the new name is realized by rewriting the
    /// folder's prefix in each descendant item's path. An unknown or
    /// non-folder id changes nothing; the tree is still re-fetched.
    pub async fn rename_folder(&self, folder: &NodeId, new_name: &str) -> AppResult<MoveReport> {
        if !PathCodec::is_valid_segment(new_name) {
            return Err(AppError::invalid_path(format!(
                "Folder name '{new_name}' must be non-empty and contain only letters and digits"
            )));
        }

        let snapshot = self.snapshot();
        let is_folder = snapshot
            .forest
            .entry(folder)
            .is_some_and(|e| e.kind == NodeKind::Folder);
        if !is_folder {
            warn!(node_id = %folder, "Rename target is not a known folder");
            self.state.notify(Notice::warning(format!(
                "'{folder}' is not a folder; nothing was renamed"
            )));
            return Ok(self.apply_path_updates(None, Vec::new()).await);
        }

        let old_prefix = ItemPath::parse(&PlacementResolver::target_path(
            &snapshot.forest,
            Some(folder),
        ))?;
        let new_prefix = match old_prefix.parent() {
            Some(parent) => parent.child(new_name)?,
            None => ItemPath::parse(new_name)?,
        };

        let updates: Vec<(ItemId, String)> = snapshot
            .forest
            .items_under(folder)
            .into_iter()
            .filter_map(|item| {
                PathCodec::replace_prefix(&item.path, old_prefix.as_str(), new_prefix.as_str())
                    .filter(|new_path| new_path != &item.path)
                    .map(|new_path| (item.id.clone(), new_path))
            })
            .collect();

        info!(
            folder = %old_prefix,
            new_prefix = %new_prefix,
            items = updates.len(),
            "Renaming folder"
        );
        Ok(self
            .apply_path_updates(Some(new_prefix.into_inner()), updates)
            .await)
    }

    /// Change an item's display name. The path is never touched.
    ///
    /// The name is sent exactly as given; only an all-whitespace name is
    /// rejected.
    pub async fn rename(
        &self,
        item_id: &ItemId,
        new_display_name: &str,
    ) -> AppResult<UpdateOutcome<()>> {
        if new_display_name.trim().is_empty() {
            return Err(AppError::validation("Display name cannot be empty"));
        }

        let rename = RenameItem {
            display_name: new_display_name.to_string(),
        };
        let result = self
            .store
            .rename_item(item_id, &rename)
            .await
            .map_err(|e| with_kind(e, ErrorKind::RemoteUpdateFailed));
        match &result {
            Ok(()) => info!(item_id = %item_id, display_name = %new_display_name, "Item renamed"),
            Err(e) => self.report_write_failure("rename", item_id, e),
        }

        let refresh_error = self.refresh().await.err();
        Ok(UpdateOutcome::from_result(result, refresh_error))
    }

    /// Create an item inside a folder, or at the top level when `target`
    /// is `None`. The initial path is derived exactly as for a move.
    pub async fn create_under(
        &self,
        target: Option<&NodeId>,
        display_name: &str,
    ) -> AppResult<UpdateOutcome<Item>> {
        if display_name.trim().is_empty() {
            return Err(AppError::validation("Display name cannot be empty"));
        }

        let path = PlacementResolver::target_path(&self.snapshot().forest, target);
        let create = CreateItem {
            display_name: display_name.to_string(),
            path,
        };
        let result = self
            .store
            .create_item(&self.container_id, &create)
            .await
            .map_err(|e| with_kind(e, ErrorKind::RemoteUpdateFailed));
        match &result {
            Ok(item) => info!(item_id = %item.id, path = %item.path, "Item created"),
            Err(e) => {
                warn!(path = %create.path, error = %e, "Item creation failed");
                self.state.notify(Notice::from_error(e));
            }
        }

        let refresh_error = self.refresh().await.err();
        Ok(UpdateOutcome::from_result(result, refresh_error))
    }

    /// Delete an item.
    pub async fn delete(&self, item_id: &ItemId) -> UpdateOutcome<()> {
        let result = self
            .store
            .delete_item(item_id)
            .await
            .map_err(|e| with_kind(e, ErrorKind::RemoteUpdateFailed));
        match &result {
            Ok(()) => info!(item_id = %item_id, "Item deleted"),
            Err(e) => self.report_write_failure("delete", item_id, e),
        }

        let refresh_error = self.refresh().await.err();
        UpdateOutcome::from_result(result, refresh_error)
    }

    /// Send path updates sequentially, awaiting each before the next, then
    /// re-fetch regardless of how far the batch got.
    async fn apply_path_updates(
        &self,
        new_path: Option<String>,
        updates: Vec<(ItemId, String)>,
    ) -> MoveReport {
        let mut report = MoveReport {
            new_path,
            ..MoveReport::default()
        };

        let mut pending = updates.into_iter();
        for (item_id, path) in pending.by_ref() {
            let update = UpdateItemPath {
                container_id: self.container_id.clone(),
                path,
            };
            match self.store.update_item_path(&item_id, &update).await {
                Ok(()) => {
                    debug!(item_id = %item_id, path = %update.path, "Item path updated");
                    report.applied.push(item_id);
                }
                Err(e) => {
                    let error = with_kind(e, ErrorKind::RemoteUpdateFailed);
                    warn!(
                        item_id = %item_id,
                        path = %update.path,
                        error = %error,
                        "Item path update failed"
                    );
                    report.failed = Some(UpdateFailure { item_id, error });
                    break;
                }
            }
        }
        report.not_attempted = pending.map(|(item_id, _)| item_id).collect();

        if let Some(failure) = &report.failed {
            let total = report.applied.len() + 1 + report.not_attempted.len();
            self.state.notify(Notice::new(
                NoticeLevel::Error,
                Some(failure.error.kind),
                format!(
                    "Updated {} of {} item(s); '{}' failed: {}",
                    report.applied.len(),
                    total,
                    failure.item_id,
                    failure.error.message
                ),
            ));
        }

        report.refresh_error = self.refresh().await.err();
        report
    }

    fn report_write_failure(&self, op: &str, item_id: &ItemId, err: &AppError) {
        warn!(item_id = %item_id, error = %err, "Item {op} failed");
        self.state.notify(Notice::from_error(err));
    }
}

/// Re-tag a store error with the kind this operation reports.
fn with_kind(err: AppError, kind: ErrorKind) -> AppError {
    if err.kind == kind {
        return err;
    }
    AppError {
        kind,
        message: err.message.clone(),
        source: Some(Box::new(err)),
    }
}
