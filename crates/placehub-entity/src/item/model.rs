//! Item entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use placehub_core::types::{ContainerId, ItemId};

/// An addressable entity placed in the virtual hierarchy.
///
/// Owned by the remote store. Only `path` and `display_name` are ever
/// written by this system.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Opaque, stable identifier.
    pub id: ItemId,
    /// The container this item belongs to.
    pub container_id: ContainerId,
    /// Dot-segmented placement path, e.g. `team.web`.
    pub path: String,
    /// Human-readable name.
    pub display_name: String,
    /// Domain version tag, opaque to placement.
    #[serde(default)]
    pub version: Option<String>,
    /// Owner, opaque to placement.
    #[serde(default)]
    pub owner: Option<String>,
    /// When the item was created.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the item was last updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    /// Display name.
    pub display_name: String,
    /// Initial placement path.
    pub path: String,
}

/// Body of a path update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemPath {
    /// The container the item lives in.
    pub container_id: ContainerId,
    /// The new path.
    pub path: String,
}

/// Body of a display-name update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameItem {
    /// The new display name.
    pub display_name: String,
}
