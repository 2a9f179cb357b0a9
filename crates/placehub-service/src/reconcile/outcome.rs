//! Results of reconciliation operations.
//!
//! Remote failures are reported here rather than returned as errors. The
//! tree the user sees afterwards is whatever the mandatory re-fetch
//! returned, which reflects exactly the updates the store accepted.

use placehub_core::error::AppError;
use placehub_core::types::{ItemId, NodeId};

/// The update that stopped a sequential batch.
#[derive(Debug, Clone)]
pub struct UpdateFailure {
    /// The item whose update was rejected.
    pub item_id: ItemId,
    /// Why.
    pub error: AppError,
}

/// Per-item result of a batch of path updates (move, set path, folder rename).
///
/// Updates run in order and stop at the first failure. Earlier updates are
/// not rolled back; later ones are never attempted.
#[derive(Debug, Clone, Default)]
pub struct MoveReport {
    /// Destination path, or new folder prefix for folder renames. `None`
    /// when there was nothing to resolve, such as renaming an unknown folder.
    pub new_path: Option<String>,
    /// Items the store accepted, in order.
    pub applied: Vec<ItemId>,
    /// The first rejected update, if any.
    pub failed: Option<UpdateFailure>,
    /// Items after the failure that were never sent.
    pub not_attempted: Vec<ItemId>,
    /// Dragged nodes that were folders and therefore not moved.
    pub skipped: Vec<NodeId>,
    /// Set when the re-fetch after the batch failed; the previous tree stays.
    pub refresh_error: Option<AppError>,
}

impl MoveReport {
    /// Whether every update succeeded and the tree was refreshed.
    pub fn is_complete(&self) -> bool {
        self.failed.is_none() && self.refresh_error.is_none()
    }

    /// Number of updates that were attempted.
    pub fn attempted(&self) -> usize {
        self.applied.len() + usize::from(self.failed.is_some())
    }
}

/// Result of a single remote write followed by a re-fetch.
#[derive(Debug, Clone)]
pub struct UpdateOutcome<T> {
    /// Value returned by the store when the write succeeded.
    pub value: Option<T>,
    /// The write error, if the store rejected it.
    pub error: Option<AppError>,
    /// Set when the re-fetch failed.
    pub refresh_error: Option<AppError>,
}

impl<T> UpdateOutcome<T> {
    pub(crate) fn from_result(
        result: Result<T, AppError>,
        refresh_error: Option<AppError>,
    ) -> Self {
        match result {
            Ok(value) => Self {
                value: Some(value),
                error: None,
                refresh_error,
            },
            Err(error) => Self {
                value: None,
                error: Some(error),
                refresh_error,
            },
        }
    }

    /// Whether the write was accepted.
    pub fn is_applied(&self) -> bool {
        self.error.is_none()
    }

    /// Whether the write was accepted and the tree refreshed.
    pub fn is_complete(&self) -> bool {
        self.error.is_none() && self.refresh_error.is_none()
    }
}
