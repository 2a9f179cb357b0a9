//! Computes the path an item adopts when dropped on a folder.

use tracing::{debug, warn};

use placehub_core::types::NodeId;
use placehub_entity::tree::{Forest, NodeKind};

use crate::path::ROOT_SENTINEL;

/// Resolves drop targets to destination paths.
///
/// Resolution is fail-soft: an unknown target, or a target that is not a
/// folder, resolves to the `root` sentinel instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementResolver;

impl PlacementResolver {
    /// The path an item dropped on `target` must receive.
    ///
    /// `drop_index` is accepted for caller compatibility and deliberately
    /// ignored: sibling order is not stored, so items dropped into the same
    /// folder at different positions come back in whatever order the store
    /// lists them.
    pub fn resolve(
        forest: &Forest,
        dragged: &NodeId,
        target: Option<&NodeId>,
        drop_index: usize,
    ) -> String {
        let path = Self::target_path(forest, target);
        debug!(dragged = %dragged, drop_index, path = %path, "Resolved drop target");
        path
    }

    /// Full path of a target folder, or the `root` sentinel for no target.
    ///
    /// Also used to derive the initial path of an item created inside a
    /// folder.
    pub fn target_path(forest: &Forest, target: Option<&NodeId>) -> String {
        let Some(target) = target else {
            return ROOT_SENTINEL.to_string();
        };

        let Some(entry) = forest.entry(target).filter(|e| e.kind == NodeKind::Folder) else {
            warn!(target = %target, "Drop target is not a known folder, falling back to root");
            return ROOT_SENTINEL.to_string();
        };

        let ancestors = forest.ancestors(target);
        let mut names: Vec<&str> = ancestors
            .iter()
            .rev()
            .filter_map(|id| forest.entry(id))
            .map(|e| e.name.as_str())
            .collect();
        names.push(entry.name.as_str());
        names.join(".")
    }
}
