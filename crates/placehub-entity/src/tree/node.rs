//! Folder and leaf nodes.

use serde::Serialize;

use placehub_core::types::NodeId;

use crate::item::Item;

/// Discriminates the two node variants without borrowing their payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// A folder derived from a path prefix.
    Folder,
    /// A leaf wrapping one item.
    Leaf,
}

/// A node in the derived forest.
///
/// Folder nodes have no identity in the store; they exist only because some
/// item path has their prefix.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    /// A folder node named after the last segment of its prefix.
    Folder {
        /// `folder-{prefix}`.
        id: NodeId,
        /// Last segment of the prefix.
        name: String,
        /// Child folders and leaves in materialization order.
        children: Vec<TreeNode>,
    },
    /// A leaf node wrapping exactly one item.
    Leaf {
        /// `item-{item id}`.
        id: NodeId,
        /// The wrapped item.
        item: Item,
    },
}

impl TreeNode {
    /// Create a leaf node for an item.
    pub fn leaf(item: Item) -> Self {
        Self::Leaf {
            id: NodeId::item(&item.id),
            item,
        }
    }

    /// The node id.
    pub fn id(&self) -> &NodeId {
        match self {
            Self::Folder { id, .. } | Self::Leaf { id, .. } => id,
        }
    }

    /// The label shown for this node: folder name or item display name.
    pub fn name(&self) -> &str {
        match self {
            Self::Folder { name, .. } => name,
            Self::Leaf { item, .. } => &item.display_name,
        }
    }

    /// Which variant this is.
    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Folder { .. } => NodeKind::Folder,
            Self::Leaf { .. } => NodeKind::Leaf,
        }
    }

    /// Whether this is a folder node.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder { .. })
    }

    /// Child nodes; always empty for leaves.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            Self::Folder { children, .. } => children,
            Self::Leaf { .. } => &[],
        }
    }

    /// The wrapped item, for leaves.
    pub fn item(&self) -> Option<&Item> {
        match self {
            Self::Folder { .. } => None,
            Self::Leaf { item, .. } => Some(item),
        }
    }

    /// Collect every item at or below this node, depth first.
    pub fn collect_items<'a>(&'a self, out: &mut Vec<&'a Item>) {
        match self {
            Self::Leaf { item, .. } => out.push(item),
            Self::Folder { children, .. } => {
                for child in children {
                    child.collect_items(out);
                }
            }
        }
    }
}
