//! Forest snapshot with a node index.

use std::collections::HashMap;

use serde::Serialize;

use placehub_core::types::NodeId;

use super::node::{NodeKind, TreeNode};
use crate::item::Item;

/// Index record for one node: its parent link, label and variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Enclosing folder, `None` for roots.
    pub parent: Option<NodeId>,
    /// Folder name or item display name.
    pub name: String,
    /// Folder or leaf.
    pub kind: NodeKind,
}

/// An immutable, ordered forest of tree nodes.
///
/// A forest is never edited after construction; callers replace it with a
/// freshly built one.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Forest {
    /// Top-level nodes in materialization order.
    pub roots: Vec<TreeNode>,
    #[serde(skip)]
    index: HashMap<NodeId, IndexEntry>,
}

impl Forest {
    /// Wrap a list of root nodes and index every node beneath them.
    pub fn new(roots: Vec<TreeNode>) -> Self {
        let mut index = HashMap::new();
        for root in &roots {
            index_node(root, None, &mut index);
        }
        Self { roots, index }
    }

    /// An empty forest.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Index record for a node.
    pub fn entry(&self, id: &NodeId) -> Option<&IndexEntry> {
        self.index.get(id)
    }

    /// Whether a node with this id exists.
    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Find a node by id.
    pub fn find(&self, id: &NodeId) -> Option<&TreeNode> {
        if !self.contains(id) {
            return None;
        }
        find_in(&self.roots, id)
    }

    /// Ancestor folder ids of a node, nearest first.
    pub fn ancestors(&self, id: &NodeId) -> Vec<NodeId> {
        let mut chain = Vec::new();
        let mut cursor = self.entry(id).and_then(|e| e.parent.clone());
        while let Some(parent) = cursor {
            cursor = self.entry(&parent).and_then(|e| e.parent.clone());
            chain.push(parent);
        }
        chain
    }

    /// Every wrapped item, depth first.
    pub fn leaves(&self) -> Vec<&Item> {
        let mut out = Vec::new();
        for root in &self.roots {
            root.collect_items(&mut out);
        }
        out
    }

    /// Items at or below a node. Empty when the node is unknown.
    pub fn items_under(&self, id: &NodeId) -> Vec<&Item> {
        let mut out = Vec::new();
        if let Some(node) = self.find(id) {
            node.collect_items(&mut out);
        }
        out
    }

    /// Number of leaf nodes.
    pub fn leaf_count(&self) -> usize {
        self.leaves().len()
    }

    /// Number of folder nodes.
    pub fn folder_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&TreeNode> = self.roots.iter().collect();
        while let Some(node) = stack.pop() {
            if node.is_folder() {
                count += 1;
            }
            stack.extend(node.children());
        }
        count
    }
}

fn index_node(node: &TreeNode, parent: Option<&NodeId>, index: &mut HashMap<NodeId, IndexEntry>) {
    index.insert(
        node.id().clone(),
        IndexEntry {
            parent: parent.cloned(),
            name: node.name().to_string(),
            kind: node.kind(),
        },
    );
    for child in node.children() {
        index_node(child, Some(node.id()), index);
    }
}

fn find_in<'a>(nodes: &'a [TreeNode], id: &NodeId) -> Option<&'a TreeNode> {
    for node in nodes {
        if node.id() == id {
            return Some(node);
        }
        if let Some(found) = find_in(node.children(), id) {
            return Some(found);
        }
    }
    None
}
