//! Derives a forest of folder and leaf nodes from a flat item list.

use std::collections::HashMap;

use tracing::{debug, warn};

use placehub_core::types::NodeId;
use placehub_entity::item::Item;
use placehub_entity::tree::{Forest, TreeNode};

use crate::path::PathCodec;

/// Builds a fresh [`Forest`] on every call. Nothing is carried between builds.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeBuilder;

/// Arena slot used while assembling; converted to owned nodes at the end.
enum Slot {
    Folder {
        prefix: String,
        name: String,
        children: Vec<usize>,
    },
    Leaf(Item),
}

impl TreeBuilder {
    /// Build the forest.
    ///
    /// Every prefix of every path gets a folder node, created once per
    /// prefix. A single-segment item becomes a root-level sibling of the
    /// folder of the same name; a multi-segment item becomes a child of the
    /// folder for its own full path, so items sharing a path share a folder.
    ///
    /// Items whose stored path is malformed are kept as root-level leaves so
    /// that every item still appears exactly once.
    pub fn build(items: &[Item]) -> Forest {
        let mut ordered: Vec<&Item> = items.iter().collect();
        ordered.sort_by_key(|item| PathCodec::depth(&item.path));

        let mut arena: Vec<Slot> = Vec::with_capacity(items.len() * 2);
        let mut roots: Vec<usize> = Vec::new();
        let mut folders: HashMap<String, usize> = HashMap::new();

        for item in ordered {
            if !PathCodec::is_valid_path(&item.path) {
                warn!(
                    item_id = %item.id,
                    path = %item.path,
                    "Malformed stored path, placing item at top level"
                );
                roots.push(arena.len());
                arena.push(Slot::Leaf(item.clone()));
                continue;
            }

            let segments = PathCodec::segments(&item.path);
            let mut prefix = String::with_capacity(item.path.len());
            let mut parent: Option<usize> = None;

            for segment in &segments {
                if !prefix.is_empty() {
                    prefix.push('.');
                }
                prefix.push_str(segment);

                let idx = match folders.get(&prefix) {
                    Some(&idx) => idx,
                    None => {
                        let idx = arena.len();
                        arena.push(Slot::Folder {
                            prefix: prefix.clone(),
                            name: (*segment).to_string(),
                            children: Vec::new(),
                        });
                        folders.insert(prefix.clone(), idx);
                        match parent {
                            None => roots.push(idx),
                            Some(parent_idx) => attach(&mut arena, parent_idx, idx),
                        }
                        idx
                    }
                };
                parent = Some(idx);
            }

            let leaf = arena.len();
            arena.push(Slot::Leaf(item.clone()));
            match (segments.len(), parent) {
                (1, _) | (_, None) => roots.push(leaf),
                (_, Some(own_folder)) => attach(&mut arena, own_folder, leaf),
            }
        }

        let mut slots: Vec<Option<Slot>> = arena.into_iter().map(Some).collect();
        let roots: Vec<TreeNode> = roots
            .into_iter()
            .filter_map(|idx| materialize(&mut slots, idx))
            .collect();

        let forest = Forest::new(roots);
        debug!(
            items = items.len(),
            folders = forest.folder_count(),
            roots = forest.roots.len(),
            "Forest rebuilt"
        );
        forest
    }
}

fn attach(arena: &mut [Slot], parent: usize, child: usize) {
    if let Slot::Folder { children, .. } = &mut arena[parent] {
        children.push(child);
    }
}

fn materialize(slots: &mut [Option<Slot>], idx: usize) -> Option<TreeNode> {
    let slot = slots.get_mut(idx)?.take()?;
    match slot {
        Slot::Leaf(item) => Some(TreeNode::leaf(item)),
        Slot::Folder {
            prefix,
            name,
            children,
        } => {
            let children = children
                .into_iter()
                .filter_map(|child| materialize(slots, child))
                .collect();
            Some(TreeNode::Folder {
                id: NodeId::folder(&prefix),
                name,
                children,
            })
        }
    }
}
