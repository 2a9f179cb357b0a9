//! Newtype wrappers around opaque string identifiers.
//!
//! Item and container identifiers are owned by the remote store and never
//! interpreted here. Using distinct types prevents passing a `ContainerId`
//! where an `ItemId` is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a newtype ID wrapper around an opaque `String`.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap an existing identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Return the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Identifier of a placed item, assigned by the remote store.
    ItemId
);

define_id!(
    /// Identifier of the container whose items form one namespace.
    ContainerId
);

define_id!(
    /// Identifier of a derived tree node.
    ///
    /// Folder nodes are `folder-{prefix}` and leaf nodes are `item-{item id}`,
    /// so ids are deterministic across rebuilds.
    NodeId
);

const FOLDER_PREFIX: &str = "folder-";
const ITEM_PREFIX: &str = "item-";

impl NodeId {
    /// Node id of the folder materialized for a path prefix.
    pub fn folder(prefix: &str) -> Self {
        Self(format!("{FOLDER_PREFIX}{prefix}"))
    }

    /// Node id of the leaf wrapping an item.
    pub fn item(item_id: &ItemId) -> Self {
        Self(format!("{ITEM_PREFIX}{item_id}"))
    }

    /// Whether this id names a folder node.
    pub fn is_folder(&self) -> bool {
        self.0.starts_with(FOLDER_PREFIX)
    }

    /// The wrapped item id, if this names a leaf node.
    pub fn item_id(&self) -> Option<ItemId> {
        self.0.strip_prefix(ITEM_PREFIX).map(ItemId::from)
    }
}
