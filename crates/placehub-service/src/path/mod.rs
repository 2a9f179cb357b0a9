//! Dot-segmented path handling.

pub mod codec;
pub mod item_path;

pub use codec::{PathCodec, ROOT_SENTINEL};
pub use item_path::ItemPath;
