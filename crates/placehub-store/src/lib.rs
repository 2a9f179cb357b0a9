//! # placehub-store
//!
//! The [`ItemStore`] contract through which PlaceHub reads and writes the
//! remote item collection, plus its backends: an in-memory store and an
//! HTTP/JSON client for the external engine.

#[cfg(feature = "http")]
pub mod http;
pub mod manager;
#[cfg(feature = "memory")]
pub mod memory;
pub mod traits;

pub use manager::StoreManager;
pub use traits::ItemStore;
