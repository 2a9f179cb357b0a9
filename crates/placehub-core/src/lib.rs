//! # placehub-core
//!
//! Core crate for PlaceHub. Contains configuration schemas, typed
//! identifiers, user-facing notices, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PlaceHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
