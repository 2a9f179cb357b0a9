//! Convenience result type alias for PlaceHub.

use crate::error::AppError;

/// A specialized `Result` type for PlaceHub operations.
pub type AppResult<T> = Result<T, AppError>;
