//! Transient notifications surfaced to the UI.
//!
//! Remote failures during reconciliation never propagate to the caller as
//! errors; they are published as [`Notice`] values instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, ErrorKind};

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// An operation completed.
    Info,
    /// An operation completed only partially or fell back to a default.
    Warning,
    /// An operation failed.
    Error,
}

/// A transient notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    /// Unique notice ID.
    pub id: Uuid,
    /// When the notice was raised.
    pub timestamp: DateTime<Utc>,
    /// Severity.
    pub level: NoticeLevel,
    /// The error kind that caused it, if any.
    pub kind: Option<ErrorKind>,
    /// Message shown to the user.
    pub message: String,
}

impl Notice {
    /// Create a new notice.
    pub fn new(level: NoticeLevel, kind: Option<ErrorKind>, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            level,
            kind,
            message: message.into(),
        }
    }

    /// An informational notice.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, None, message)
    }

    /// A warning notice.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, None, message)
    }

    /// An error notice derived from an [`AppError`].
    pub fn from_error(err: &AppError) -> Self {
        Self::new(NoticeLevel::Error, Some(err.kind), err.message.clone())
    }
}
