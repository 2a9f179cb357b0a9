//! Parsing, validation and formatting of dot-segmented paths.
//!
//! Wire format: `^[a-zA-Z0-9]+(\.[a-zA-Z0-9]+)*$`.

use placehub_core::error::AppError;
use placehub_core::result::AppResult;

/// The reserved path meaning "top level, no folder".
pub const ROOT_SENTINEL: &str = "root";

/// Segment separator.
pub const SEPARATOR: char = '.';

/// Stateless path codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathCodec;

impl PathCodec {
    /// Split a path into its segments.
    ///
    /// Performs no validation; `"a..b"` yields an empty middle segment.
    pub fn segments(path: &str) -> Vec<&str> {
        path.split(SEPARATOR).collect()
    }

    /// Number of segments in a path.
    pub fn depth(path: &str) -> usize {
        path.split(SEPARATOR).count()
    }

    /// Join segments into a path, rejecting an empty list or any segment
    /// outside `[a-zA-Z0-9]+`.
    pub fn format<S: AsRef<str>>(segments: &[S]) -> AppResult<String> {
        if segments.is_empty() {
            return Err(AppError::invalid_path("A path needs at least one segment"));
        }
        for segment in segments {
            let segment = segment.as_ref();
            if !Self::is_valid_segment(segment) {
                return Err(AppError::invalid_path(format!(
                    "Segment '{segment}' must be non-empty and contain only letters and digits"
                )));
            }
        }
        Ok(segments
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join("."))
    }

    /// Whether a segment matches `[a-zA-Z0-9]+`.
    pub fn is_valid_segment(segment: &str) -> bool {
        !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_alphanumeric())
    }

    /// Whether a stored path is well formed. Empty is never valid here.
    pub fn is_valid_path(path: &str) -> bool {
        !path.is_empty() && path.split(SEPARATOR).all(Self::is_valid_segment)
    }

    /// Validate interactive input.
    ///
    /// The empty string is accepted and means "let the system pick a
    /// default"; it must never be stored as-is.
    pub fn validate(candidate: &str) -> bool {
        candidate.is_empty() || Self::is_valid_path(candidate)
    }

    /// Rewrite `path` so that its `old_prefix` becomes `new_prefix`.
    ///
    /// Matches whole segments only: `team` is a prefix of `team.web` but
    /// not of `teams`. Returns `None` when `old_prefix` does not apply.
    pub fn replace_prefix(path: &str, old_prefix: &str, new_prefix: &str) -> Option<String> {
        if path == old_prefix {
            return Some(new_prefix.to_string());
        }
        let rest = path.strip_prefix(old_prefix)?;
        rest.starts_with(SEPARATOR).then(|| format!("{new_prefix}{rest}"))
    }
}
