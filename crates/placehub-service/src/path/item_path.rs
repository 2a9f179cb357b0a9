//! Validated path value.

use std::fmt;
use std::str::FromStr;

use placehub_core::error::AppError;
use placehub_core::result::AppResult;

use super::codec::{PathCodec, ROOT_SENTINEL, SEPARATOR};

/// A path that is known to match the wire grammar. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemPath(String);

impl ItemPath {
    /// Parse and validate a stored path.
    pub fn parse(raw: &str) -> AppResult<Self> {
        if raw.is_empty() {
            return Err(AppError::invalid_path("Path must not be empty"));
        }
        let segments = PathCodec::segments(raw);
        PathCodec::format(&segments).map(Self)
    }

    /// Resolve interactive input to the path that will be stored.
    ///
    /// Empty input means "let the system pick" and becomes the `root`
    /// sentinel; anything else must match the grammar or is rejected as
    /// `InvalidPath` before any store call.
    pub fn from_input(candidate: &str) -> AppResult<Self> {
        if candidate.is_empty() {
            return Ok(Self::root());
        }
        Self::parse(candidate)
    }

    /// Build a path from segments.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> AppResult<Self> {
        PathCodec::format(segments).map(Self)
    }

    /// The top-level sentinel path.
    pub fn root() -> Self {
        Self(ROOT_SENTINEL.to_string())
    }

    /// The path as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Segments, first to last.
    pub fn segments(&self) -> Vec<&str> {
        PathCodec::segments(&self.0)
    }

    /// Number of segments.
    pub fn depth(&self) -> usize {
        PathCodec::depth(&self.0)
    }

    /// Whether this is exactly the `root` sentinel.
    pub fn is_root_sentinel(&self) -> bool {
        self.0 == ROOT_SENTINEL
    }

    /// The final segment.
    pub fn last_segment(&self) -> &str {
        self.0.rsplit(SEPARATOR).next().unwrap_or(&self.0)
    }

    /// The path one level up, or `None` for single-segment paths.
    pub fn parent(&self) -> Option<Self> {
        self.0
            .rsplit_once(SEPARATOR)
            .map(|(parent, _)| Self(parent.to_string()))
    }

    /// Append a validated segment.
    pub fn child(&self, segment: &str) -> AppResult<Self> {
        let mut segments = self.segments();
        segments.push(segment);
        Self::from_segments(&segments)
    }

    /// Consume into the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ItemPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ItemPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
