//! Bookmark records and identity

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Opaque, immutable bookmark identity
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(String);

impl BookmarkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookmarkId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// One saved shortcut
///
/// Serialized with the field names of the exchange format
/// (`id`, `url`, `title`, `iconUrl`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: BookmarkId,
    pub url: String,
    pub title: String,
    pub icon_url: String,
}

impl Bookmark {
    /// True when all four fields are present and non-empty
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty()
            && !self.url.is_empty()
            && !self.title.is_empty()
            && !self.icon_url.is_empty()
    }

    /// Single character shown in place of the favicon
    pub fn glyph(&self) -> char {
        self.title
            .chars()
            .find(|c| c.is_alphanumeric())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// Generates fresh ids from the wall clock (milliseconds since the epoch)
///
/// Ids are strictly increasing within one generator, so two bookmarks added
/// in the same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id that is not rejected by `taken`
    pub fn next(&mut self, taken: impl Fn(&str) -> bool) -> BookmarkId {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut candidate = now.max(self.last + 1);
        while taken(&candidate.to_string()) {
            candidate += 1;
        }
        self.last = candidate;
        BookmarkId(candidate.to_string())
    }
}
