//! Add-bookmark form submission
//!
//! Turns whatever the user pasted into a complete bookmark: validates the
//! address, derives the favicon URL and a short title, then appends it.

use crate::core::{Bookmark, BookmarkStore};
use crate::error::{BookdashError, Result};

use super::favicon::{derive_title, extract_domain, IconService};

pub const MSG_EMPTY_URL: &str = "Please enter a URL.";
pub const MSG_INVALID_URL: &str = "Invalid URL format.";

/// Bookmark created by a successful submission
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub bookmark: Bookmark,
    /// The URL was already bookmarked before this submission
    pub duplicate: bool,
}

impl AddOutcome {
    /// Status line for the dashboard
    pub fn message(&self) -> String {
        if self.duplicate {
            format!("Added {} (duplicate URL)", self.bookmark.title)
        } else {
            format!("Added {}", self.bookmark.title)
        }
    }
}

/// Validate `input` and append it to `store`
///
/// Rejected input leaves the store untouched.
pub fn submit(store: &mut BookmarkStore, icons: &IconService, input: &str) -> Result<AddOutcome> {
    let url = input.trim();
    if url.is_empty() {
        return Err(BookdashError::validation(MSG_EMPTY_URL));
    }

    let icon_url = icons
        .try_icon_url(url)
        .ok_or_else(|| BookdashError::validation(MSG_INVALID_URL))?;
    let title = derive_title(url)
        .or_else(|| extract_domain(url))
        .ok_or_else(|| BookdashError::validation(MSG_INVALID_URL))?;

    let duplicate = store.contains_url(url);
    let bookmark = store.add(url, title, icon_url);
    log::info!("form: added {} ({})", bookmark.title, bookmark.url);
    Ok(AddOutcome {
        bookmark,
        duplicate,
    })
}
