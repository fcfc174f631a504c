//! View mode definitions

use std::path::PathBuf;

use super::bookmark::Bookmark;

/// Current view/input mode with embedded state
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewMode {
    /// Normal dashboard mode
    #[default]
    Browse,
    /// Text input mode
    Input {
        purpose: InputPurpose,
        buffer: String,
        cursor: usize,
    },
    /// Confirmation dialog
    Confirm { action: PendingAction },
    /// Help/about overlay
    Help,
}

/// Purpose of text input
#[derive(Debug, Clone, PartialEq)]
pub enum InputPurpose {
    /// Address for a new bookmark
    AddBookmark,
    /// Path of a JSON file to import
    ImportPath,
    /// Path to export the collection to
    ExportPath,
}

impl InputPurpose {
    /// Prompt shown above the input field
    pub fn prompt(&self) -> &'static str {
        match self {
            InputPurpose::AddBookmark => "Add bookmark (paste URL)",
            InputPurpose::ImportPath => "Import bookmarks from",
            InputPurpose::ExportPath => "Export bookmarks to",
        }
    }
}

/// Action pending confirmation
#[derive(Debug, Clone, PartialEq)]
pub enum PendingAction {
    /// Replace the whole collection with the records read from `path`
    ///
    /// The records are validated once, when the path is entered, and are
    /// applied as read even if the file changes before confirmation.
    Import { path: PathBuf, records: Vec<Bookmark> },
}
