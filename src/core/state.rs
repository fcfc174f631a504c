//! Application state management

use super::ViewMode;

/// Main application state
///
/// The bookmark collection itself lives in the store; this only tracks
/// what the user is looking at.
pub struct AppState {
    /// Focused tile index
    pub focus_index: usize,
    /// Current view mode
    pub mode: ViewMode,
    /// Status message
    pub message: Option<String>,
    /// Exit flag
    pub should_quit: bool,
    /// Whether mouse drag and drop is enabled
    pub mouse_enabled: bool,
    /// Show the URL under each tile title
    pub show_urls: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            focus_index: 0,
            mode: ViewMode::Browse,
            message: None,
            should_quit: false,
            mouse_enabled: true,
            show_urls: false,
        }
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Keep focus inside a collection of `len` tiles
    pub fn clamp_focus(&mut self, len: usize) {
        self.focus_index = self.focus_index.min(len.saturating_sub(1));
    }

    /// Move focus by `delta` tiles, stopping at both ends
    pub fn move_focus(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.focus_index = 0;
            return;
        }
        let target = self.focus_index as isize + delta;
        self.focus_index = target.clamp(0, len as isize - 1) as usize;
    }
}
