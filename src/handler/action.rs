//! Action execution handler
//!
//! This module handles the execution of KeyActions and MouseActions,
//! translating them into store mutations, state changes and side effects.
//! No action is fatal: failures end up in the status bar.

use std::path::{Path, PathBuf};

use crossterm::event::KeyEvent;

use crate::core::{AppState, BookmarkStore, DropOutcome, HoverOutcome, InputPurpose, PendingAction, ViewMode};
use crate::handler::key::{insert_pasted, update_input_buffer, KeyAction};
use crate::handler::mouse::{MouseAction, PointerDrag};
use crate::integrate::{
    apply_import, default_export_path, export_to_file, form, read_import, IconService,
    Launcher,
};
use crate::render::GridLayout;

/// Context for action execution (extracted from Config)
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Favicon URL builder for new bookmarks and imports
    pub icons: IconService,
    /// Opener for bookmarks
    pub launcher: Launcher,
    /// Directory the export prompt starts in
    pub export_dir: PathBuf,
}

impl Default for ActionContext {
    fn default() -> Self {
        Self {
            icons: IconService::default(),
            launcher: Launcher::default(),
            export_dir: PathBuf::from("."),
        }
    }
}

/// Handle a KeyAction and update state accordingly
///
/// `stride` is the number of tiles per grid row.
pub fn handle_action(
    action: KeyAction,
    state: &mut AppState,
    store: &mut BookmarkStore,
    drag: &mut PointerDrag,
    stride: isize,
    context: &ActionContext,
) {
    let len = store.len();
    match action {
        KeyAction::None => {}
        KeyAction::Quit => {
            state.should_quit = true;
        }
        KeyAction::Cancel => {
            if state.mode != ViewMode::Browse {
                state.mode = ViewMode::Browse;
                state.clear_message();
            } else if drag.cancel() {
                state.set_message("Move cancelled");
            } else {
                state.should_quit = true;
            }
        }
        KeyAction::MoveLeft => state.move_focus(-1, len),
        KeyAction::MoveRight => state.move_focus(1, len),
        KeyAction::MoveUp => state.move_focus(-stride, len),
        KeyAction::MoveDown => state.move_focus(stride, len),
        KeyAction::MoveToFirst => state.focus_index = 0,
        KeyAction::MoveToLast => state.focus_index = len.saturating_sub(1),
        KeyAction::ShiftLeft => shift_focused(state, store, -1),
        KeyAction::ShiftRight => shift_focused(state, store, 1),
        KeyAction::StartAdd => {
            state.mode = ViewMode::Input {
                purpose: InputPurpose::AddBookmark,
                buffer: String::new(),
                cursor: 0,
            };
        }
        KeyAction::Open => open_focused(state, store, context),
        KeyAction::CopyUrl => {
            if let Some(bookmark) = store.bookmarks().get(state.focus_index) {
                match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(bookmark.url.clone()))
                {
                    Ok(_) => state.set_message("URL copied to clipboard"),
                    Err(_) => state.set_message("Failed to copy URL to clipboard"),
                }
            }
        }
        KeyAction::Remove => {
            if let Some(bookmark) = store.bookmarks().get(state.focus_index).cloned() {
                store.remove(&bookmark.id);
                state.clamp_focus(store.len());
                state.set_message(format!("Removed {}", bookmark.title));
            }
        }
        KeyAction::StartExport => {
            let buffer = default_export_path(&context.export_dir)
                .display()
                .to_string();
            let cursor = buffer.chars().count();
            state.mode = ViewMode::Input {
                purpose: InputPurpose::ExportPath,
                buffer,
                cursor,
            };
        }
        KeyAction::StartImport => {
            state.mode = ViewMode::Input {
                purpose: InputPurpose::ImportPath,
                buffer: String::new(),
                cursor: 0,
            };
        }
        KeyAction::ShowHelp => {
            state.mode = ViewMode::Help;
        }
        KeyAction::ConfirmInput { value } => confirm_input(state, store, &value, context),
        KeyAction::ExecutePending => {
            let ViewMode::Confirm { action } = std::mem::take(&mut state.mode) else {
                return;
            };
            match action {
                PendingAction::Import { path, records } => {
                    let count = apply_import(store, records);
                    log::debug!("import: applied {}", path.display());
                    state.focus_index = 0;
                    state.set_message(format!("Successfully imported {} bookmarks!", count));
                }
            }
        }
    }
}

/// Move the focused bookmark one slot, keeping focus on it
fn shift_focused(state: &mut AppState, store: &mut BookmarkStore, delta: isize) {
    let index = state.focus_index;
    let Some(id) = store.bookmarks().get(index).map(|b| b.id.clone()) else {
        return;
    };

    if delta < 0 {
        let Some(prev) = index
            .checked_sub(1)
            .and_then(|i| store.bookmarks().get(i))
            .map(|b| b.id.clone())
        else {
            return;
        };
        store.move_before(&id, &prev);
    } else {
        if index + 1 >= store.len() {
            return;
        }
        match store.bookmarks().get(index + 2).map(|b| b.id.clone()) {
            Some(after_next) => store.move_before(&id, &after_next),
            None => store.move_to_end(&id),
        };
    }

    if let Some(new_index) = store.index_of(&id) {
        state.focus_index = new_index;
    }
}

fn open_focused(state: &mut AppState, store: &BookmarkStore, context: &ActionContext) {
    let Some(bookmark) = store.bookmarks().get(state.focus_index) else {
        return;
    };
    match context.launcher.open(&bookmark.url) {
        Ok(_) => state.set_message(format!("Opening {}", bookmark.title)),
        Err(e) => {
            log::warn!("open: failed to launch {}: {}", bookmark.url, e);
            state.set_message(format!("Failed to open {}: {}", bookmark.url, e));
        }
    }
}

/// Apply the submitted text for the current input purpose
fn confirm_input(
    state: &mut AppState,
    store: &mut BookmarkStore,
    value: &str,
    context: &ActionContext,
) {
    let purpose = match &state.mode {
        ViewMode::Input { purpose, .. } => purpose.clone(),
        _ => return,
    };

    match purpose {
        InputPurpose::AddBookmark => match form::submit(store, &context.icons, value) {
            Ok(outcome) => {
                state.focus_index = store.len().saturating_sub(1);
                state.set_message(outcome.message());
                state.mode = ViewMode::Browse;
            }
            // Keep the form open so the address can be corrected
            Err(e) => state.set_message(e.to_string()),
        },
        InputPurpose::ExportPath => {
            let path = if value.trim().is_empty() {
                default_export_path(&context.export_dir)
            } else {
                export_destination(&expand_home(value.trim()))
            };
            match export_to_file(store, &path) {
                Ok(count) => state.set_message(format!(
                    "Exported {} bookmark(s) to {}",
                    count,
                    path.display()
                )),
                Err(e) => state.set_message(e.to_string()),
            }
            state.mode = ViewMode::Browse;
        }
        InputPurpose::ImportPath => {
            if value.trim().is_empty() {
                state.mode = ViewMode::Browse;
                return;
            }
            let path = expand_home(value.trim());
            match read_import(&path, context.icons.default_icon_url()) {
                Ok(records) => {
                    state.mode = ViewMode::Confirm {
                        action: PendingAction::Import { path, records },
                    };
                }
                Err(e) => {
                    state.set_message(format!("Failed to import file: {}", e));
                    state.mode = ViewMode::Browse;
                }
            }
        }
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_home(input: &str) -> PathBuf {
    match (input.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ if input == "~" => dirs::home_dir().unwrap_or_else(|| PathBuf::from(input)),
        _ => PathBuf::from(input),
    }
}

/// Handle a MouseAction and update state accordingly
pub fn handle_mouse_action(
    action: MouseAction,
    state: &mut AppState,
    store: &mut BookmarkStore,
    drag: &mut PointerDrag,
    layout: &GridLayout,
    context: &ActionContext,
) {
    // Popups swallow the pointer, except for finishing a gesture
    if state.mode != ViewMode::Browse && !matches!(action, MouseAction::Release { .. }) {
        return;
    }
    let len = store.len();

    match action {
        MouseAction::None => {}
        MouseAction::Press { index } => {
            state.focus_index = index.min(len.saturating_sub(1));
            drag.press(store, index);
        }
        MouseAction::DoubleClick { index } => {
            drag.cancel();
            state.focus_index = index.min(len.saturating_sub(1));
            open_focused(state, store, context);
        }
        MouseAction::Drag { column, row } => {
            match drag.drag_to(store, layout, column, row) {
                HoverOutcome::Moved { to, .. } => state.focus_index = to,
                HoverOutcome::Lost => state.set_message("Dragged bookmark no longer exists"),
                HoverOutcome::Held | HoverOutcome::Ignored => {}
            }
        }
        MouseAction::Release { column, row } => {
            let payload = drag.payload(store);
            match drag.release(store, layout, column, row) {
                DropOutcome::Discarded(_) => {
                    state.clamp_focus(store.len());
                    if let Some(p) = payload {
                        state.set_message(format!("Removed {}", p.title));
                    }
                }
                DropOutcome::Settled { index: Some(index) } => {
                    state.focus_index = index;
                    if let Some(p) = payload.filter(|p| p.original_index != index) {
                        state.set_message(format!("Moved {} to #{}", p.title, index + 1));
                    }
                }
                DropOutcome::Settled { index: None } | DropOutcome::NotDragging => {}
            }
        }
        MouseAction::ScrollUp(rows) => state.move_focus(-layout.row_stride() * rows as isize, len),
        MouseAction::ScrollDown(rows) => state.move_focus(layout.row_stride() * rows as isize, len),
    }
}

/// Apply a key to the input buffer when in input mode
///
/// Returns true if the key edited the buffer and needs no further handling.
pub fn handle_input_key(state: &mut AppState, key: KeyEvent) -> bool {
    if let ViewMode::Input { buffer, cursor, .. } = &mut state.mode {
        if let Some((new_buffer, new_cursor)) = update_input_buffer(key, buffer, *cursor) {
            *buffer = new_buffer;
            *cursor = new_cursor;
            return true;
        }
    }
    false
}

/// Handle bracketed paste: into the input buffer, or straight into the
/// add form when browsing
pub fn handle_paste(state: &mut AppState, text: &str) {
    if let ViewMode::Input { buffer, cursor, .. } = &mut state.mode {
        let (new_buffer, new_cursor) = insert_pasted(buffer, *cursor, text);
        *buffer = new_buffer;
        *cursor = new_cursor;
    } else if state.mode == ViewMode::Browse {
        let (buffer, cursor) = insert_pasted("", 0, text.trim());
        state.mode = ViewMode::Input {
            purpose: InputPurpose::AddBookmark,
            buffer,
            cursor,
        };
    }
}

/// A directory means "put the default backup file in there"
fn export_destination(path: &Path) -> PathBuf {
    if path.is_dir() {
        default_export_path(path)
    } else {
        path.to_path_buf()
    }
}
