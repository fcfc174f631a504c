//! Keyboard event handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{AppState, ViewMode};

/// Actions that can result from key handling
#[derive(Debug, Clone, PartialEq)]
pub enum KeyAction {
    /// No action needed
    None,
    /// Quit the application
    Quit,
    /// Focus previous tile
    MoveLeft,
    /// Focus next tile
    MoveRight,
    /// Focus the tile one row up
    MoveUp,
    /// Focus the tile one row down
    MoveDown,
    /// Focus first tile
    MoveToFirst,
    /// Focus last tile
    MoveToLast,
    /// Move focused bookmark one slot left
    ShiftLeft,
    /// Move focused bookmark one slot right
    ShiftRight,
    /// Start add-bookmark input
    StartAdd,
    /// Open focused bookmark
    Open,
    /// Copy focused URL to system clipboard
    CopyUrl,
    /// Remove focused bookmark
    Remove,
    /// Start export path input
    StartExport,
    /// Start import path input
    StartImport,
    /// Show about/help popup
    ShowHelp,
    /// Confirm current input
    ConfirmInput { value: String },
    /// Execute confirmed action
    ExecutePending,
    /// Cancel current input/mode (quits from browse mode)
    Cancel,
}

/// Handle key event and return the resulting action
pub fn handle_key_event(state: &AppState, key: KeyEvent) -> KeyAction {
    match &state.mode {
        ViewMode::Browse => handle_browse_mode(key),
        ViewMode::Input { buffer, .. } => handle_input_mode(key, buffer),
        ViewMode::Confirm { .. } => handle_confirm_mode(key),
        ViewMode::Help => handle_help_mode(key),
    }
}

/// Handle keys in browse mode
fn handle_browse_mode(key: KeyEvent) -> KeyAction {
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Esc => KeyAction::Cancel,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,

        // Reorder (checked before plain arrows)
        KeyCode::Left if shift => KeyAction::ShiftLeft,
        KeyCode::Right if shift => KeyAction::ShiftRight,
        KeyCode::Char('<') | KeyCode::Char('H') => KeyAction::ShiftLeft,
        KeyCode::Char('>') | KeyCode::Char('L') => KeyAction::ShiftRight,

        // Navigation
        KeyCode::Left | KeyCode::Char('h') => KeyAction::MoveLeft,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => KeyAction::MoveRight,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::MoveDown,
        KeyCode::Char('g') | KeyCode::Home => KeyAction::MoveToFirst,
        KeyCode::Char('G') | KeyCode::End => KeyAction::MoveToLast,

        // Bookmarks
        KeyCode::Char('a') => KeyAction::StartAdd,
        KeyCode::Enter | KeyCode::Char('o') => KeyAction::Open,
        KeyCode::Char('y') => KeyAction::CopyUrl,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => KeyAction::Remove,

        // Backup
        KeyCode::Char('e') => KeyAction::StartExport,
        KeyCode::Char('i') => KeyAction::StartImport,

        KeyCode::Char('?') => KeyAction::ShowHelp,

        _ => KeyAction::None,
    }
}

/// Handle keys in input mode (add, import path, export path)
fn handle_input_mode(key: KeyEvent, current_buffer: &str) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::ConfirmInput {
            value: current_buffer.to_string(),
        },
        KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::None, // Buffer updates handled separately
    }
}

/// Handle keys in confirm mode
fn handle_confirm_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => KeyAction::ExecutePending,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => KeyAction::Cancel,
        _ => KeyAction::None,
    }
}

/// Handle keys in the about popup
fn handle_help_mode(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter => {
            KeyAction::Cancel
        }
        _ => KeyAction::None,
    }
}

/// Update input buffer based on key event
///
/// `cursor` counts characters, not bytes. Returns the new buffer content, or
/// None if no change.
pub fn update_input_buffer(key: KeyEvent, buffer: &str, cursor: usize) -> Option<(String, usize)> {
    let len = buffer.chars().count();
    let cursor = cursor.min(len);
    let byte_at = |pos: usize| {
        buffer
            .char_indices()
            .nth(pos)
            .map(|(i, _)| i)
            .unwrap_or(buffer.len())
    };

    match key.code {
        KeyCode::Char(c) => {
            let mut new_buffer = buffer.to_string();
            new_buffer.insert(byte_at(cursor), c);
            Some((new_buffer, cursor + 1))
        }
        KeyCode::Backspace if cursor > 0 => {
            let mut new_buffer = buffer.to_string();
            new_buffer.remove(byte_at(cursor - 1));
            Some((new_buffer, cursor - 1))
        }
        KeyCode::Delete if cursor < len => {
            let mut new_buffer = buffer.to_string();
            new_buffer.remove(byte_at(cursor));
            Some((new_buffer, cursor))
        }
        KeyCode::Left if cursor > 0 => Some((buffer.to_string(), cursor - 1)),
        KeyCode::Right if cursor < len => Some((buffer.to_string(), cursor + 1)),
        KeyCode::Home if cursor > 0 => Some((buffer.to_string(), 0)),
        KeyCode::End if cursor < len => Some((buffer.to_string(), len)),
        _ => None,
    }
}

/// Insert pasted text at the cursor, dropping line breaks
pub fn insert_pasted(buffer: &str, cursor: usize, text: &str) -> (String, usize) {
    let cleaned: String = text.chars().filter(|c| *c != '\n' && *c != '\r').collect();
    let cursor = cursor.min(buffer.chars().count());
    let inserted = cleaned.chars().count();
    let merged = buffer
        .chars()
        .take(cursor)
        .chain(cleaned.chars())
        .chain(buffer.chars().skip(cursor))
        .collect();
    (merged, cursor + inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::InputPurpose;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn input_state(buffer: &str) -> AppState {
        let mut state = AppState::new();
        state.mode = ViewMode::Input {
            purpose: InputPurpose::AddBookmark,
            buffer: buffer.to_string(),
            cursor: buffer.len(),
        };
        state
    }

    #[test]
    fn browse_keys() {
        let state = AppState::new();
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('a'))), KeyAction::StartAdd);
        assert_eq!(handle_key_event(&state, key(KeyCode::Enter)), KeyAction::Open);
        assert_eq!(handle_key_event(&state, key(KeyCode::Delete)), KeyAction::Remove);
        assert_eq!(handle_key_event(&state, key(KeyCode::Left)), KeyAction::MoveLeft);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('j'))), KeyAction::MoveDown);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('?'))), KeyAction::ShowHelp);
        assert_eq!(handle_key_event(&state, key(KeyCode::F(9))), KeyAction::None);
    }

    #[test]
    fn reorder_keys() {
        let state = AppState::new();
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('<'))), KeyAction::ShiftLeft);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('>'))), KeyAction::ShiftRight);
        let shifted = KeyEvent::new(KeyCode::Right, KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(&state, shifted), KeyAction::ShiftRight);
    }

    #[test]
    fn input_mode_confirm_and_cancel() {
        let state = input_state("github.com");
        assert_eq!(
            handle_key_event(&state, key(KeyCode::Enter)),
            KeyAction::ConfirmInput {
                value: "github.com".to_string()
            }
        );
        assert_eq!(handle_key_event(&state, key(KeyCode::Esc)), KeyAction::Cancel);
        // Letters go to the buffer, not to browse bindings
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('q'))), KeyAction::None);
    }

    #[test]
    fn confirm_and_help_modes() {
        let mut state = AppState::new();
        state.mode = ViewMode::Confirm {
            action: crate::core::PendingAction::Import {
                path: "backup.json".into(),
                records: Vec::new(),
            },
        };
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('y'))), KeyAction::ExecutePending);
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('n'))), KeyAction::Cancel);

        state.mode = ViewMode::Help;
        assert_eq!(handle_key_event(&state, key(KeyCode::Char('?'))), KeyAction::Cancel);
    }

    #[test]
    fn buffer_editing() {
        assert_eq!(
            update_input_buffer(key(KeyCode::Char('x')), "ab", 1),
            Some(("axb".to_string(), 2))
        );
        assert_eq!(
            update_input_buffer(key(KeyCode::Backspace), "ab", 2),
            Some(("a".to_string(), 1))
        );
        assert_eq!(update_input_buffer(key(KeyCode::Backspace), "ab", 0), None);
        assert_eq!(
            update_input_buffer(key(KeyCode::Delete), "ab", 0),
            Some(("b".to_string(), 0))
        );
        assert_eq!(
            update_input_buffer(key(KeyCode::Home), "ab", 2),
            Some(("ab".to_string(), 0))
        );
        assert_eq!(update_input_buffer(key(KeyCode::End), "ab", 2), None);
    }

    #[test]
    fn buffer_editing_multibyte() {
        assert_eq!(
            update_input_buffer(key(KeyCode::Backspace), "héllo", 2),
            Some(("hllo".to_string(), 1))
        );
        assert_eq!(
            update_input_buffer(key(KeyCode::Char('ü')), "é", 1),
            Some(("éü".to_string(), 2))
        );
    }

    #[test]
    fn paste_strips_newlines() {
        assert_eq!(
            insert_pasted("", 0, "https://docs.rs\n"),
            ("https://docs.rs".to_string(), 15)
        );
        assert_eq!(insert_pasted("ac", 1, "b"), ("abc".to_string(), 2));
    }
}
