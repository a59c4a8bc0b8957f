//! Keyboard input mapping.
//!
//! Keys are translated into [`Command`]s before touching app state. While
//! the suggestion dropdown is open it owns Up/Down/Enter/Tab/Escape — their
//! default editing behavior (newline insertion, focus change) is suppressed.
//! Every other key falls through to plain text editing, and Enter with the
//! dropdown closed submits the comment to the host log.

pub mod handlers;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single user intent derived from a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert a character into the buffer
    InsertChar(char),
    /// Insert a newline (Alt+Enter)
    InsertNewline,
    /// Delete the char before the cursor
    Backspace,
    /// Delete the char at the cursor
    DeleteChar,
    /// Delete the previous word
    DeleteWordBackward,
    /// Move cursor left one char
    MoveCursorLeft,
    /// Move cursor right one char
    MoveCursorRight,
    /// Move cursor to line start
    MoveCursorHome,
    /// Move cursor to line end
    MoveCursorEnd,
    /// Submit the comment (Enter while the dropdown is closed)
    SubmitComment,
    /// Highlight the next suggestion (wraps)
    PanelNext,
    /// Highlight the previous suggestion (wraps)
    PanelPrev,
    /// Commit the highlighted suggestion (Enter/Tab while open)
    PanelCommit,
    /// Close the dropdown without committing (Escape)
    PanelDismiss,
    /// Exit the application
    Quit,
}

/// Map a key event to a command.
///
/// `panel_open` decides who owns the ambiguous keys: an open dropdown takes
/// Up/Down/Enter/Tab/Escape, otherwise they keep their editing/submit
/// meaning.
pub fn map_key(key: KeyEvent, panel_open: bool) -> Option<Command> {
    // Global binds, active regardless of panel state
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Some(Command::Quit),
            KeyCode::Char('w') => return Some(Command::DeleteWordBackward),
            KeyCode::Char('a') => return Some(Command::MoveCursorHome),
            KeyCode::Char('e') => return Some(Command::MoveCursorEnd),
            _ => {}
        }
    }

    if panel_open {
        match key.code {
            KeyCode::Down => return Some(Command::PanelNext),
            KeyCode::Up => return Some(Command::PanelPrev),
            KeyCode::Enter | KeyCode::Tab => return Some(Command::PanelCommit),
            KeyCode::Esc => return Some(Command::PanelDismiss),
            _ => {}
        }
    }

    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Command::InsertNewline)
        }
        KeyCode::Enter => Some(Command::SubmitComment),
        KeyCode::Backspace if key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Command::DeleteWordBackward)
        }
        KeyCode::Backspace => Some(Command::Backspace),
        KeyCode::Delete => Some(Command::DeleteChar),
        KeyCode::Left => Some(Command::MoveCursorLeft),
        KeyCode::Right => Some(Command::MoveCursorRight),
        KeyCode::Home => Some(Command::MoveCursorHome),
        KeyCode::End => Some(Command::MoveCursorEnd),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::InsertChar(c))
        }
        _ => None,
    }
}
