//! Command handlers.
//!
//! Applies [`Command`]s to the [`App`]. Every command that can change the
//! buffer or cursor ends by re-deriving the mention state from scratch —
//! token detection and ranking are pure, so the dropdown can never drift
//! from the text.

use crate::app::App;
use crate::input::Command;

/// Apply a command to the app.
///
/// Returns `true` if the command was handled.
pub fn handle_command(app: &mut App, cmd: &Command) -> bool {
    match cmd {
        Command::InsertChar(c) => {
            app.input.insert_char(*c);
            app.refresh_mention();
            true
        }

        Command::InsertNewline => {
            app.input.insert_newline();
            app.refresh_mention();
            true
        }

        Command::Backspace => {
            app.input.backspace();
            app.refresh_mention();
            true
        }

        Command::DeleteChar => {
            app.input.delete_char();
            app.refresh_mention();
            true
        }

        Command::DeleteWordBackward => {
            app.input.delete_word_backward();
            app.refresh_mention();
            true
        }

        Command::MoveCursorLeft => {
            app.input.move_cursor_left();
            app.refresh_mention();
            true
        }

        Command::MoveCursorRight => {
            app.input.move_cursor_right();
            app.refresh_mention();
            true
        }

        Command::MoveCursorHome => {
            app.input.move_cursor_home();
            app.refresh_mention();
            true
        }

        Command::MoveCursorEnd => {
            app.input.move_cursor_end();
            app.refresh_mention();
            true
        }

        Command::SubmitComment => {
            app.submit_comment();
            true
        }

        Command::PanelNext => {
            app.panel.highlight_next();
            true
        }

        Command::PanelPrev => {
            app.panel.highlight_prev();
            true
        }

        Command::PanelCommit => {
            app.commit_highlighted();
            true
        }

        Command::PanelDismiss => {
            app.panel.close();
            true
        }

        Command::Quit => {
            app.quit();
            true
        }
    }
}
