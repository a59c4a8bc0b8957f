//! Shared helpers for integration tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use mentio::app::App;
use mentio::candidates::CandidateSource;
use mentio::input::{handlers::handle_command, map_key};
use mentio::models::SuggestionItem;

/// Build an app whose candidate fetch has already completed.
pub fn app_with_candidates(items: Vec<SuggestionItem>) -> App {
    let mut app = App::new();
    app.source = CandidateSource::Ready(items);
    app
}

/// Simple display-only candidates.
pub fn candidates(names: &[&str]) -> Vec<SuggestionItem> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| SuggestionItem::new(format!("id-{i}"), *name))
        .collect()
}

/// Send a key through the real mapping and handler path.
pub fn press(app: &mut App, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

/// Send a modified key through the real mapping and handler path.
pub fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    let key = KeyEvent::new(code, modifiers);
    if let Some(cmd) = map_key(key, app.panel.is_open()) {
        handle_command(app, &cmd);
    }
}

/// Type a string one char at a time.
pub fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}
