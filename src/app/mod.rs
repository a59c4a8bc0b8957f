//! Application state.
//!
//! `App` owns the input buffer, the suggestion dropdown, the fetched
//! candidate set, and the comment log. All mention state is re-derived from
//! the buffer after every edit; the only asynchronous input is the one-shot
//! candidate fetch, whose outcome arrives as an [`AppMessage`].

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::candidates::CandidateSource;
use crate::events::AppMessage;
use crate::mention::{commit_mention, detect_token, rank_candidates, ActiveToken, SuggestionPanel};
use crate::models::{Comment, SuggestionItem};
use crate::widgets::InputBox;

/// Clickable geometry of the rendered dropdown, registered during render.
///
/// `row_hits` maps absolute terminal rows to indices into the panel's item
/// list (scroll offset already applied).
#[derive(Debug, Clone, Default)]
pub struct PanelHit {
    /// Full dropdown area including borders
    pub area: Rect,
    /// (terminal row, item index) for each visible item row
    pub row_hits: Vec<(u16, usize)>,
}

impl PanelHit {
    /// Item index under the given terminal position, if any.
    pub fn item_at(&self, column: u16, row: u16) -> Option<usize> {
        if column < self.area.x || column >= self.area.x + self.area.width {
            return None;
        }
        self.row_hits
            .iter()
            .find(|(y, _)| *y == row)
            .map(|(_, idx)| *idx)
    }

    /// Whether the position falls anywhere inside the dropdown.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height
    }
}

/// Top-level application state.
pub struct App {
    /// The comment input buffer and cursor
    pub input: InputBox,
    /// Suggestion dropdown state
    pub panel: SuggestionPanel,
    /// Fetched mention candidates
    pub source: CandidateSource,
    /// Submitted comments, oldest first
    pub comments: Vec<Comment>,
    /// Set when the UI must be redrawn
    pub needs_redraw: bool,
    /// Set when the event loop should exit
    pub should_quit: bool,
    /// Terminal dimensions, updated on resize
    pub terminal_width: u16,
    /// Terminal dimensions, updated on resize
    pub terminal_height: u16,
    /// Dropdown geometry from the last render, for mouse hit-testing
    pub panel_hit: Option<PanelHit>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a fresh app with an open message channel.
    pub fn new() -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            input: InputBox::new(),
            panel: SuggestionPanel::new(),
            source: CandidateSource::Fetching,
            comments: Vec::new(),
            needs_redraw: true,
            should_quit: false,
            terminal_width: 0,
            terminal_height: 0,
            panel_hit: None,
            message_tx,
            message_rx: Some(message_rx),
        }
    }

    /// Request a redraw on the next loop iteration.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Ask the event loop to exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Record new terminal dimensions.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// The active mention token under the cursor, if any.
    pub fn active_token(&self) -> Option<ActiveToken> {
        detect_token(self.input.content(), self.input.cursor_offset())
    }

    /// Re-derive dropdown state from the buffer and candidate set.
    ///
    /// Called after every buffer or cursor mutation. While the fetch is
    /// outstanding or failed the candidate set is empty, so the dropdown
    /// simply never opens.
    pub fn refresh_mention(&mut self) {
        match self.active_token() {
            Some(token) => {
                let ranked = rank_candidates(&token.query, self.source.items());
                self.panel.sync(ranked);
            }
            None => self.panel.close(),
        }
        self.mark_dirty();
    }

    /// Commit the highlighted suggestion into the buffer.
    pub fn commit_highlighted(&mut self) {
        let Some(item) = self.panel.highlighted_item().cloned() else {
            return;
        };
        self.commit_item(&item);
    }

    /// Commit the suggestion at a specific index (mouse click), regardless
    /// of the current highlight.
    pub fn commit_at(&mut self, index: usize) {
        let Some(item) = self.panel.item_at(index).cloned() else {
            return;
        };
        self.commit_item(&item);
    }

    fn commit_item(&mut self, item: &SuggestionItem) {
        let Some(token) = self.active_token() else {
            return;
        };
        let (text, cursor) = commit_mention(self.input.content(), &token, item);
        self.input.set_content_with_cursor(text, cursor);
        self.panel.close();
        self.mark_dirty();
    }

    /// Submit the current buffer as a comment and clear the composer.
    pub fn submit_comment(&mut self) {
        if self.input.content().trim().is_empty() {
            return;
        }
        let comment = Comment::new(self.input.content());
        tracing::debug!(id = %comment.id, "comment submitted");
        self.comments.push(comment);
        self.input.clear();
        self.panel.close();
        self.mark_dirty();
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::CandidatesLoaded(items) => {
                self.source = CandidateSource::Ready(items);
                // The user may already be inside a token; pick it up now
                self.refresh_mention();
            }
            AppMessage::CandidatesFailed(reason) => {
                // Fail soft: no dialog, no retry. Mentions go inert.
                tracing::warn!(%reason, "candidate fetch failed, mentions disabled");
                self.source = CandidateSource::Unavailable;
                self.panel.close();
                self.mark_dirty();
            }
        }
    }

    /// Handle a mouse event.
    ///
    /// A left click on a dropdown row commits that row's suggestion; a left
    /// click anywhere else while the dropdown is open closes it without
    /// committing.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if !self.panel.is_open() {
            return;
        }

        let hit = self.panel_hit.clone().unwrap_or_default();
        if let Some(index) = hit.item_at(event.column, event.row) {
            self.commit_at(index);
        } else if !hit.contains(event.column, event.row) {
            self.panel.close();
            self.mark_dirty();
        }
    }
}
