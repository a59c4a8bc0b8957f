//! Rendering entry point.
//!
//! Layout, top to bottom: comment log, input box, status line. The
//! suggestion dropdown renders last as an overlay anchored above the input.

pub mod suggestion_panel;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::candidates::CandidateSource;
use crate::widgets::input_box::InputBoxWidget;

use theme::{COLOR_BORDER, COLOR_DIM, COLOR_TEXT};

/// Render the whole composer.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let input_height = input_height(app, area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(input_height),
            Constraint::Length(1),
        ])
        .split(area);

    render_comment_log(frame, app, chunks[0]);

    let input_widget = InputBoxWidget::new(&app.input, " Comment ", true);
    frame.render_widget(input_widget, chunks[1]);

    render_status_line(frame, app, chunks[2]);

    // Overlay last so it draws on top of the log
    suggestion_panel::render_suggestion_panel(frame, app, chunks[1]);
}

/// Input grows with newlines, capped so the log stays visible.
fn input_height(app: &App, area: Rect) -> u16 {
    let lines = app.input.content().matches('\n').count() as u16 + 1;
    let max = area.height.saturating_sub(6).max(3);
    (lines + 2).clamp(3, max.min(6))
}

fn render_comment_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Comments ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for comment in &app.comments {
        let stamp = comment.submitted_at.format("%H:%M").to_string();
        for (i, body_line) in comment.body.split('\n').enumerate() {
            let prefix = if i == 0 {
                Span::styled(format!("{} ", stamp), Style::default().fg(COLOR_DIM))
            } else {
                Span::raw("      ")
            };
            lines.push(Line::from(vec![
                prefix,
                Span::styled(body_line.to_string(), Style::default().fg(COLOR_TEXT)),
            ]));
        }
    }

    // Keep the newest comments in view
    let skip = lines.len().saturating_sub(inner.height as usize);
    let visible: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(Paragraph::new(visible), inner);
}

fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    let status = match &app.source {
        CandidateSource::Fetching => "fetching mention directory…".to_string(),
        CandidateSource::Ready(items) => {
            format!("{} mention candidates · type @ to mention", items.len())
        }
        // Degraded silently: plain editing hint only, no error surface
        CandidateSource::Unavailable => "Enter to submit · Alt+Enter for newline".to_string(),
    };

    let line = Line::from(vec![Span::styled(
        format!(" {}", status),
        Style::default().fg(COLOR_DIM),
    )]);
    frame.render_widget(Paragraph::new(line), area);
}
