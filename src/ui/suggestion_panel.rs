//! Mention suggestion dropdown rendering.
//!
//! Renders the autocomplete dropdown as an overlay anchored above the input
//! field, with keyboard-highlight, scroll indicators, and per-row hit areas
//! registered on the app for mouse commits.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, PanelHit};

use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CATEGORY, COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER,
};

/// Maximum visible rows in the dropdown
const MAX_VISIBLE_ROWS: usize = 7;

/// Calculate dropdown height based on content
fn calculate_panel_height(visible_count: usize, extra_rows: usize, area_height: u16) -> u16 {
    // Height: 2 (borders) + visible rows + scroll indicator rows
    let content_height = (visible_count + extra_rows) as u16 + 2;
    let max_height = area_height.saturating_sub(4);
    content_height.min(max_height)
}

/// Render the suggestion dropdown anchored above the input area.
///
/// Registers the rendered geometry in `app.panel_hit`; clears it while the
/// dropdown is closed so stale rows can never swallow clicks.
pub fn render_suggestion_panel(frame: &mut Frame, app: &mut App, input_area: Rect) {
    if !app.panel.is_open() {
        app.panel_hit = None;
        return;
    }

    let area = frame.area();
    let items = app.panel.items();
    let highlighted = app.panel.highlighted();
    let visible_count = items.len().min(MAX_VISIBLE_ROWS);

    // Scroll the window so the highlight stays visible
    let scroll_offset = if highlighted >= MAX_VISIBLE_ROWS {
        highlighted - MAX_VISIBLE_ROWS + 1
    } else {
        0
    };
    let above = scroll_offset;
    let below = items.len().saturating_sub(scroll_offset + MAX_VISIBLE_ROWS);
    let indicator_rows = (above > 0) as usize + (below > 0) as usize;

    let panel_width = 50.min(area.width);
    let panel_height = calculate_panel_height(visible_count, indicator_rows, area.height);

    // Bottom-anchored: the dropdown sits above the input and grows upward
    let x = input_area.x;
    let y = input_area.y.saturating_sub(panel_height);
    let panel_area = Rect {
        x,
        y,
        width: panel_width,
        height: panel_height,
    };

    frame.render_widget(Clear, panel_area);

    let title = match app.active_token() {
        Some(token) if !token.query.is_empty() => format!(" @{} ", token.query),
        _ => " Mentions ".to_string(),
    };

    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(block, panel_area);

    let inner = Rect {
        x: panel_area.x + 2,
        y: panel_area.y + 1,
        width: panel_area.width.saturating_sub(4),
        height: panel_area.height.saturating_sub(2),
    };

    let mut lines: Vec<Line> = Vec::new();
    let mut row_hits: Vec<(u16, usize)> = Vec::new();
    let mut next_row = inner.y;

    if above > 0 {
        lines.push(Line::from(vec![Span::styled(
            format!("  {} more above", above),
            Style::default().fg(COLOR_DIM),
        )]));
        next_row += 1;
    }

    for (idx, item) in items
        .iter()
        .skip(scroll_offset)
        .take(MAX_VISIBLE_ROWS)
        .enumerate()
    {
        let absolute_idx = idx + scroll_offset;
        let is_selected = absolute_idx == highlighted;

        let mut spans = Vec::new();
        if is_selected {
            spans.push(Span::styled(
                "▸",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled(
                format!(" {}", item.display),
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::raw(" "));
            spans.push(Span::raw(format!(" {}", item.display)));
        }

        if let Some(ref category) = item.category {
            spans.push(Span::styled(
                format!(" [{}]", category),
                Style::default().fg(COLOR_CATEGORY),
            ));
        }
        if let Some(ref description) = item.description {
            spans.push(Span::raw(" - "));
            spans.push(Span::styled(
                description.clone(),
                Style::default().fg(COLOR_DIM),
            ));
        }

        lines.push(Line::from(spans));
        row_hits.push((next_row, absolute_idx));
        next_row += 1;
    }

    if below > 0 {
        lines.push(Line::from(vec![Span::styled(
            format!("  {} more below", below),
            Style::default().fg(COLOR_DIM),
        )]));
    }

    frame.render_widget(Paragraph::new(lines), inner);

    app.panel_hit = Some(PanelHit {
        area: panel_area,
        row_hits,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calculate_panel_height() {
        // 2 items, no indicators: borders + items
        assert_eq!(calculate_panel_height(2, 0, 24), 4);

        // 7 items plus one indicator row
        assert_eq!(calculate_panel_height(7, 1, 24), 10);
    }

    #[test]
    fn test_calculate_panel_height_small_terminal() {
        // Capped at area_height - 4
        assert_eq!(calculate_panel_height(7, 2, 10), 6);
    }
}
