//! A text input widget with cursor handling and scrolling support.
//!
//! Owns a flat string buffer and a byte-offset cursor; every mutation moves
//! the cursor by whole chars, so the offset always sits on a char boundary.
//! The mention detector and splice arithmetic are defined against exactly
//! this `(content, cursor_offset)` pair.
//!
//! Features:
//! - Basic text editing (insert, delete, backspace, word delete)
//! - Cursor movement (left/right/line home/line end)
//! - Newlines via explicit `insert_newline`
//! - Horizontal scrolling on the cursor line when text exceeds the width

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};
use unicode_width::UnicodeWidthChar;

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CURSOR_BG, COLOR_CURSOR_FG, COLOR_TEXT};

/// Text input with a byte-offset cursor.
#[derive(Debug, Clone, Default)]
pub struct InputBox {
    /// The text content of the input box
    content: String,
    /// Current cursor position (byte offset, always on a char boundary)
    cursor: usize,
}

impl InputBox {
    /// Create a new empty input box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Current cursor position as a byte offset.
    pub fn cursor_offset(&self) -> usize {
        self.cursor
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        self.content.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a newline at the cursor.
    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    /// Delete the character before the cursor (Backspace).
    pub fn backspace(&mut self) {
        if let Some(c) = self.char_before_cursor() {
            self.cursor -= c.len_utf8();
            self.content.remove(self.cursor);
        }
    }

    /// Delete the character at the cursor (Delete key).
    pub fn delete_char(&mut self) {
        if self.cursor < self.content.len() {
            self.content.remove(self.cursor);
        }
    }

    /// Delete back to the start of the previous word.
    pub fn delete_word_backward(&mut self) {
        let start = self.prev_word_offset();
        self.content.replace_range(start..self.cursor, "");
        self.cursor = start;
    }

    /// Move cursor one char to the left.
    pub fn move_cursor_left(&mut self) {
        if let Some(c) = self.char_before_cursor() {
            self.cursor -= c.len_utf8();
        }
    }

    /// Move cursor one char to the right.
    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.content[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    /// Move cursor to the start of the current line.
    pub fn move_cursor_home(&mut self) {
        self.cursor = self.line_start();
    }

    /// Move cursor to the end of the current line.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.line_end();
    }

    /// Replace the content and put the cursor at the end.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor = self.content.len();
    }

    /// Replace the content and cursor together (used by mention commit).
    ///
    /// The cursor is clamped to the content length; a cursor not on a char
    /// boundary is snapped back to the nearest preceding boundary.
    pub fn set_content_with_cursor(&mut self, content: impl Into<String>, cursor: usize) {
        self.content = content.into();
        let mut cursor = cursor.min(self.content.len());
        while cursor > 0 && !self.content.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    /// Clear all content and reset the cursor.
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.content[..self.cursor].chars().next_back()
    }

    /// Byte offset of the start of the previous word (whitespace-delimited).
    fn prev_word_offset(&self) -> usize {
        let before = &self.content[..self.cursor];
        let trimmed = before.trim_end_matches(|c: char| c.is_whitespace());
        match trimmed.rfind(|c: char| c.is_whitespace()) {
            Some(idx) => idx + 1,
            None => 0,
        }
    }

    /// Byte offset of the start of the cursor's line.
    fn line_start(&self) -> usize {
        match self.content[..self.cursor].rfind('\n') {
            Some(idx) => idx + 1,
            None => 0,
        }
    }

    /// Byte offset of the end of the cursor's line.
    fn line_end(&self) -> usize {
        match self.content[self.cursor..].find('\n') {
            Some(idx) => self.cursor + idx,
            None => self.content.len(),
        }
    }

    /// Cursor position as (line index, display column).
    fn cursor_line_col(&self) -> (usize, usize) {
        let before = &self.content[..self.cursor];
        let line = before.matches('\n').count();
        let col = before[self.line_start()..self.cursor]
            .chars()
            .map(|c| c.width().unwrap_or(0))
            .sum();
        (line, col)
    }

    /// Render the input box with the given title.
    ///
    /// Shows the window of lines ending at the cursor line when the content
    /// is taller than the widget, and scrolls the cursor line horizontally
    /// to keep the cursor visible.
    pub fn render_with_title(&self, area: Rect, buf: &mut Buffer, title: &str, focused: bool) {
        let border_color = if focused { COLOR_ACCENT } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let lines: Vec<&str> = self.content.split('\n').collect();
        let (cursor_line, cursor_col) = self.cursor_line_col();

        // Vertical window: keep the cursor line visible
        let visible_rows = inner.height as usize;
        let first_line = cursor_line.saturating_sub(visible_rows - 1);

        // Horizontal scroll applies to the cursor line only
        let inner_width = inner.width as usize;
        let h_scroll = if cursor_col >= inner_width {
            cursor_col - inner_width + 1
        } else {
            0
        };

        let text_style = Style::default().fg(COLOR_TEXT);
        for (row, line) in lines
            .iter()
            .skip(first_line)
            .take(visible_rows)
            .enumerate()
        {
            let skip = if first_line + row == cursor_line {
                h_scroll
            } else {
                0
            };
            let mut x = 0u16;
            for c in line.chars().skip(skip) {
                let w = c.width().unwrap_or(0) as u16;
                if x + w > inner.width {
                    break;
                }
                buf.set_string(inner.x + x, inner.y + row as u16, c.to_string(), text_style);
                x += w;
            }
        }

        if focused {
            let cursor_x = (cursor_col - h_scroll) as u16;
            let cursor_y = (cursor_line - first_line) as u16;
            if cursor_x < inner.width && cursor_y < inner.height {
                let cursor_char = self.content[self.cursor..].chars().next().unwrap_or(' ');
                let cursor_char = if cursor_char == '\n' { ' ' } else { cursor_char };
                let cursor_style = Style::default().fg(COLOR_CURSOR_FG).bg(COLOR_CURSOR_BG);
                buf.set_string(
                    inner.x + cursor_x,
                    inner.y + cursor_y,
                    cursor_char.to_string(),
                    cursor_style,
                );
            }
        }
    }
}

/// A renderable wrapper for InputBox that implements the Widget trait.
pub struct InputBoxWidget<'a> {
    input_box: &'a InputBox,
    title: &'a str,
    focused: bool,
}

impl<'a> InputBoxWidget<'a> {
    pub fn new(input_box: &'a InputBox, title: &'a str, focused: bool) -> Self {
        Self {
            input_box,
            title,
            focused,
        }
    }
}

impl Widget for InputBoxWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.input_box
            .render_with_title(area, buf, self.title, self.focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_input_box() {
        let input = InputBox::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor_offset(), 0);
        assert_eq!(input.content(), "");
    }

    #[test]
    fn test_insert_char() {
        let mut input = InputBox::new();
        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.content(), "Hi");
        assert_eq!(input.cursor_offset(), 2);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut input = InputBox::new();
        input.set_content("Hllo");
        input.move_cursor_home();
        input.move_cursor_right();
        input.insert_char('e');
        assert_eq!(input.content(), "Hello");
    }

    #[test]
    fn test_backspace() {
        let mut input = InputBox::new();
        input.set_content("Hi");
        input.backspace();
        assert_eq!(input.content(), "H");
        assert_eq!(input.cursor_offset(), 1);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = InputBox::new();
        input.set_content("Hi");
        input.move_cursor_home();
        input.backspace();
        assert_eq!(input.content(), "Hi");
    }

    #[test]
    fn test_delete_char() {
        let mut input = InputBox::new();
        input.set_content("Hi");
        input.move_cursor_left();
        input.delete_char();
        assert_eq!(input.content(), "H");
        assert_eq!(input.cursor_offset(), 1);
    }

    #[test]
    fn test_delete_word_backward() {
        let mut input = InputBox::new();
        input.set_content("hello brave world");
        input.delete_word_backward();
        assert_eq!(input.content(), "hello brave ");
        input.delete_word_backward();
        assert_eq!(input.content(), "hello ");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputBox::new();
        input.insert_char('X');

        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor_offset(), 0);

        input.move_cursor_end();
        input.move_cursor_right();
        assert_eq!(input.cursor_offset(), 1);
    }

    #[test]
    fn test_multibyte_cursor_steps() {
        let mut input = InputBox::new();
        input.insert_char('é');
        input.insert_char('x');
        assert_eq!(input.cursor_offset(), 3);

        input.move_cursor_left();
        assert_eq!(input.cursor_offset(), 2);
        input.move_cursor_left();
        assert_eq!(input.cursor_offset(), 0);

        input.move_cursor_right();
        input.backspace();
        assert_eq!(input.content(), "x");
    }

    #[test]
    fn test_newline_and_line_home_end() {
        let mut input = InputBox::new();
        input.set_content("first\nsecond");
        // Cursor at end of "second"
        input.move_cursor_home();
        assert_eq!(input.cursor_offset(), 6);
        input.move_cursor_end();
        assert_eq!(input.cursor_offset(), 12);
    }

    #[test]
    fn test_set_content_with_cursor_clamps() {
        let mut input = InputBox::new();
        input.set_content_with_cursor("short", 100);
        assert_eq!(input.cursor_offset(), 5);
    }

    #[test]
    fn test_set_content_with_cursor_snaps_to_boundary() {
        let mut input = InputBox::new();
        // 'é' is two bytes; offset 1 is mid-char
        input.set_content_with_cursor("é", 1);
        assert_eq!(input.cursor_offset(), 0);
    }

    #[test]
    fn test_clear() {
        let mut input = InputBox::new();
        input.set_content("Hello World");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_offset(), 0);
    }
}
