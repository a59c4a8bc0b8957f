//! Color constants for the composer UI.
//!
//! Minimal dark palette.

use ratatui::style::Color;

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the focused border
pub const COLOR_ACCENT: Color = Color::White;

/// Header/title text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Main text color
pub const COLOR_TEXT: Color = Color::Gray;

/// Background for the dropdown overlay
pub const COLOR_DIALOG_BG: Color = Color::Rgb(20, 20, 30);

/// Cursor cell foreground
pub const COLOR_CURSOR_FG: Color = Color::Black;

/// Cursor cell background
pub const COLOR_CURSOR_BG: Color = Color::White;

/// Category tag color in the dropdown
pub const COLOR_CATEGORY: Color = Color::Cyan;
