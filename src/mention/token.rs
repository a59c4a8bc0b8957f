//! Active mention token detection.
//!
//! A mention starts at an `@` and stays "active" while the run of text
//! between the `@` and the cursor contains no space or newline. Detection is
//! a pure function of `(text, cursor)` so it can be re-run on every
//! keystroke without any retained state.

/// The in-progress mention span under the cursor.
///
/// Byte offsets into the buffer; `query` is the text between the `@` and the
/// cursor and never contains a space or newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveToken {
    /// Byte offset of the triggering `@`
    pub start_offset: usize,
    /// Text between the `@` and the cursor
    pub query: String,
}

impl ActiveToken {
    /// Byte length of the full token span, `@` included.
    pub fn span_len(&self) -> usize {
        1 + self.query.len()
    }
}

/// Detect the active mention token ending at `cursor`.
///
/// Looks backwards from the cursor for the nearest `@`; if the run between
/// it and the cursor is free of spaces and newlines, that run is the active
/// query. A later `@` always wins, which lets the user restart a mention by
/// typing a fresh `@`.
///
/// `cursor` is a byte offset and must lie on a char boundary.
///
/// # Examples
///
/// ```
/// use mentio::mention::detect_token;
///
/// let token = detect_token("hello @wor", 10).unwrap();
/// assert_eq!(token.start_offset, 6);
/// assert_eq!(token.query, "wor");
///
/// // A space closes the token
/// assert!(detect_token("hello @wor ld", 13).is_none());
/// ```
pub fn detect_token(text: &str, cursor: usize) -> Option<ActiveToken> {
    let before_cursor = &text[..cursor];
    let at_index = before_cursor.rfind('@')?;
    let after_at = &before_cursor[at_index + 1..];

    if after_at.contains(' ') || after_at.contains('\n') {
        return None;
    }

    Some(ActiveToken {
        start_offset: at_index,
        query: after_at.to_string(),
    })
}
