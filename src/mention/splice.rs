//! Committing a suggestion into the text buffer.
//!
//! The inserted span is always exactly `"@" + display + " "`; the original
//! query substring is fully replaced, never appended to. If the token was
//! already followed by a space, the result keeps both spaces — that is the
//! contract, not an accident to paper over.

use crate::mention::token::ActiveToken;
use crate::models::SuggestionItem;

/// Replace the active token span with the chosen candidate.
///
/// Returns the new buffer and the new cursor byte offset, positioned
/// immediately after the inserted trailing space.
///
/// # Examples
///
/// ```
/// use mentio::mention::{commit_mention, ActiveToken};
/// use mentio::models::SuggestionItem;
///
/// let token = ActiveToken { start_offset: 5, query: "da".to_string() };
/// let item = SuggestionItem::new("u1", "David");
/// let (text, cursor) = commit_mention("ping @da team", &token, &item);
/// assert_eq!(text, "ping @David  team");
/// assert_eq!(cursor, 12);
/// ```
pub fn commit_mention(
    text: &str,
    token: &ActiveToken,
    item: &SuggestionItem,
) -> (String, usize) {
    let head = &text[..token.start_offset];
    let tail = &text[token.start_offset + token.span_len()..];

    let mut new_text = String::with_capacity(head.len() + item.display.len() + tail.len() + 2);
    new_text.push_str(head);
    new_text.push('@');
    new_text.push_str(&item.display);
    new_text.push(' ');
    new_text.push_str(tail);

    let new_cursor = token.start_offset + 1 + item.display.len() + 1;
    (new_text, new_cursor)
}
