//! The @mention autocomplete core.
//!
//! Everything here is deliberately pure and synchronous: the token detector
//! and the candidate ranking are re-derived from scratch on every keystroke
//! against the in-memory candidate list, so the dropdown never holds state
//! that could drift from the text buffer.

pub mod filter;
pub mod panel;
pub mod splice;
pub mod token;

pub use filter::{rank_candidates, MAX_SUGGESTIONS};
pub use panel::SuggestionPanel;
pub use splice::commit_mention;
pub use token::{detect_token, ActiveToken};
