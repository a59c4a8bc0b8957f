//! Messages delivered to the app from background tasks.
//!
//! The only background work is the one-shot candidate fetch; its outcome
//! arrives over the app's mpsc channel so the event loop never blocks on
//! the network.

use crate::models::SuggestionItem;

/// Asynchronous messages handled by the event loop.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Candidate fetch completed successfully
    CandidatesLoaded(Vec<SuggestionItem>),
    /// Candidate fetch failed; the mention feature goes inert
    CandidatesFailed(String),
}
