//! The one-shot mention candidate source.
//!
//! Exactly one fetch of the full candidate list is issued when the composer
//! starts; filtering afterwards is entirely client-side. While the fetch is
//! outstanding the composer is typeable but offers no suggestions. A failed
//! fetch degrades the mention feature to inert instead of surfacing an
//! error: the candidate set stays empty and typing is unaffected. No
//! automatic refetch happens for the composer's lifetime.

use std::sync::Arc;

use crate::models::{parse_candidates, RawSuggestionItem, SuggestionItem};
use crate::traits::{Headers, HttpClient, HttpError};

/// Lifecycle of the fetched candidate set.
#[derive(Debug, Clone, Default)]
pub enum CandidateSource {
    /// Fetch still outstanding; panel stays closed
    #[default]
    Fetching,
    /// Candidate list loaded and held in memory
    Ready(Vec<SuggestionItem>),
    /// Fetch failed; mention feature is inert
    Unavailable,
}

impl CandidateSource {
    /// The loaded candidates, empty unless `Ready`.
    pub fn items(&self) -> &[SuggestionItem] {
        match self {
            CandidateSource::Ready(items) => items,
            _ => &[],
        }
    }

    /// Whether the initial fetch is still outstanding.
    pub fn is_fetching(&self) -> bool {
        matches!(self, CandidateSource::Fetching)
    }
}

/// Fetch the complete candidate list from the backend.
///
/// Sends no query parameters; the full set comes back in one response and
/// malformed entries are dropped during decode.
pub async fn fetch_candidates(
    client: Arc<dyn HttpClient>,
    base_url: &str,
) -> Result<Vec<SuggestionItem>, HttpError> {
    let url = format!("{}/api/mentions/candidates", base_url.trim_end_matches('/'));
    let response = client.get(&url, &Headers::new()).await?;

    if !response.is_success() {
        return Err(HttpError::ServerError {
            status: response.status,
            message: response.text().unwrap_or_default(),
        });
    }

    let raw: Vec<RawSuggestionItem> = response
        .json()
        .map_err(|e| HttpError::Decode(e.to_string()))?;

    let items = parse_candidates(raw);
    tracing::debug!(count = items.len(), "loaded mention candidates");
    Ok(items)
}
