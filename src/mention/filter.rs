//! Candidate filtering and ranking.
//!
//! Matching is a case-insensitive substring test against display,
//! description, and category. Candidates whose display starts with the
//! query sort before those that merely contain it; ties break by ascending
//! display length. The result is capped at [`MAX_SUGGESTIONS`].

use crate::models::SuggestionItem;

/// Maximum number of suggestions shown in the dropdown.
pub const MAX_SUGGESTIONS: usize = 10;

/// Rank candidates against a query.
///
/// An empty (or whitespace-only) query returns nothing: a bare `@` does not
/// open the dropdown, at least one filter character is required.
///
/// # Examples
///
/// ```
/// use mentio::mention::rank_candidates;
/// use mentio::models::SuggestionItem;
///
/// let candidates = vec![
///     SuggestionItem::new("1", "Malice"),
///     SuggestionItem::new("2", "Alicia"),
///     SuggestionItem::new("3", "Alice"),
/// ];
/// let ranked = rank_candidates("ali", &candidates);
/// let names: Vec<&str> = ranked.iter().map(|i| i.display.as_str()).collect();
/// assert_eq!(names, vec!["Alice", "Alicia", "Malice"]);
/// ```
pub fn rank_candidates(query: &str, candidates: &[SuggestionItem]) -> Vec<SuggestionItem> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();

    let mut matched: Vec<(bool, &SuggestionItem)> = candidates
        .iter()
        .filter(|item| matches_query(item, &needle))
        .map(|item| {
            let starts = item.display.to_lowercase().starts_with(&needle);
            (starts, item)
        })
        .collect();

    // Prefix matches first, then shorter display strings; the sort is
    // stable so equal candidates keep their fetched order.
    matched.sort_by(|a, b| {
        b.0.cmp(&a.0)
            .then_with(|| a.1.display.len().cmp(&b.1.display.len()))
    });

    matched
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, item)| item.clone())
        .collect()
}

/// Any one of display, description, or category matching is sufficient.
fn matches_query(item: &SuggestionItem, needle: &str) -> bool {
    if item.display.to_lowercase().contains(needle) {
        return true;
    }
    if let Some(ref description) = item.description {
        if description.to_lowercase().contains(needle) {
            return true;
        }
    }
    if let Some(ref category) = item.category {
        if category.to_lowercase().contains(needle) {
            return true;
        }
    }
    false
}
