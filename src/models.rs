//! Data types shared across the composer.
//!
//! `SuggestionItem` is the mention candidate DTO fetched from the backend.
//! The backend payload is decoded lossily: entries without a usable
//! `display` are dropped at load time rather than failing the whole set.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

/// A single mention candidate shown in the autocomplete dropdown.
///
/// `id` is unique within one fetched candidate set; `display` is the text
/// spliced into the comment when the candidate is chosen and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    /// Opaque stable identifier, unique within one fetched set
    pub id: String,
    /// Text inserted into the comment on commit (non-empty)
    pub display: String,
    /// Secondary text shown in the dropdown
    pub description: Option<String>,
    /// Tag shown in the dropdown, also searchable
    pub category: Option<String>,
}

impl SuggestionItem {
    /// Convenience constructor used heavily in tests.
    pub fn new(id: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display: display.into(),
            description: None,
            category: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Raw wire form of a candidate entry.
///
/// Every field is optional so a malformed entry deserializes instead of
/// poisoning the surrounding array; `into_item` then decides whether the
/// entry is usable.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSuggestionItem {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub display: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl RawSuggestionItem {
    /// Validate a raw entry into a usable candidate.
    ///
    /// Entries missing `id` or with a missing/empty `display` are rejected.
    pub fn into_item(self) -> Option<SuggestionItem> {
        let id = self.id?;
        let display = self.display.filter(|d| !d.is_empty())?;
        Some(SuggestionItem {
            id,
            display,
            description: self.description,
            category: self.category,
        })
    }
}

/// Decode a candidate payload, dropping malformed entries.
pub fn parse_candidates(raw: Vec<RawSuggestionItem>) -> Vec<SuggestionItem> {
    raw.into_iter()
        .filter_map(RawSuggestionItem::into_item)
        .collect()
}

/// A submitted comment shown in the log above the input.
#[derive(Debug, Clone)]
pub struct Comment {
    /// Unique id assigned at submit time
    pub id: Uuid,
    /// Full comment text, mentions included
    pub body: String,
    /// Submission timestamp
    pub submitted_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment from the composer's current buffer.
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            body: body.into(),
            submitted_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_item_complete() {
        let raw = RawSuggestionItem {
            id: Some("u1".to_string()),
            display: Some("Alice".to_string()),
            description: Some("Compliance lead".to_string()),
            category: Some("user".to_string()),
        };
        let item = raw.into_item().unwrap();
        assert_eq!(item.id, "u1");
        assert_eq!(item.display, "Alice");
        assert_eq!(item.description.as_deref(), Some("Compliance lead"));
        assert_eq!(item.category.as_deref(), Some("user"));
    }

    #[test]
    fn test_raw_item_missing_display_rejected() {
        let raw = RawSuggestionItem {
            id: Some("u1".to_string()),
            display: None,
            description: None,
            category: None,
        };
        assert!(raw.into_item().is_none());
    }

    #[test]
    fn test_raw_item_empty_display_rejected() {
        let raw = RawSuggestionItem {
            id: Some("u1".to_string()),
            display: Some(String::new()),
            description: None,
            category: None,
        };
        assert!(raw.into_item().is_none());
    }

    #[test]
    fn test_raw_item_missing_id_rejected() {
        let raw = RawSuggestionItem {
            id: None,
            display: Some("Alice".to_string()),
            description: None,
            category: None,
        };
        assert!(raw.into_item().is_none());
    }

    #[test]
    fn test_parse_candidates_drops_malformed_keeps_rest() {
        let payload = r#"[
            {"id": "u1", "display": "Alice"},
            {"id": "u2"},
            {"id": "u3", "display": "Bob", "category": "user"},
            {"display": "Orphan"},
            {"id": "u4", "display": ""}
        ]"#;
        let raw: Vec<RawSuggestionItem> = serde_json::from_str(payload).unwrap();
        let items = parse_candidates(raw);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].display, "Alice");
        assert_eq!(items[1].display, "Bob");
    }

    #[test]
    fn test_comment_has_unique_ids() {
        let a = Comment::new("first");
        let b = Comment::new("second");
        assert_ne!(a.id, b.id);
        assert_eq!(a.body, "first");
    }
}
