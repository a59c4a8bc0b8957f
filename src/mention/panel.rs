//! Suggestion dropdown state.
//!
//! The panel is either closed or open with a bounded item list and a
//! highlighted index. It is rebuilt from the freshly ranked candidates after
//! every text edit; arrow keys only move the highlight and wrap in both
//! directions.

use crate::models::SuggestionItem;

/// State of the autocomplete dropdown.
///
/// Owned exclusively by the composer; the highlight is always a valid index
/// into `items` while the panel is open.
#[derive(Debug, Clone, Default)]
pub struct SuggestionPanel {
    items: Vec<SuggestionItem>,
    highlighted: usize,
    open: bool,
}

impl SuggestionPanel {
    /// Create a closed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the dropdown is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Currently displayed items (empty while closed).
    pub fn items(&self) -> &[SuggestionItem] {
        &self.items
    }

    /// Highlighted index, valid while open.
    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    /// The item that Enter/Tab would commit.
    pub fn highlighted_item(&self) -> Option<&SuggestionItem> {
        if self.open {
            self.items.get(self.highlighted)
        } else {
            None
        }
    }

    /// Item at a given index, used for mouse commits.
    pub fn item_at(&self, index: usize) -> Option<&SuggestionItem> {
        if self.open {
            self.items.get(index)
        } else {
            None
        }
    }

    /// Rebuild the panel from freshly ranked candidates.
    ///
    /// An empty list closes the panel. The highlight resets to 0 whenever
    /// the item list actually changes (compared by id), so it can never
    /// dangle past a shrunken list; an identical list keeps the highlight.
    pub fn sync(&mut self, ranked: Vec<SuggestionItem>) {
        if ranked.is_empty() {
            self.close();
            return;
        }

        let same_items = self.open
            && self.items.len() == ranked.len()
            && self
                .items
                .iter()
                .zip(ranked.iter())
                .all(|(a, b)| a.id == b.id);

        if !same_items {
            self.highlighted = 0;
        }
        self.items = ranked;
        self.open = true;
    }

    /// Close the dropdown and drop its items.
    pub fn close(&mut self) {
        self.open = false;
        self.items.clear();
        self.highlighted = 0;
    }

    /// Move the highlight down, wrapping past the end.
    pub fn highlight_next(&mut self) {
        if self.open && !self.items.is_empty() {
            self.highlighted = (self.highlighted + 1) % self.items.len();
        }
    }

    /// Move the highlight up, wrapping past the start.
    pub fn highlight_prev(&mut self) {
        if self.open && !self.items.is_empty() {
            self.highlighted = (self.highlighted + self.items.len() - 1) % self.items.len();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SuggestionItem;

    fn ranked(names: &[&str]) -> Vec<SuggestionItem> {
        names
            .iter()
            .map(|n| SuggestionItem::new(*n, *n))
            .collect()
    }

    #[test]
    fn test_starts_closed() {
        let panel = SuggestionPanel::new();
        assert!(!panel.is_open());
        assert!(panel.highlighted_item().is_none());
    }

    #[test]
    fn test_sync_opens_with_highlight_zero() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a", "b", "c"]));
        assert!(panel.is_open());
        assert_eq!(panel.highlighted(), 0);
        assert_eq!(panel.items().len(), 3);
    }

    #[test]
    fn test_sync_empty_closes() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a"]));
        panel.sync(Vec::new());
        assert!(!panel.is_open());
        assert!(panel.items().is_empty());
    }

    #[test]
    fn test_highlight_wraps_forward() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a", "b", "c"]));
        panel.highlight_next();
        panel.highlight_next();
        assert_eq!(panel.highlighted(), 2);
        panel.highlight_next();
        assert_eq!(panel.highlighted(), 0);
    }

    #[test]
    fn test_highlight_wraps_backward() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a", "b", "c"]));
        panel.highlight_prev();
        assert_eq!(panel.highlighted(), 2);
    }

    #[test]
    fn test_highlight_resets_when_items_change() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a", "b", "c"]));
        panel.highlight_next();
        panel.highlight_next();
        assert_eq!(panel.highlighted(), 2);

        // Filtered set shrinks below the highlight: reset, never dangling
        panel.sync(ranked(&["a"]));
        assert_eq!(panel.highlighted(), 0);
        assert!(panel.highlighted_item().is_some());
    }

    #[test]
    fn test_highlight_kept_for_identical_items() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a", "b", "c"]));
        panel.highlight_next();
        panel.sync(ranked(&["a", "b", "c"]));
        assert_eq!(panel.highlighted(), 1);
    }

    #[test]
    fn test_item_at_only_while_open() {
        let mut panel = SuggestionPanel::new();
        panel.sync(ranked(&["a", "b"]));
        assert_eq!(panel.item_at(1).unwrap().display, "b");
        panel.close();
        assert!(panel.item_at(1).is_none());
    }

    #[test]
    fn test_navigation_noop_while_closed() {
        let mut panel = SuggestionPanel::new();
        panel.highlight_next();
        panel.highlight_prev();
        assert_eq!(panel.highlighted(), 0);
        assert!(!panel.is_open());
    }
}
