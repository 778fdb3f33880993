//! Selection / view state machine
//!
//! Two states: `Listing` (no entry open) and `Detail(entry)`. Search query
//! and selected category are carried alongside and are untouched by
//! selecting an entry or going back.
//!
//! ```text
//!            select_entry(e)              select_entry(e')
//!  Listing ----------------> Detail(e) -----------------> Detail(e')
//!     ^                          |
//!     +-- back() / change_category(name)
//! ```

use crate::dataset::Dataset;
use crate::filter::{filter_entries, CategoryFilter};
use crate::types::Kaomoji;

/// Listing vs. detail
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Listing,
    Detail(Kaomoji),
}

/// The session's navigation state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub search_query: String,
    pub selected_category: CategoryFilter,
    pub view: View,
}

/// Derived data for an open entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Related<'a> {
    /// Name of the first category listing the open entry
    pub category_name: Option<&'a str>,
    /// That category's full entry list, open entry included
    pub entries: &'a [Kaomoji],
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start in the given category
    pub fn with_category(category: CategoryFilter) -> Self {
        Self {
            selected_category: category,
            ..Self::default()
        }
    }

    /// Open an entry, from the listing or from another detail view
    pub fn select_entry(&mut self, entry: Kaomoji) {
        tracing::debug!(symbol = %entry.symbol, "Opening entry");
        self.view = View::Detail(entry);
    }

    /// Switch category; always returns to the listing
    pub fn change_category(&mut self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        tracing::debug!(category = %category, "Changing category");
        self.selected_category = category;
        self.view = View::Listing;
    }

    /// Close the open entry (no-op on the listing)
    pub fn back(&mut self) {
        self.view = View::Listing;
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn is_listing(&self) -> bool {
        matches!(self.view, View::Listing)
    }

    pub fn open_entry(&self) -> Option<&Kaomoji> {
        match &self.view {
            View::Listing => None,
            View::Detail(entry) => Some(entry),
        }
    }

    /// Entries the listing shows for the current query and category
    pub fn visible_entries<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Kaomoji> {
        filter_entries(dataset, &self.selected_category, &self.search_query)
    }

    /// Related entries of the open entry; `None` on the listing
    pub fn related<'a>(&self, dataset: &'a Dataset) -> Option<Related<'a>> {
        self.open_entry().map(|entry| related_entries(dataset, entry))
    }
}

/// Category of `entry` and its full entry list, found by scanning the dataset
pub fn related_entries<'a>(dataset: &'a Dataset, entry: &Kaomoji) -> Related<'a> {
    match dataset.category_of(entry) {
        Some(category) => Related {
            category_name: Some(category.name.as_str()),
            entries: category.entries.as_slice(),
        },
        None => Related {
            category_name: None,
            entries: &[],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Category::new("Love", vec![Kaomoji::new("(^_^)", &["happy", "love"])]),
            Category::new("Angry", vec![Kaomoji::new("(>_<)", &["mad"])]),
        ])
    }

    #[test]
    fn test_initial_state_is_listing_all() {
        let state = ViewState::new();
        assert!(state.is_listing());
        assert_eq!(state.selected_category, CategoryFilter::All);
        assert_eq!(state.search_query, "");
    }

    #[test]
    fn test_select_then_back_restores_listing() {
        let mut state = ViewState::new();
        state.set_search_query("lo");
        state.change_category("Love");
        let before = state.clone();

        state.select_entry(Kaomoji::new("(^_^)", &[]));
        assert_eq!(state.open_entry().map(|k| k.symbol.as_str()), Some("(^_^)"));

        state.back();
        assert_eq!(state, before);
    }

    #[test]
    fn test_select_from_detail_switches_entry() {
        let mut state = ViewState::new();
        state.select_entry(Kaomoji::new("(^_^)", &[]));
        state.select_entry(Kaomoji::new("(>_<)", &[]));
        assert_eq!(state.view, View::Detail(Kaomoji::new("(>_<)", &[])));
    }

    #[test]
    fn test_change_category_from_detail_returns_to_listing() {
        let mut state = ViewState::new();
        state.select_entry(Kaomoji::new("(^_^)", &[]));
        state.change_category("Angry");
        assert!(state.is_listing());
        assert_eq!(state.selected_category, CategoryFilter::Named("Angry".to_string()));
    }

    #[test]
    fn test_back_on_listing_is_noop() {
        let mut state = ViewState::new();
        state.set_search_query("cat");
        let before = state.clone();
        state.back();
        assert_eq!(state, before);
    }

    #[test]
    fn test_related_for_known_entry() {
        let dataset = sample();
        let mut state = ViewState::new();
        state.select_entry(Kaomoji::new("(>_<)", &[]));

        let related = state.related(&dataset).unwrap();
        assert_eq!(related.category_name, Some("Angry"));
        assert_eq!(related.entries, &[Kaomoji::new("(>_<)", &["mad"])]);
    }

    #[test]
    fn test_related_for_unknown_entry_is_empty() {
        let dataset = sample();
        let related = related_entries(&dataset, &Kaomoji::new("(o_O)", &[]));
        assert_eq!(related.category_name, None);
        assert!(related.entries.is_empty());
    }

    #[test]
    fn test_related_is_none_on_listing() {
        let dataset = sample();
        assert!(ViewState::new().related(&dataset).is_none());
    }

    #[test]
    fn test_visible_entries_follow_query_and_category() {
        let dataset = sample();
        let mut state = ViewState::new();
        state.set_search_query("lo");
        let visible = state.visible_entries(&dataset);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].symbol, "(^_^)");

        state.set_search_query("");
        state.change_category("Angry");
        let visible = state.visible_entries(&dataset);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].symbol, "(>_<)");
    }
}
