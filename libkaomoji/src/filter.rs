//! Filter engine
//!
//! Maps (dataset, selected category, search query) to the ordered list of
//! matching entries. Pure and deterministic: the output order is the dataset
//! order, nothing is ranked or re-sorted.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::types::Kaomoji;

/// Sentinel category name meaning "every category"
pub const ALL_CATEGORIES: &str = "All";

/// Which categories feed the candidate pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn name(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }

    /// Candidate pool before search filtering
    pub fn candidates<'a>(&self, dataset: &'a Dataset) -> Vec<&'a Kaomoji> {
        match self {
            CategoryFilter::All => dataset.entries().collect(),
            CategoryFilter::Named(name) => dataset
                .find_category(name)
                .map(|c| c.entries.iter().collect())
                .unwrap_or_default(),
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(name: &str) -> Self {
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }
}

impl From<String> for CategoryFilter {
    fn from(name: String) -> Self {
        if name == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name)
        }
    }
}

impl From<CategoryFilter> for String {
    fn from(filter: CategoryFilter) -> Self {
        filter.name().to_string()
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized search query
///
/// Blank input (after trimming) matches everything. Otherwise the
/// lower-cased input, untrimmed, must occur in the lower-cased symbol or in
/// one of the lower-cased tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    needle: Option<String>,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        let needle = if raw.trim().is_empty() {
            None
        } else {
            Some(raw.to_lowercase())
        };
        Self { needle }
    }

    pub fn is_blank(&self) -> bool {
        self.needle.is_none()
    }

    pub fn matches(&self, kaomoji: &Kaomoji) -> bool {
        match &self.needle {
            None => true,
            Some(needle) => {
                kaomoji.symbol.to_lowercase().contains(needle.as_str())
                    || kaomoji
                        .tags
                        .iter()
                        .any(|tag| tag.to_lowercase().contains(needle.as_str()))
            }
        }
    }
}

/// Entries of the selected category that match the query, in dataset order
pub fn filter_entries<'a>(
    dataset: &'a Dataset,
    category: &CategoryFilter,
    query: &str,
) -> Vec<&'a Kaomoji> {
    let query = SearchQuery::new(query);
    let mut entries = category.candidates(dataset);
    if !query.is_blank() {
        entries.retain(|k| query.matches(k));
    }
    entries
}
