//! Dataset provider
//!
//! The catalog is an ordered list of categories, each holding an ordered list
//! of entries. It is loaded once at startup, either from the bundled table or
//! from a user catalog file, and never mutated afterwards.
//!
//! # Catalog file format
//!
//! ```toml
//! [[categories]]
//! name = "Love"
//!
//! [[categories.kaomoji]]
//! symbol = "(^_^)"
//! tags = ["happy", "love"]
//! ```
//!
//! Malformed data (duplicate category names, symbols listed twice) is loaded
//! as-is; [`Dataset::lint`] reports it so the caller can log it.

mod builtin;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::error::{CatalogError, Result};
use crate::filter::ALL_CATEGORIES;
use crate::types::{Category, Kaomoji};

/// The complete static collection of categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Diagnostics produced by [`Dataset::lint`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetIssue {
    /// Two or more categories share a name
    DuplicateCategory { name: String },
    /// A symbol is listed more than once (in the same or different categories)
    DuplicateSymbol { symbol: String, categories: Vec<String> },
    /// A category has no entries
    EmptyCategory { name: String },
}

impl std::fmt::Display for DatasetIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetIssue::DuplicateCategory { name } => {
                write!(f, "category '{}' is defined more than once", name)
            }
            DatasetIssue::DuplicateSymbol { symbol, categories } => write!(
                f,
                "'{}' is listed more than once (in {})",
                symbol,
                categories.join(", ")
            ),
            DatasetIssue::EmptyCategory { name } => write!(f, "category '{}' has no entries", name),
        }
    }
}

impl Dataset {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// The bundled catalog
    pub fn builtin() -> Self {
        let categories = builtin::BUILTIN
            .iter()
            .map(|(name, entries)| {
                Category::new(
                    *name,
                    entries
                        .iter()
                        .map(|(symbol, tags)| Kaomoji::new(*symbol, tags))
                        .collect(),
                )
            })
            .collect();
        Self { categories }
    }

    /// Load a catalog from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(CatalogError::ReadError)?;
        Self::from_toml_str(&content)
    }

    /// Parse a catalog from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let dataset: Dataset = toml::from_str(content).map_err(CatalogError::ParseError)?;
        if dataset.categories.is_empty() {
            return Err(CatalogError::Empty.into());
        }
        tracing::debug!(
            categories = dataset.categories.len(),
            entries = dataset.total_entries(),
            "Parsed catalog"
        );
        Ok(dataset)
    }

    /// Category bar labels: the "All" sentinel followed by every category name
    pub fn category_names(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories.iter().map(|c| c.name.as_str()))
            .collect()
    }

    /// First category with this exact (case-sensitive) name
    pub fn find_category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// First category (in dataset order) listing an entry with the same symbol
    pub fn category_of(&self, kaomoji: &Kaomoji) -> Option<&Category> {
        self.categories.iter().find(|c| c.contains(kaomoji))
    }

    /// First entry with this symbol
    pub fn find_by_symbol(&self, symbol: &str) -> Option<&Kaomoji> {
        self.entries().find(|k| k.symbol == symbol)
    }

    /// Every entry, categories in order, entries in order
    pub fn entries(&self) -> impl Iterator<Item = &Kaomoji> {
        self.categories.iter().flat_map(|c| c.entries.iter())
    }

    pub fn total_entries(&self) -> usize {
        self.categories.iter().map(|c| c.entries.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_entries() == 0
    }

    /// Report malformed data without rejecting it
    pub fn lint(&self) -> Vec<DatasetIssue> {
        let mut issues = Vec::new();

        let mut seen_names: HashMap<&str, usize> = HashMap::new();
        for category in &self.categories {
            *seen_names.entry(category.name.as_str()).or_default() += 1;
        }
        for category in &self.categories {
            if seen_names.get(category.name.as_str()).copied().unwrap_or(0) > 1
                && !issues.iter().any(|i| {
                    matches!(i, DatasetIssue::DuplicateCategory { name } if *name == category.name)
                })
            {
                issues.push(DatasetIssue::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
            if category.entries.is_empty() {
                issues.push(DatasetIssue::EmptyCategory {
                    name: category.name.clone(),
                });
            }
        }

        // symbol -> categories it appears in, in first-seen order
        let mut symbols: Vec<(&str, Vec<String>)> = Vec::new();
        for category in &self.categories {
            for entry in &category.entries {
                match symbols.iter_mut().find(|(s, _)| *s == entry.symbol) {
                    Some((_, cats)) => cats.push(category.name.clone()),
                    None => symbols.push((entry.symbol.as_str(), vec![category.name.clone()])),
                }
            }
        }
        for (symbol, categories) in symbols {
            if categories.len() > 1 {
                issues.push(DatasetIssue::DuplicateSymbol {
                    symbol: symbol.to_string(),
                    categories,
                });
            }
        }

        issues
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(vec![
            Category::new("Love", vec![Kaomoji::new("(^_^)", &["happy", "love"])]),
            Category::new("Angry", vec![Kaomoji::new("(>_<)", &["mad"])]),
        ])
    }

    #[test]
    fn test_builtin_is_well_formed() {
        let dataset = Dataset::builtin();
        assert!(!dataset.categories.is_empty());
        assert!(dataset.total_entries() > 0);
        assert_eq!(dataset.lint(), Vec::<DatasetIssue>::new());
    }

    #[test]
    fn test_category_names_starts_with_all() {
        let dataset = sample();
        assert_eq!(dataset.category_names(), vec!["All", "Love", "Angry"]);
    }

    #[test]
    fn test_find_category_is_case_sensitive() {
        let dataset = sample();
        assert!(dataset.find_category("Love").is_some());
        assert!(dataset.find_category("love").is_none());
    }

    #[test]
    fn test_category_of() {
        let dataset = sample();
        let angry = dataset.category_of(&Kaomoji::new("(>_<)", &[])).unwrap();
        assert_eq!(angry.name, "Angry");
        assert!(dataset.category_of(&Kaomoji::new("(o_o)", &[])).is_none());
    }

    #[test]
    fn test_category_of_duplicate_symbol_picks_first() {
        let dataset = Dataset::new(vec![
            Category::new("First", vec![Kaomoji::new("(^_^)", &["a"])]),
            Category::new("Second", vec![Kaomoji::new("(^_^)", &["b"])]),
        ]);
        let found = dataset.category_of(&Kaomoji::new("(^_^)", &[])).unwrap();
        assert_eq!(found.name, "First");
    }

    #[test]
    fn test_lint_reports_duplicates() {
        let dataset = Dataset::new(vec![
            Category::new("Love", vec![Kaomoji::new("(^_^)", &[])]),
            Category::new("Love", vec![Kaomoji::new("(^_^)", &[])]),
            Category::new("Empty", vec![]),
        ]);
        let issues = dataset.lint();
        assert!(issues.contains(&DatasetIssue::DuplicateCategory {
            name: "Love".to_string()
        }));
        assert!(issues.contains(&DatasetIssue::EmptyCategory {
            name: "Empty".to_string()
        }));
        assert!(issues.contains(&DatasetIssue::DuplicateSymbol {
            symbol: "(^_^)".to_string(),
            categories: vec!["Love".to_string(), "Love".to_string()],
        }));
        assert_eq!(
            issues
                .iter()
                .filter(|i| matches!(i, DatasetIssue::DuplicateCategory { .. }))
                .count(),
            1
        );
    }

    #[test]
    fn test_from_toml_str() {
        let toml = r#"
[[categories]]
name = "Love"

[[categories.kaomoji]]
symbol = "(^_^)"
tags = ["happy", "love"]

[[categories]]
name = "Angry"

[[categories.kaomoji]]
symbol = "(>_<)"
tags = ["mad"]
"#;
        let dataset = Dataset::from_toml_str(toml).unwrap();
        assert_eq!(dataset, sample());
        assert_eq!(dataset.categories[0].entries[0].tags, vec!["happy", "love"]);
    }

    #[test]
    fn test_from_toml_str_empty_is_error() {
        let result = Dataset::from_toml_str("");
        assert!(matches!(
            result,
            Err(crate::KaomojiError::Catalog(CatalogError::Empty))
        ));
    }

    #[test]
    fn test_issue_display() {
        let issue = DatasetIssue::DuplicateSymbol {
            symbol: "(^_^)".to_string(),
            categories: vec!["Joy".to_string(), "Love".to_string()],
        };
        assert_eq!(issue.to_string(), "'(^_^)' is listed more than once (in Joy, Love)");
    }
}
