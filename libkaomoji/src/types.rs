//! Core data types for the kaomoji catalog

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A single textual emoticon with its search tags
///
/// Identity is the `symbol` string: two entries with the same symbol are the
/// same entry even if their tags differ or they come from different
/// categories. `PartialEq`, `Eq` and `Hash` follow that rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Kaomoji {
    pub symbol: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Kaomoji {
    pub fn new(symbol: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            symbol: symbol.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Tags joined for display ("happy, love")
    pub fn tag_line(&self) -> String {
        self.tags.join(", ")
    }
}

impl PartialEq for Kaomoji {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Kaomoji {}

impl Hash for Kaomoji {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.symbol.hash(state);
    }
}

/// A named, ordered grouping of entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "kaomoji", default)]
    pub entries: Vec<Kaomoji>,
}

impl Category {
    pub fn new(name: impl Into<String>, entries: Vec<Kaomoji>) -> Self {
        Self {
            name: name.into(),
            entries,
        }
    }

    /// Whether an entry with the same symbol is listed here
    pub fn contains(&self, kaomoji: &Kaomoji) -> bool {
        self.entries.iter().any(|k| k.symbol == kaomoji.symbol)
    }
}
