//! Kaomoji Finder - browse, search and copy kaomoji
//!
//! This library holds everything the front ends share: the catalog, the
//! filter engine, the listing/detail state machine and the clipboard bridge
//! with its copy-confirmation timers.

pub mod clipboard;
pub mod config;
pub mod copy;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod logging;
pub mod theme;
pub mod timer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use clipboard::{copy_text, Clipboard, CopyOutcome, MemoryClipboard, SystemClipboard};
pub use config::Config;
pub use copy::{CopyFollowUp, CopyPolicy, CopyTracker, CopyVariant};
pub use dataset::{Dataset, DatasetIssue};
pub use error::{KaomojiError, Result};
pub use filter::{filter_entries, CategoryFilter, ALL_CATEGORIES};
pub use theme::Theme;
pub use types::{Category, Kaomoji};
pub use view::{related_entries, Related, View, ViewState};
