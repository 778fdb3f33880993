//! Application state
//!
//! All state transitions happen through the reducer (see `reducer.rs`).
//! The dataset is shared behind an `Arc` so cloning state stays cheap.

use std::sync::Arc;

use libkaomoji::config::UiConfig as UiSettings;
use libkaomoji::{Config, CopyPolicy, CopyTracker, Dataset, Kaomoji, Theme, ViewState};

use super::actions::{CopyTarget, Effect, Screen, Surface};

/// Columns used before the first resize event arrives
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Root application state
///
/// This is the single source of truth for the entire application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Should the application quit?
    pub should_quit: bool,

    /// Help overlay visible?
    pub help_visible: bool,

    /// Catalog being browsed
    pub dataset: Arc<Dataset>,

    /// Search query, selected category and open entry
    pub view: ViewState,

    /// Active palette
    pub theme: Theme,

    /// Card cursors, one per grid
    pub cursor: GridCursor,

    /// Cards per grid row, derived from the terminal width
    pub grid_columns: usize,

    /// Bumped whenever the mounted views are replaced
    pub generation: u64,

    /// Copy confirmations and their timers
    pub copies: CopyTracker<CopyTarget>,

    /// Effects waiting for the main loop
    pub effects: Vec<Effect>,

    /// Status bar state
    pub status: StatusBarState,

    /// UI configuration
    pub config: UiConfig,
}

/// Cursor position on each grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub listing: usize,
    pub related: usize,
}

/// Status bar state
#[derive(Debug, Clone, Default)]
pub struct StatusBarState {
    /// Current status message
    pub message: Option<String>,
}

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    /// Use colors?
    pub colors_enabled: bool,

    /// Tick rate in milliseconds
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::from_settings(&UiSettings::default())
    }
}

impl UiConfig {
    /// Apply environment overrides on top of the config file settings
    pub fn from_settings(settings: &UiSettings) -> Self {
        let colors_enabled = std::env::var("NO_COLOR").is_err()
            && std::env::var("KAOMOJI_NO_COLOR").is_err();

        let tick_rate_ms = std::env::var("KAOMOJI_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(settings.tick_rate_ms);

        Self {
            colors_enabled,
            tick_rate_ms,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_dataset(Dataset::builtin())
    }
}

impl AppState {
    /// Create new application state over the bundled catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Default settings over the given catalog
    pub fn with_dataset(dataset: Dataset) -> Self {
        Self {
            should_quit: false,
            help_visible: false,
            dataset: Arc::new(dataset),
            view: ViewState::new(),
            theme: Theme::default(),
            cursor: GridCursor::default(),
            grid_columns: DEFAULT_GRID_COLUMNS,
            generation: 0,
            copies: CopyTracker::new(CopyPolicy::default()),
            effects: Vec::new(),
            status: StatusBarState::default(),
            config: UiConfig::default(),
        }
    }

    /// Build state from the loaded config file
    pub fn from_config(config: &Config, dataset: Dataset, theme: Theme) -> libkaomoji::Result<Self> {
        let policy = config.copy_policy()?;
        Ok(Self {
            view: ViewState::with_category(config.default_category()),
            theme,
            copies: CopyTracker::new(policy),
            config: UiConfig::from_settings(&config.ui),
            ..Self::with_dataset(dataset)
        })
    }

    pub fn screen(&self) -> Screen {
        if self.view.is_listing() {
            Screen::Listing
        } else {
            Screen::Detail
        }
    }

    /// Entries on the grid of the current screen
    pub fn grid_entries(&self) -> Vec<&Kaomoji> {
        match self.view.related(&self.dataset) {
            None => self.view.visible_entries(&self.dataset),
            Some(related) => related.entries.iter().collect(),
        }
    }

    /// Cursor of the grid on the current screen
    pub fn grid_cursor(&self) -> usize {
        match self.screen() {
            Screen::Listing => self.cursor.listing,
            Screen::Detail => self.cursor.related,
        }
    }

    /// Surface the cards of the current screen belong to
    pub fn grid_surface(&self) -> Surface {
        match self.screen() {
            Screen::Listing => Surface::Listing,
            Screen::Detail => Surface::Related,
        }
    }

    /// Copy control for a card of the current generation
    pub fn card_target(&self, surface: Surface, index: usize, entry: &Kaomoji) -> CopyTarget {
        CopyTarget {
            surface,
            generation: self.generation,
            index,
            entry: entry.clone(),
        }
    }

    /// Card under the cursor, if the grid has any
    pub fn highlighted_target(&self) -> Option<CopyTarget> {
        let index = self.grid_cursor();
        let entries = self.grid_entries();
        entries
            .get(index)
            .map(|entry| self.card_target(self.grid_surface(), index, entry))
    }

    /// Copy button of the open entry
    pub fn detail_target(&self) -> Option<CopyTarget> {
        self.view
            .open_entry()
            .map(|entry| self.card_target(Surface::Detail, 0, entry))
    }

    pub fn is_card_copied(&self, index: usize, entry: &Kaomoji) -> bool {
        self.copies
            .is_copied(&self.card_target(self.grid_surface(), index, entry))
    }

    pub fn is_detail_copied(&self) -> bool {
        self.detail_target()
            .map(|target| self.copies.is_copied(&target))
            .unwrap_or(false)
    }

    /// Category name shown above the related grid
    pub fn related_category(&self) -> Option<&str> {
        self.view
            .related(&self.dataset)
            .and_then(|related| related.category_name)
    }

    /// Hand queued effects to the caller
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}
