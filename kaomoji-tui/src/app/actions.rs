//! Actions for the reducer pattern
//!
//! All state transitions are triggered by actions. This module defines
//! all possible actions that can modify application state, plus the
//! effects the reducer asks the main loop to perform.

use std::time::Instant;

use crossterm::event::KeyEvent;
use libkaomoji::{CategoryFilter, CopyOutcome, CopyVariant, Kaomoji};

/// Actions that trigger state transitions
#[derive(Debug, Clone)]
pub enum Action {
    // === UI Events ===
    /// Keyboard input event not consumed by the search box
    Key(KeyEvent),

    /// Periodic tick; drives copy timers
    Tick(Instant),

    /// Terminal resize event
    Resize(u16, u16),

    // === Navigation ===
    /// Quit the application
    Quit,

    /// Show help overlay
    ShowHelp,

    /// Hide help overlay
    HideHelp,

    /// Switch between dark and light palettes
    ToggleTheme,

    // === Browsing ===
    /// Search box content changed
    SearchChanged(String),

    /// Switch to a category (always lands on the listing)
    ChangeCategory(CategoryFilter),

    /// Cycle forward through the category bar
    NextCategory,

    /// Cycle backward through the category bar
    PreviousCategory,

    /// Move the card cursor on the current grid
    MoveCursor(Direction),

    /// Activate the card under the cursor (copy, then open)
    ActivateCard,

    /// Copy the open entry from the detail view
    CopyOpenEntry,

    /// Open an entry in the detail view
    SelectEntry(Kaomoji),

    /// Return from the detail view to the listing
    Back,

    /// A clipboard write finished
    CopyFinished {
        target: CopyTarget,
        outcome: CopyOutcome,
        at: Instant,
    },

    // === Status Bar ===
    /// Update status message
    SetStatus(String),

    /// Clear status message
    ClearStatus,
}

/// Cursor movement on a card grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Screen identifier, derived from the view state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Search box, category bar and result grid
    Listing,

    /// One entry with its related entries
    Detail,
}

/// Where a copy control lives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    /// A card on the listing grid
    Listing,

    /// A card on the "More from" grid
    Related,

    /// The detail view's copy button
    Detail,
}

/// One mounted copy control
///
/// `generation` identifies the view instance the control belongs to;
/// completions and timers for older generations are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CopyTarget {
    pub surface: Surface,
    pub generation: u64,
    pub index: usize,
    pub entry: Kaomoji,
}

impl CopyTarget {
    pub fn variant(&self) -> CopyVariant {
        match self.surface {
            Surface::Detail => CopyVariant::Detail,
            Surface::Listing | Surface::Related => CopyVariant::Card,
        }
    }
}

/// Side effects requested by the reducer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write `target.entry.symbol` to the clipboard
    Copy(CopyTarget),
}
