//! Application module
//!
//! Contains the core application architecture:
//! - Actions: What can happen
//! - State: What is true right now
//! - Reducer: Pure function (State, Action) -> State
//!
//! Clipboard writes are not performed by the reducer. It queues
//! `Effect`s which the main loop drains after each action.

pub mod actions;
pub mod event;
pub mod reducer;
pub mod state;

// Re-export commonly used types
pub use actions::{Action, CopyTarget, Direction, Effect, Screen, Surface};
pub use reducer::{is_search_input, reduce};
pub use state::{AppState, GridCursor, StatusBarState, UiConfig};
