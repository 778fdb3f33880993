//! Error types for kaomoji-tui
//!
//! Wraps core library errors and terminal/IO errors for unified handling.

use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Core library error (config, catalog, clipboard)
    #[error("Kaomoji error: {0}")]
    Core(#[from] libkaomoji::KaomojiError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Background runtime error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
