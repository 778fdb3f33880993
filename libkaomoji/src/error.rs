//! Error types for Kaomoji Finder

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KaomojiError>;

#[derive(Error, Debug)]
pub enum KaomojiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Clipboard error: {0}")]
    Clipboard(#[from] ClipboardError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KaomojiError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KaomojiError::InvalidInput(_) => 3,
            KaomojiError::Clipboard(ClipboardError::Unavailable(_)) => 2,
            KaomojiError::Clipboard(_) => 1,
            KaomojiError::Config(_) => 1,
            KaomojiError::Catalog(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to write file: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("Failed to serialize: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse catalog: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Catalog contains no categories")]
    Empty,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Clipboard write failed: {0}")]
    Write(String),

    #[error("Clipboard task failed: {0}")]
    Task(String),
}
