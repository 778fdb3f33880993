//! Centralized logging configuration for all Kaomoji Finder binaries
//!
//! Provides consistent logging setup with support for:
//! - Text, JSON, and pretty-printed output
//! - Environment variable configuration
//! - Per-module log level filtering
//! - Logging to a file (the TUI owns the terminal, so it cannot use stderr)
//!
//! # Examples
//!
//! ```no_run
//! use libkaomoji::logging::{LoggingConfig, LogFormat, LogTarget};
//!
//! // Initialize with JSON format
//! let config = LoggingConfig::new(LogFormat::Json, "info".to_string(), false);
//! config.init().unwrap();
//!
//! // Or use default settings (respects env vars)
//! libkaomoji::logging::init_default().unwrap();
//! ```

use std::path::PathBuf;
use std::str::FromStr;

use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable text output (no colors, for piping)
    Text,
    /// Machine-parseable JSON (one JSON object per line)
    Json,
    /// Pretty-printed with colors (for development)
    Pretty,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            "pretty" => Ok(LogFormat::Pretty),
            _ => Err(format!(
                "Invalid log format: '{}'. Valid options: text, json, pretty",
                s
            )),
        }
    }
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Text => write!(f, "text"),
            LogFormat::Json => write!(f, "json"),
            LogFormat::Pretty => write!(f, "pretty"),
        }
    }
}

/// Where log lines go
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogTarget {
    #[default]
    Stderr,
    /// Append to a file, creating it and its parent directory
    File(PathBuf),
}

/// Configuration for logging initialization
pub struct LoggingConfig {
    pub format: LogFormat,
    pub level: String,
    pub verbose: bool,
    pub target: LogTarget,
}

impl LoggingConfig {
    /// Create a new logging configuration writing to stderr
    ///
    /// # Arguments
    ///
    /// * `format` - Log output format (text, json, or pretty)
    /// * `level` - Minimum log level (error, warn, info, debug, trace)
    /// * `verbose` - If true, defaults to debug level
    pub fn new(format: LogFormat, level: String, verbose: bool) -> Self {
        Self {
            format,
            level,
            verbose,
            target: LogTarget::Stderr,
        }
    }

    pub fn with_target(mut self, target: LogTarget) -> Self {
        self.target = target;
        self
    }

    fn make_writer(&self) -> Result<BoxMakeWriter> {
        match &self.target {
            LogTarget::Stderr => Ok(BoxMakeWriter::new(std::io::stderr)),
            LogTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
                }
                let file = std::fs::OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(ConfigError::WriteError)?;
                Ok(BoxMakeWriter::new(std::sync::Mutex::new(file)))
            }
        }
    }

    /// Initialize logging with the configured settings
    ///
    /// This should be called once at the start of your program. A second
    /// call leaves the first subscriber in place.
    ///
    /// # Errors
    ///
    /// Fails if the log file cannot be opened.
    pub fn init(&self) -> Result<()> {
        use tracing_subscriber::EnvFilter;

        // Determine the filter based on verbose flag and level
        let filter = if self.verbose {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
        };

        let writer = self.make_writer()?;
        let ansi = self.target == LogTarget::Stderr;

        let result = match self.format {
            LogFormat::Json => {
                // JSON output for machine parsing
                // Outputs one JSON object per line
                tracing_subscriber::fmt()
                    .json()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(true)
                    .flatten_event(true)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Pretty => {
                // Pretty output with colors for development
                tracing_subscriber::fmt()
                    .pretty()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(ansi)
                    .with_target(true)
                    .with_line_number(true)
                    .with_file(true)
                    .try_init()
            }
            LogFormat::Text => {
                // Plain text output for piping/basic usage
                tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(false)
                    .with_level(true)
                    .try_init()
            }
        };

        if let Err(e) = result {
            tracing::debug!("Logging already initialized: {}", e);
        }
        Ok(())
    }
}

/// Build a logging config from `KAOMOJI_LOG_FORMAT` and `KAOMOJI_LOG_LEVEL`
///
/// Falls back to text format with info level if not set.
pub fn config_from_env() -> LoggingConfig {
    let format = std::env::var("KAOMOJI_LOG_FORMAT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(LogFormat::Text);

    let level = std::env::var("KAOMOJI_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    LoggingConfig::new(format, level, false)
}

/// Initialize stderr logging with default settings
///
/// # Examples
///
/// ```bash
/// # Use JSON logging
/// export KAOMOJI_LOG_FORMAT=json
/// export KAOMOJI_LOG_LEVEL=debug
/// kaomoji-find cat
/// ```
pub fn init_default() -> Result<()> {
    config_from_env().init()
}

/// Log file for the TUI: `KAOMOJI_LOG_FILE`, else `<data dir>/tui.log`
pub fn tui_log_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KAOMOJI_LOG_FILE") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }
    Ok(crate::config::resolve_data_path()?.join("tui.log"))
}
