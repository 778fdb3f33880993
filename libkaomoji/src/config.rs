//! Configuration management for Kaomoji Finder

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::copy::CopyPolicy;
use crate::dataset::Dataset;
use crate::error::{ConfigError, Result};
use crate::filter::{CategoryFilter, ALL_CATEGORIES};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub copy: CopyConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file; the bundled table is used when unset
    pub path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// humantime duration, e.g. "2s"
    #[serde(default = "default_reset_delay")]
    pub reset_delay: String,
    /// humantime duration, e.g. "500ms"
    #[serde(default = "default_navigate_delay")]
    pub navigate_delay: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_reset_delay() -> String {
    "2s".to_string()
}

fn default_navigate_delay() -> String {
    "500ms".to_string()
}

fn default_tick_rate_ms() -> u64 {
    100
}

fn default_category() -> String {
    ALL_CATEGORIES.to_string()
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            reset_delay: default_reset_delay(),
            navigate_delay: default_navigate_delay(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            default_category: default_category(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from the default location, or defaults if the file is absent
    pub fn load_or_default() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        config.copy_policy()?;
        Ok(config)
    }

    /// Delays for copy confirmation, parsed from the `[copy]` table
    ///
    /// A copied card must open before its confirmation clears, so
    /// `navigate_delay` has to be shorter than `reset_delay`.
    pub fn copy_policy(&self) -> Result<CopyPolicy> {
        let reset_delay = parse_duration("copy.reset_delay", &self.copy.reset_delay)?;
        let navigate_delay = parse_duration("copy.navigate_delay", &self.copy.navigate_delay)?;
        if navigate_delay >= reset_delay {
            return Err(ConfigError::InvalidValue {
                field: "copy.navigate_delay".to_string(),
                reason: format!(
                    "must be shorter than copy.reset_delay ({} >= {})",
                    self.copy.navigate_delay, self.copy.reset_delay
                ),
            }
            .into());
        }
        Ok(CopyPolicy {
            reset_delay,
            navigate_delay,
        })
    }

    /// Category the browser starts in
    pub fn default_category(&self) -> CategoryFilter {
        CategoryFilter::from(self.ui.default_category.as_str())
    }

    /// Load the configured catalog, or the bundled one
    pub fn load_dataset(&self) -> Result<Dataset> {
        let dataset = match &self.catalog.path {
            Some(path) => {
                let path = PathBuf::from(shellexpand::tilde(path).to_string());
                tracing::info!(path = %path.display(), "Loading catalog");
                Dataset::load_from_path(&path)?
            }
            None => Dataset::builtin(),
        };
        for issue in dataset.lint() {
            tracing::warn!(%issue, "Catalog issue");
        }
        Ok(dataset)
    }
}

fn parse_duration(field: &str, value: &str) -> Result<Duration> {
    humantime::parse_duration(value).map_err(|e| {
        ConfigError::InvalidValue {
            field: field.to_string(),
            reason: format!("'{}' is not a duration ({})", value, e),
        }
        .into()
    })
}

/// Resolve the configuration file path under the XDG base directories
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KAOMOJI_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("kaomoji").join("config.toml"))
}

/// Resolve the data directory path under the XDG base directories
pub fn resolve_data_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("KAOMOJI_DATA_DIR") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("kaomoji"))
}
