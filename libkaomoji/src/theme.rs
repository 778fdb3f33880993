//! Light/dark theme preference
//!
//! The preference is ordinary shell state. It is read once when the shell
//! starts and written once when it exits; nothing else touches the file.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::resolve_data_path;
use crate::error::{ConfigError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Dark => write!(f, "dark"),
            Theme::Light => write!(f, "light"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct ThemeFile {
    #[serde(default)]
    theme: Theme,
}

/// Default location of the theme file
pub fn theme_path() -> Result<PathBuf> {
    Ok(resolve_data_path()?.join("theme.toml"))
}

/// Read the saved theme; a missing file means the default (dark)
pub fn load_theme(path: &Path) -> Result<Theme> {
    if !path.exists() {
        return Ok(Theme::default());
    }
    let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
    let file: ThemeFile = toml::from_str(&content).map_err(ConfigError::ParseError)?;
    Ok(file.theme)
}

/// Persist the theme, creating parent directories as needed
pub fn save_theme(path: &Path, theme: Theme) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(ConfigError::WriteError)?;
    }
    let content = toml::to_string(&ThemeFile { theme }).map_err(ConfigError::SerializeError)?;
    std::fs::write(path, content).map_err(ConfigError::WriteError)?;
    tracing::debug!(path = %path.display(), %theme, "Saved theme");
    Ok(())
}
