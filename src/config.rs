//! Configuration loading
//!
//! Settings come from an optional TOML file in the system's standard config
//! directory (or an explicit path). Every key is optional; missing keys fall
//! back to the built-in defaults.

use crate::listings_api::{DEFAULT_BASE_URL, DEFAULT_COUNTRY};
use crate::theme::{Theme, parse_hex_color};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file inside the config directory
const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file
    #[error("Failed to read config file {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML or has unknown keys
    #[error("Failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    /// A theme color is not a `#rrggbb` value
    #[error("Invalid color for theme.{key}: '{value}' (expected #rrggbb)")]
    InvalidColor { key: &'static str, value: String },

    /// The country code is empty
    #[error("Country code must not be empty")]
    EmptyCountry,
}

/// Raw file contents
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    country: Option<String>,
    base_url: Option<String>,
    theme: ThemeFile,
}

/// Raw `[theme]` table
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ThemeFile {
    title_color: Option<String>,
    accent_color: Option<String>,
    text_color: Option<String>,
    placeholder_text: Option<String>,
    rule_width: Option<usize>,
    color: Option<bool>,
}

/// Resolved application settings
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Country whose schedule is shown
    pub country: String,
    /// Root URL of the listings API
    pub base_url: String,
    /// Presentation settings passed to every view
    pub theme: Theme,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            theme: Theme::default(),
        }
    }
}

impl AppConfig {
    /// Returns the default configuration file location, if the platform has one
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("org", "tvlistings", "tv_listings")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    /// Loads configuration
    ///
    /// # Arguments
    ///
    /// * `path` - Explicit configuration file. It must exist. When `None`, the
    ///   default location is used if a file exists there.
    ///
    /// # Returns
    ///
    /// The resolved configuration, or the defaults when no file applies
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.is_file() => path,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadFailed {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "Loaded config file");
        Self::from_toml_str(&content)
    }

    /// Parses configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let defaults = Self::default();

        let country = match file.country {
            Some(country) if country.trim().is_empty() => return Err(ConfigError::EmptyCountry),
            Some(country) => country.trim().to_uppercase(),
            None => defaults.country,
        };

        Ok(Self {
            country,
            base_url: file.base_url.unwrap_or(defaults.base_url),
            theme: file.theme.resolve(defaults.theme)?,
        })
    }
}

impl ThemeFile {
    /// Applies the configured values on top of a base theme
    fn resolve(self, base: Theme) -> Result<Theme, ConfigError> {
        let color = |key: &'static str, value: Option<String>, fallback| match value {
            None => Ok(fallback),
            Some(value) => {
                parse_hex_color(&value).ok_or(ConfigError::InvalidColor { key, value })
            }
        };

        Ok(Theme {
            title_color: color("title_color", self.title_color, base.title_color)?,
            accent_color: color("accent_color", self.accent_color, base.accent_color)?,
            text_color: color("text_color", self.text_color, base.text_color)?,
            placeholder_text: self.placeholder_text.unwrap_or(base.placeholder_text),
            rule_width: self.rule_width.unwrap_or(base.rule_width),
            color: self.color.unwrap_or(base.color),
        })
    }
}
