use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::chapters::ChapterPolicy;
use crate::error::CoreError;
use crate::preferences::{PreferenceProvider, SHOW_ALL_RAWS_KEY};

const DEFAULT_CONFIG: &str = include_str!("../../../config/default.toml");

/// Top-level adapter configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub preferences: PreferencesConfig,
    pub query: QueryKeys,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Public site, used for web links and the `Referer` header.
    pub base_url: String,
    /// JSON backend.
    pub api_url: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://manhwaweb.com".into(),
            api_url: "https://manhwawebbackend-production.up.railway.app".into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferencesConfig {
    pub show_all_raws: bool,
}

/// Query parameter names understood by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryKeys {
    pub search: String,
    pub content_type: String,
    pub demography: String,
    pub status: String,
    pub erotic: String,
    pub genres: String,
    pub order_dir: String,
    pub order_item: String,
    pub page: String,
}

impl Default for QueryKeys {
    fn default() -> Self {
        Self {
            search: "buscar".into(),
            content_type: "tipo".into(),
            demography: "demografia".into(),
            status: "estado".into(),
            erotic: "erotico".into(),
            genres: "generes".into(),
            order_dir: "order_dir".into(),
            order_item: "order_item".into(),
            page: "page".into(),
        }
    }
}

impl AppConfig {
    /// Load the user config file if it exists, otherwise the built-in defaults.
    pub fn load() -> Result<Self, CoreError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, falling back to built-in defaults when absent.
    pub fn load_from(path: &Path) -> Result<Self, CoreError> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loading config file");
            let user_str = std::fs::read_to_string(path)?;
            Self::parse(&user_str)
        } else {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            Self::parse(DEFAULT_CONFIG)
        }
    }

    fn parse(s: &str) -> Result<Self, CoreError> {
        toml::from_str(s).map_err(|e| CoreError::Config(e.to_string()))
    }

    /// Save current config to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), CoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path to user config file (XDG on Linux, AppData on Windows).
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "manhwaweb")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }

    pub fn chapter_policy(&self) -> ChapterPolicy {
        ChapterPolicy::from_preferences(self)
    }
}

impl PreferenceProvider for AppConfig {
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match key {
            SHOW_ALL_RAWS_KEY => self.preferences.show_all_raws,
            _ => default,
        }
    }
}
