use crate::catalog::Catalog;
use crate::query::scorer::ScoringWeights;
use crate::query::state::SortOrder;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "temple-atlas";
const CONFIG_FILE: &str = "config.json";

/// Application configuration stored in the app data directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// JSON catalog to load instead of the built-in one
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Sort order used when none is given on the command line
    #[serde(default)]
    pub default_sort: SortOrder,

    /// Maximum number of results to print (0 shows all)
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Number of query outputs kept in the LRU cache
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Relevance scoring weights
    #[serde(default)]
    pub scoring: ScoringWeights,
}

fn default_display_limit() -> usize {
    0
}

fn default_cache_capacity() -> usize {
    32
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            default_sort: SortOrder::default(),
            display_limit: default_display_limit(),
            cache_capacity: default_cache_capacity(),
            scoring: ScoringWeights::default(),
        }
    }
}

impl AppConfig {
    /// Load config from the app data directory, or return default if not found
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_path()?)
    }

    /// Load config from an explicit path, or return default if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig =
            serde_json::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save config to the app data directory, returning the file written
    pub fn save(&self) -> Result<PathBuf> {
        let config_path = get_config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content =
            serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Load the configured catalog, falling back to the built-in one
    pub fn open_catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display())),
            None => Catalog::builtin().context("Built-in catalog is invalid"),
        }
    }

    /// Resolve 0 to "no limit"
    pub fn effective_display_limit(&self) -> Option<usize> {
        if self.display_limit == 0 {
            None
        } else {
            Some(self.display_limit)
        }
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir().map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    Ok(base.join(APP_NAME))
}
