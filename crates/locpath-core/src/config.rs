use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::query::QueryOptions;

/// Active location used when none is given on the command line.
pub const DEFAULT_LOCATION: &str = "http://localhost/";

/// Global configuration loaded from `~/.config/locpath/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocpathConfig {
    /// Initial active location; relative inputs resolve against it.
    pub location: String,
    /// Maximum bracket nesting decoded from query keys.
    pub query_depth: usize,
    /// Largest `[n]` index decoded as a list position.
    pub query_array_limit: usize,
}

impl Default for LocpathConfig {
    fn default() -> Self {
        let query = QueryOptions::default();
        Self {
            location: DEFAULT_LOCATION.to_string(),
            query_depth: query.depth,
            query_array_limit: query.array_limit,
        }
    }
}

impl LocpathConfig {
    pub fn query_options(&self) -> QueryOptions {
        QueryOptions {
            depth: self.query_depth,
            array_limit: self.query_array_limit,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("locpath")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LocpathConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = LocpathConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file; missing keys take defaults.
pub fn load_from(path: &Path) -> Result<LocpathConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let cfg: LocpathConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
