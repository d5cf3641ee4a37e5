//! User configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Task file location; a leading `~/` expands to the home directory.
    #[serde(default)]
    pub data_path: Option<String>,

    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Copy the previous task file aside before each overwrite.
    #[serde(default = "default_true")]
    pub backup: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { backup: true }
    }
}

fn default_true() -> bool {
    true
}

/// `~/.keeper`, where the config and the default task file live.
pub fn get_app_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".keeper"))
}

fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the task file path: CLI override first, then the configured
    /// path, then `~/.keeper/tasks.txt`.
    pub fn resolve_data_path(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path);
        }
        if let Some(configured) = &self.data_path {
            return Ok(expand_home(configured));
        }
        Ok(get_app_dir()?.join("tasks.txt"))
    }
}

fn expand_home(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
