//! Global configuration for demix-studio
//!
//! Configuration is stored as YAML in the user config directory.
//! Default location: `~/.config/demix/config.yaml`

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separation service connection settings
    pub api: ApiConfig,
}

/// Separation service connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the separation service, without trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::from("http://localhost:8000"),
            timeout_secs: 30,
        }
    }
}

/// Get the config file path
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("could not determine config directory")?;
    Ok(base.join("demix").join("config.yaml"))
}

/// Load configuration, falling back to defaults when no file exists
pub fn load() -> Result<Config> {
    let path = config_path()?;
    if !path.exists() {
        log::info!("No config at {:?}, using defaults", path);
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config from {:?}", path))?;
    let config: Config = serde_yaml::from_str(&contents)
        .with_context(|| format!("failed to parse config at {:?}", path))?;
    Ok(config)
}

/// Save configuration to the default location
pub fn save(config: &Config) -> Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {:?}", parent))?;
    }
    let contents = serde_yaml::to_string(config).context("failed to serialize config")?;
    std::fs::write(&path, contents)
        .with_context(|| format!("failed to write config to {:?}", path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("api:\n  base_url: http://sep.local\n").unwrap();
        assert_eq!(config.api.base_url, "http://sep.local");
        assert_eq!(config.api.timeout_secs, 30);
    }
}
