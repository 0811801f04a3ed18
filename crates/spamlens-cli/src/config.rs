//! Configuration management for SpamLens CLI
//!
//! Stores the API base URL in ~/.config/spamlens/config.toml.
//! `SPAMLENS_API_BASE` overrides the file for a single run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "spamlens";
const CONFIG_FILE: &str = "config.toml";

/// Environment variable that overrides the configured base URL
pub const API_BASE_ENV: &str = "SPAMLENS_API_BASE";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5002".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    pub fn set_base_url(&mut self, url: &str) {
        self.base_url = url.trim_end_matches('/').to_string();
    }

    /// Base URL to use, honouring the environment override
    pub fn effective_base_url(&self) -> String {
        self.resolve_base_url(std::env::var(API_BASE_ENV).ok())
    }

    fn resolve_base_url(&self, env_override: Option<String>) -> String {
        env_override
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        assert_eq!(Config::default().base_url, "http://localhost:5002");
    }

    #[test]
    fn test_parse_empty_file_uses_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.base_url, "http://localhost:5002");
    }

    #[test]
    fn test_env_override_wins() {
        let config = Config::parse("base_url = \"http://saved:1234\"").unwrap();
        assert_eq!(config.resolve_base_url(None), "http://saved:1234");
        assert_eq!(
            config.resolve_base_url(Some("http://env:9999".into())),
            "http://env:9999"
        );
        assert_eq!(config.resolve_base_url(Some("  ".into())), "http://saved:1234");
    }

    #[test]
    fn test_set_base_url_trims_slash() {
        let mut config = Config::default();
        config.set_base_url("http://example.com/");
        assert_eq!(config.base_url, "http://example.com");
    }
}
