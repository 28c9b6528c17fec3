//
//  imodels-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Settings for the `imodels` CLI, stored as TOML in a platform-specific
//! directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/imodels/config.toml`
//! - **macOS**: `~/Library/Application Support/imodels/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\imodels\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! base_url = "https://api.bentley.com/imodels"
//! version = "itwin-platform.v1"
//!
//! [auth]
//! scheme = "Bearer"
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use imodels_client::config::Config;
//!
//! let mut config = Config::load()?;
//! config.set("api.version", "itwin-platform.v1".to_string())?;
//! config.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Command-line flags and `IMODELS_*` environment variables take precedence
//! over the file; see the CLI's global options.

mod file;

pub use file::*;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_API_VERSION, DEFAULT_BASE_URL};
use crate::auth::DEFAULT_SCHEME;

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const VALID_KEYS: &[&str] = &["api.base_url", "api.version", "auth.scheme"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub auth: AuthConfig,
}

/// Where and how to reach the iModels API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Media type version used in the `Accept` header.
    #[serde(default = "default_api_version")]
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Scheme placed before the token in the `Authorization` header.
    #[serde(default = "default_scheme")]
    pub scheme: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

fn default_scheme() -> String {
    DEFAULT_SCHEME.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            version: default_api_version(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            scheme: default_scheme(),
        }
    }
}

impl Config {
    /// Loads the configuration from the default location.
    ///
    /// Returns the defaults when no file exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !config_exists(path) {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Reads a value by dotted key, e.g. `api.base_url`.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "api.base_url" => Some(self.api.base_url.clone()),
            "api.version" => Some(self.api.version.clone()),
            "auth.scheme" => Some(self.auth.scheme.clone()),
            _ => None,
        }
    }

    /// Sets a value by dotted key.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        if value.trim().is_empty() {
            bail!("Value for '{}' cannot be empty", key);
        }
        match key {
            "api.base_url" => {
                url::Url::parse(&value)
                    .with_context(|| format!("Invalid URL for api.base_url: {}", value))?;
                self.api.base_url = value.trim_end_matches('/').to_string();
            }
            "api.version" => self.api.version = value,
            "auth.scheme" => self.auth.scheme = value,
            _ => bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                VALID_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// All keys with their current values, in [`VALID_KEYS`] order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        VALID_KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.auth.scheme, "Bearer");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("api.version", "itwin-platform.v2".to_string()).unwrap();
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "[api]\nversion = \"itwin-platform.v2\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.api.version, "itwin-platform.v2");
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.auth.scheme, DEFAULT_SCHEME);
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        write_config_file(&path, "[api\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_set_validates_keys_and_values() {
        let mut config = Config::default();

        assert!(config.set("api.colour", "blue".to_string()).is_err());
        assert!(config.set("api.base_url", "not a url".to_string()).is_err());
        assert!(config.set("auth.scheme", "  ".to_string()).is_err());

        config
            .set("api.base_url", "https://qa-api.example.com/imodels/".to_string())
            .unwrap();
        assert_eq!(
            config.get("api.base_url").as_deref(),
            Some("https://qa-api.example.com/imodels")
        );
    }

    #[test]
    fn test_entries_follow_valid_keys() {
        let keys: Vec<&str> = Config::default().entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, VALID_KEYS);
    }
}
