//! Configuration for Meadowlark

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::types::{default_tours, Tour};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port
    #[serde(default = "default_http_port")]
    pub http_port: u16,

    /// Address to bind the HTTP server to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// API behaviour settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Tours the catalogue is seeded with
    #[serde(default = "default_tours")]
    pub tours: Vec<Tour>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Report unknown tours with 200 instead of 404 (the body is unchanged)
    #[serde(default)]
    pub legacy_status_codes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bind_address: default_bind_address(),
            api: ApiConfig::default(),
            tours: default_tours(),
        }
    }
}

impl Config {
    /// Load config from the default location, or fall back to defaults
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Apply a `PORT` value from the environment, if it is set
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(port) = std::env::var("PORT") {
            self.http_port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT value: {}", port)))?;
        }
        Ok(self)
    }

    /// `host:port` the server listens on
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.http_port)
    }

    /// Get the default config path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("meadowlark").join("config.toml"))
    }
}

// Default value functions

fn default_http_port() -> u16 {
    3000
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
