// File: src/config.rs
// Purpose: Configuration parsing from statepath.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use statepath_router::{RouteDefinition, RouterConfig};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub router: RouterConfig,

    /// Route tree; a single root node
    #[serde(default)]
    pub routes: Option<RouteDefinition>,
}

impl Config {
    /// Load configuration from statepath.toml
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// The declared route tree
    pub fn routes(&self) -> Result<&RouteDefinition> {
        self.routes
            .as_ref()
            .context("No route tree declared: add a [routes] table to the config file")
    }
}
