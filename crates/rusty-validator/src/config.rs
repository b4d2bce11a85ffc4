// File: src/config.rs
// Purpose: Configuration parsing from rusty-validator.toml

use crate::kind::Kind;
use crate::registry::Registry;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub registry: RegistryConfig,
}

/// Which built-in validators get registered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Kinds to wire, e.g. `["string", "int"]`
    #[serde(default = "default_kinds")]
    pub kinds: Vec<Kind>,
}

fn default_kinds() -> Vec<Kind> {
    vec![Kind::String, Kind::Int]
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            kinds: default_kinds(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
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

    /// Load configuration from default path (./rusty-validator.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-validator.toml")
    }

    /// Build the registry described by this configuration
    pub fn build_registry(&self) -> Registry {
        Registry::from_config(&self.registry)
    }
}
