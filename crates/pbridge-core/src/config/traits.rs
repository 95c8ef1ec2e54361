//! Configuration loading traits

use crate::errors::{BridgeError, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Configuration that loads from TOML, layers environment overrides and
/// validates itself
pub trait BridgeConfigSource: Clone + Default + DeserializeOwned + Send + Sync + 'static {
    /// Environment variable prefix for overrides
    const ENV_PREFIX: &'static str;

    /// Parse from TOML text and validate
    fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate
    fn load_from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            BridgeError::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Apply overrides from the process environment
    fn merge_with_env(&mut self) -> Result<()> {
        self.merge_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, which receives full variable names
    fn merge_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>;

    /// Validate the configuration
    fn validate(&self) -> Result<()>;
}

/// Parse a boolean override the way operators write them
pub fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(BridgeError::config(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}
