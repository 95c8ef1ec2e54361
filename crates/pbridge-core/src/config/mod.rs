//! Bridge configuration
//!
//! Loaded from TOML with `PBRIDGE_*` environment overrides:
//!
//! ```toml
//! boundary_failure = "fatal"   # or "degrade"
//! verify_manifest = true
//!
//! [logging]
//! level = "info"
//! ansi = false
//! ```

mod traits;

pub use traits::{parse_bool, BridgeConfigSource};

use crate::errors::{BridgeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a facade call does when the boundary itself fails mid-call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryFailurePolicy {
    /// Tear the caller down; the host is gone and nothing can be trusted
    #[default]
    Fatal,
    /// Log and return the operation's absence default (in-process hosts)
    Degrade,
}

impl FromStr for BoundaryFailurePolicy {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(Self::Fatal),
            "degrade" => Ok(Self::Degrade),
            other => Err(BridgeError::config(format!(
                "unknown boundary failure policy {other:?}"
            ))),
        }
    }
}

impl fmt::Display for BoundaryFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fatal => f.write_str("fatal"),
            Self::Degrade => f.write_str("degrade"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive (e.g. `info`, `pbridge_effects=trace`)
    pub level: String,
    /// Colourised output
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            ansi: false,
        }
    }
}

/// Configuration of a bridge facade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Behaviour on boundary-unreachable failures
    pub boundary_failure: BoundaryFailurePolicy,
    /// Run the manifest handshake when attaching
    pub verify_manifest: bool,
    /// Log output
    pub logging: LoggingConfig,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            boundary_failure: BoundaryFailurePolicy::Fatal,
            verify_manifest: true,
            logging: LoggingConfig::default(),
        }
    }
}

impl BridgeConfig {
    /// Configuration for in-process hosts and tests: degrade on boundary failure
    pub fn in_process() -> Self {
        Self {
            boundary_failure: BoundaryFailurePolicy::Degrade,
            ..Self::default()
        }
    }
}

impl BridgeConfigSource for BridgeConfig {
    const ENV_PREFIX: &'static str = "PBRIDGE_";

    fn merge_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{name}", Self::ENV_PREFIX));

        if let Some(value) = var("BOUNDARY_FAILURE") {
            self.boundary_failure = value.parse()?;
        }
        if let Some(value) = var("VERIFY_MANIFEST") {
            self.verify_manifest = parse_bool("PBRIDGE_VERIFY_MANIFEST", &value)?;
        }
        if let Some(value) = var("LOG_LEVEL") {
            self.logging.level = value;
        }
        if let Some(value) = var("LOG_ANSI") {
            self.logging.ansi = parse_bool("PBRIDGE_LOG_ANSI", &value)?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(BridgeError::config("logging.level must not be empty"));
        }
        Ok(())
    }
}
