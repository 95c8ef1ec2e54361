//! Unified error type for bridge setup
//!
//! Bridge *calls* never fail: every host-side uncertainty is mapped to the
//! documented default of the operation. `BridgeError` covers what happens
//! before the first call (attach handshake, configuration) and the checked
//! conversions at the edges of the contract.

use serde::{Deserialize, Serialize};

/// Unified error type for bridge setup and contract conversions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum BridgeError {
    /// Invalid input
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// A raw resource identifier outside the agreed enumeration
    #[error("Unknown resource identifier: {raw}")]
    UnknownIdentifier {
        /// The raw value received across the boundary
        raw: u32,
    },

    /// Engine and host were built against different boundary contracts
    #[error("Contract mismatch: {message}")]
    ContractMismatch {
        /// Which part of the contract disagrees
        message: String,
    },

    /// The engine was built with a capability the host does not declare
    #[error("Capability missing on host: {capability}")]
    CapabilityMismatch {
        /// Name of the capability
        capability: String,
    },

    /// Configuration could not be loaded or failed validation
    #[error("Config error: {message}")]
    Config {
        /// Error message describing the configuration problem
        message: String,
    },

    /// The host runtime could not be reached while attaching
    #[error("Host unavailable: {message}")]
    HostUnavailable {
        /// Error message describing the failure
        message: String,
    },
}

impl BridgeError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a contract mismatch error
    pub fn contract_mismatch(message: impl Into<String>) -> Self {
        Self::ContractMismatch {
            message: message.into(),
        }
    }

    /// Create a capability mismatch error
    pub fn capability_mismatch(capability: impl Into<String>) -> Self {
        Self::CapabilityMismatch {
            capability: capability.into(),
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a host unavailable error
    pub fn host_unavailable(message: impl Into<String>) -> Self {
        Self::HostUnavailable {
            message: message.into(),
        }
    }
}

/// Standard Result type for bridge setup
pub type Result<T> = std::result::Result<T, BridgeError>;

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        Self::config(err.to_string())
    }
}

impl From<toml::de::Error> for BridgeError {
    fn from(err: toml::de::Error) -> Self {
        Self::config(format!("Invalid TOML: {err}"))
    }
}

impl From<serde_json::Error> for BridgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::invalid(format!("Invalid JSON: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = BridgeError::invalid("test message");
        assert!(matches!(err, BridgeError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid: test message");
    }

    #[test]
    fn test_io_error_becomes_config_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = BridgeError::from(io_err);
        assert!(matches!(err, BridgeError::Config { .. }));
    }

    #[test]
    fn test_unknown_identifier_display() {
        let err = BridgeError::UnknownIdentifier { raw: 999 };
        assert_eq!(err.to_string(), "Unknown resource identifier: 999");
    }
}
