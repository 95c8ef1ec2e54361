//! Build-time capabilities and the attach handshake
//!
//! Capabilities are decided by cargo features when each side is built. The
//! engine never probes for them at call time: a gated entry point either
//! exists in the build or it does not. What is checked at runtime, once, is
//! that the two independently built binaries agree on the contract.

use crate::errors::{BridgeError, Result};
use crate::resource::resource_table_digest;
use serde::{Deserialize, Serialize};

/// Version of the boundary contract; bump on any incompatible change
pub const CONTRACT_VERSION: u32 = 1;

/// Capability subsets a build may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Compositing hooks (`set_ui_root_layer`, `immediate_repaint`)
    pub accelerated_compositing: bool,
}

impl Capabilities {
    /// Capabilities compiled into this build
    pub const fn compiled() -> Self {
        Self {
            accelerated_compositing: cfg!(feature = "accelerated-compositing"),
        }
    }

    /// Names of capabilities set in `self` but not in `other`
    pub fn missing_from(&self, other: &Capabilities) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.accelerated_compositing && !other.accelerated_compositing {
            missing.push("accelerated-compositing");
        }
        missing
    }
}

/// What one side of the boundary was built against
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostManifest {
    /// Boundary contract version
    pub contract_version: u32,
    /// Digest of the resource identifier table
    pub resource_digest: String,
    /// Capabilities compiled into that side
    pub capabilities: Capabilities,
}

impl HostManifest {
    /// Manifest describing this build
    pub fn local() -> Self {
        Self {
            contract_version: CONTRACT_VERSION,
            resource_digest: resource_table_digest(),
            capabilities: Capabilities::compiled(),
        }
    }

    /// Decode a manifest sent by the host as JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode for sending across the boundary
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Check that a host may serve an engine described by `local`
///
/// The host may declare more capabilities than the engine uses, never fewer.
pub fn check_compatibility(local: &HostManifest, host: &HostManifest) -> Result<()> {
    if local.contract_version != host.contract_version {
        return Err(BridgeError::contract_mismatch(format!(
            "engine speaks contract v{}, host speaks v{}",
            local.contract_version, host.contract_version
        )));
    }
    if local.resource_digest != host.resource_digest {
        return Err(BridgeError::contract_mismatch(
            "resource identifier tables differ between engine and host",
        ));
    }
    if let Some(capability) = local.capabilities.missing_from(&host.capabilities).first() {
        return Err(BridgeError::capability_mismatch(*capability));
    }
    Ok(())
}
