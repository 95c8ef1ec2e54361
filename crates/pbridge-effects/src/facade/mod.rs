//! Host-forwarding bridge facade
//!
//! [`HostBridge`] implements every engine-facing effect trait by forwarding
//! each call to a [`HostRuntime`] exactly once and settling the outcome:
//!
//! - `Ok(value)` is returned as is
//! - every recoverable [`HostError`] becomes the operation's documented default
//! - `BoundaryUnreachable` follows the configured [`BoundaryFailurePolicy`]
//!
//! The facade holds no mutable state. Repeating a call can only give a
//! different answer because host-owned state changed.

mod content;
mod cookie;
mod keygen;
mod plugin;
mod resource;
mod view;

#[cfg(feature = "accelerated-compositing")]
mod compositing;

use pbridge_core::{
    check_compatibility, BoundaryFailurePolicy, BridgeConfig, BridgeConfigSource, BridgeError,
    HostError, HostManifest, HostResult, HostRuntime, Result,
};
use tracing::{debug, error, info, trace_span};

/// Bridge facade over a host runtime
#[derive(Debug, Clone)]
pub struct HostBridge<H> {
    host: H,
    config: BridgeConfig,
}

impl<H: HostRuntime> HostBridge<H> {
    /// Attach to `host`, running the manifest handshake when configured
    ///
    /// Fails if the host speaks another contract version, was built with a
    /// different resource table, or lacks a capability compiled into this build.
    pub fn attach(host: H, config: BridgeConfig) -> Result<Self> {
        config.validate()?;
        if config.verify_manifest {
            let local = HostManifest::local();
            let remote = host
                .manifest()
                .map_err(|err| BridgeError::host_unavailable(err.to_string()))?;
            check_compatibility(&local, &remote)?;
            info!(
                contract_version = remote.contract_version,
                accelerated_compositing = remote.capabilities.accelerated_compositing,
                "attached to host"
            );
        } else {
            debug!("attached to host without manifest verification");
        }
        Ok(Self { host, config })
    }

    /// Wrap `host` without the handshake
    pub fn new_unchecked(host: H, config: BridgeConfig) -> Self {
        Self { host, config }
    }
}

impl<H> HostBridge<H> {
    /// The host this facade forwards to
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Active configuration
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Detach and return the host
    pub fn into_host(self) -> H {
        self.host
    }

    /// Run one boundary crossing and settle its outcome
    fn call<T>(
        &self,
        op: &'static str,
        crossing: impl FnOnce(&H) -> HostResult<T>,
        default: impl FnOnce() -> T,
    ) -> T {
        let _span = trace_span!("bridge_call", op).entered();
        match crossing(&self.host) {
            Ok(value) => value,
            Err(HostError::BoundaryUnreachable { reason }) => {
                self.boundary_failure(op, &reason, default)
            }
            Err(err) => {
                debug!(op, error = %err, "host could not answer, using default");
                default()
            }
        }
    }

    fn boundary_failure<T>(
        &self,
        op: &'static str,
        reason: &str,
        default: impl FnOnce() -> T,
    ) -> T {
        match self.config.boundary_failure {
            BoundaryFailurePolicy::Fatal => {
                error!(op, reason, "boundary unreachable, tearing down");
                panic!("pbridge: boundary unreachable during {op}: {reason}");
            }
            BoundaryFailurePolicy::Degrade => {
                error!(op, reason, "boundary unreachable, degrading to default");
                default()
            }
        }
    }
}

#[cfg(test)]
mod tests;
