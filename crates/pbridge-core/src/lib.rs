//! pbridge Core - Engine/Host Boundary Contract
//!
//! This crate defines the narrow seam through which a rendering engine asks
//! its embedding host for facts and services it cannot reach itself:
//! cookies, key generation, plugin scriptable objects, localized strings,
//! screen geometry, pause/scroll state and content URI resolution.
//!
//! It contains no implementation of any of those services. It defines:
//!
//! ## Values and handles
//! - [`Handle`]: generation-tagged opaque view/widget handles, resolved by the
//!   host through a [`HandleTable`]
//! - [`ResourceId`]: the cross-binary resource identifier enumeration
//! - [`OwnedScriptable`]: explicit ownership transfer of scriptable objects
//!
//! ## Interfaces
//! - [`effects`]: engine-facing effect traits, composed into [`PlatformBridge`]
//! - [`HostRuntime`]: the entry points the host exposes to the bridge
//!
//! ## Contract checks
//! - [`Capabilities`], [`HostManifest`], [`check_compatibility`]: the attach
//!   handshake between independently built binaries
//!
//! # Capability flags
//!
//! The compositing hooks only exist when built with `accelerated-compositing`.
#![cfg_attr(
    not(feature = "accelerated-compositing"),
    doc = r#"
In this build they are absent, so naming them does not compile:

```compile_fail
use pbridge_core::effects::CompositingEffects;
```

```compile_fail
fn repaint<B: pbridge_core::PlatformBridge>(bridge: &B, view: pbridge_core::ViewHandle) {
    bridge.immediate_repaint(view);
}
```
"#
)]
#![cfg_attr(
    feature = "accelerated-compositing",
    doc = r#"
In this build they are present:

```
use pbridge_core::effects::CompositingEffects;
use pbridge_core::{LayerRef, ViewHandle};

fn attach<B: CompositingEffects>(bridge: &B, view: ViewHandle) {
    bridge.set_ui_root_layer(view, LayerRef(1));
    bridge.immediate_repaint(view);
}
```
"#
)]
#![forbid(unsafe_code)]

/// Build-time capabilities and the attach handshake
pub mod capability;

/// Bridge configuration
pub mod config;

/// Engine-facing effect traits
pub mod effects;

/// Unified error handling
pub mod errors;

/// Upstream host runtime contract
pub mod host;

/// Resource identifier contract
pub mod resource;

/// Scriptable object ownership
pub mod scriptable;

/// Handles, identifiers and values
pub mod types;

// === Public API Re-exports ===

pub use capability::{check_compatibility, Capabilities, HostManifest, CONTRACT_VERSION};
pub use config::{BoundaryFailurePolicy, BridgeConfig, BridgeConfigSource, LoggingConfig};
pub use effects::PlatformBridge;
pub use errors::{BridgeError, Result};
pub use host::{HostError, HostResult, HostRuntime};
pub use resource::{resource_table_digest, LocalizedName, RawResourceId, ResourceId};
pub use scriptable::{ObjectReleaser, OwnedScriptable, RawScriptable, ScriptableLookup};
#[cfg(feature = "accelerated-compositing")]
pub use types::LayerRef;
pub use types::{
    ContentUri, Handle, HandleKind, HandleTable, PageUrl, PluginInstanceId, ScriptableObjectId,
    ViewHandle, WidgetHandle,
};
