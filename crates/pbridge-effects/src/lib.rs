//! pbridge Effects - Bridge Facade and In-Process Hosts
//!
//! Handlers for the effect traits defined in `pbridge-core`:
//!
//! - [`HostBridge`]: the facade the engine is given. Forwards each call to a
//!   [`pbridge_core::HostRuntime`] once and maps every host-side uncertainty to
//!   the operation's documented default.
//! - [`MemoryHost`]: a host runtime that keeps all host-owned state in memory,
//!   for in-process embedding and tests.
//! - [`logging`]: subscriber setup for embedders.
//!
//! ```rust
//! use pbridge_core::effects::{GeometryEffects, ResourceEffects};
//! use pbridge_core::{BridgeConfig, LocalizedName, ResourceId};
//! use pbridge_effects::{HostBridge, MemoryHost, ViewState};
//!
//! let host = MemoryHost::new();
//! host.set_localized(ResourceId::LoadError, "Page failed");
//! let view = host.add_view(ViewState::new(480, 800)).unwrap();
//!
//! let bridge = HostBridge::attach(host.clone(), BridgeConfig::in_process()).unwrap();
//! assert_eq!(bridge.screen_width(view), 480);
//! assert_eq!(
//!     bridge.global_localized_name(ResourceId::LoadError.into()),
//!     LocalizedName::Resolved("Page failed".into())
//! );
//!
//! host.remove_view(view);
//! assert_eq!(bridge.screen_width(view), 0);
//! ```

#![forbid(unsafe_code)]

pub mod facade;
pub mod host;
pub mod logging;

pub use facade::HostBridge;
pub use host::{MemoryHost, ViewState};
pub use logging::init_tracing;
