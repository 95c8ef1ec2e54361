//! pbridge Testing Infrastructure
//!
//! Host doubles, fixtures, proptest strategies and assertions shared by the
//! bridge's integration tests and by engine subsystems that consume the
//! bridge.
//!
//! ```rust
//! use pbridge_core::effects::ResourceEffects;
//! use pbridge_core::{LocalizedName, RawResourceId, ResourceId};
//! use pbridge_testkit::{attach_degrading, standard_stub, LOAD_ERROR_TEXT};
//!
//! let (stub, _fixture) = standard_stub();
//! let bridge = attach_degrading(stub);
//! assert_eq!(
//!     bridge.global_localized_name(ResourceId::LoadError.into()),
//!     LocalizedName::Resolved(LOAD_ERROR_TEXT.to_string())
//! );
//! assert_eq!(bridge.global_localized_name(RawResourceId(999)), LocalizedName::NotAvailable);
//! ```

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

pub mod assertions;
pub mod fixtures;
pub mod strategies;
pub mod stub;

pub use assertions::*;
pub use fixtures::*;
pub use stub::{StubHost, StubHostBuilder, StubView};

/// Install a test subscriber once; later calls are no-ops
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("pbridge=debug"))
        .with_test_writer()
        .try_init();
}
