//! Engine-facing effect traits
//!
//! Pure trait definitions for every fact or service the engine asks of its
//! embedding host. These traits define **what** can be asked; handlers in
//! `pbridge-effects` define **how** it reaches the host.
//!
//! Every operation is total. Where the host cannot answer, the result is the
//! documented default from [`defaults`], never an error.
//!
//! # Capability gating
//!
//! [`CompositingEffects`] exists only when the crate is built with the
//! `accelerated-compositing` feature.

#[cfg(feature = "accelerated-compositing")]
pub mod compositing;
pub mod content;
pub mod cookie;
pub mod defaults;
pub mod geometry;
pub mod keygen;
pub mod lifecycle;
pub mod plugin;
pub mod resource;
pub mod supertraits;

#[cfg(feature = "accelerated-compositing")]
pub use compositing::CompositingEffects;
pub use content::ContentUriEffects;
pub use cookie::CookieEffects;
pub use geometry::GeometryEffects;
pub use keygen::KeyGeneratorEffects;
pub use lifecycle::LifecycleEffects;
pub use plugin::PluginEffects;
pub use resource::ResourceEffects;
pub use supertraits::{PlatformBridge, ViewStateEffects};
