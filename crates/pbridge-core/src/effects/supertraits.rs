//! The single injected bridge interface
//!
//! Engine subsystems are parameterized by `PlatformBridge` (or by the one
//! effect trait they actually need) and never reach the host through global
//! state.

#[cfg(feature = "accelerated-compositing")]
use super::CompositingEffects;
use super::{
    ContentUriEffects, CookieEffects, GeometryEffects, KeyGeneratorEffects, LifecycleEffects,
    PluginEffects, ResourceEffects,
};

/// Every bridge operation available in this build
#[cfg(not(feature = "accelerated-compositing"))]
pub trait PlatformBridge:
    KeyGeneratorEffects
    + CookieEffects
    + PluginEffects
    + ResourceEffects
    + GeometryEffects
    + LifecycleEffects
    + ContentUriEffects
{
}

#[cfg(not(feature = "accelerated-compositing"))]
impl<T> PlatformBridge for T where
    T: KeyGeneratorEffects
        + CookieEffects
        + PluginEffects
        + ResourceEffects
        + GeometryEffects
        + LifecycleEffects
        + ContentUriEffects
{
}

/// Every bridge operation available in this build
#[cfg(feature = "accelerated-compositing")]
pub trait PlatformBridge:
    KeyGeneratorEffects
    + CookieEffects
    + PluginEffects
    + ResourceEffects
    + CompositingEffects
    + GeometryEffects
    + LifecycleEffects
    + ContentUriEffects
{
}

#[cfg(feature = "accelerated-compositing")]
impl<T> PlatformBridge for T where
    T: KeyGeneratorEffects
        + CookieEffects
        + PluginEffects
        + ResourceEffects
        + CompositingEffects
        + GeometryEffects
        + LifecycleEffects
        + ContentUriEffects
{
}

/// View-facing subset used by layout code
pub trait ViewStateEffects: GeometryEffects + LifecycleEffects {}

impl<T> ViewStateEffects for T where T: GeometryEffects + LifecycleEffects {}
