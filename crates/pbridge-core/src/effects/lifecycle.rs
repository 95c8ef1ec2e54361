//! Lifecycle/state query effect interface

use crate::types::ViewHandle;

/// Pause and scroll state of the embedding surface
pub trait LifecycleEffects: Send + Sync {
    /// Whether the web view is paused; `false` for an unresolvable view
    fn is_web_view_paused(&self, view: ViewHandle) -> bool;

    /// Whether the view can scroll; `false` for an unresolvable view
    fn can_scroll(&self, view: ViewHandle) -> bool;
}
