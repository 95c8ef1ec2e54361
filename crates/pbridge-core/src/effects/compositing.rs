//! Compositing hooks, present only with `accelerated-compositing`

use crate::types::{LayerRef, ViewHandle};

/// Hooks used by the layer system
///
/// Both are fire-and-forget: an unresolvable view drops the call silently.
pub trait CompositingEffects: Send + Sync {
    /// Make `layer` the UI root layer of `view`
    fn set_ui_root_layer(&self, view: ViewHandle, layer: LayerRef);

    /// Request an immediate repaint of `view`
    fn immediate_repaint(&self, view: ViewHandle);
}
