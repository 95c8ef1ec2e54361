use super::HostBridge;
use pbridge_core::effects::CompositingEffects;
use pbridge_core::{HostRuntime, LayerRef, ViewHandle};

impl<H: HostRuntime> CompositingEffects for HostBridge<H> {
    fn set_ui_root_layer(&self, view: ViewHandle, layer: LayerRef) {
        self.call(
            "set_ui_root_layer",
            |host| host.set_ui_root_layer(view, layer),
            || (),
        );
    }

    fn immediate_repaint(&self, view: ViewHandle) {
        self.call("immediate_repaint", |host| host.immediate_repaint(view), || ());
    }
}
