//! Compositing hooks in builds with `accelerated-compositing`
#![cfg(feature = "accelerated-compositing")]

use pbridge_core::effects::CompositingEffects;
use pbridge_core::{LayerRef, ViewHandle};
use pbridge_testkit::{attach_degrading, standard_stub};

#[test]
fn test_root_layer_and_repaint_reach_the_host() {
    let (stub, fixture) = standard_stub();
    let bridge = attach_degrading(stub.clone());

    bridge.set_ui_root_layer(fixture.view, LayerRef(11));
    bridge.immediate_repaint(fixture.view);

    assert_eq!(stub.root_layer(fixture.view), Some(LayerRef(11)));
    assert_eq!(stub.repaints(fixture.view), 1);
}

#[test]
fn test_unknown_view_is_ignored() {
    let (stub, _) = standard_stub();
    let bridge = attach_degrading(stub.clone());
    bridge.set_ui_root_layer(ViewHandle::invalid(), LayerRef(1));
    bridge.immediate_repaint(ViewHandle::invalid());
    assert_eq!(stub.root_layer(ViewHandle::invalid()), None);
}
