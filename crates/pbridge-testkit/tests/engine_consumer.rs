//! Engine subsystems program against the effect traits
//!
//! Consumers take `impl PlatformBridge` (or a narrower trait) so tests can
//! inject any host and production can inject the forwarding facade.

use pbridge_core::effects::{GeometryEffects, LifecycleEffects, ResourceEffects};
use pbridge_core::{PlatformBridge, ResourceId, ViewHandle};
use pbridge_testkit::{attach_degrading, standard_memory_host, standard_stub, LOAD_ERROR_TEXT};

/// Minimal error page renderer as an engine subsystem would write it
fn error_page<B: PlatformBridge>(bridge: &B, view: ViewHandle) -> String {
    let name = bridge.global_localized_name(ResourceId::LoadError.into());
    let title = name.unwrap_or("Error");
    let width = bridge.screen_width(view).max(320);
    format!("<h1>{title}</h1><!-- {width}px -->")
}

/// Skip layout work for views the host has paused
fn should_layout<B: LifecycleEffects + GeometryEffects>(bridge: &B, view: ViewHandle) -> bool {
    !bridge.is_web_view_paused(view) && bridge.screen_width(view) > 0
}

#[test]
fn test_consumer_runs_against_stub_and_memory_host() {
    let (stub, stub_fixture) = standard_stub();
    let (memory, memory_fixture) = standard_memory_host();
    let over_stub = attach_degrading(stub);
    let over_memory = attach_degrading(memory);

    let expected = format!("<h1>{LOAD_ERROR_TEXT}</h1><!-- 480px -->");
    assert_eq!(error_page(&over_stub, stub_fixture.view), expected);
    assert_eq!(error_page(&over_memory, memory_fixture.view), expected);
}

#[test]
fn test_consumer_falls_back_when_string_is_missing() {
    let (memory, fixture) = standard_memory_host();
    memory.clear_localized(ResourceId::LoadError);
    let bridge = attach_degrading(memory.clone());
    assert_eq!(error_page(&bridge, fixture.view), "<h1>Error</h1><!-- 480px -->");

    memory.remove_view(fixture.view);
    assert_eq!(error_page(&bridge, fixture.view), "<h1>Error</h1><!-- 320px -->");
}

#[test]
fn test_layout_gating_follows_host_state() {
    let (memory, fixture) = standard_memory_host();
    let bridge = attach_degrading(memory.clone());
    assert!(should_layout(&bridge, fixture.view));

    memory.update_view(fixture.view, |view| view.paused = true);
    assert!(!should_layout(&bridge, fixture.view));

    memory.remove_view(fixture.view);
    assert!(!should_layout(&bridge, fixture.view));
}
