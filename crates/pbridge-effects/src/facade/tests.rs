use super::HostBridge;
use crate::host::{MemoryHost, ViewState};
use assert_matches::assert_matches;
use pbridge_core::effects::{
    ContentUriEffects, CookieEffects, GeometryEffects, KeyGeneratorEffects, LifecycleEffects,
    PluginEffects, ResourceEffects,
};
use pbridge_core::{
    BridgeConfig, BridgeError, Capabilities, ContentUri, HostManifest, LocalizedName, PageUrl,
    PluginInstanceId, RawResourceId, ResourceId, ScriptableObjectId, ViewHandle, WidgetHandle,
    CONTRACT_VERSION,
};

fn bridge() -> (MemoryHost, HostBridge<MemoryHost>) {
    let host = MemoryHost::new();
    let bridge = HostBridge::attach(host.clone(), BridgeConfig::in_process()).unwrap();
    (host, bridge)
}

#[test]
fn test_attach_rejects_version_mismatch() {
    let host = MemoryHost::new();
    host.set_manifest(HostManifest {
        contract_version: CONTRACT_VERSION + 1,
        ..HostManifest::local()
    });
    assert_matches!(
        HostBridge::attach(host, BridgeConfig::default()),
        Err(BridgeError::ContractMismatch { .. })
    );
}

#[test]
fn test_attach_rejects_resource_table_drift() {
    let host = MemoryHost::new();
    host.set_manifest(HostManifest {
        resource_digest: "drifted".to_string(),
        ..HostManifest::local()
    });
    assert_matches!(
        HostBridge::attach(host, BridgeConfig::default()),
        Err(BridgeError::ContractMismatch { .. })
    );
}

#[test]
fn test_attach_to_unreachable_host_fails() {
    let host = MemoryHost::new();
    host.set_reachable(false);
    assert_matches!(
        HostBridge::attach(host, BridgeConfig::default()),
        Err(BridgeError::HostUnavailable { .. })
    );
}

#[test]
fn test_attach_without_verification_skips_manifest() {
    let host = MemoryHost::new();
    host.set_manifest(HostManifest {
        contract_version: 0,
        resource_digest: String::new(),
        capabilities: Capabilities::default(),
    });
    let config = BridgeConfig {
        verify_manifest: false,
        ..BridgeConfig::default()
    };
    assert!(HostBridge::attach(host, config).is_ok());
}

#[test]
fn test_view_queries_forward_to_host() {
    let (host, bridge) = bridge();
    let view = host
        .add_view(ViewState {
            paused: true,
            ..ViewState::new(720, 1280)
        })
        .unwrap();

    assert_eq!(bridge.screen_width(view), 720);
    assert_eq!(bridge.screen_height(view), 1280);
    assert!(bridge.is_web_view_paused(view));
    assert!(bridge.can_scroll(view));
}

#[test]
fn test_torn_down_view_yields_conservative_defaults() {
    let (host, bridge) = bridge();
    let view = host
        .add_view(ViewState {
            paused: true,
            ..ViewState::new(720, 1280)
        })
        .unwrap();
    host.remove_view(view);

    assert_eq!(bridge.screen_width(view), 0);
    assert_eq!(bridge.screen_height(view), 0);
    assert!(!bridge.is_web_view_paused(view));
    assert!(!bridge.can_scroll(view));
}

#[test]
fn test_negative_dimensions_clamp_to_zero() {
    let (host, bridge) = bridge();
    let view = host.add_view(ViewState::new(-1, i32::MIN)).unwrap();
    assert_eq!(bridge.screen_width(view), 0);
    assert_eq!(bridge.screen_height(view), 0);
}

#[test]
fn test_localized_name_sentinels() {
    let (host, bridge) = bridge();
    host.set_localized(ResourceId::LoadError, "Page failed");
    host.set_localized(ResourceId::ResetLabel, "");

    assert_eq!(
        bridge.global_localized_name(ResourceId::LoadError.into()),
        LocalizedName::Resolved("Page failed".to_string())
    );
    assert_eq!(
        bridge.global_localized_name(ResourceId::ResetLabel.into()),
        LocalizedName::Resolved(String::new())
    );
    assert_eq!(
        bridge.global_localized_name(ResourceId::SubmitLabel.into()),
        LocalizedName::NotAvailable
    );
    assert_eq!(
        bridge.global_localized_name(RawResourceId(999)),
        LocalizedName::NotAvailable
    );
}

#[test]
fn test_cookies_round_trip_and_malformed_urls() {
    let (_host, bridge) = bridge();
    let page = PageUrl::new("https://example.com/");
    bridge.set_cookies(&page, "sid=abc");
    bridge.set_cookies(&page, "sid=abc");
    assert_eq!(bridge.cookies(&page), "sid=abc");
    assert!(bridge.cookies_enabled());

    let malformed = PageUrl::new("not a url");
    bridge.set_cookies(&malformed, "sid=abc");
    let after_once = bridge.cookies(&malformed);
    bridge.set_cookies(&malformed, "sid=abc");
    assert_eq!(after_once, "");
    assert_eq!(bridge.cookies(&malformed), after_once);
    assert_eq!(bridge.cookies(&page), "sid=abc");
}

#[test]
fn test_rejected_cookie_value_is_dropped() {
    let (_host, bridge) = bridge();
    let page = PageUrl::new("https://example.com/");
    bridge.set_cookies(&page, "no-equals-sign");
    assert_eq!(bridge.cookies(&page), "");
}

#[test]
fn test_key_generation() {
    let (_host, bridge) = bridge();
    let url = PageUrl::new("https://ca.test/enroll");
    let strengths = bridge.supported_key_strength_list();
    assert_eq!(strengths.len(), 2);

    assert!(!bridge
        .signed_public_key_and_challenge(0, "challenge", &url)
        .is_empty());
    assert_eq!(
        bridge.signed_public_key_and_challenge(strengths.len() as u32, "challenge", &url),
        ""
    );
    assert_eq!(
        bridge.signed_public_key_and_challenge(0, "challenge", &PageUrl::new("")),
        ""
    );
}

#[test]
fn test_scriptable_object_ownership_moves_to_caller() {
    let (host, bridge) = bridge();
    let object = ScriptableObjectId(42);
    let widget = host.add_widget(PluginInstanceId(1), Some(object)).unwrap();

    let owned = bridge.plugin_scriptable_object(widget).unwrap();
    assert_eq!(owned.id(), object);
    assert_eq!(host.outstanding_scriptable_refs(object), 1);

    owned.release();
    assert_eq!(host.outstanding_scriptable_refs(object), 0);
}

#[test]
fn test_unresolvable_widget_yields_no_object() {
    let (host, bridge) = bridge();
    let widget = host
        .add_widget(PluginInstanceId(1), Some(ScriptableObjectId(1)))
        .unwrap();
    host.remove_widget(widget);

    for _ in 0..3 {
        assert!(bridge.plugin_scriptable_object(widget).is_none());
    }
    assert!(bridge.plugin_scriptable_object(WidgetHandle::invalid()).is_none());
}

#[test]
fn test_popups_fail_closed() {
    let (host, bridge) = bridge();
    host.allow_popups(PluginInstanceId(7), true);
    assert!(bridge.popups_allowed(PluginInstanceId(7)));
    assert!(!bridge.popups_allowed(PluginInstanceId(8)));
}

#[test]
fn test_content_uri_resolution() {
    let (host, bridge) = bridge();
    host.mount_content("downloads", "/data/downloads");

    assert_eq!(
        bridge.resolve_file_name_for_content_uri(&ContentUri::new("content://downloads/a.pdf")),
        "/data/downloads/a.pdf"
    );
    assert_eq!(
        bridge.resolve_file_name_for_content_uri(&ContentUri::new("file:///etc/passwd")),
        ""
    );
    assert_eq!(
        bridge.resolve_file_name_for_content_uri(&ContentUri::new("content://unknown/a")),
        ""
    );
}

#[test]
fn test_degrade_policy_returns_defaults_when_boundary_fails() {
    let (host, bridge) = bridge();
    let view = host.add_view(ViewState::new(100, 100)).unwrap();
    host.set_reachable(false);

    assert_eq!(bridge.screen_width(view), 0);
    assert!(!bridge.cookies_enabled());
    assert_eq!(
        bridge.global_localized_name(ResourceId::NoDomain.into()),
        LocalizedName::NotAvailable
    );
}

#[test]
#[should_panic(expected = "boundary unreachable during screen_width")]
fn test_fatal_policy_tears_down_when_boundary_fails() {
    let host = MemoryHost::new();
    let bridge = HostBridge::attach(host.clone(), BridgeConfig::default()).unwrap();
    host.set_reachable(false);
    let _ = bridge.screen_width(ViewHandle::invalid());
}

#[cfg(feature = "accelerated-compositing")]
#[test]
fn test_compositing_hooks() {
    use pbridge_core::effects::CompositingEffects;
    use pbridge_core::LayerRef;

    let (host, bridge) = bridge();
    let view = host.add_view(ViewState::new(10, 10)).unwrap();
    bridge.set_ui_root_layer(view, LayerRef(5));
    bridge.immediate_repaint(view);
    bridge.immediate_repaint(view);

    let state = host.view(view).unwrap();
    assert_eq!(state.root_layer, Some(LayerRef(5)));
    assert_eq!(state.repaints, 2);

    host.remove_view(view);
    bridge.set_ui_root_layer(view, LayerRef(6));
    bridge.immediate_repaint(view);
}
