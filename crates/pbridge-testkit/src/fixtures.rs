//! Standard hosts and bridges for tests

use crate::stub::{StubHost, StubView};
use pbridge_core::{
    BoundaryFailurePolicy, BridgeConfig, HostRuntime, PluginInstanceId, ResourceId,
    ScriptableObjectId, ViewHandle, WidgetHandle,
};
use pbridge_effects::{HostBridge, MemoryHost, ViewState};

/// Text the standard hosts localize [`ResourceId::LoadError`] to
pub const LOAD_ERROR_TEXT: &str = "Page failed";

/// Handles and identities known to a standard host
#[derive(Debug, Clone, Copy)]
pub struct HostFixture {
    /// A live 480x800 view
    pub view: ViewHandle,
    /// A live plugin widget exposing [`HostFixture::object`]
    pub widget: WidgetHandle,
    /// Plugin behind the widget; allowed to open popups
    pub plugin: PluginInstanceId,
    /// Scriptable object of the widget
    pub object: ScriptableObjectId,
}

/// Stub host with one view, one widget and `LoadError -> "Page failed"`
pub fn standard_stub() -> (StubHost, HostFixture) {
    let fixture = HostFixture {
        view: ViewHandle::from_raw((1u64 << 32) | 1),
        widget: WidgetHandle::from_raw((1u64 << 32) | 2),
        plugin: PluginInstanceId(7),
        object: ScriptableObjectId(70),
    };
    let stub = StubHost::builder()
        .view(fixture.view, StubView::sized(480, 800))
        .widget(fixture.widget, Some(fixture.object))
        .allow_popups(fixture.plugin)
        .string(ResourceId::LoadError, LOAD_ERROR_TEXT)
        .key_strengths(["2048 (High Grade)", "1024 (Medium Grade)"])
        .build();
    (stub, fixture)
}

/// Memory host with the default strings, `LoadError -> "Page failed"`,
/// one view and one widget
pub fn standard_memory_host() -> (MemoryHost, HostFixture) {
    let host = MemoryHost::with_default_strings();
    host.set_localized(ResourceId::LoadError, LOAD_ERROR_TEXT);

    let plugin = PluginInstanceId(7);
    let object = ScriptableObjectId(70);
    let view = host
        .add_view(ViewState::new(480, 800))
        .unwrap_or_else(|err| panic!("fixture view: {err}"));
    let widget = host
        .add_widget(plugin, Some(object))
        .unwrap_or_else(|err| panic!("fixture widget: {err}"));
    host.allow_popups(plugin, true);

    (
        host,
        HostFixture {
            view,
            widget,
            plugin,
            object,
        },
    )
}

/// Attach with the given boundary failure policy, skipping nothing
pub fn attach<H: HostRuntime>(host: H, policy: BoundaryFailurePolicy) -> HostBridge<H> {
    let config = BridgeConfig {
        boundary_failure: policy,
        ..BridgeConfig::default()
    };
    HostBridge::attach(host, config).unwrap_or_else(|err| panic!("fixture attach: {err}"))
}

/// Attach with [`BoundaryFailurePolicy::Degrade`]
pub fn attach_degrading<H: HostRuntime>(host: H) -> HostBridge<H> {
    attach(host, BoundaryFailurePolicy::Degrade)
}
