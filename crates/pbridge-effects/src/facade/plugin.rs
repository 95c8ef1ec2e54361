use super::HostBridge;
use pbridge_core::effects::{defaults, PluginEffects};
use pbridge_core::{HostRuntime, PluginInstanceId, ScriptableLookup, WidgetHandle};

impl<H: HostRuntime> PluginEffects for HostBridge<H> {
    fn plugin_scriptable_object(&self, widget: WidgetHandle) -> ScriptableLookup {
        self.call(
            "plugin_scriptable_object",
            |host| host.plugin_scriptable_object(widget),
            || None,
        )
    }

    fn popups_allowed(&self, plugin: PluginInstanceId) -> bool {
        self.call(
            "popups_allowed",
            |host| host.popups_allowed(plugin),
            || defaults::POPUPS_ALLOWED,
        )
    }
}
