//! Plugin scripting and popup permission effect interface

use crate::scriptable::ScriptableLookup;
use crate::types::{PluginInstanceId, WidgetHandle};

/// Plugin host operations
pub trait PluginEffects: Send + Sync {
    /// Scriptable object of the plugin behind `widget`
    ///
    /// Ownership of one reference moves to the caller. An unresolvable
    /// widget yields `None` without blocking.
    fn plugin_scriptable_object(&self, widget: WidgetHandle) -> ScriptableLookup;

    /// Whether `plugin` may open popups; unknown identities are denied
    fn popups_allowed(&self, plugin: PluginInstanceId) -> bool;
}
