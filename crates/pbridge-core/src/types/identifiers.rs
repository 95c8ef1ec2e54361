//! Plain identifiers that cross the boundary by value

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a plugin instance, as assigned by the plugin host
///
/// Popup permission is keyed on this; an identity the host never marked
/// allowed is denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PluginInstanceId(pub u64);

impl PluginInstanceId {
    /// Create a new plugin instance identifier
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PluginInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plugin-{}", self.0)
    }
}

impl From<u64> for PluginInstanceId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identity of a script-engine-visible object created by a plugin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ScriptableObjectId(pub u64);

impl fmt::Display for ScriptableObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "npobject-{}", self.0)
    }
}

/// Reference to an engine-owned compositing layer
#[cfg(feature = "accelerated-compositing")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayerRef(pub u64);

#[cfg(feature = "accelerated-compositing")]
impl fmt::Display for LayerRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "layer-{}", self.0)
    }
}
