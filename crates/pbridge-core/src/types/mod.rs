//! Values and handles exchanged at the boundary

pub mod handles;
pub mod identifiers;
pub mod values;

pub use handles::{
    FrameViewKind, Handle, HandleKind, HandleTable, ViewHandle, WidgetHandle, WidgetKind,
};
#[cfg(feature = "accelerated-compositing")]
pub use identifiers::LayerRef;
pub use identifiers::{PluginInstanceId, ScriptableObjectId};
pub use values::{ContentUri, PageUrl};
