//! Upstream host runtime contract
//!
//! One entry point per facade operation, named after it. Hosts report what
//! actually happened through [`HostError`]; turning that into the engine's
//! documented defaults is the facade's job, not the host's.
//!
//! All entry points are synchronous and are only called from the thread the
//! host declares safe for boundary crossings. Implementations resolve handles
//! on every call and must not hand out cached resolutions.

use crate::capability::HostManifest;
use crate::scriptable::OwnedScriptable;
#[cfg(feature = "accelerated-compositing")]
use crate::types::LayerRef;
use crate::types::{ContentUri, PageUrl, PluginInstanceId, ViewHandle, WidgetHandle};
use serde::{Deserialize, Serialize};

/// What went wrong on the host side of a call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum HostError {
    /// A view/widget handle no longer maps to a live host object
    #[error("Unresolvable handle: {handle}")]
    UnresolvableHandle {
        /// Display form of the handle
        handle: String,
    },

    /// A resource identifier outside the host's enumeration
    #[error("Unknown resource identifier: {raw}")]
    UnknownIdentifier {
        /// Raw identifier value
        raw: u32,
    },

    /// A plugin identity the host does not know
    #[error("Unknown plugin: {plugin}")]
    UnknownPlugin {
        /// Plugin instance identity
        plugin: PluginInstanceId,
    },

    /// An argument the host refuses (malformed URL, out-of-range index)
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error message describing the argument
        message: String,
    },

    /// The request was valid but the host has nothing for it
    #[error("Missing: {what}")]
    Missing {
        /// What the host could not provide
        what: String,
    },

    /// The crossing mechanism itself failed
    #[error("Boundary unreachable: {reason}")]
    BoundaryUnreachable {
        /// Error message describing the failure
        reason: String,
    },
}

impl HostError {
    /// Create an unresolvable-handle error from any displayable handle
    pub fn unresolvable(handle: impl std::fmt::Display) -> Self {
        Self::UnresolvableHandle {
            handle: handle.to_string(),
        }
    }

    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a missing-value error
    pub fn missing(what: impl Into<String>) -> Self {
        Self::Missing { what: what.into() }
    }

    /// Create a boundary-unreachable error
    pub fn unreachable(reason: impl Into<String>) -> Self {
        Self::BoundaryUnreachable {
            reason: reason.into(),
        }
    }

    /// Whether the boundary itself failed
    pub fn is_boundary_failure(&self) -> bool {
        matches!(self, HostError::BoundaryUnreachable { .. })
    }
}

/// Result type for host entry points
pub type HostResult<T> = std::result::Result<T, HostError>;

/// Entry points the embedding host exposes to the bridge
pub trait HostRuntime: Send + Sync {
    /// What the host was built against
    fn manifest(&self) -> HostResult<HostManifest>;

    // ====== Key generation ======

    /// Labels of the key strengths the host can generate, strongest first
    fn supported_key_strengths(&self) -> HostResult<Vec<String>>;

    /// Signed public key and challenge for the strength at `index`
    fn signed_public_key_and_challenge(
        &self,
        index: u32,
        challenge: &str,
        url: &PageUrl,
    ) -> HostResult<String>;

    // ====== Cookies ======

    /// Store `value` as cookies for `url`
    fn set_cookies(&self, url: &PageUrl, value: &str) -> HostResult<()>;

    /// Current cookie string for `url`
    fn cookies(&self, url: &PageUrl) -> HostResult<String>;

    /// Whether cookies are enabled at all
    fn cookies_enabled(&self) -> HostResult<bool>;

    // ====== Plugins ======

    /// The scriptable object of the plugin behind `widget`, with one reference
    fn plugin_scriptable_object(&self, widget: WidgetHandle) -> HostResult<Option<OwnedScriptable>>;

    /// Whether `plugin` may open popups
    fn popups_allowed(&self, plugin: PluginInstanceId) -> HostResult<bool>;

    // ====== Resources ======

    /// Localized string for the raw resource identifier
    fn localized_name(&self, raw: u32) -> HostResult<String>;

    // ====== Compositing ======

    /// Attach `layer` as the UI root layer of `view`
    #[cfg(feature = "accelerated-compositing")]
    fn set_ui_root_layer(&self, view: ViewHandle, layer: LayerRef) -> HostResult<()>;

    /// Ask the host to repaint `view` now
    #[cfg(feature = "accelerated-compositing")]
    fn immediate_repaint(&self, view: ViewHandle) -> HostResult<()>;

    // ====== Geometry ======

    /// Screen width in device pixels, as the host reports it
    fn screen_width(&self, view: ViewHandle) -> HostResult<i32>;

    /// Screen height in device pixels, as the host reports it
    fn screen_height(&self, view: ViewHandle) -> HostResult<i32>;

    // ====== Lifecycle ======

    /// Whether the web view embedding `view` is paused
    fn is_web_view_paused(&self, view: ViewHandle) -> HostResult<bool>;

    /// Whether `view` can scroll
    fn can_scroll(&self, view: ViewHandle) -> HostResult<bool>;

    // ====== Content URIs ======

    /// Filesystem path for a content URI
    fn resolve_file_name_for_content_uri(&self, uri: &ContentUri) -> HostResult<String>;
}

macro_rules! forward_host_runtime {
    ($($ptr:ty),*) => {$(
        impl<H: HostRuntime + ?Sized> HostRuntime for $ptr {
            fn manifest(&self) -> HostResult<HostManifest> {
                (**self).manifest()
            }
            fn supported_key_strengths(&self) -> HostResult<Vec<String>> {
                (**self).supported_key_strengths()
            }
            fn signed_public_key_and_challenge(
                &self,
                index: u32,
                challenge: &str,
                url: &PageUrl,
            ) -> HostResult<String> {
                (**self).signed_public_key_and_challenge(index, challenge, url)
            }
            fn set_cookies(&self, url: &PageUrl, value: &str) -> HostResult<()> {
                (**self).set_cookies(url, value)
            }
            fn cookies(&self, url: &PageUrl) -> HostResult<String> {
                (**self).cookies(url)
            }
            fn cookies_enabled(&self) -> HostResult<bool> {
                (**self).cookies_enabled()
            }
            fn plugin_scriptable_object(
                &self,
                widget: WidgetHandle,
            ) -> HostResult<Option<OwnedScriptable>> {
                (**self).plugin_scriptable_object(widget)
            }
            fn popups_allowed(&self, plugin: PluginInstanceId) -> HostResult<bool> {
                (**self).popups_allowed(plugin)
            }
            fn localized_name(&self, raw: u32) -> HostResult<String> {
                (**self).localized_name(raw)
            }
            #[cfg(feature = "accelerated-compositing")]
            fn set_ui_root_layer(&self, view: ViewHandle, layer: LayerRef) -> HostResult<()> {
                (**self).set_ui_root_layer(view, layer)
            }
            #[cfg(feature = "accelerated-compositing")]
            fn immediate_repaint(&self, view: ViewHandle) -> HostResult<()> {
                (**self).immediate_repaint(view)
            }
            fn screen_width(&self, view: ViewHandle) -> HostResult<i32> {
                (**self).screen_width(view)
            }
            fn screen_height(&self, view: ViewHandle) -> HostResult<i32> {
                (**self).screen_height(view)
            }
            fn is_web_view_paused(&self, view: ViewHandle) -> HostResult<bool> {
                (**self).is_web_view_paused(view)
            }
            fn can_scroll(&self, view: ViewHandle) -> HostResult<bool> {
                (**self).can_scroll(view)
            }
            fn resolve_file_name_for_content_uri(&self, uri: &ContentUri) -> HostResult<String> {
                (**self).resolve_file_name_for_content_uri(uri)
            }
        }
    )*};
}

forward_host_runtime!(std::sync::Arc<H>, Box<H>, &H);
