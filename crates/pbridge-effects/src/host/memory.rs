//! In-memory host runtime
//!
//! A complete in-process host: views and plugin widgets live in generation
//! tagged handle tables, cookies in a per-origin jar, and scriptable objects
//! carry host-side reference counts. Key "signing" is a deterministic digest
//! placeholder; nothing here is cryptographically meaningful.

use parking_lot::{Mutex, RwLock};
use pbridge_core::types::{FrameViewKind, WidgetKind};
#[cfg(feature = "accelerated-compositing")]
use pbridge_core::LayerRef;
use pbridge_core::{
    ContentUri, HandleTable, HostError, HostManifest, HostResult, HostRuntime, ObjectReleaser,
    OwnedScriptable, PageUrl, PluginInstanceId, ResourceId, Result, ScriptableObjectId,
    ViewHandle, WidgetHandle,
};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Key strength labels offered when none are configured
pub const DEFAULT_KEY_STRENGTHS: [&str; 2] = ["2048 (High Grade)", "1024 (Medium Grade)"];

/// Host-side state of a rendering surface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    /// Screen width as the platform reports it
    pub width: i32,
    /// Screen height as the platform reports it
    pub height: i32,
    /// Whether the embedding web view is paused
    pub paused: bool,
    /// Whether the view can scroll
    pub scrollable: bool,
    /// UI root layer attached by the compositor
    #[cfg(feature = "accelerated-compositing")]
    #[serde(default)]
    pub root_layer: Option<LayerRef>,
    /// Immediate repaints requested so far
    #[cfg(feature = "accelerated-compositing")]
    #[serde(default)]
    pub repaints: u64,
}

impl ViewState {
    /// A running, scrollable view of the given size
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            paused: false,
            scrollable: true,
            #[cfg(feature = "accelerated-compositing")]
            root_layer: None,
            #[cfg(feature = "accelerated-compositing")]
            repaints: 0,
        }
    }
}

#[derive(Debug, Clone)]
struct WidgetState {
    plugin: PluginInstanceId,
    object: Option<ScriptableObjectId>,
}

/// Host-side reference counts of scriptable objects
#[derive(Debug, Default)]
struct ScriptableRefs {
    counts: Mutex<HashMap<ScriptableObjectId, usize>>,
}

impl ScriptableRefs {
    fn acquire(&self, id: ScriptableObjectId) {
        *self.counts.lock().entry(id).or_insert(0) += 1;
    }

    fn outstanding(&self, id: ScriptableObjectId) -> usize {
        self.counts.lock().get(&id).copied().unwrap_or(0)
    }
}

impl ObjectReleaser for ScriptableRefs {
    fn release(&self, id: ScriptableObjectId) {
        let mut counts = self.counts.lock();
        if let Some(count) = counts.get_mut(&id) {
            *count -= 1;
            if *count == 0 {
                counts.remove(&id);
            }
        } else {
            tracing::warn!(object = %id, "release of an object with no outstanding references");
        }
    }
}

#[derive(Debug)]
struct HostState {
    manifest: HostManifest,
    reachable: bool,
    views: HandleTable<FrameViewKind, ViewState>,
    widgets: HandleTable<WidgetKind, WidgetState>,
    cookies_enabled: bool,
    cookie_jar: HashMap<String, BTreeMap<String, String>>,
    popups: HashMap<PluginInstanceId, bool>,
    strings: HashMap<ResourceId, String>,
    content_roots: HashMap<String, PathBuf>,
    key_strengths: Vec<String>,
}

/// In-process host runtime backed by memory
///
/// Cloning shares the same host state.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    state: Arc<RwLock<HostState>>,
    refs: Arc<ScriptableRefs>,
}

impl MemoryHost {
    /// Create an empty host built against this crate's contract
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(HostState {
                manifest: HostManifest::local(),
                reachable: true,
                views: HandleTable::new(),
                widgets: HandleTable::new(),
                cookies_enabled: true,
                cookie_jar: HashMap::new(),
                popups: HashMap::new(),
                strings: HashMap::new(),
                content_roots: HashMap::new(),
                key_strengths: DEFAULT_KEY_STRENGTHS.iter().map(|s| s.to_string()).collect(),
            })),
            refs: Arc::new(ScriptableRefs::default()),
        }
    }

    /// Create a host with the English default strings for every resource
    pub fn with_default_strings() -> Self {
        let host = Self::new();
        for (id, text) in [
            (ResourceId::NoDomain, "(no domain)"),
            (ResourceId::LoadError, "Web page not available"),
            (ResourceId::DrawableDir, "drawable"),
            (ResourceId::FileUploadLabel, "Choose File"),
            (ResourceId::ResetLabel, "Reset"),
            (ResourceId::SubmitLabel, "Submit"),
        ] {
            host.set_localized(id, text);
        }
        host
    }

    /// Replace the manifest the host declares
    pub fn set_manifest(&self, manifest: HostManifest) {
        self.state.write().manifest = manifest;
    }

    /// Simulate the host going away (or coming back)
    pub fn set_reachable(&self, reachable: bool) {
        self.state.write().reachable = reachable;
    }

    // ====== Views ======

    /// Register a rendering surface
    pub fn add_view(&self, view: ViewState) -> Result<ViewHandle> {
        self.state.write().views.register(view)
    }

    /// Tear down a rendering surface; returns whether it was live
    pub fn remove_view(&self, handle: ViewHandle) -> bool {
        self.state.write().views.unregister(handle).is_some()
    }

    /// Mutate a live view; returns whether it was live
    ///
    /// `update` runs on a copy outside the host lock, so it may query this
    /// host. The copy is written back only if the view is still live.
    pub fn update_view(&self, handle: ViewHandle, update: impl FnOnce(&mut ViewState)) -> bool {
        let Some(mut view) = self.view(handle) else {
            return false;
        };
        update(&mut view);
        match self.state.write().views.resolve_mut(handle) {
            Some(slot) => {
                *slot = view;
                true
            }
            None => false,
        }
    }

    /// Snapshot of a live view
    pub fn view(&self, handle: ViewHandle) -> Option<ViewState> {
        self.state.read().views.resolve(handle).cloned()
    }

    // ====== Plugins ======

    /// Register a plugin widget, optionally exposing a scriptable object
    ///
    /// The plugin identity becomes known to popup permission (denied until
    /// [`MemoryHost::allow_popups`] says otherwise).
    pub fn add_widget(
        &self,
        plugin: PluginInstanceId,
        object: Option<ScriptableObjectId>,
    ) -> Result<WidgetHandle> {
        let mut state = self.state.write();
        state.popups.entry(plugin).or_insert(false);
        state.widgets.register(WidgetState { plugin, object })
    }

    /// Tear down a plugin widget; returns whether it was live
    pub fn remove_widget(&self, handle: WidgetHandle) -> bool {
        self.state.write().widgets.unregister(handle).is_some()
    }

    /// Plugin instance behind a live widget
    pub fn widget_plugin(&self, handle: WidgetHandle) -> Option<PluginInstanceId> {
        self.state.read().widgets.resolve(handle).map(|w| w.plugin)
    }

    /// Mark a plugin identity as allowed or denied to open popups
    pub fn allow_popups(&self, plugin: PluginInstanceId, allowed: bool) {
        self.state.write().popups.insert(plugin, allowed);
    }

    /// References the engine still holds on `id`
    pub fn outstanding_scriptable_refs(&self, id: ScriptableObjectId) -> usize {
        self.refs.outstanding(id)
    }

    // ====== Cookies ======

    /// Turn cookie acceptance on or off
    pub fn set_cookies_enabled(&self, enabled: bool) {
        self.state.write().cookies_enabled = enabled;
    }

    // ====== Resources ======

    /// Provide a localization for `id`
    pub fn set_localized(&self, id: ResourceId, text: impl Into<String>) {
        self.state.write().strings.insert(id, text.into());
    }

    /// Drop the localization for `id`
    pub fn clear_localized(&self, id: ResourceId) {
        self.state.write().strings.remove(&id);
    }

    // ====== Content URIs ======

    /// Serve `content://<authority>/...` from `root`
    pub fn mount_content(&self, authority: impl Into<String>, root: impl Into<PathBuf>) {
        self.state
            .write()
            .content_roots
            .insert(authority.into(), root.into());
    }

    // ====== Key generation ======

    /// Replace the supported key strength labels
    pub fn set_key_strengths(&self, strengths: Vec<String>) {
        self.state.write().key_strengths = strengths;
    }

    fn ensure_reachable(&self) -> HostResult<()> {
        if self.state.read().reachable {
            Ok(())
        } else {
            Err(HostError::unreachable("memory host detached"))
        }
    }
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

/// Cookie jar key: `scheme://authority` for hierarchical URLs, else the URL
fn cookie_origin(url: &PageUrl) -> String {
    let text = url.as_str();
    match text.split_once("://") {
        Some((scheme, rest)) => {
            let authority = rest
                .split(['/', '?', '#'])
                .next()
                .unwrap_or_default()
                .to_ascii_lowercase();
            format!("{}://{authority}", scheme.to_ascii_lowercase())
        }
        None => text.to_string(),
    }
}

/// `name=value[; attributes]` -> `(name, value)`
fn parse_cookie(value: &str) -> HostResult<(String, String)> {
    let pair = value.split(';').next().unwrap_or_default();
    let (name, value) = pair
        .split_once('=')
        .ok_or_else(|| HostError::invalid_argument(format!("cookie without '=': {value:?}")))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(HostError::invalid_argument("cookie with empty name"));
    }
    Ok((name.to_string(), value.trim().to_string()))
}

fn placeholder_signature(strength: &str, challenge: &str, url: &PageUrl) -> String {
    let mut hasher = Sha256::new();
    hasher.update(strength.as_bytes());
    hasher.update([0]);
    hasher.update(challenge.as_bytes());
    hasher.update([0]);
    hasher.update(url.as_str().as_bytes());
    hex::encode(hasher.finalize())
}

fn contained_path(root: &Path, relative: &str) -> HostResult<PathBuf> {
    let relative = Path::new(relative);
    if relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
    {
        return Err(HostError::invalid_argument(format!(
            "content path escapes its root: {}",
            relative.display()
        )));
    }
    Ok(root.join(relative))
}

impl HostRuntime for MemoryHost {
    fn manifest(&self) -> HostResult<HostManifest> {
        self.ensure_reachable()?;
        Ok(self.state.read().manifest.clone())
    }

    fn supported_key_strengths(&self) -> HostResult<Vec<String>> {
        self.ensure_reachable()?;
        Ok(self.state.read().key_strengths.clone())
    }

    fn signed_public_key_and_challenge(
        &self,
        index: u32,
        challenge: &str,
        url: &PageUrl,
    ) -> HostResult<String> {
        self.ensure_reachable()?;
        let state = self.state.read();
        let strength = state.key_strengths.get(index as usize).ok_or_else(|| {
            HostError::invalid_argument(format!(
                "key strength index {index} outside 0..{}",
                state.key_strengths.len()
            ))
        })?;
        Ok(placeholder_signature(strength, challenge, url))
    }

    fn set_cookies(&self, url: &PageUrl, value: &str) -> HostResult<()> {
        self.ensure_reachable()?;
        let (name, value) = parse_cookie(value)?;
        let mut state = self.state.write();
        if !state.cookies_enabled {
            tracing::debug!(%url, "cookies disabled, write ignored");
            return Ok(());
        }
        state
            .cookie_jar
            .entry(cookie_origin(url))
            .or_default()
            .insert(name, value);
        Ok(())
    }

    fn cookies(&self, url: &PageUrl) -> HostResult<String> {
        self.ensure_reachable()?;
        let state = self.state.read();
        let cookies = state
            .cookie_jar
            .get(&cookie_origin(url))
            .map(|jar| {
                jar.iter()
                    .map(|(name, value)| format!("{name}={value}"))
                    .collect::<Vec<_>>()
                    .join("; ")
            })
            .unwrap_or_default();
        Ok(cookies)
    }

    fn cookies_enabled(&self) -> HostResult<bool> {
        self.ensure_reachable()?;
        Ok(self.state.read().cookies_enabled)
    }

    fn plugin_scriptable_object(
        &self,
        widget: WidgetHandle,
    ) -> HostResult<Option<OwnedScriptable>> {
        self.ensure_reachable()?;
        let state = self.state.read();
        let widget_state = state
            .widgets
            .resolve(widget)
            .ok_or_else(|| HostError::unresolvable(widget))?;
        Ok(widget_state.object.map(|id| {
            self.refs.acquire(id);
            let releaser: Arc<dyn ObjectReleaser> = self.refs.clone();
            OwnedScriptable::new(id, releaser)
        }))
    }

    fn popups_allowed(&self, plugin: PluginInstanceId) -> HostResult<bool> {
        self.ensure_reachable()?;
        self.state
            .read()
            .popups
            .get(&plugin)
            .copied()
            .ok_or(HostError::UnknownPlugin { plugin })
    }

    fn localized_name(&self, raw: u32) -> HostResult<String> {
        self.ensure_reachable()?;
        let id = ResourceId::try_from(raw).map_err(|_| HostError::UnknownIdentifier { raw })?;
        self.state
            .read()
            .strings
            .get(&id)
            .cloned()
            .ok_or_else(|| HostError::missing(format!("localization for {id}")))
    }

    #[cfg(feature = "accelerated-compositing")]
    fn set_ui_root_layer(&self, view: ViewHandle, layer: LayerRef) -> HostResult<()> {
        self.ensure_reachable()?;
        let mut state = self.state.write();
        let view_state = state
            .views
            .resolve_mut(view)
            .ok_or_else(|| HostError::unresolvable(view))?;
        view_state.root_layer = Some(layer);
        Ok(())
    }

    #[cfg(feature = "accelerated-compositing")]
    fn immediate_repaint(&self, view: ViewHandle) -> HostResult<()> {
        self.ensure_reachable()?;
        let mut state = self.state.write();
        let view_state = state
            .views
            .resolve_mut(view)
            .ok_or_else(|| HostError::unresolvable(view))?;
        view_state.repaints += 1;
        Ok(())
    }

    fn screen_width(&self, view: ViewHandle) -> HostResult<i32> {
        self.with_view(view, |v| v.width)
    }

    fn screen_height(&self, view: ViewHandle) -> HostResult<i32> {
        self.with_view(view, |v| v.height)
    }

    fn is_web_view_paused(&self, view: ViewHandle) -> HostResult<bool> {
        self.with_view(view, |v| v.paused)
    }

    fn can_scroll(&self, view: ViewHandle) -> HostResult<bool> {
        self.with_view(view, |v| v.scrollable)
    }

    fn resolve_file_name_for_content_uri(&self, uri: &ContentUri) -> HostResult<String> {
        self.ensure_reachable()?;
        let (authority, path) = uri
            .authority()
            .zip(uri.path())
            .ok_or_else(|| HostError::invalid_argument(format!("not a content uri: {uri}")))?;
        let state = self.state.read();
        let root = state
            .content_roots
            .get(authority)
            .ok_or_else(|| HostError::missing(format!("content provider {authority}")))?;
        let resolved = contained_path(root, path)?;
        Ok(resolved.to_string_lossy().into_owned())
    }
}

impl MemoryHost {
    fn with_view<T>(&self, view: ViewHandle, read: impl FnOnce(&ViewState) -> T) -> HostResult<T> {
        self.ensure_reachable()?;
        self.state
            .read()
            .views
            .resolve(view)
            .map(read)
            .ok_or_else(|| HostError::unresolvable(view))
    }
}
