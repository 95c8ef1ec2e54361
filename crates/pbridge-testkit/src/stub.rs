//! Scripted host double
//!
//! `StubHost` answers from fixed tables, records every entry point it is
//! asked through, and can be switched to fail the boundary for all calls or
//! for named entry points. It never sleeps or waits, so a bridge call over a
//! stub always returns promptly.
//!
//! # Blocking Lock Usage
//!
//! Uses `parking_lot::Mutex` because this is test infrastructure where lock
//! contention is not a concern and the synchronous host contract needs no
//! async locking.

#[cfg(feature = "accelerated-compositing")]
use pbridge_core::LayerRef;
use pbridge_core::{
    ContentUri, HostError, HostManifest, HostResult, HostRuntime, ObjectReleaser, OwnedScriptable,
    PageUrl, PluginInstanceId, RawResourceId, ScriptableObjectId, ViewHandle, WidgetHandle,
};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

/// Answers a stub gives for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubView {
    /// Reported width
    pub width: i32,
    /// Reported height
    pub height: i32,
    /// Reported paused state
    pub paused: bool,
    /// Reported scrollability
    pub scrollable: bool,
}

impl StubView {
    /// A running, scrollable view of the given size
    pub fn sized(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            paused: false,
            scrollable: true,
        }
    }
}

#[derive(Debug, Default)]
struct ReleaseLog {
    released: Mutex<Vec<ScriptableObjectId>>,
}

impl ObjectReleaser for ReleaseLog {
    fn release(&self, id: ScriptableObjectId) {
        self.released.lock().push(id);
    }
}

#[derive(Debug)]
struct StubState {
    manifest: HostManifest,
    calls: Vec<&'static str>,
    unreachable: Option<String>,
    failing: HashSet<&'static str>,
    views: HashMap<ViewHandle, StubView>,
    widgets: HashMap<WidgetHandle, Option<ScriptableObjectId>>,
    allowed_plugins: HashSet<PluginInstanceId>,
    strings: HashMap<u32, String>,
    cookies: HashMap<String, String>,
    cookies_enabled: bool,
    key_strengths: Vec<String>,
    content: HashMap<String, String>,
    #[cfg(feature = "accelerated-compositing")]
    root_layers: HashMap<ViewHandle, LayerRef>,
    #[cfg(feature = "accelerated-compositing")]
    repaints: HashMap<ViewHandle, u64>,
}

impl Default for StubState {
    fn default() -> Self {
        Self {
            manifest: HostManifest::local(),
            calls: Vec::new(),
            unreachable: None,
            failing: HashSet::new(),
            views: HashMap::new(),
            widgets: HashMap::new(),
            allowed_plugins: HashSet::new(),
            strings: HashMap::new(),
            cookies: HashMap::new(),
            cookies_enabled: true,
            key_strengths: Vec::new(),
            content: HashMap::new(),
            #[cfg(feature = "accelerated-compositing")]
            root_layers: HashMap::new(),
            #[cfg(feature = "accelerated-compositing")]
            repaints: HashMap::new(),
        }
    }
}

/// Scripted, call-recording host double
///
/// Cloning shares the same tables and call log.
#[derive(Debug, Clone, Default)]
pub struct StubHost {
    state: Arc<Mutex<StubState>>,
    releases: Arc<ReleaseLog>,
}

impl StubHost {
    /// Empty stub: knows no handles, identifiers or plugins
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a builder
    pub fn builder() -> StubHostBuilder {
        StubHostBuilder::default()
    }

    /// Entry points called so far, in order
    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().calls.clone()
    }

    /// Number of times `op` was called
    pub fn call_count(&self, op: &str) -> usize {
        self.state.lock().calls.iter().filter(|c| **c == op).count()
    }

    /// Forget the call log
    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    /// Objects the engine released, in order
    pub fn released(&self) -> Vec<ScriptableObjectId> {
        self.releases.released.lock().clone()
    }

    /// Fail every entry point with a boundary failure
    pub fn detach(&self, reason: impl Into<String>) {
        self.state.lock().unreachable = Some(reason.into());
    }

    /// Fail only `op` with a boundary failure
    pub fn fail_op(&self, op: &'static str) {
        self.state.lock().failing.insert(op);
    }

    /// Forget a view, as if the host tore it down
    pub fn forget_view(&self, view: ViewHandle) {
        self.state.lock().views.remove(&view);
    }

    /// Forget a widget, as if the host tore it down
    pub fn forget_widget(&self, widget: WidgetHandle) {
        self.state.lock().widgets.remove(&widget);
    }

    /// Cookie string stored for the exact URL text
    pub fn stored_cookies(&self, url: &str) -> Option<String> {
        self.state.lock().cookies.get(url).cloned()
    }

    /// UI root layer recorded for `view`
    #[cfg(feature = "accelerated-compositing")]
    pub fn root_layer(&self, view: ViewHandle) -> Option<LayerRef> {
        self.state.lock().root_layers.get(&view).copied()
    }

    /// Repaints recorded for `view`
    #[cfg(feature = "accelerated-compositing")]
    pub fn repaints(&self, view: ViewHandle) -> u64 {
        self.state.lock().repaints.get(&view).copied().unwrap_or(0)
    }

    /// Record the call, apply fault switches, then answer from the tables
    fn answer<T>(
        &self,
        op: &'static str,
        respond: impl FnOnce(&mut StubState) -> HostResult<T>,
    ) -> HostResult<T> {
        let mut state = self.state.lock();
        state.calls.push(op);
        if let Some(reason) = &state.unreachable {
            return Err(HostError::unreachable(reason.clone()));
        }
        if state.failing.contains(op) {
            return Err(HostError::unreachable(format!("{op} failed by stub")));
        }
        respond(&mut state)
    }

    fn view(&self, op: &'static str, view: ViewHandle) -> HostResult<StubView> {
        self.answer(op, |state| {
            state
                .views
                .get(&view)
                .copied()
                .ok_or_else(|| HostError::unresolvable(view))
        })
    }
}

impl HostRuntime for StubHost {
    fn manifest(&self) -> HostResult<HostManifest> {
        self.answer("manifest", |state| Ok(state.manifest.clone()))
    }

    fn supported_key_strengths(&self) -> HostResult<Vec<String>> {
        self.answer("supported_key_strengths", |state| Ok(state.key_strengths.clone()))
    }

    fn signed_public_key_and_challenge(
        &self,
        index: u32,
        challenge: &str,
        url: &PageUrl,
    ) -> HostResult<String> {
        self.answer("signed_public_key_and_challenge", |state| {
            let strength = state
                .key_strengths
                .get(index as usize)
                .ok_or_else(|| HostError::invalid_argument(format!("strength index {index}")))?;
            Ok(format!("spkac:{strength}:{challenge}:{url}"))
        })
    }

    fn set_cookies(&self, url: &PageUrl, value: &str) -> HostResult<()> {
        self.answer("set_cookies", |state| {
            state
                .cookies
                .insert(url.as_str().to_string(), value.to_string());
            Ok(())
        })
    }

    fn cookies(&self, url: &PageUrl) -> HostResult<String> {
        self.answer("cookies", |state| {
            state
                .cookies
                .get(url.as_str())
                .cloned()
                .ok_or_else(|| HostError::missing(format!("cookies for {url}")))
        })
    }

    fn cookies_enabled(&self) -> HostResult<bool> {
        self.answer("cookies_enabled", |state| Ok(state.cookies_enabled))
    }

    fn plugin_scriptable_object(
        &self,
        widget: WidgetHandle,
    ) -> HostResult<Option<OwnedScriptable>> {
        let releaser: Arc<dyn ObjectReleaser> = self.releases.clone();
        self.answer("plugin_scriptable_object", |state| {
            let object = state
                .widgets
                .get(&widget)
                .copied()
                .ok_or_else(|| HostError::unresolvable(widget))?;
            Ok(object.map(|id| OwnedScriptable::new(id, releaser)))
        })
    }

    fn popups_allowed(&self, plugin: PluginInstanceId) -> HostResult<bool> {
        self.answer("popups_allowed", |state| {
            if state.allowed_plugins.contains(&plugin) {
                Ok(true)
            } else {
                Err(HostError::UnknownPlugin { plugin })
            }
        })
    }

    fn localized_name(&self, raw: u32) -> HostResult<String> {
        self.answer("localized_name", |state| {
            state
                .strings
                .get(&raw)
                .cloned()
                .ok_or(HostError::UnknownIdentifier { raw })
        })
    }

    #[cfg(feature = "accelerated-compositing")]
    fn set_ui_root_layer(&self, view: ViewHandle, layer: LayerRef) -> HostResult<()> {
        self.answer("set_ui_root_layer", |state| {
            if !state.views.contains_key(&view) {
                return Err(HostError::unresolvable(view));
            }
            state.root_layers.insert(view, layer);
            Ok(())
        })
    }

    #[cfg(feature = "accelerated-compositing")]
    fn immediate_repaint(&self, view: ViewHandle) -> HostResult<()> {
        self.answer("immediate_repaint", |state| {
            if !state.views.contains_key(&view) {
                return Err(HostError::unresolvable(view));
            }
            *state.repaints.entry(view).or_insert(0) += 1;
            Ok(())
        })
    }

    fn screen_width(&self, view: ViewHandle) -> HostResult<i32> {
        self.view("screen_width", view).map(|v| v.width)
    }

    fn screen_height(&self, view: ViewHandle) -> HostResult<i32> {
        self.view("screen_height", view).map(|v| v.height)
    }

    fn is_web_view_paused(&self, view: ViewHandle) -> HostResult<bool> {
        self.view("is_web_view_paused", view).map(|v| v.paused)
    }

    fn can_scroll(&self, view: ViewHandle) -> HostResult<bool> {
        self.view("can_scroll", view).map(|v| v.scrollable)
    }

    fn resolve_file_name_for_content_uri(&self, uri: &ContentUri) -> HostResult<String> {
        self.answer("resolve_file_name_for_content_uri", |state| {
            state
                .content
                .get(uri.as_str())
                .cloned()
                .ok_or_else(|| HostError::missing(format!("content {uri}")))
        })
    }
}

/// Builder for [`StubHost`]
#[derive(Debug, Default)]
pub struct StubHostBuilder {
    state: StubState,
}

impl StubHostBuilder {
    /// Declare a different manifest
    pub fn manifest(mut self, manifest: HostManifest) -> Self {
        self.state.manifest = manifest;
        self
    }

    /// Answer for `view`
    pub fn view(mut self, view: ViewHandle, answers: StubView) -> Self {
        self.state.views.insert(view, answers);
        self
    }

    /// Answer for `widget`, optionally exposing a scriptable object
    pub fn widget(mut self, widget: WidgetHandle, object: Option<ScriptableObjectId>) -> Self {
        self.state.widgets.insert(widget, object);
        self
    }

    /// Mark `plugin` allowed to open popups
    pub fn allow_popups(mut self, plugin: PluginInstanceId) -> Self {
        self.state.allowed_plugins.insert(plugin);
        self
    }

    /// Localized string for a (possibly unknown) raw identifier
    pub fn string(mut self, id: impl Into<RawResourceId>, text: impl Into<String>) -> Self {
        self.state.strings.insert(id.into().0, text.into());
        self
    }

    /// Pre-stored cookie string for the exact URL text
    pub fn cookie(mut self, url: impl Into<String>, value: impl Into<String>) -> Self {
        self.state.cookies.insert(url.into(), value.into());
        self
    }

    /// Cookie switch
    pub fn cookies_enabled(mut self, enabled: bool) -> Self {
        self.state.cookies_enabled = enabled;
        self
    }

    /// Supported key strength labels
    pub fn key_strengths<I, S>(mut self, strengths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.state.key_strengths = strengths.into_iter().map(Into::into).collect();
        self
    }

    /// File name for the exact content URI text
    pub fn content(mut self, uri: impl Into<String>, path: impl Into<String>) -> Self {
        self.state.content.insert(uri.into(), path.into());
        self
    }

    /// Finish
    pub fn build(self) -> StubHost {
        StubHost {
            state: Arc::new(Mutex::new(self.state)),
            releases: Arc::new(ReleaseLog::default()),
        }
    }
}
