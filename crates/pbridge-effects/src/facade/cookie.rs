use super::HostBridge;
use pbridge_core::effects::{defaults, CookieEffects};
use pbridge_core::{HostRuntime, PageUrl};
use tracing::debug;

impl<H: HostRuntime> CookieEffects for HostBridge<H> {
    fn set_cookies(&self, url: &PageUrl, value: &str) {
        if !url.is_well_formed() {
            debug!(%url, "malformed cookie url, write dropped");
            return;
        }
        self.call("set_cookies", |host| host.set_cookies(url, value), || ());
    }

    fn cookies(&self, url: &PageUrl) -> String {
        if !url.is_well_formed() {
            debug!(%url, "malformed cookie url, not forwarded");
            return defaults::COOKIES.to_string();
        }
        self.call(
            "cookies",
            |host| host.cookies(url),
            || defaults::COOKIES.to_string(),
        )
    }

    fn cookies_enabled(&self) -> bool {
        self.call(
            "cookies_enabled",
            |host| host.cookies_enabled(),
            || defaults::COOKIES_ENABLED,
        )
    }
}
