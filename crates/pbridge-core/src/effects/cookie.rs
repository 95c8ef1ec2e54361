//! Cookie access effect interface

use crate::types::PageUrl;

/// Cookie operations consumed by the network stack
pub trait CookieEffects: Send + Sync {
    /// Store cookies for `url`; a no-op for malformed or unresolvable URLs
    fn set_cookies(&self, url: &PageUrl, value: &str);

    /// Current cookie string for `url`; empty for malformed or unresolvable URLs
    fn cookies(&self, url: &PageUrl) -> String;

    /// Whether the host accepts cookies at all
    fn cookies_enabled(&self) -> bool;
}
