//! Assertions over bridge absence defaults

use pbridge_core::effects::{defaults, ResourceEffects, ViewStateEffects};
use pbridge_core::{LocalizedName, RawResourceId, ViewHandle};

/// Assert that every view query on `view` returns its conservative default
#[track_caller]
pub fn assert_view_defaults<B: ViewStateEffects + ?Sized>(bridge: &B, view: ViewHandle) {
    assert_eq!(
        bridge.screen_width(view),
        defaults::SCREEN_DIMENSION,
        "screen_width({view})"
    );
    assert_eq!(
        bridge.screen_height(view),
        defaults::SCREEN_DIMENSION,
        "screen_height({view})"
    );
    assert_eq!(
        bridge.is_web_view_paused(view),
        defaults::PAUSED,
        "is_web_view_paused({view})"
    );
    assert_eq!(
        bridge.can_scroll(view),
        defaults::CAN_SCROLL,
        "can_scroll({view})"
    );
}

/// Assert that `id` yields the "not available" sentinel
#[track_caller]
pub fn assert_not_available<B: ResourceEffects + ?Sized>(bridge: &B, id: RawResourceId) {
    assert_eq!(
        bridge.global_localized_name(id),
        LocalizedName::NotAvailable,
        "global_localized_name({id})"
    );
}
