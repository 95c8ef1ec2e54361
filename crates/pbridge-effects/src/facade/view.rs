use super::HostBridge;
use pbridge_core::effects::{defaults, GeometryEffects, LifecycleEffects};
use pbridge_core::{HostRuntime, ViewHandle};
use tracing::debug;

/// Device pixels are never negative on the engine side
fn device_pixels(op: &'static str, raw: i32) -> u32 {
    u32::try_from(raw).unwrap_or_else(|_| {
        debug!(op, raw, "host reported a negative dimension");
        defaults::SCREEN_DIMENSION
    })
}

impl<H: HostRuntime> GeometryEffects for HostBridge<H> {
    fn screen_width(&self, view: ViewHandle) -> u32 {
        self.call(
            "screen_width",
            |host| host.screen_width(view).map(|raw| device_pixels("screen_width", raw)),
            || defaults::SCREEN_DIMENSION,
        )
    }

    fn screen_height(&self, view: ViewHandle) -> u32 {
        self.call(
            "screen_height",
            |host| host.screen_height(view).map(|raw| device_pixels("screen_height", raw)),
            || defaults::SCREEN_DIMENSION,
        )
    }
}

impl<H: HostRuntime> LifecycleEffects for HostBridge<H> {
    fn is_web_view_paused(&self, view: ViewHandle) -> bool {
        self.call(
            "is_web_view_paused",
            |host| host.is_web_view_paused(view),
            || defaults::PAUSED,
        )
    }

    fn can_scroll(&self, view: ViewHandle) -> bool {
        self.call("can_scroll", |host| host.can_scroll(view), || defaults::CAN_SCROLL)
    }
}
