//! Geometry query effect interface

use crate::types::ViewHandle;

/// Screen geometry of the surface embedding a view
pub trait GeometryEffects: Send + Sync {
    /// Screen width in device pixels; 0 for an unresolvable view
    fn screen_width(&self, view: ViewHandle) -> u32;

    /// Screen height in device pixels; 0 for an unresolvable view
    fn screen_height(&self, view: ViewHandle) -> u32;
}
