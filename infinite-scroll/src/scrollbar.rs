use crate::{Axis, ScrollSurface, SurfaceProperty};

/// A scrollbar-presence test for one axis.
pub type ScrollbarDetector = fn(&dyn ScrollSurface) -> bool;

/// Content taller than the visible area.
pub fn has_vertical_scrollbar(surface: &dyn ScrollSurface) -> bool {
    surface.get(SurfaceProperty::ScrollHeight) > surface.get(SurfaceProperty::ClientHeight)
}

/// Content wider than the visible area.
pub fn has_horizontal_scrollbar(surface: &dyn ScrollSurface) -> bool {
    surface.get(SurfaceProperty::ScrollWidth) > surface.get(SurfaceProperty::ClientWidth)
}

pub fn scrollbar_detector_for(axis: Axis) -> ScrollbarDetector {
    match axis {
        Axis::Y => has_vertical_scrollbar,
        Axis::X => has_horizontal_scrollbar,
    }
}
