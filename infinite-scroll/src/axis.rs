use crate::{Axis, DisplayDirection, ScrollProperty, ScrollSurface, SurfaceProperty};

/// The four surface properties the engine reads for one axis, plus the display direction that
/// decides which end is the "start".
///
/// Resolving once per call keeps the edge detector, position preserver, and navigation code free
/// of any axis branching.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisProperties {
    /// Current scroll offset (`scrollTop` / `scrollLeft`).
    pub scroll: ScrollProperty,
    /// Visible extent (`clientHeight` / `clientWidth`).
    pub client_extent: SurfaceProperty,
    /// Total content extent (`scrollHeight` / `scrollWidth`).
    pub content_extent: SurfaceProperty,
    /// Outer extent (`offsetHeight` / `offsetWidth`), used for the default threshold.
    pub offset_extent: SurfaceProperty,
    pub direction: DisplayDirection,
}

impl AxisProperties {
    pub const fn resolve(axis: Axis, direction: DisplayDirection) -> Self {
        match axis {
            Axis::Y => Self {
                scroll: ScrollProperty::ScrollTop,
                client_extent: SurfaceProperty::ClientHeight,
                content_extent: SurfaceProperty::ScrollHeight,
                offset_extent: SurfaceProperty::OffsetHeight,
                direction,
            },
            Axis::X => Self {
                scroll: ScrollProperty::ScrollLeft,
                client_extent: SurfaceProperty::ClientWidth,
                content_extent: SurfaceProperty::ScrollWidth,
                offset_extent: SurfaceProperty::OffsetWidth,
                direction,
            },
        }
    }

    /// Where "scroll to start" lands: offset 0 for forward lists, the content extent for
    /// inverse ones.
    pub fn start_target(&self) -> ScrollTarget {
        match self.direction {
            DisplayDirection::Forward => ScrollTarget::Value(0.0),
            DisplayDirection::Inverse => ScrollTarget::Property(self.content_extent),
        }
    }

    pub fn end_target(&self) -> ScrollTarget {
        match self.direction {
            DisplayDirection::Forward => ScrollTarget::Property(self.content_extent),
            DisplayDirection::Inverse => ScrollTarget::Value(0.0),
        }
    }

    pub fn read<S: ScrollSurface + ?Sized>(&self, surface: &S) -> SurfaceMetrics {
        SurfaceMetrics {
            offset: surface.get(self.scroll.into()),
            client_extent: surface.get(self.client_extent),
            content_extent: surface.get(self.content_extent),
            offset_extent: surface.get(self.offset_extent),
        }
    }
}

/// A scroll destination: either a literal offset or the value currently held by a surface
/// property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollTarget {
    Value(f64),
    Property(SurfaceProperty),
}

impl ScrollTarget {
    pub fn resolve<S: ScrollSurface + ?Sized>(self, surface: &S) -> f64 {
        match self {
            Self::Value(v) => v,
            Self::Property(p) => surface.get(p),
        }
    }
}

/// Axis-agnostic readouts of a surface at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceMetrics {
    pub offset: f64,
    pub client_extent: f64,
    pub content_extent: f64,
    pub offset_extent: f64,
}
