use crate::{DisplayDirection, SurfaceMetrics};

/// Preconditions that must all hold before the threshold is even tested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadGate {
    pub has_callback: bool,
    /// `None` means the caller does not track "has more"; `is_infinite_loading` decides then.
    pub has_more: Option<bool>,
    pub is_infinite_loading: bool,
    pub is_mounted: bool,
    /// Whether a loading session is already active.
    pub is_loading: bool,
}

impl LoadGate {
    pub fn is_open(&self) -> bool {
        let wants_more = match self.has_more {
            Some(has_more) => has_more,
            None => !self.is_infinite_loading,
        };
        self.has_callback && wants_more && self.is_mounted && !self.is_loading
    }
}

/// Distance from the loading edge at which a load is requested.
///
/// An explicit value wins; otherwise half of the surface's current outer extent is used. The
/// default is recomputed from every reading, so it follows surface resizes.
pub fn resolve_edge_offset(edge_offset: Option<f64>, metrics: &SurfaceMetrics) -> f64 {
    edge_offset.unwrap_or(metrics.offset_extent / 2.0)
}

/// Tests whether the scroll position has crossed the loading threshold.
///
/// Forward: `offset + client_extent + edge_offset >= content_extent` (inclusive).
/// Inverse: `offset <= edge_offset`, so a negative edge offset never triggers for non-negative
/// offsets.
pub fn threshold_reached(
    metrics: &SurfaceMetrics,
    edge_offset: Option<f64>,
    direction: DisplayDirection,
) -> bool {
    let edge_offset = resolve_edge_offset(edge_offset, metrics);
    match direction {
        DisplayDirection::Forward => {
            metrics.offset + metrics.client_extent + edge_offset >= metrics.content_extent
        }
        DisplayDirection::Inverse => metrics.offset <= edge_offset,
    }
}
