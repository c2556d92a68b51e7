use crate::SurfaceMetrics;

/// Distance between the content end and the scroll offset, captured before new items render.
///
/// In inverse mode new items appear on the start side, so keeping this distance constant keeps
/// the visible items where they were.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub scroll_delta: f64,
}

impl ScrollSnapshot {
    pub fn capture(metrics: &SurfaceMetrics) -> Self {
        Self {
            scroll_delta: metrics.content_extent - metrics.offset,
        }
    }

    /// The offset that restores the captured distance for the grown content extent.
    pub fn restored_offset(&self, content_extent_after: f64) -> f64 {
        content_extent_after - self.scroll_delta
    }
}
