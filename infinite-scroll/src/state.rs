use crate::IndicatorSlot;

/// A lightweight, serializable snapshot of the engine's interaction state.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiniteScrollState {
    pub is_loading: bool,
    pub is_scrolling: bool,
    pub item_count: usize,
    pub indicator: Option<IndicatorSlot>,
}
