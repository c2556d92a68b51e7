use crate::DisplayDirection;

/// Where the loading indicator sits relative to the items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndicatorSlot {
    /// Before the items, next to an inverse list's loading edge.
    Leading,
    /// After the items, next to a forward list's loading edge.
    Trailing,
}

/// One entry of the container's render order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutSlot {
    LoadingIndicator,
    Items,
}

/// The indicator is shown while more content may arrive or a load is in flight.
pub fn indicator_slot(
    has_more: Option<bool>,
    is_infinite_loading: bool,
    direction: DisplayDirection,
) -> Option<IndicatorSlot> {
    if has_more != Some(true) && !is_infinite_loading {
        return None;
    }
    Some(match direction {
        DisplayDirection::Forward => IndicatorSlot::Trailing,
        DisplayDirection::Inverse => IndicatorSlot::Leading,
    })
}

/// Emits the container's children in render order without allocating.
pub fn emit_layout(indicator: Option<IndicatorSlot>, emit: &mut dyn FnMut(LayoutSlot)) {
    if indicator == Some(IndicatorSlot::Leading) {
        emit(LayoutSlot::LoadingIndicator);
    }
    emit(LayoutSlot::Items);
    if indicator == Some(IndicatorSlot::Trailing) {
        emit(LayoutSlot::LoadingIndicator);
    }
}
