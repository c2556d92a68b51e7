/// The scroll axis of the container.
///
/// `Y` is a vertical list (scrolls top/bottom), `X` a horizontal one (scrolls left/right).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    #[default]
    Y,
}

/// Which edge of the list new content is loaded at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DisplayDirection {
    /// The loading edge is the end (bottom/right). New content appends after existing items.
    #[default]
    Forward,
    /// The loading edge is the start (top/left). Existing content stays anchored while older
    /// items are inserted above it (chat transcripts, timelines).
    Inverse,
}

impl DisplayDirection {
    pub fn from_inverse(display_inverse: bool) -> Self {
        if display_inverse {
            Self::Inverse
        } else {
            Self::Forward
        }
    }

    pub fn is_inverse(self) -> bool {
        matches!(self, Self::Inverse)
    }
}

/// A raw scroll notification forwarded to `on_scroll`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollEvent {
    pub axis: Axis,
    /// Scroll offset read from the surface when the event was handled.
    pub offset: f64,
    pub now_ms: u64,
}

/// Pointer notifications forwarded verbatim to the matching option callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseEvent {
    Enter,
    Leave,
    Over,
    Out,
}

/// How the item count is supplied.
///
/// The variant given at construction fixes the counting source for the lifetime of an
/// [`crate::InfiniteScroll`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCount {
    /// An explicit length, for callers that render items themselves.
    Length(usize),
    /// The number of child nodes handed to the container.
    Children(usize),
}

impl ItemCount {
    pub fn get(self) -> usize {
        match self {
            Self::Length(n) | Self::Children(n) => n,
        }
    }

    /// The same counting source with a new count.
    pub fn resized(self, n: usize) -> Self {
        match self {
            Self::Length(_) => Self::Length(n),
            Self::Children(_) => Self::Children(n),
        }
    }

    pub fn source(self) -> ItemCountSource {
        match self {
            Self::Length(_) => ItemCountSource::Length,
            Self::Children(_) => ItemCountSource::Children,
        }
    }
}

impl Default for ItemCount {
    fn default() -> Self {
        Self::Children(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemCountSource {
    Length,
    Children,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollLogicalPosition {
    Start,
    Center,
    End,
    Nearest,
}

/// Alignment and behavior for a native "scroll into view" call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    /// Alignment on the vertical axis.
    pub block: ScrollLogicalPosition,
    /// Alignment on the horizontal axis.
    pub inline: ScrollLogicalPosition,
}

impl Default for ScrollIntoViewOptions {
    fn default() -> Self {
        Self {
            behavior: ScrollBehavior::Auto,
            block: ScrollLogicalPosition::Start,
            inline: ScrollLogicalPosition::Nearest,
        }
    }
}

impl ScrollIntoViewOptions {
    pub fn with_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_block(mut self, block: ScrollLogicalPosition) -> Self {
        self.block = block;
        self
    }

    pub fn with_inline(mut self, inline: ScrollLogicalPosition) -> Self {
        self.inline = inline;
        self
    }
}

/// The argument handed to [`crate::ScrollIntoView::scroll_into_view`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollIntoViewArg {
    /// `true` aligns the element's start with the viewport start, `false` its end with the
    /// viewport end.
    AlignToTop(bool),
    Options(ScrollIntoViewOptions),
}

/// Options for [`crate::InfiniteScroll::scroll_to_id`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollToIdOptions {
    pub align_to_top: bool,
    /// When set, forwarded instead of `align_to_top`.
    pub scroll_into_view_options: Option<ScrollIntoViewOptions>,
}

impl Default for ScrollToIdOptions {
    fn default() -> Self {
        Self {
            align_to_top: true,
            scroll_into_view_options: None,
        }
    }
}

impl ScrollToIdOptions {
    pub fn align_to_top(align_to_top: bool) -> Self {
        Self {
            align_to_top,
            scroll_into_view_options: None,
        }
    }

    pub fn with_scroll_into_view_options(options: ScrollIntoViewOptions) -> Self {
        Self {
            align_to_top: true,
            scroll_into_view_options: Some(options),
        }
    }

    pub(crate) fn to_arg(self) -> ScrollIntoViewArg {
        match self.scroll_into_view_options {
            Some(options) => ScrollIntoViewArg::Options(options),
            None => ScrollIntoViewArg::AlignToTop(self.align_to_top),
        }
    }
}
