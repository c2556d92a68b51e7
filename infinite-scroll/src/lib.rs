//! A headless infinite-scroll engine.
//!
//! For adapter-level utilities (an in-memory surface, a time-driven controller), see the
//! `infinite-scroll-adapter` crate.
//!
//! The engine watches a scrollable surface and tells the caller when to append more items:
//! scroll-edge detection with a configurable threshold, scroll-position preservation when an
//! inverse (chat-style) list grows at its start, and a debounced scrolling/settled state with an
//! awaitable settle signal.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - a [`ScrollSurface`] exposing scroll offset and extents
//! - scroll events and a periodic tick (`now_ms`) for settle debouncing
//! - content updates when new items render
//!
//! It is not a virtualized list: every item stays rendered, and fetching is left to the caller.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod axis;
mod edge;
mod infinite_scroll;
mod key;
mod layout;
mod options;
mod preserve;
mod scrollbar;
mod session;
mod settle;
mod state;
mod surface;
mod types;


pub use axis::{AxisProperties, ScrollTarget, SurfaceMetrics};
pub use edge::{LoadGate, resolve_edge_offset, threshold_reached};
pub use infinite_scroll::InfiniteScroll;
pub use key::ItemRefs;
pub use layout::{IndicatorSlot, LayoutSlot, emit_layout, indicator_slot};
pub use options::{
    InfiniteScrollOptions, OnInfiniteLoadCallback, OnMouseCallback, OnScrollCallback,
};
pub use preserve::ScrollSnapshot;
pub use scrollbar::{
    ScrollbarDetector, has_horizontal_scrollbar, has_vertical_scrollbar, scrollbar_detector_for,
};
pub use session::{ContentProps, LoadingSession};
pub use settle::{DEFAULT_SCROLL_SETTLE_DELAY_MS, DebounceTimer, ScrollSettled, SettleTracker};
pub use state::InfiniteScrollState;
pub use surface::{ItemRefMap, ScrollIntoView, ScrollProperty, ScrollSurface, SurfaceProperty};
pub use types::{
    Axis, DisplayDirection, ItemCount, ItemCountSource, MouseEvent, ScrollBehavior, ScrollEvent,
    ScrollIntoViewArg, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToIdOptions,
};
