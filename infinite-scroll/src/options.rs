use alloc::rc::Rc;

use crate::settle::DEFAULT_SCROLL_SETTLE_DELAY_MS;
use crate::{Axis, DisplayDirection, ItemCount, ItemRefMap, MouseEvent, ScrollEvent};

/// Fired once per loading session, when the scroll position crosses the loading threshold.
pub type OnInfiniteLoadCallback = Rc<dyn Fn()>;

/// Receives every scroll event handled by the engine.
pub type OnScrollCallback = Rc<dyn Fn(&ScrollEvent)>;

/// Receives a forwarded pointer event.
pub type OnMouseCallback = Rc<dyn Fn(MouseEvent)>;

/// Configuration for [`crate::InfiniteScroll`].
///
/// Callbacks and the identity map are stored in `Rc`s so adapters can clone the options, change
/// a few fields, and hand them back through [`crate::InfiniteScroll::update_with`] cheaply. The
/// engine lives on the UI thread, so nothing here needs to be `Send`.
pub struct InfiniteScrollOptions<K = u64> {
    pub axis: Axis,
    pub display_inverse: bool,

    /// `Some(true)` while more items can be loaded; `None` if the caller does not track it.
    pub has_more: Option<bool>,
    /// The caller's own loading flag.
    pub is_infinite_loading: bool,

    /// Distance from the loading edge that triggers a load. Defaults to half of the surface's
    /// outer extent, recomputed on every scroll event.
    pub infinite_load_begin_edge_offset: Option<f64>,

    pub on_infinite_load: Option<OnInfiniteLoadCallback>,
    pub on_scroll: Option<OnScrollCallback>,
    pub on_mouse_enter: Option<OnMouseCallback>,
    pub on_mouse_leave: Option<OnMouseCallback>,
    pub on_mouse_over: Option<OnMouseCallback>,
    pub on_mouse_out: Option<OnMouseCallback>,

    /// Used only by `scroll_to_id`.
    pub item_id_ref_map: Option<Rc<dyn ItemRefMap<K>>>,

    pub item_count: ItemCount,

    /// Quiet period after the last scroll event before the scroll session settles.
    pub scroll_settle_delay_ms: u64,
}

impl<K> Clone for InfiniteScrollOptions<K> {
    fn clone(&self) -> Self {
        Self {
            axis: self.axis,
            display_inverse: self.display_inverse,
            has_more: self.has_more,
            is_infinite_loading: self.is_infinite_loading,
            infinite_load_begin_edge_offset: self.infinite_load_begin_edge_offset,
            on_infinite_load: self.on_infinite_load.clone(),
            on_scroll: self.on_scroll.clone(),
            on_mouse_enter: self.on_mouse_enter.clone(),
            on_mouse_leave: self.on_mouse_leave.clone(),
            on_mouse_over: self.on_mouse_over.clone(),
            on_mouse_out: self.on_mouse_out.clone(),
            item_id_ref_map: self.item_id_ref_map.clone(),
            item_count: self.item_count,
            scroll_settle_delay_ms: self.scroll_settle_delay_ms,
        }
    }
}

impl<K> Default for InfiniteScrollOptions<K> {
    fn default() -> Self {
        Self::new(ItemCount::default())
    }
}

impl<K> InfiniteScrollOptions<K> {
    /// Creates options with the given item count source and defaults everywhere else
    /// (vertical, forward, no callbacks).
    pub fn new(item_count: ItemCount) -> Self {
        Self {
            axis: Axis::Y,
            display_inverse: false,
            has_more: None,
            is_infinite_loading: false,
            infinite_load_begin_edge_offset: None,
            on_infinite_load: None,
            on_scroll: None,
            on_mouse_enter: None,
            on_mouse_leave: None,
            on_mouse_over: None,
            on_mouse_out: None,
            item_id_ref_map: None,
            item_count,
            scroll_settle_delay_ms: DEFAULT_SCROLL_SETTLE_DELAY_MS,
        }
    }

    /// Counts items from an explicit length.
    pub fn with_length(length: usize) -> Self {
        Self::new(ItemCount::Length(length))
    }

    /// Counts items from the number of child nodes.
    pub fn with_children(children: usize) -> Self {
        Self::new(ItemCount::Children(children))
    }

    pub fn direction(&self) -> DisplayDirection {
        DisplayDirection::from_inverse(self.display_inverse)
    }

    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_display_inverse(mut self, display_inverse: bool) -> Self {
        self.display_inverse = display_inverse;
        self
    }

    pub fn with_has_more(mut self, has_more: Option<bool>) -> Self {
        self.has_more = has_more;
        self
    }

    pub fn with_is_infinite_loading(mut self, is_infinite_loading: bool) -> Self {
        self.is_infinite_loading = is_infinite_loading;
        self
    }

    pub fn with_infinite_load_begin_edge_offset(mut self, edge_offset: Option<f64>) -> Self {
        self.infinite_load_begin_edge_offset = edge_offset;
        self
    }

    pub fn with_on_infinite_load(mut self, on_infinite_load: Option<impl Fn() + 'static>) -> Self {
        self.on_infinite_load = on_infinite_load.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_scroll(mut self, on_scroll: Option<impl Fn(&ScrollEvent) + 'static>) -> Self {
        self.on_scroll = on_scroll.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_mouse_enter(mut self, f: Option<impl Fn(MouseEvent) + 'static>) -> Self {
        self.on_mouse_enter = f.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_mouse_leave(mut self, f: Option<impl Fn(MouseEvent) + 'static>) -> Self {
        self.on_mouse_leave = f.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_mouse_over(mut self, f: Option<impl Fn(MouseEvent) + 'static>) -> Self {
        self.on_mouse_over = f.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_on_mouse_out(mut self, f: Option<impl Fn(MouseEvent) + 'static>) -> Self {
        self.on_mouse_out = f.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_item_id_ref_map(mut self, map: Option<Rc<dyn ItemRefMap<K>>>) -> Self {
        self.item_id_ref_map = map;
        self
    }

    pub fn with_item_count(mut self, item_count: ItemCount) -> Self {
        self.item_count = item_count;
        self
    }

    pub fn with_scroll_settle_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scroll_settle_delay_ms = delay_ms;
        self
    }
}

impl<K> core::fmt::Debug for InfiniteScrollOptions<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InfiniteScrollOptions")
            .field("axis", &self.axis)
            .field("display_inverse", &self.display_inverse)
            .field("has_more", &self.has_more)
            .field("is_infinite_loading", &self.is_infinite_loading)
            .field(
                "infinite_load_begin_edge_offset",
                &self.infinite_load_begin_edge_offset,
            )
            .field("on_infinite_load", &self.on_infinite_load.is_some())
            .field("item_id_ref_map", &self.item_id_ref_map.is_some())
            .field("item_count", &self.item_count)
            .field("scroll_settle_delay_ms", &self.scroll_settle_delay_ms)
            .finish_non_exhaustive()
    }
}
