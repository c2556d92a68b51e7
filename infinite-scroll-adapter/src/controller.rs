use alloc::rc::Rc;
use alloc::vec::Vec;

use infinite_scroll::{
    InfiniteScroll, InfiniteScrollOptions, InfiniteScrollState, ItemRefMap, MouseEvent,
    ScrollSettled, ScrollToIdOptions, indicator_slot,
};

use crate::MemorySurface;

/// What happened during one [`Controller::tick`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick {
    /// A queued scroll notification was dispatched to the engine.
    pub scrolled: bool,
    /// The engine fired `on_infinite_load`.
    pub load_requested: bool,
    /// The scroll session settled.
    pub settled: bool,
}

/// A framework-neutral controller that wires an [`InfiniteScroll`] engine to a
/// [`MemorySurface`].
///
/// The controller keeps the surface, the item count, the identity map and the loading
/// indicator in step with the engine's options. Adapters drive it by calling:
/// - `scroll_to` / `scroll_by` when the user scrolls
/// - `tick(now_ms)` each frame/timer tick (scroll dispatch and settle debouncing)
/// - `complete_load` (or `append_items` / `prepend_items`) when new items arrive
#[derive(Debug)]
pub struct Controller {
    engine: InfiniteScroll<MemorySurface>,
    surface: MemorySurface,
}

impl Controller {
    /// Mounts `surface` under an engine built from `options`.
    ///
    /// The item count (keeping the variant of `options.item_count`), the identity map and the
    /// indicator are derived from the surface. Mounting scrolls to the start edge; the resulting
    /// scroll notification is dispatched on the first `tick`.
    pub fn new(surface: MemorySurface, mut options: InfiniteScrollOptions) -> Self {
        options.item_count = options.item_count.resized(surface.len());
        let refs: Rc<dyn ItemRefMap<u64>> = Rc::new(surface.item_refs());
        options.item_id_ref_map = Some(refs);
        surface.set_indicator(indicator_slot(
            options.has_more,
            options.is_infinite_loading,
            options.direction(),
        ));

        let mut engine = InfiniteScroll::new(options);
        engine.mount(surface.clone());
        Self { engine, surface }
    }

    pub fn engine(&self) -> &InfiniteScroll<MemorySurface> {
        &self.engine
    }

    pub fn surface(&self) -> &MemorySurface {
        &self.surface
    }

    pub fn options(&self) -> &InfiniteScrollOptions {
        self.engine.options()
    }

    pub fn state(&self) -> InfiniteScrollState {
        self.engine.state()
    }

    pub fn offset(&self) -> f64 {
        self.surface.offset()
    }

    /// Dispatches a pending scroll notification, then runs settle debouncing.
    pub fn tick(&mut self, now_ms: u64) -> Tick {
        let mut tick = Tick::default();
        if self.surface.take_scroll_event() {
            tick.scrolled = true;
            tick.load_requested = self.engine.handle_scroll(now_ms);
        }
        tick.settled = self.engine.update_scrolling(now_ms);
        if tick.scrolled || tick.settled {
            atrace!(
                now_ms,
                offset = self.surface.offset(),
                load_requested = tick.load_requested,
                settled = tick.settled,
                "tick"
            );
        }
        tick
    }

    /// Applies a user scroll to `offset` (clamped) and ticks.
    pub fn scroll_to(&mut self, offset: f64, now_ms: u64) -> Tick {
        self.surface.scroll_to(offset);
        self.tick(now_ms)
    }

    pub fn scroll_by(&mut self, delta: f64, now_ms: u64) -> Tick {
        self.surface.scroll_by(delta);
        self.tick(now_ms)
    }

    pub fn set_viewport_extent(&mut self, viewport: f64) {
        self.surface.set_viewport_extent(viewport);
    }

    pub fn handle_mouse(&self, event: MouseEvent) {
        self.engine.handle_mouse(event);
    }

    pub fn set_has_more(&mut self, has_more: Option<bool>) {
        let mut next = self.engine.options().clone();
        next.has_more = has_more;
        self.commit(next, |_| {});
    }

    pub fn set_infinite_loading(&mut self, is_infinite_loading: bool) {
        let mut next = self.engine.options().clone();
        next.is_infinite_loading = is_infinite_loading;
        self.commit(next, |_| {});
    }

    pub fn append_items(&mut self, items: impl IntoIterator<Item = (u64, f64)>) {
        let items: Vec<(u64, f64)> = items.into_iter().collect();
        let next = self.with_items(&items, self.engine.options().clone());
        self.commit(next, |surface| surface.append_items(items));
    }

    pub fn prepend_items(&mut self, items: impl IntoIterator<Item = (u64, f64)>) {
        let items: Vec<(u64, f64)> = items.into_iter().collect();
        let next = self.with_items(&items, self.engine.options().clone());
        self.commit(next, |surface| surface.prepend_items(items));
    }

    /// Renders a finished load in one update: new items go at the loading edge (after the items
    /// for forward lists, before them for inverse ones), the loading flag drops, and `has_more`
    /// is replaced.
    pub fn complete_load(
        &mut self,
        items: impl IntoIterator<Item = (u64, f64)>,
        has_more: Option<bool>,
    ) {
        let items: Vec<(u64, f64)> = items.into_iter().collect();
        let mut next = self.with_items(&items, self.engine.options().clone());
        next.is_infinite_loading = false;
        next.has_more = has_more;
        let inverse = next.display_inverse;
        self.commit(next, |surface| {
            if inverse {
                surface.prepend_items(items);
            } else {
                surface.append_items(items);
            }
        });
    }

    pub fn scroll_to_start(&mut self) -> bool {
        self.engine.scroll_to_start()
    }

    pub fn scroll_to_end(&mut self) -> bool {
        self.engine.scroll_to_end()
    }

    pub fn scroll_to_id(&self, id: u64, options: ScrollToIdOptions) -> bool {
        self.engine.scroll_to_id(&id, options)
    }

    pub fn scroll_settled(&self) -> ScrollSettled {
        self.engine.scroll_settled()
    }

    /// Resizes the count and rebuilds the identity map for the rendered ids plus `items`.
    fn with_items(
        &self,
        items: &[(u64, f64)],
        mut next: InfiniteScrollOptions,
    ) -> InfiniteScrollOptions {
        let count = self.surface.len() + items.len();
        next.item_count = next.item_count.resized(count);
        let ids = self
            .surface
            .ids()
            .into_iter()
            .chain(items.iter().map(|(id, _)| *id));
        let refs: Rc<dyn ItemRefMap<u64>> = Rc::new(self.surface.refs_for(ids));
        next.item_id_ref_map = Some(refs);
        next
    }

    fn commit(&mut self, next: InfiniteScrollOptions, change: impl FnOnce(&MemorySurface)) {
        let indicator = indicator_slot(next.has_more, next.is_infinite_loading, next.direction());
        adebug!(
            item_count = next.item_count.get(),
            has_more = ?next.has_more,
            is_infinite_loading = next.is_infinite_loading,
            ?indicator,
            "commit"
        );
        self.engine.update_with(next, |surface| {
            change(surface);
            surface.set_indicator(indicator);
        });
        atrace!(
            offset = self.surface.offset(),
            content_extent = self.surface.content_extent(),
            is_loading = self.engine.is_loading(),
            "committed"
        );
    }
}
