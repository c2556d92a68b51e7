use crate::axis::{AxisProperties, ScrollTarget, SurfaceMetrics};
use crate::edge::{LoadGate, threshold_reached};
use crate::layout::{IndicatorSlot, LayoutSlot, emit_layout, indicator_slot};
use crate::preserve::ScrollSnapshot;
use crate::scrollbar::{ScrollbarDetector, scrollbar_detector_for};
use crate::session::{ContentProps, LoadingSession};
use crate::settle::{ScrollSettled, SettleTracker};
use crate::{
    Axis, DisplayDirection, InfiniteScrollOptions, InfiniteScrollState, ItemCount,
    ItemCountSource, MouseEvent, ScrollEvent, ScrollSurface, ScrollToIdOptions,
};

/// A headless infinite-scroll engine.
///
/// The engine does not render or fetch anything. It observes a [`ScrollSurface`] supplied by the
/// adapter and:
/// - requests more content (`on_infinite_load`) when a scroll event crosses the loading
///   threshold, at most once per loading session;
/// - keeps the visible content still when an inverse list grows at its start;
/// - derives a scrolling/settled flag and a shared settle future from scroll events.
///
/// All methods run on the UI thread. Scroll handling and content updates are synchronous; the
/// only deferred work is the settle debounce, which the adapter drives through
/// [`InfiniteScroll::update_scrolling`].
#[derive(Debug)]
pub struct InfiniteScroll<S, K = u64> {
    options: InfiniteScrollOptions<K>,
    count_source: ItemCountSource,
    surface: Option<S>,
    session: LoadingSession,
    settle: SettleTracker,
    scrolled_to_start_on_update: bool,
}

impl<S: ScrollSurface, K> InfiniteScroll<S, K> {
    /// Creates an unmounted engine. The item count variant in `options` becomes the counting
    /// source for the engine's lifetime.
    pub fn new(options: InfiniteScrollOptions<K>) -> Self {
        idebug!(
            axis = ?options.axis,
            display_inverse = options.display_inverse,
            item_count = options.item_count.get(),
            "InfiniteScroll::new"
        );
        Self {
            count_source: options.item_count.source(),
            surface: None,
            session: LoadingSession::default(),
            settle: SettleTracker::new(options.scroll_settle_delay_ms),
            scrolled_to_start_on_update: false,
            options,
        }
    }

    pub fn options(&self) -> &InfiniteScrollOptions<K> {
        &self.options
    }

    pub fn count_source(&self) -> ItemCountSource {
        self.count_source
    }

    pub fn item_count(&self) -> usize {
        self.options.item_count.get()
    }

    pub fn axis(&self) -> Axis {
        self.options.axis
    }

    pub fn direction(&self) -> DisplayDirection {
        self.options.direction()
    }

    fn properties(&self) -> AxisProperties {
        AxisProperties::resolve(self.options.axis, self.options.direction())
    }

    fn count_of(&self, item_count: ItemCount) -> usize {
        if item_count.source() != self.count_source {
            iwarn!(
                expected = ?self.count_source,
                got = ?item_count.source(),
                "item count source changed after construction; counting it as the original source"
            );
        }
        item_count.get()
    }

    fn content_props(&self, options: &InfiniteScrollOptions<K>) -> ContentProps {
        ContentProps {
            has_more: options.has_more,
            is_infinite_loading: options.is_infinite_loading,
            item_count: self.count_of(options.item_count),
        }
    }

    /// Attaches the surface and scrolls it to the start edge.
    pub fn mount(&mut self, surface: S) {
        idebug!(direction = ?self.direction(), "InfiniteScroll::mount");
        self.surface = Some(surface);
        self.scroll_to_start();
    }

    /// Detaches and returns the surface. Every surface operation is a no-op until the next
    /// `mount`.
    pub fn unmount(&mut self) -> Option<S> {
        idebug!("InfiniteScroll::unmount");
        self.surface.take()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// The current surface handle, if mounted.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    pub fn metrics(&self) -> Option<SurfaceMetrics> {
        let props = self.properties();
        self.surface.as_ref().map(|s| props.read(s))
    }

    pub fn is_loading(&self) -> bool {
        self.session.is_active()
    }

    pub fn is_scrolling(&self) -> bool {
        self.settle.is_scrolling()
    }

    pub fn indicator_slot(&self) -> Option<IndicatorSlot> {
        indicator_slot(
            self.options.has_more,
            self.options.is_infinite_loading,
            self.direction(),
        )
    }

    pub fn shows_loading_indicator(&self) -> bool {
        self.indicator_slot().is_some()
    }

    /// Emits the container's children (loading indicator and items) in render order.
    pub fn for_each_layout_slot(&self, mut f: impl FnMut(LayoutSlot)) {
        emit_layout(self.indicator_slot(), &mut f);
    }

    pub fn state(&self) -> InfiniteScrollState {
        InfiniteScrollState {
            is_loading: self.is_loading(),
            is_scrolling: self.is_scrolling(),
            item_count: self.item_count(),
            indicator: self.indicator_slot(),
        }
    }

    /// Handles one scroll event from the surface.
    ///
    /// Marks the session as scrolling, forwards `on_scroll`, then runs the edge detector.
    /// Returns `true` if a load was requested by this event.
    pub fn handle_scroll(&mut self, now_ms: u64) -> bool {
        self.settle.on_scroll_event(now_ms);

        let props = self.properties();
        let metrics = self.surface.as_ref().map(|s| props.read(s));

        if let Some(on_scroll) = &self.options.on_scroll {
            on_scroll(&ScrollEvent {
                axis: self.options.axis,
                offset: metrics.map(|m| m.offset).unwrap_or_default(),
                now_ms,
            });
        }

        let gate = LoadGate {
            has_callback: self.options.on_infinite_load.is_some(),
            has_more: self.options.has_more,
            is_infinite_loading: self.options.is_infinite_loading,
            is_mounted: metrics.is_some(),
            is_loading: self.session.is_active(),
        };
        if !gate.is_open() {
            return false;
        }
        let Some(metrics) = metrics else {
            return false;
        };
        if !threshold_reached(
            &metrics,
            self.options.infinite_load_begin_edge_offset,
            props.direction,
        ) {
            return false;
        }

        if !self.session.begin() {
            return false;
        }
        idebug!(
            offset = metrics.offset,
            client_extent = metrics.client_extent,
            content_extent = metrics.content_extent,
            "load requested"
        );
        if let Some(on_infinite_load) = &self.options.on_infinite_load {
            on_infinite_load();
        }
        true
    }

    /// Forwards a pointer event to its callback. No engine state is involved.
    pub fn handle_mouse(&self, event: MouseEvent) {
        let callback = match event {
            MouseEvent::Enter => &self.options.on_mouse_enter,
            MouseEvent::Leave => &self.options.on_mouse_leave,
            MouseEvent::Over => &self.options.on_mouse_over,
            MouseEvent::Out => &self.options.on_mouse_out,
        };
        if let Some(callback) = callback {
            callback(event);
        }
    }

    /// Runs the settle debounce. Call this from the adapter's frame or timer tick.
    ///
    /// Returns `true` when the current scroll session settled during this call.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        let settled = self.settle.update(now_ms);
        if settled {
            itrace!(now_ms, "scroll settled");
        }
        settled
    }

    /// The deadline at which the pending settle fires, if a scroll session is active.
    pub fn settle_deadline_ms(&self) -> Option<u64> {
        self.settle.timer().deadline_ms()
    }

    /// Resolves when scrolling settles; already resolved when not scrolling.
    ///
    /// Every call during one scroll session returns a handle to the same resolution.
    pub fn scroll_settled(&self) -> ScrollSettled {
        self.settle.settled()
    }

    /// Captures the scroll distance from the content end before the surface renders `next`.
    ///
    /// Returns `Some` only when mounted and `next` has more items than the current options.
    pub fn snapshot_before_update(
        &self,
        next: &InfiniteScrollOptions<K>,
    ) -> Option<ScrollSnapshot> {
        if self.count_of(next.item_count) <= self.item_count() {
            return None;
        }
        let surface = self.surface.as_ref()?;
        let props = AxisProperties::resolve(next.axis, next.direction());
        let snapshot = ScrollSnapshot::capture(&props.read(surface));
        itrace!(scroll_delta = snapshot.scroll_delta, "snapshot_before_update");
        Some(snapshot)
    }

    /// Applies `next` after the surface has rendered it.
    ///
    /// On the first item-count change the surface is scrolled to its start edge. Then, if the
    /// update ends the active loading session, an inverse list gets its offset restored from
    /// `snapshot` before the session is cleared.
    pub fn did_update(&mut self, next: InfiniteScrollOptions<K>, snapshot: Option<ScrollSnapshot>) {
        let prev_props = self.content_props(&self.options);
        let next_props = self.content_props(&next);
        self.settle.set_delay_ms(next.scroll_settle_delay_ms);
        self.options = next;

        if prev_props.item_count != next_props.item_count && !self.scrolled_to_start_on_update {
            self.scroll_to_start();
            self.scrolled_to_start_on_update = true;
        }

        if !self.session.should_clear(&prev_props, &next_props) {
            return;
        }
        if let Some(snapshot) = snapshot.filter(|_| self.direction().is_inverse()) {
            let props = self.properties();
            if let Some(surface) = self.surface.as_mut() {
                let content_extent = surface.get(props.content_extent);
                let offset = snapshot.restored_offset(content_extent);
                idebug!(
                    scroll_delta = snapshot.scroll_delta,
                    content_extent,
                    offset,
                    "restoring inverse scroll position"
                );
                surface.set(props.scroll, offset);
            }
        }
        self.session.clear();
        idebug!(item_count = next_props.item_count, "loading session cleared");
    }

    /// Snapshot, render, and apply `next` in one call. `render` runs only while mounted.
    pub fn update_with(&mut self, next: InfiniteScrollOptions<K>, render: impl FnOnce(&mut S)) {
        let snapshot = self.snapshot_before_update(&next);
        if let Some(surface) = self.surface.as_mut() {
            render(surface);
        }
        self.did_update(next, snapshot);
    }

    pub fn set_options(&mut self, options: InfiniteScrollOptions<K>) {
        self.update_with(options, |_| {});
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut InfiniteScrollOptions<K>)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    fn scroll_to(&mut self, target: ScrollTarget) -> bool {
        let scroll = self.properties().scroll;
        let Some(surface) = self.surface.as_mut() else {
            return false;
        };
        let offset = target.resolve(&*surface);
        itrace!(?scroll, offset, "scroll_to");
        surface.set(scroll, offset);
        true
    }

    /// Scrolls to the start edge: offset 0 for forward lists, the content extent for inverse
    /// ones. Returns `false` if unmounted.
    pub fn scroll_to_start(&mut self) -> bool {
        let target = self.properties().start_target();
        self.scroll_to(target)
    }

    /// Scrolls to the end edge: the content extent for forward lists, offset 0 for inverse
    /// ones. Returns `false` if unmounted.
    pub fn scroll_to_end(&mut self) -> bool {
        let target = self.properties().end_target();
        self.scroll_to(target)
    }

    /// Brings the item registered under `id` into view.
    ///
    /// Returns `false` without side effects when unmounted, when no identity map is configured,
    /// or when `id` is unknown or not attached to a node.
    pub fn scroll_to_id(&self, id: &K, options: ScrollToIdOptions) -> bool {
        if self.surface.is_none() {
            return false;
        }
        let Some(map) = &self.options.item_id_ref_map else {
            return false;
        };
        let Some(node) = map.resolve(id) else {
            itrace!("scroll_to_id: id not in identity map");
            return false;
        };
        node.scroll_into_view(options.to_arg());
        true
    }

    /// Returns the scrollbar-presence test for `axis`.
    pub fn scrollbar_detector_for(axis: Axis) -> ScrollbarDetector {
        scrollbar_detector_for(axis)
    }
}
