use crate::*;

use alloc::rc::Rc;
use core::cell::Cell;

use futures::FutureExt;
use infinite_scroll::{
    Axis, IndicatorSlot, InfiniteScrollOptions, ItemCount, MouseEvent, ScrollIntoView,
    ScrollIntoViewArg, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollSurface,
    ScrollToIdOptions, SurfaceProperty,
};

fn counted_options(count: &Rc<Cell<usize>>) -> InfiniteScrollOptions {
    let count = Rc::clone(count);
    InfiniteScrollOptions::with_children(0)
        .with_has_more(Some(true))
        .with_on_infinite_load(Some(move || count.set(count.get() + 1)))
}

fn items(ids: core::ops::Range<u64>, extent: f64) -> impl Iterator<Item = (u64, f64)> {
    ids.map(move |id| (id, extent))
}

#[test]
fn memory_surface_clamps_and_queues_scroll_events() {
    let s = MemorySurface::new(Axis::Y, 100.0);
    s.append_items(items(0..10, 30.0));
    assert_eq!(s.content_extent(), 300.0);
    assert_eq!(s.max_offset(), 200.0);
    assert!(!s.take_scroll_event());

    s.scroll_to(500.0);
    assert_eq!(s.offset(), 200.0);
    assert!(s.take_scroll_event());
    assert!(!s.take_scroll_event());

    // Same offset again: nothing moved, no event.
    s.scroll_to(200.0);
    assert!(!s.take_scroll_event());

    s.scroll_by(-250.0);
    assert_eq!(s.offset(), 0.0);
    assert!(s.take_scroll_event());
}

#[test]
fn memory_surface_reports_axis_properties() {
    let s = MemorySurface::new(Axis::X, 80.0).with_cross_extent(20.0);
    s.append_items(items(0..4, 50.0));
    s.scroll_to(30.0);

    assert_eq!(s.get(SurfaceProperty::ScrollLeft), 30.0);
    assert_eq!(s.get(SurfaceProperty::ScrollTop), 0.0);
    assert_eq!(s.get(SurfaceProperty::ClientWidth), 80.0);
    assert_eq!(s.get(SurfaceProperty::OffsetWidth), 80.0);
    assert_eq!(s.get(SurfaceProperty::ScrollWidth), 200.0);
    assert_eq!(s.get(SurfaceProperty::ClientHeight), 20.0);
    assert_eq!(s.get(SurfaceProperty::ScrollHeight), 20.0);
}

#[test]
fn memory_surface_shrinking_content_moves_offset() {
    let s = MemorySurface::new(Axis::Y, 100.0).with_indicator_extent(40.0);
    s.append_items(items(0..3, 50.0));
    s.set_indicator(Some(IndicatorSlot::Trailing));
    s.scroll_to(90.0);
    assert!(s.take_scroll_event());

    s.set_indicator(None);
    assert_eq!(s.offset(), 50.0);
    assert!(s.take_scroll_event());
}

#[test]
fn item_refs_align_like_scroll_into_view() {
    let s = MemorySurface::new(Axis::Y, 100.0);
    s.append_items(items(0..10, 40.0));
    let refs = s.item_refs();
    let r = refs.get(&5).and_then(|r| r.as_ref()).unwrap();
    assert!(r.is_attached());
    r.scroll_into_view(ScrollIntoViewArg::AlignToTop(true));
    assert_eq!(s.offset(), 200.0);

    r.scroll_into_view(ScrollIntoViewArg::AlignToTop(false));
    assert_eq!(s.offset(), 140.0);

    let center = ScrollIntoViewOptions::default().with_block(ScrollLogicalPosition::Center);
    r.scroll_into_view(ScrollIntoViewArg::Options(center));
    assert_eq!(s.offset(), 170.0);

    // Fully visible: nearest leaves the offset alone.
    let nearest = ScrollIntoViewOptions::default().with_block(ScrollLogicalPosition::Nearest);
    r.scroll_into_view(ScrollIntoViewArg::Options(nearest));
    assert_eq!(s.offset(), 170.0);

    s.scroll_to(0.0);
    r.scroll_into_view(ScrollIntoViewArg::Options(nearest));
    assert_eq!(s.offset(), 140.0);
}

#[test]
fn item_ref_detaches_with_surface() {
    let r = {
        let s = MemorySurface::new(Axis::Y, 100.0);
        s.append_items(items(0..3, 40.0));
        s.item_ref(1).unwrap()
    };
    assert!(!r.is_attached());
    r.scroll_into_view(ScrollIntoViewArg::AlignToTop(true));

    let s = MemorySurface::new(Axis::Y, 100.0);
    assert!(s.item_ref(1).is_none());
}

#[test]
fn controller_requests_one_load_per_session() {
    let loads = Rc::new(Cell::new(0));
    let mut c = Controller::new(MemorySurface::new(Axis::Y, 100.0), counted_options(&loads));
    assert_eq!(c.options().item_count, ItemCount::Children(0));

    c.append_items(items(0..5, 50.0));
    assert_eq!(c.options().item_count, ItemCount::Children(5));
    assert_eq!(c.surface().content_extent(), 250.0);

    // Default threshold is half the viewport: offset + 100 + 50 >= 250.
    assert!(!c.scroll_to(90.0, 0).load_requested);
    assert!(c.scroll_to(100.0, 10).load_requested);
    assert!(c.state().is_loading);
    assert!(!c.scroll_to(120.0, 20).load_requested);
    assert!(!c.scroll_to(150.0, 30).load_requested);
    assert_eq!(loads.get(), 1);

    c.set_infinite_loading(true);
    assert!(c.state().is_loading);

    c.complete_load(items(5..10, 50.0), Some(true));
    assert!(!c.state().is_loading);
    assert_eq!(c.surface().content_extent(), 500.0);
    assert_eq!(c.offset(), 150.0);

    assert!(c.scroll_to(350.0, 40).load_requested);
    assert_eq!(loads.get(), 2);
}

#[test]
fn controller_stops_when_has_more_is_false() {
    let loads = Rc::new(Cell::new(0));
    let mut c = Controller::new(MemorySurface::new(Axis::Y, 100.0), counted_options(&loads));
    c.append_items(items(0..5, 50.0));

    assert!(c.scroll_to(150.0, 0).load_requested);
    c.complete_load(items(5..6, 50.0), Some(false));
    assert!(!c.state().is_loading);
    assert_eq!(c.surface().indicator(), None);

    assert!(!c.scroll_to(200.0, 10).load_requested);
    assert_eq!(loads.get(), 1);
}

#[test]
fn controller_syncs_indicator_with_options() {
    let loads = Rc::new(Cell::new(0));
    let s = MemorySurface::new(Axis::Y, 100.0).with_indicator_extent(30.0);
    let mut c = Controller::new(s, counted_options(&loads));
    assert_eq!(c.surface().indicator(), Some(IndicatorSlot::Trailing));

    c.set_has_more(None);
    assert_eq!(c.surface().indicator(), None);

    c.set_infinite_loading(true);
    assert_eq!(c.surface().indicator(), Some(IndicatorSlot::Trailing));
    assert_eq!(c.state().indicator, Some(IndicatorSlot::Trailing));
}

#[test]
fn controller_keeps_chat_anchored_across_prepend() {
    let loads = Rc::new(Cell::new(0));
    let s = MemorySurface::new(Axis::Y, 100.0).with_indicator_extent(30.0);
    let mut c = Controller::new(s, counted_options(&loads).with_display_inverse(true));
    assert_eq!(c.surface().indicator(), Some(IndicatorSlot::Leading));

    // The first batch opens the transcript at its newest end.
    c.prepend_items(items(100..110, 40.0));
    assert_eq!(c.surface().content_extent(), 430.0);
    assert_eq!(c.offset(), 330.0);
    assert!(!c.tick(0).load_requested);

    assert!(c.scroll_to(40.0, 10).load_requested);
    c.set_infinite_loading(true);
    assert_eq!(c.surface().first_visible(), Some((100, 10.0)));

    c.complete_load(items(90..95, 40.0), Some(true));
    assert!(!c.state().is_loading);
    assert_eq!(c.surface().content_extent(), 630.0);
    assert_eq!(c.offset(), 240.0);
    assert_eq!(c.surface().first_visible(), Some((100, 10.0)));

    // The restore is a scroll like any other, and it lands outside the threshold.
    let tick = c.tick(20);
    assert!(tick.scrolled);
    assert!(!tick.load_requested);
    assert_eq!(loads.get(), 1);
}

#[test]
fn controller_horizontal_inverse_scrolls_to_start() {
    let s = MemorySurface::new(Axis::X, 100.0);
    s.append_items(items(0..5, 60.0));
    let opts = InfiniteScrollOptions::with_length(0)
        .with_axis(Axis::X)
        .with_display_inverse(true);
    let mut c = Controller::new(s, opts);

    assert_eq!(c.options().item_count, ItemCount::Length(5));
    assert_eq!(c.offset(), 200.0);
    assert!(c.tick(0).scrolled);

    assert!(c.scroll_to_end());
    assert_eq!(c.offset(), 0.0);
}

#[test]
fn controller_scroll_to_id_uses_identity_map() {
    let mut c = Controller::new(
        MemorySurface::new(Axis::Y, 100.0),
        InfiniteScrollOptions::with_children(0),
    );
    c.append_items(items(0..20, 25.0));

    assert!(c.scroll_to_id(8, ScrollToIdOptions::default()));
    assert_eq!(c.offset(), 200.0);

    assert!(c.scroll_to_id(8, ScrollToIdOptions::align_to_top(false)));
    assert_eq!(c.offset(), 125.0);

    let center = ScrollIntoViewOptions::default().with_block(ScrollLogicalPosition::Center);
    assert!(c.scroll_to_id(
        8,
        ScrollToIdOptions::with_scroll_into_view_options(center)
    ));
    assert_eq!(c.offset(), 162.5);

    assert!(!c.scroll_to_id(99, ScrollToIdOptions::default()));
    assert!(c.tick(0).scrolled);
}

#[test]
fn controller_settles_after_quiet_period() {
    let mut c = Controller::new(
        MemorySurface::new(Axis::Y, 100.0),
        InfiniteScrollOptions::with_children(0).with_scroll_settle_delay_ms(50),
    );
    c.append_items(items(0..10, 50.0));

    let settled = c.scroll_settled();
    assert!(settled.now_or_never().is_some());

    c.scroll_to(10.0, 0);
    c.scroll_to(20.0, 30);
    let pending = c.scroll_settled();
    assert!(c.state().is_scrolling);

    assert!(!c.tick(60).settled);
    assert!(pending.clone().now_or_never().is_none());
    assert!(c.tick(80).settled);
    assert!(!c.state().is_scrolling);
    assert!(pending.now_or_never().is_some());
    assert!(!c.tick(200).settled);
}

#[test]
fn controller_forwards_mouse_events() {
    let seen = Rc::new(Cell::new(0));
    let s2 = Rc::clone(&seen);
    let c = Controller::new(
        MemorySurface::new(Axis::Y, 100.0),
        InfiniteScrollOptions::with_children(0)
            .with_on_mouse_over(Some(move |_| s2.set(s2.get() + 1))),
    );
    c.handle_mouse(MouseEvent::Over);
    c.handle_mouse(MouseEvent::Out);
    assert_eq!(seen.get(), 1);
}

#[test]
fn dropping_controller_mid_scroll_releases_settle_waiters() {
    let mut c = Controller::new(
        MemorySurface::new(Axis::Y, 100.0),
        InfiniteScrollOptions::with_children(0),
    );
    c.append_items(items(0..10, 50.0));
    c.scroll_to(40.0, 0);
    let pending = c.scroll_settled();
    assert!(!pending.is_settled());

    drop(c);
    assert!(pending.now_or_never().is_some());
}
