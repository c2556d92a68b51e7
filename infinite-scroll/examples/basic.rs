// Example: minimal usage with a hand-rolled surface.
use std::cell::Cell;
use std::rc::Rc;

use infinite_scroll::{
    InfiniteScroll, InfiniteScrollOptions, ItemCount, ScrollProperty, ScrollSurface,
    SurfaceProperty,
};

/// A fixed-height list of rows inside a 300px tall box.
struct Rows {
    scroll_top: f64,
    rows: usize,
}

impl ScrollSurface for Rows {
    fn get(&self, property: SurfaceProperty) -> f64 {
        match property {
            SurfaceProperty::ScrollTop => self.scroll_top,
            SurfaceProperty::ClientHeight | SurfaceProperty::OffsetHeight => 300.0,
            SurfaceProperty::ScrollHeight => self.rows as f64 * 20.0,
            _ => 0.0,
        }
    }

    fn set(&mut self, property: ScrollProperty, value: f64) {
        if property == ScrollProperty::ScrollTop {
            self.scroll_top = value;
        }
    }
}

fn main() {
    let loads = Rc::new(Cell::new(0));
    let on_load = Rc::clone(&loads);
    let mut s = InfiniteScroll::new(
        InfiniteScrollOptions::<u64>::with_length(50)
            .with_has_more(Some(true))
            .with_on_infinite_load(Some(move || on_load.set(on_load.get() + 1))),
    );
    s.mount(Rows {
        scroll_top: 0.0,
        rows: 50,
    });

    // 50 rows = 1000px. The default threshold is half the box (150px).
    for (now_ms, top) in [(0u64, 300.0), (16, 500.0), (32, 560.0), (48, 600.0)] {
        if let Some(rows) = s.surface_mut() {
            rows.scroll_top = top;
        }
        let requested = s.handle_scroll(now_ms);
        println!("scroll_top={top} requested={requested} state={:?}", s.state());
    }

    // The caller renders 50 more rows; the session ends with the count change.
    let next = s.options().clone().with_item_count(ItemCount::Length(100));
    s.update_with(next, |rows| rows.rows = 100);
    println!("after update: loads={} state={:?}", loads.get(), s.state());

    s.update_scrolling(200);
    println!("settled={}", s.scroll_settled().is_settled());
}
