use std::cell::Cell;
use std::rc::Rc;

use infinite_scroll::{Axis, InfiniteScrollOptions};
use infinite_scroll_adapter::{Controller, MemorySurface};

const PAGE_SIZE: u64 = 25;
const MAX_ITEMS: usize = 200;
const FETCH_LATENCY_MS: u64 = 1000;
const FRAME_MS: u64 = 16;

fn main() {
    // Example: a feed that fetches 25 items per request until it holds 200.
    //
    // The engine only signals; the "fetch" here is a deadline on a simulated clock. The user
    // keeps scrolling down a little every frame.
    let requested = Rc::new(Cell::new(false));
    let on_load = Rc::clone(&requested);
    let options = InfiniteScrollOptions::with_length(0)
        .with_has_more(Some(true))
        .with_is_infinite_loading(true)
        .with_on_infinite_load(Some(move || on_load.set(true)));
    let surface = MemorySurface::new(Axis::Y, 600.0).with_indicator_extent(40.0);
    let mut c = Controller::new(surface, options);

    let mut next_id = 0u64;
    // The first page is fetched right away, before any scrolling.
    let mut fetch_done_at = Some(FETCH_LATENCY_MS);
    let mut now_ms = 0u64;

    loop {
        if requested.replace(false) {
            c.set_infinite_loading(true);
            fetch_done_at = Some(now_ms + FETCH_LATENCY_MS);
            println!(
                "t={now_ms}ms load requested at offset={} content={}",
                c.offset(),
                c.surface().content_extent()
            );
        }

        if fetch_done_at.is_some_and(|at| now_ms >= at) {
            fetch_done_at = None;
            let batch: Vec<(u64, f64)> = (0..PAGE_SIZE)
                .map(|_| {
                    next_id += 1;
                    (next_id, 48.0)
                })
                .collect();
            let total = c.surface().len() + batch.len();
            c.complete_load(batch, Some(total < MAX_ITEMS));
            println!("t={now_ms}ms loaded: items={total} state={:?}", c.state());
        }

        let tick = c.scroll_by(24.0, now_ms);
        if tick.settled {
            println!("t={now_ms}ms scroll settled");
        }

        let exhausted = c.options().has_more == Some(false);
        if exhausted && c.offset() >= c.surface().max_offset() {
            break;
        }
        now_ms += FRAME_MS;
    }

    println!(
        "done at t={now_ms}ms: items={} offset={} content={}",
        c.surface().len(),
        c.offset(),
        c.surface().content_extent()
    );
}
