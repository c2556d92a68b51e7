use std::cell::Cell;
use std::rc::Rc;

use infinite_scroll::{Axis, InfiniteScrollOptions, ScrollToIdOptions};
use infinite_scroll_adapter::{Controller, MemorySurface};

fn main() {
    // Example: a chat transcript that loads older messages at the top.
    //
    // With `display_inverse`, the list opens at its newest end, the loading indicator sits above
    // the messages, and the message under the viewport start stays put while older messages are
    // inserted above it.
    let requested = Rc::new(Cell::new(0usize));
    let on_load = Rc::clone(&requested);
    let options = InfiniteScrollOptions::with_length(0)
        .with_display_inverse(true)
        .with_has_more(Some(true))
        .with_on_infinite_load(Some(move || on_load.set(on_load.get() + 1)));
    let surface = MemorySurface::new(Axis::Y, 400.0).with_indicator_extent(32.0);
    let mut c = Controller::new(surface, options);

    // The newest 30 messages, ids 1000..1030 from oldest to newest.
    c.prepend_items((1000..1030).map(|id| (id, 56.0)));
    c.tick(0);
    println!(
        "opened: offset={} max={} first_visible={:?}",
        c.offset(),
        c.surface().max_offset(),
        c.surface().first_visible()
    );

    // Scroll up towards the top until a load is requested.
    let mut now_ms = 16;
    while requested.get() == 0 {
        c.scroll_by(-120.0, now_ms);
        now_ms += 16;
    }
    c.set_infinite_loading(true);
    let before = c.surface().first_visible();
    println!("load requested: offset={} first_visible={before:?}", c.offset());

    // Older messages arrive.
    c.complete_load((970..1000).map(|id| (id, 56.0)), Some(true));
    let after = c.surface().first_visible();
    println!("after prepend: offset={} first_visible={after:?}", c.offset());
    assert_eq!(before, after);

    // Jump back to the newest message.
    c.scroll_to_id(1029, ScrollToIdOptions::align_to_top(false));
    c.tick(now_ms);
    println!("jumped to newest: offset={}", c.offset());
}
