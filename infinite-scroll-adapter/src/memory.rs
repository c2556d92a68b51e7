use alloc::rc::{Rc, Weak};
use alloc::vec::Vec;
use core::cell::RefCell;

use infinite_scroll::{
    Axis, IndicatorSlot, ItemRefs, ScrollIntoView, ScrollIntoViewArg, ScrollLogicalPosition,
    ScrollProperty, ScrollSurface, SurfaceProperty,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Block {
    id: u64,
    extent: f64,
}

#[derive(Debug)]
struct SurfaceModel {
    axis: Axis,
    viewport: f64,
    cross: f64,
    offset: f64,
    items: Vec<Block>,
    indicator: Option<IndicatorSlot>,
    indicator_extent: f64,
    scroll_pending: bool,
}

impl SurfaceModel {
    fn leading_extent(&self) -> f64 {
        match self.indicator {
            Some(IndicatorSlot::Leading) => self.indicator_extent,
            _ => 0.0,
        }
    }

    fn trailing_extent(&self) -> f64 {
        match self.indicator {
            Some(IndicatorSlot::Trailing) => self.indicator_extent,
            _ => 0.0,
        }
    }

    fn items_extent(&self) -> f64 {
        self.items.iter().map(|b| b.extent).sum()
    }

    fn content_extent(&self) -> f64 {
        let content = self.leading_extent() + self.items_extent() + self.trailing_extent();
        content.max(self.viewport)
    }

    fn max_offset(&self) -> f64 {
        (self.content_extent() - self.viewport).max(0.0)
    }

    fn set_offset(&mut self, offset: f64) {
        let clamped = offset.clamp(0.0, self.max_offset());
        if clamped != self.offset {
            self.offset = clamped;
            self.scroll_pending = true;
        }
    }

    /// Re-clamps after a layout change. Shrinking content moves the offset like a browser
    /// would, which also counts as a scroll.
    fn relayout(&mut self) {
        let offset = self.offset;
        self.set_offset(offset);
    }

    fn block_span(&self, id: u64) -> Option<(f64, f64)> {
        let mut start = self.leading_extent();
        for block in &self.items {
            if block.id == id {
                return Some((start, block.extent));
            }
            start += block.extent;
        }
        None
    }

    fn scroll_into_view(&mut self, id: u64, arg: ScrollIntoViewArg) {
        let Some((start, extent)) = self.block_span(id) else {
            return;
        };
        let position = match arg {
            ScrollIntoViewArg::AlignToTop(true) => ScrollLogicalPosition::Start,
            ScrollIntoViewArg::AlignToTop(false) => ScrollLogicalPosition::End,
            ScrollIntoViewArg::Options(options) => match self.axis {
                Axis::Y => options.block,
                Axis::X => options.inline,
            },
        };
        let end = start + extent;
        let target = match position {
            ScrollLogicalPosition::Start => start,
            ScrollLogicalPosition::End => end - self.viewport,
            ScrollLogicalPosition::Center => start + extent / 2.0 - self.viewport / 2.0,
            ScrollLogicalPosition::Nearest => {
                let view_end = self.offset + self.viewport;
                if start >= self.offset && end <= view_end {
                    self.offset
                } else if start < self.offset || extent > self.viewport {
                    start
                } else {
                    end - self.viewport
                }
            }
        };
        self.set_offset(target);
    }
}

/// An in-memory scroll container for adapters and tests.
///
/// Items are laid out back to back along `axis`, with an optional loading-indicator block
/// before or after them. The offset is clamped to `[0, content - viewport]`, and any change to
/// it queues a scroll notification that the owner drains with [`MemorySurface::take_scroll_event`],
/// mirroring how a browser fires `scroll` after both user and programmatic scrolling.
///
/// Cloning yields another handle to the same surface.
#[derive(Clone, Debug)]
pub struct MemorySurface {
    model: Rc<RefCell<SurfaceModel>>,
}

impl MemorySurface {
    pub fn new(axis: Axis, viewport: f64) -> Self {
        Self {
            model: Rc::new(RefCell::new(SurfaceModel {
                axis,
                viewport: viewport.max(0.0),
                cross: 0.0,
                offset: 0.0,
                items: Vec::new(),
                indicator: None,
                indicator_extent: 0.0,
                scroll_pending: false,
            })),
        }
    }

    pub fn with_cross_extent(self, cross: f64) -> Self {
        self.model.borrow_mut().cross = cross.max(0.0);
        self
    }

    pub fn with_indicator_extent(self, extent: f64) -> Self {
        self.model.borrow_mut().indicator_extent = extent.max(0.0);
        self
    }

    pub fn axis(&self) -> Axis {
        self.model.borrow().axis
    }

    pub fn offset(&self) -> f64 {
        self.model.borrow().offset
    }

    pub fn viewport_extent(&self) -> f64 {
        self.model.borrow().viewport
    }

    pub fn content_extent(&self) -> f64 {
        self.model.borrow().content_extent()
    }

    pub fn max_offset(&self) -> f64 {
        self.model.borrow().max_offset()
    }

    pub fn len(&self) -> usize {
        self.model.borrow().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.model.borrow().items.is_empty()
    }

    pub fn set_viewport_extent(&self, viewport: f64) {
        let mut model = self.model.borrow_mut();
        model.viewport = viewport.max(0.0);
        model.relayout();
    }

    /// Writes the offset the way user input would (clamped, queues a scroll notification if it
    /// moved).
    pub fn scroll_to(&self, offset: f64) {
        self.model.borrow_mut().set_offset(offset);
    }

    pub fn scroll_by(&self, delta: f64) {
        let mut model = self.model.borrow_mut();
        let offset = model.offset + delta;
        model.set_offset(offset);
    }

    pub fn append_items(&self, items: impl IntoIterator<Item = (u64, f64)>) {
        let mut model = self.model.borrow_mut();
        model.items.extend(
            items
                .into_iter()
                .map(|(id, extent)| Block { id, extent: extent.max(0.0) }),
        );
        model.relayout();
    }

    /// Inserts items before the existing ones. The offset is left untouched, so the visible
    /// content shifts unless someone corrects it.
    pub fn prepend_items(&self, items: impl IntoIterator<Item = (u64, f64)>) {
        let mut model = self.model.borrow_mut();
        let mut blocks: Vec<Block> = items
            .into_iter()
            .map(|(id, extent)| Block { id, extent: extent.max(0.0) })
            .collect();
        blocks.append(&mut model.items);
        model.items = blocks;
        model.relayout();
    }

    pub fn set_indicator(&self, indicator: Option<IndicatorSlot>) {
        let mut model = self.model.borrow_mut();
        model.indicator = indicator;
        model.relayout();
    }

    pub fn indicator(&self) -> Option<IndicatorSlot> {
        self.model.borrow().indicator
    }

    /// Start offset of an item within the content.
    pub fn item_start(&self, id: u64) -> Option<f64> {
        self.model.borrow().block_span(id).map(|(start, _)| start)
    }

    /// The first item intersecting the viewport and how far the viewport start is into it.
    pub fn first_visible(&self) -> Option<(u64, f64)> {
        let model = self.model.borrow();
        let mut start = model.leading_extent();
        for block in &model.items {
            let end = start + block.extent;
            if end > model.offset {
                return Some((block.id, model.offset - start));
            }
            start = end;
        }
        None
    }

    /// Returns `true` once per batch of offset changes since the last call.
    pub fn take_scroll_event(&self) -> bool {
        core::mem::replace(&mut self.model.borrow_mut().scroll_pending, false)
    }

    pub fn item_ref(&self, id: u64) -> Option<ItemRef> {
        self.model.borrow().block_span(id)?;
        Some(ItemRef {
            id,
            model: Rc::downgrade(&self.model),
        })
    }

    pub fn ids(&self) -> Vec<u64> {
        self.model.borrow().items.iter().map(|b| b.id).collect()
    }

    /// Builds an identity map with a reference for every rendered item.
    pub fn item_refs(&self) -> ItemRefs<u64, ItemRef> {
        self.refs_for(self.ids())
    }

    /// Builds an identity map for `ids`. References resolve their position when used, so ids
    /// that render later are valid keys.
    pub fn refs_for(&self, ids: impl IntoIterator<Item = u64>) -> ItemRefs<u64, ItemRef> {
        let mut refs = ItemRefs::default();
        for id in ids {
            refs.insert(
                id,
                Some(ItemRef {
                    id,
                    model: Rc::downgrade(&self.model),
                }),
            );
        }
        refs
    }
}

impl ScrollSurface for MemorySurface {
    fn get(&self, property: SurfaceProperty) -> f64 {
        let model = self.model.borrow();
        // Whether the property belongs to the scrolling axis; the other axis is fixed.
        let main = match model.axis {
            Axis::Y => matches!(
                property,
                SurfaceProperty::ScrollTop
                    | SurfaceProperty::ClientHeight
                    | SurfaceProperty::ScrollHeight
                    | SurfaceProperty::OffsetHeight
            ),
            Axis::X => matches!(
                property,
                SurfaceProperty::ScrollLeft
                    | SurfaceProperty::ClientWidth
                    | SurfaceProperty::ScrollWidth
                    | SurfaceProperty::OffsetWidth
            ),
        };
        match property {
            SurfaceProperty::ScrollTop | SurfaceProperty::ScrollLeft => {
                if main {
                    model.offset
                } else {
                    0.0
                }
            }
            SurfaceProperty::ClientHeight
            | SurfaceProperty::ClientWidth
            | SurfaceProperty::OffsetHeight
            | SurfaceProperty::OffsetWidth => {
                if main {
                    model.viewport
                } else {
                    model.cross
                }
            }
            SurfaceProperty::ScrollHeight | SurfaceProperty::ScrollWidth => {
                if main {
                    model.content_extent()
                } else {
                    model.cross
                }
            }
        }
    }

    fn set(&mut self, property: ScrollProperty, value: f64) {
        let mut model = self.model.borrow_mut();
        let main = match model.axis {
            Axis::Y => ScrollProperty::ScrollTop,
            Axis::X => ScrollProperty::ScrollLeft,
        };
        if property == main {
            model.set_offset(value);
        }
    }
}

/// A reference to one rendered item of a [`MemorySurface`].
///
/// Holds a weak handle: once the surface is dropped, `scroll_into_view` does nothing.
#[derive(Clone, Debug)]
pub struct ItemRef {
    id: u64,
    model: Weak<RefCell<SurfaceModel>>,
}

impl ItemRef {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_attached(&self) -> bool {
        self.model
            .upgrade()
            .is_some_and(|m| m.borrow().block_span(self.id).is_some())
    }
}

impl ScrollIntoView for ItemRef {
    /// Smooth behavior is applied instantly; there is no animation clock here.
    fn scroll_into_view(&self, arg: ScrollIntoViewArg) {
        if let Some(model) = self.model.upgrade() {
            model.borrow_mut().scroll_into_view(self.id, arg);
        }
    }
}
