use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::ScrollIntoViewArg;

/// A numeric readout exposed by a scrollable surface.
///
/// The names follow the DOM element properties they model; any scroll container (TUI pane,
/// GPU widget, test double) can provide them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceProperty {
    ScrollTop,
    ScrollLeft,
    ClientHeight,
    ClientWidth,
    ScrollHeight,
    ScrollWidth,
    OffsetHeight,
    OffsetWidth,
}

/// The writable subset of [`SurfaceProperty`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollProperty {
    ScrollTop,
    ScrollLeft,
}

impl From<ScrollProperty> for SurfaceProperty {
    fn from(p: ScrollProperty) -> Self {
        match p {
            ScrollProperty::ScrollTop => Self::ScrollTop,
            ScrollProperty::ScrollLeft => Self::ScrollLeft,
        }
    }
}

/// The scrollable viewport the engine observes.
///
/// The surface is owned by the rendering environment. The engine only reads readouts and writes
/// the scroll offset; it never lays anything out itself.
pub trait ScrollSurface {
    fn get(&self, property: SurfaceProperty) -> f64;
    fn set(&mut self, property: ScrollProperty, value: f64);
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn get(&self, property: SurfaceProperty) -> f64 {
        (**self).get(property)
    }

    fn set(&mut self, property: ScrollProperty, value: f64) {
        (**self).set(property, value);
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Box<S> {
    fn get(&self, property: SurfaceProperty) -> f64 {
        (**self).get(property)
    }

    fn set(&mut self, property: ScrollProperty, value: f64) {
        (**self).set(property, value);
    }
}

/// A rendered item that can bring itself into view (the native `scrollIntoView` behavior).
pub trait ScrollIntoView {
    fn scroll_into_view(&self, arg: ScrollIntoViewArg);
}

impl<T: ScrollIntoView + ?Sized> ScrollIntoView for &T {
    fn scroll_into_view(&self, arg: ScrollIntoViewArg) {
        (**self).scroll_into_view(arg);
    }
}

impl<T: ScrollIntoView + ?Sized> ScrollIntoView for Rc<T> {
    fn scroll_into_view(&self, arg: ScrollIntoViewArg) {
        (**self).scroll_into_view(arg);
    }
}

/// Maps item identifiers to references of their rendered nodes.
///
/// The map is owned by the caller. `resolve` returns `None` both for unknown ids and for ids
/// whose reference is not currently attached to a node.
pub trait ItemRefMap<K> {
    fn resolve(&self, id: &K) -> Option<&dyn ScrollIntoView>;
}
