//! Adapter utilities for the `infinite-scroll` crate.
//!
//! The `infinite-scroll` crate is UI-agnostic and only observes a scroll surface. This crate
//! provides small, framework-neutral pieces commonly needed by adapters and tests:
//!
//! - An in-memory scroll container ([`MemorySurface`]) with offset clamping, queued scroll
//!   notifications and scroll-into-view alignment
//! - A time-driven [`Controller`] that keeps items, identity map and loading indicator in step
//!   with the engine
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod memory;

#[cfg(test)]
mod tests;

pub use controller::{Controller, Tick};
pub use memory::{ItemRef, MemorySurface};
