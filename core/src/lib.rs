#![no_std]
//! Core primitives for `Trellis`.
//!
//! This crate is shared by every layout container and platform host. It
//! contains:
//!
//! - geometry value types ([`Size`], [`Rect`], [`Thickness`], ...),
//! - the polymorphic [`Element`] trait that runs the measure/arrange protocol,
//! - the [`NativeView`] adapter platforms implement to join the visual tree,
//! - a small synchronous [`Event`] observer list.
//!
//! All layout runs on the platform UI thread, so nothing here is `Send` or
//! locked.

extern crate alloc;

pub mod element;
mod error;
pub mod event;
pub mod layout;

pub use element::{Element, LayoutState, NativeElement, NativeView};
pub use error::{ConfigError, validate_spacing, validate_thickness};
pub use event::{Event, HandlerId};
pub use layout::{Orientation, Point, Rect, Size, Thickness, Visibility};
