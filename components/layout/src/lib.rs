//! Layout containers for `Trellis`.
//!
//! Each container implements [`Element`](trellis_core::Element) and runs the
//! two-pass measure/arrange protocol over its children:
//!
//! - [`StackPanel`] stacks children along one axis with optional spacing and
//!   publishes per-child [`SnapPoints`] for scroll consumers,
//! - [`Border`] insets a single child by border thickness and padding,
//! - [`Grid`] overlays children in one shared cell.
//!
//! # Example
//!
//! ```rust,ignore
//! use trellis_layout::StackPanel;
//! use trellis_core::{Element, Rect, Size};
//!
//! let mut toolbar = StackPanel::horizontal();
//! toolbar.set_spacing(8.0)?;
//! toolbar.push(Box::new(back_button));
//! toolbar.push(Box::new(title));
//!
//! let desired = toolbar.measure(Size::new(360.0, f32::INFINITY));
//! toolbar.arrange(Rect::from_size(desired));
//! ```

extern crate alloc;

pub use trellis_core::layout::*;

pub mod border;
pub mod config;
pub mod grid;
pub mod snap;
pub mod stack;

pub use border::Border;
pub use config::StackPanelConfig;
pub use grid::Grid;
pub use snap::SnapPoints;
pub use stack::StackPanel;
