//! Native window hosting for `Trellis`.
//!
//! A [`Window`] owns the root element composition, converts the physical
//! sizes reported by the platform into logical bounds, tracks the visible
//! region left over by the status bar, navigation bar and window insets, and
//! swaps between primary and fullscreen content.
//!
//! The native side is reached through the [`NativeWindow`] trait, so the
//! window logic runs the same under a JNI binding and in tests.

pub mod application_view;
pub mod chrome;
pub mod insets;
pub mod platform;
pub mod scale;
pub mod window;

pub use application_view::ApplicationView;
pub use chrome::{DisplayMetrics, SystemChrome, SystemUiFlags, WindowFlags};
pub use insets::InsetsSnapshot;
pub use platform::NativeWindow;
pub use scale::DisplayScale;
pub use window::{RootGrid, Window};
