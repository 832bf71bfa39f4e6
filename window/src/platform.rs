//! The seam between [`Window`](crate::Window) and the native window system.

use core::fmt::Debug;

use crate::{DisplayScale, SystemChrome, WindowFlags};

/// Operations a native window binding provides.
///
/// Android implements this over `Activity`/`Window` through JNI; tests use
/// an in-memory recorder.
pub trait NativeWindow: Debug {
    /// Installs the root content view. Called once, when the window first
    /// receives content.
    fn set_content_view(&mut self);

    /// Registers the apply-insets listener on the root view. Called each
    /// time content is set.
    fn attach_insets_listener(&mut self);

    /// Current display scale.
    fn display_scale(&self) -> DisplayScale;

    /// Current status bar, navigation bar and display state.
    fn chrome(&self) -> SystemChrome;

    /// Adds window attribute flags.
    fn add_window_flags(&mut self, flags: WindowFlags);
}
