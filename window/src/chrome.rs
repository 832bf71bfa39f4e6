//! System chrome (status bar, navigation bar) flags and the heights they
//! obscure.
//!
//! Bit values match the Android platform constants so bindings can pass the
//! raw integers through with `from_bits_truncate`.

use crate::DisplayScale;

bitflags::bitflags! {
    /// Visibility bits of the window's decor view (`SYSTEM_UI_FLAG_*`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SystemUiFlags: u32 {
        /// The navigation bar is hidden.
        const HIDE_NAVIGATION = 0x0000_0002;
        /// The status bar is hidden.
        const FULLSCREEN = 0x0000_0004;
        /// Layout stays stable while bars show and hide.
        const LAYOUT_STABLE = 0x0000_0100;
        /// Content is laid out as if the navigation bar were hidden.
        const LAYOUT_HIDE_NAVIGATION = 0x0000_0200;
        /// Content is laid out as if the status bar were hidden.
        const LAYOUT_FULLSCREEN = 0x0000_0400;
        /// Bars stay hidden until the user swipes them in.
        const IMMERSIVE = 0x0000_0800;
        /// Like `IMMERSIVE`, but swiped-in bars hide again on their own.
        const IMMERSIVE_STICKY = 0x0000_1000;
    }
}

bitflags::bitflags! {
    /// Window attribute flags (`WindowManager.LayoutParams.FLAG_*`).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowFlags: u32 {
        /// Content may extend outside the screen.
        const LAYOUT_NO_LIMITS = 0x0000_0200;
        /// Hide decorations such as the status bar.
        const FULLSCREEN = 0x0000_0400;
        /// The status bar is drawn over content.
        const TRANSLUCENT_STATUS = 0x0400_0000;
        /// The navigation bar is drawn over content.
        const TRANSLUCENT_NAVIGATION = 0x0800_0000;
        /// Content runs edge to edge under a translucent navigation bar.
        const EDGE_TO_EDGE = Self::FULLSCREEN.bits()
            | Self::LAYOUT_NO_LIMITS.bits()
            | Self::TRANSLUCENT_NAVIGATION.bits();
    }
}

/// Display height in physical pixels, with and without the on-screen
/// navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMetrics {
    /// Height available to applications.
    pub usable_height: u32,
    /// Full physical height of the display.
    pub real_height: u32,
}

/// Snapshot of the native chrome state read during a size change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SystemChrome {
    /// Decor view visibility bits.
    pub ui_visibility: SystemUiFlags,
    /// Window attribute flags.
    pub window_flags: WindowFlags,
    /// Platform status bar height in physical pixels, `None` when the
    /// platform does not define one.
    pub status_bar_height: Option<u32>,
    /// Metrics of the default display, `None` when there is no display.
    pub display: Option<DisplayMetrics>,
}

impl SystemChrome {
    /// The status bar is shown.
    #[must_use]
    pub const fn is_status_bar_visible(&self) -> bool {
        !self.ui_visibility.contains(SystemUiFlags::FULLSCREEN)
    }

    /// Content is drawn underneath the status bar.
    #[must_use]
    pub const fn is_status_bar_translucent(&self) -> bool {
        self.window_flags
            .intersects(WindowFlags::TRANSLUCENT_STATUS.union(WindowFlags::LAYOUT_NO_LIMITS))
    }

    /// The navigation bar is shown.
    #[must_use]
    pub const fn is_navigation_bar_visible(&self) -> bool {
        !self.ui_visibility.contains(SystemUiFlags::HIDE_NAVIGATION)
    }

    /// Content is drawn underneath the navigation bar.
    #[must_use]
    pub const fn is_navigation_bar_translucent(&self) -> bool {
        self.window_flags
            .intersects(WindowFlags::TRANSLUCENT_NAVIGATION.union(WindowFlags::LAYOUT_NO_LIMITS))
    }

    /// Height of the status bar covering content, in logical units.
    ///
    /// Zero unless the bar is both visible and translucent: an opaque bar
    /// sits outside the window and covers nothing.
    #[must_use]
    pub fn logical_status_bar_height(&self, scale: DisplayScale) -> f32 {
        if !(self.is_status_bar_visible() && self.is_status_bar_translucent()) {
            return 0.0;
        }
        self.status_bar_height
            .map_or(0.0, |height| scale.pixels_to_logical(i64::from(height)))
    }

    /// Height of the navigation bar covering content, in logical units.
    ///
    /// Measured as the part of the real display height that is not usable.
    #[must_use]
    pub fn logical_navigation_bar_height(&self, scale: DisplayScale) -> f32 {
        let Some(display) = self.display else {
            return 0.0;
        };
        if !(self.is_navigation_bar_visible() && self.is_navigation_bar_translucent()) {
            return 0.0;
        }
        if display.real_height > display.usable_height {
            scale.pixels_to_logical(i64::from(display.real_height - display.usable_height))
        } else {
            0.0
        }
    }
}
