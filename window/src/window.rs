//! The top-level native window and its root composition.
//!
//! The root is a [`Grid`] of two [`Border`]s: the primary content host and a
//! fullscreen overlay host that starts collapsed. Showing fullscreen content
//! swaps which of the two is visible, so the primary content keeps its state
//! while hidden.

use trellis_core::{Element, Event, HandlerId, Rect, Size, Thickness, Visibility};
use trellis_layout::{Border, Grid};

use crate::{ApplicationView, InsetsSnapshot, NativeWindow, WindowFlags};

const PRIMARY: usize = 0;
const OVERLAY: usize = 1;

/// Root composition hosted by a [`Window`].
pub type RootGrid = Grid<Border>;

/// A native window hosting a tree of [`Element`]s.
#[derive(Debug)]
pub struct Window<P> {
    platform: P,
    root: Option<RootGrid>,
    bounds: Rect,
    insets: Option<InsetsSnapshot>,
    application_view: ApplicationView,
    size_changed: Event<Size>,
}

impl<P: NativeWindow> Window<P> {
    /// Wraps a native window. Nothing is installed until content is set.
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            root: None,
            bounds: Rect::default(),
            insets: None,
            application_view: ApplicationView::new(),
            size_changed: Event::new(),
        }
    }

    /// Called when the native activity is created; applies `flags` to the
    /// native window.
    pub fn on_native_create(&mut self, flags: WindowFlags) {
        tracing::debug!(?flags, "native window created");
        self.platform.add_window_flags(flags);
    }

    /// The native binding.
    #[must_use]
    pub const fn platform(&self) -> &P {
        &self.platform
    }

    /// The native binding, mutably.
    pub const fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    /// Window bounds in logical units, origin at zero.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Visible-bounds tracking for the window.
    #[must_use]
    pub const fn application_view(&self) -> &ApplicationView {
        &self.application_view
    }

    /// Visible-bounds tracking for the window, mutably.
    pub const fn application_view_mut(&mut self) -> &mut ApplicationView {
        &mut self.application_view
    }

    /// Raised with the new logical size after the bounds change.
    pub const fn size_changed(&mut self) -> &mut Event<Size> {
        &mut self.size_changed
    }

    /// Subscribes `handler` to [`size_changed`](Self::size_changed).
    pub fn on_size_changed(&mut self, handler: impl FnMut(&Size) + 'static) -> HandlerId {
        self.size_changed.subscribe(handler)
    }

    /// The root composition, once content has been set.
    #[must_use]
    pub const fn root(&self) -> Option<&RootGrid> {
        self.root.as_ref()
    }

    // ========================================================================
    // Content
    // ========================================================================

    fn root_mut(&mut self) -> &mut RootGrid {
        let platform = &mut self.platform;
        self.root.get_or_insert_with(|| {
            tracing::debug!("installing root content view");
            let mut overlay: Border = Border::new();
            overlay.set_visibility(Visibility::Collapsed);
            let root = Grid::with_children([Border::new(), overlay]);
            platform.set_content_view();
            root
        })
    }

    /// Replaces the primary content and returns the previous one.
    ///
    /// The first call installs the root view on the native window.
    pub fn set_content(&mut self, content: Box<dyn Element>) -> Option<Box<dyn Element>> {
        let previous = self.root_mut().children_mut()[PRIMARY].set_child(Some(content));
        self.platform.attach_insets_listener();
        self.update_layout();
        previous
    }

    /// The primary content.
    #[must_use]
    pub fn content(&self) -> Option<&dyn Element> {
        self.root.as_ref()?.children()[PRIMARY]
            .child()
            .map(|child| &**child)
    }

    /// The element currently shown in the fullscreen overlay.
    #[must_use]
    pub fn fullscreen_content(&self) -> Option<&dyn Element> {
        self.root.as_ref()?.children()[OVERLAY]
            .child()
            .map(|child| &**child)
    }

    /// Shows `element` over the whole window, hiding the primary content,
    /// or restores the primary content when `element` is `None`.
    ///
    /// Returns the element previously shown fullscreen.
    pub fn display_fullscreen(
        &mut self,
        element: Option<Box<dyn Element>>,
    ) -> Option<Box<dyn Element>> {
        let children = self.root_mut().children_mut();
        let previous = match element {
            Some(element) => {
                children[PRIMARY].set_visibility(Visibility::Collapsed);
                children[OVERLAY].set_visibility(Visibility::Visible);
                children[OVERLAY].set_child(Some(element))
            }
            None => {
                children[OVERLAY].set_visibility(Visibility::Collapsed);
                children[PRIMARY].set_visibility(Visibility::Visible);
                children[OVERLAY].take_child()
            }
        };
        tracing::debug!(fullscreen = self.is_fullscreen(), "fullscreen toggled");
        self.update_layout();
        previous
    }

    /// Whether the fullscreen overlay is showing.
    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.root
            .as_ref()
            .is_some_and(|root| root.children()[OVERLAY].visibility() == Visibility::Visible)
    }

    /// Runs a measure and arrange pass over the root at the current bounds.
    pub fn update_layout(&mut self) {
        let size = self.bounds.size();
        if let Some(root) = &mut self.root {
            tracing::trace!(?size, "updating window layout");
            root.measure(size);
            root.arrange(Rect::from_size(size));
        }
    }

    // ========================================================================
    // Native callbacks
    // ========================================================================

    /// Stores the insets delivered by the platform and hands them back
    /// unconsumed.
    pub fn on_apply_window_insets(&mut self, insets: InsetsSnapshot) -> InsetsSnapshot {
        tracing::trace!(?insets, "window insets applied");
        self.insets = Some(insets);
        insets
    }

    /// The last applied insets in logical units, converted with the current
    /// display scale.
    #[must_use]
    pub fn window_insets(&self) -> Thickness {
        self.insets.map_or(Thickness::EMPTY, |insets| {
            insets.to_logical(self.platform.display_scale())
        })
    }

    /// Handles a native size change reported in physical pixels.
    ///
    /// Updates the visible bounds, and when the logical bounds differ from
    /// the current ones, re-lays out the root and raises
    /// [`size_changed`](Self::size_changed).
    #[allow(clippy::cast_precision_loss)]
    pub fn raise_native_size_changed(&mut self, physical_width: u32, physical_height: u32) {
        let scale = self.platform.display_scale();
        let bounds = scale.rect_to_logical(Rect::from_size(Size::new(
            physical_width as f32,
            physical_height as f32,
        )));

        let chrome = self.platform.chrome();
        let insets = self.window_insets();
        let obscured = Thickness::new(
            insets.left,
            chrome.logical_status_bar_height(scale).max(insets.top),
            insets.right,
            chrome.logical_navigation_bar_height(scale).max(insets.bottom),
        );
        let visible = bounds.deflate(&obscured);
        if self.application_view.set_visible_bounds(visible) {
            tracing::debug!(?visible, "visible bounds changed");
        }

        if self.bounds == bounds {
            return;
        }
        tracing::debug!(
            physical_width,
            physical_height,
            scale = scale.factor(),
            ?bounds,
            "window bounds changed"
        );
        self.bounds = bounds;
        self.update_layout();
        self.size_changed.raise(&bounds.size());
    }
}
