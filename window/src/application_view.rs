//! Application-level view state shared with the platform.

use trellis_core::{Event, Rect};

/// Tracks the region of the window not covered by system chrome.
#[derive(Debug, Default)]
pub struct ApplicationView {
    visible_bounds: Rect,
    visible_bounds_changed: Event<Rect>,
}

impl ApplicationView {
    /// A view with empty visible bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The window area not obscured by status bar, navigation bar or
    /// insets, in logical units.
    #[must_use]
    pub const fn visible_bounds(&self) -> Rect {
        self.visible_bounds
    }

    /// Stores new visible bounds, raising
    /// [`visible_bounds_changed`](Self::visible_bounds_changed) if they
    /// differ from the current ones. Returns whether they changed.
    pub fn set_visible_bounds(&mut self, bounds: Rect) -> bool {
        if self.visible_bounds == bounds {
            return false;
        }
        self.visible_bounds = bounds;
        self.visible_bounds_changed.raise(&bounds);
        true
    }

    /// Raised with the new visible bounds.
    pub const fn visible_bounds_changed(&mut self) -> &mut Event<Rect> {
        &mut self.visible_bounds_changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use trellis_core::Size;

    #[test]
    fn test_raises_only_on_change() {
        let raised = Rc::new(Cell::new(0));
        let mut view = ApplicationView::new();
        let counter = Rc::clone(&raised);
        view.visible_bounds_changed()
            .subscribe(move |_| counter.set(counter.get() + 1));

        let bounds = Rect::from_size(Size::new(360.0, 600.0));
        assert!(view.set_visible_bounds(bounds));
        assert!(!view.set_visible_bounds(bounds));

        assert_eq!(raised.get(), 1);
        assert_eq!(view.visible_bounds(), bounds);
    }
}
