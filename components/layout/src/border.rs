//! A single-child decorator that insets its content by border and padding.

use alloc::boxed::Box;

use trellis_core::{ConfigError, Element, LayoutState, Rect, Size, Thickness, validate_thickness};

/// Hosts at most one child inside a border and padding.
#[derive(Debug)]
pub struct Border<E = Box<dyn Element>> {
    state: LayoutState,
    child: Option<E>,
    border_thickness: Thickness,
    padding: Thickness,
}

impl<E> Default for Border<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Border<E> {
    /// An empty border with no thickness.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LayoutState::new(),
            child: None,
            border_thickness: Thickness::EMPTY,
            padding: Thickness::EMPTY,
        }
    }

    /// The hosted child.
    #[must_use]
    pub const fn child(&self) -> Option<&E> {
        self.child.as_ref()
    }

    /// The hosted child, mutably.
    pub const fn child_mut(&mut self) -> Option<&mut E> {
        self.child.as_mut()
    }

    /// Replaces the hosted child and returns the previous one.
    pub fn set_child(&mut self, child: Option<E>) -> Option<E> {
        self.state.invalidate_measure();
        core::mem::replace(&mut self.child, child)
    }

    /// Removes the hosted child.
    pub fn take_child(&mut self) -> Option<E> {
        self.set_child(None)
    }

    /// Border thickness.
    #[must_use]
    pub const fn border_thickness(&self) -> Thickness {
        self.border_thickness
    }

    /// Sets the border thickness.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThickness`] for negative or non-finite
    /// edges.
    pub fn set_border_thickness(&mut self, thickness: Thickness) -> Result<(), ConfigError> {
        self.border_thickness = validate_thickness(thickness)?;
        self.state.invalidate_measure();
        Ok(())
    }

    /// Inner padding.
    #[must_use]
    pub const fn padding(&self) -> Thickness {
        self.padding
    }

    /// Sets the inner padding.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidThickness`] for negative or non-finite
    /// edges.
    pub fn set_padding(&mut self, padding: Thickness) -> Result<(), ConfigError> {
        self.padding = validate_thickness(padding)?;
        self.state.invalidate_measure();
        Ok(())
    }

    fn border_and_padding(&self) -> Thickness {
        self.border_thickness + self.padding
    }
}

impl<E: Element> Element for Border<E> {
    fn layout_state(&self) -> &LayoutState {
        &self.state
    }

    fn layout_state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }

    fn measure_override(&mut self, available: Size) -> Size {
        let border_and_padding = self.border_and_padding().size();
        let child = self
            .child
            .as_mut()
            .map_or_else(Size::zero, |child| child.measure(available - border_and_padding));
        child + border_and_padding
    }

    fn arrange_override(&mut self, rect: Rect) -> Size {
        let inner = Rect::from_size(rect.size()).deflate(&self.border_and_padding());
        if let Some(child) = &mut self.child {
            child.arrange(inner);
        }
        rect.size()
    }
}
