//! The stack panel: children laid out one after another along one axis.

use alloc::{boxed::Box, vec::Vec};

use trellis_core::{
    ConfigError, Element, Event, LayoutState, Orientation, Point, Rect, Size, Thickness,
    validate_spacing, validate_thickness,
};

use crate::{config::StackPanelConfig, snap::SnapPoints};

/// Arranges children in insertion order along its [`Orientation`].
///
/// Along the stacking (primary) axis each child gets exactly its desired
/// extent, separated by `spacing`. Along the cross axis each child gets at
/// least the panel's content extent.
///
/// ```ignore
/// let mut panel = StackPanel::vertical();
/// panel.set_spacing(4.0)?;
/// panel.push(Box::new(title));
/// panel.push(Box::new(subtitle));
///
/// let desired = panel.measure(Size::INFINITY);
/// panel.arrange(Rect::from_size(desired));
/// ```
///
/// Every arrange pass records the far edge of each child in a
/// [`SnapPoints`] tracker. When it changes, the panel raises
/// [`horizontal_snap_points_changed`](Self::horizontal_snap_points_changed) or
/// [`vertical_snap_points_changed`](Self::vertical_snap_points_changed),
/// depending on its orientation, once per pass.
#[derive(Debug)]
pub struct StackPanel<E = Box<dyn Element>> {
    state: LayoutState,
    children: Vec<E>,
    orientation: Orientation,
    spacing: f32,
    padding: Thickness,
    border_thickness: Thickness,
    snap_points: SnapPoints,
    horizontal_snap_points_changed: Event<[f32]>,
    vertical_snap_points_changed: Event<[f32]>,
}

impl<E> Default for StackPanel<E> {
    fn default() -> Self {
        Self::new(Orientation::default())
    }
}

impl<E> StackPanel<E> {
    /// Creates an empty panel with zero spacing, padding and border.
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self {
            state: LayoutState::new(),
            children: Vec::new(),
            orientation,
            spacing: 0.0,
            padding: Thickness::EMPTY,
            border_thickness: Thickness::EMPTY,
            snap_points: SnapPoints::new(),
            horizontal_snap_points_changed: Event::new(),
            vertical_snap_points_changed: Event::new(),
        }
    }

    /// Shortcut for `StackPanel::new(Orientation::Horizontal)`.
    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }

    /// Shortcut for `StackPanel::new(Orientation::Vertical)`.
    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// Builds a panel from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first invalid property found by
    /// [`StackPanelConfig::validate`].
    pub fn from_config(config: StackPanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut panel = Self::new(config.orientation);
        panel.spacing = config.spacing;
        panel.padding = config.padding;
        panel.border_thickness = config.border_thickness;
        Ok(panel)
    }

    /// Snapshot of the panel's current configuration.
    #[must_use]
    pub const fn config(&self) -> StackPanelConfig {
        StackPanelConfig {
            orientation: self.orientation,
            spacing: self.spacing,
            padding: self.padding,
            border_thickness: self.border_thickness,
        }
    }

    // ------------------------------------------------------------------
    // Properties
    // ------------------------------------------------------------------

    /// The stacking direction.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Changes the stacking direction.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.state.invalidate_measure();
        }
    }

    /// Gap inserted between consecutive children.
    #[must_use]
    pub const fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Sets the gap between consecutive children.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSpacing`] for negative or non-finite
    /// values; the panel is left unchanged.
    pub fn set_spacing(&mut self, spacing: f32) -> Result<(), ConfigError> {
        self.spacing = validate_spacing(spacing)?;
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
    /// Returns [`ConfigError::InvalidThickness`] if an edge is negative or
    /// non-finite.
    pub fn set_padding(&mut self, padding: Thickness) -> Result<(), ConfigError> {
        self.padding = validate_thickness(padding)?;
        self.state.invalidate_measure();
        Ok(())
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
    /// Returns [`ConfigError::InvalidThickness`] if an edge is negative or
    /// non-finite.
    pub fn set_border_thickness(&mut self, border_thickness: Thickness) -> Result<(), ConfigError> {
        self.border_thickness = validate_thickness(border_thickness)?;
        self.state.invalidate_measure();
        Ok(())
    }

    /// Border and padding combined, consumed before children are laid out.
    #[must_use]
    pub fn border_and_padding(&self) -> Thickness {
        self.border_thickness + self.padding
    }

    // ------------------------------------------------------------------
    // Children
    // ------------------------------------------------------------------

    /// Children in layout order.
    #[must_use]
    pub fn children(&self) -> &[E] {
        &self.children
    }

    /// Mutable access to the children. Call
    /// [`Element::invalidate_measure`] on the panel after changing anything
    /// that affects their size.
    pub fn children_mut(&mut self) -> &mut [E] {
        &mut self.children
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if the panel has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a child.
    pub fn push(&mut self, child: E) {
        self.children.push(child);
        self.state.invalidate_measure();
    }

    /// Inserts a child at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, child: E) {
        self.children.insert(index, child);
        self.state.invalidate_measure();
    }

    /// Removes and returns the child at `index`, or `None` if out of bounds.
    pub fn remove(&mut self, index: usize) -> Option<E> {
        if index >= self.children.len() {
            return None;
        }
        self.state.invalidate_measure();
        Some(self.children.remove(index))
    }

    /// Removes every child.
    pub fn clear(&mut self) {
        self.children.clear();
        self.state.invalidate_measure();
    }

    // ------------------------------------------------------------------
    // Snap points
    // ------------------------------------------------------------------

    /// Far-edge offset of each child along the stacking axis, as of the last
    /// arrange pass.
    #[must_use]
    pub fn snap_points(&self) -> &[f32] {
        self.snap_points.as_slice()
    }

    /// Snap points along `orientation`; empty for the cross axis.
    #[must_use]
    pub fn snap_points_for(&self, orientation: Orientation) -> &[f32] {
        if orientation == self.orientation {
            self.snap_points.as_slice()
        } else {
            &[]
        }
    }

    /// Raised after an arrange pass of a horizontal panel changed its snap
    /// points.
    pub const fn horizontal_snap_points_changed(&mut self) -> &mut Event<[f32]> {
        &mut self.horizontal_snap_points_changed
    }

    /// Raised after an arrange pass of a vertical panel changed its snap
    /// points.
    pub const fn vertical_snap_points_changed(&mut self) -> &mut Event<[f32]> {
        &mut self.vertical_snap_points_changed
    }
}

impl<E: Element> StackPanel<E> {
    /// Creates a panel holding `children`.
    pub fn with_children(orientation: Orientation, children: impl IntoIterator<Item = E>) -> Self {
        let mut panel = Self::new(orientation);
        panel.children.extend(children);
        panel
    }
}

impl<E: Element> Element for StackPanel<E> {
    fn layout_state(&self) -> &LayoutState {
        &self.state
    }

    fn layout_state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }

    fn measure_override(&mut self, available: Size) -> Size {
        let border_and_padding = self.border_and_padding().size();
        let available = available - border_and_padding;

        // Children report their natural extent along the stacking axis but stay
        // constrained on the cross axis.
        let slot = available.with_along(self.orientation, f32::INFINITY);

        let spacing = self.spacing;
        let count = self.children.len();
        let mut desired = Size::zero();

        for (index, child) in self.children.iter_mut().enumerate() {
            let measured = child.measure(slot);
            let add_spacing = index + 1 != count;

            match self.orientation {
                Orientation::Horizontal => {
                    desired.width += measured.width;
                    desired.height = desired.height.max(measured.height);
                    if add_spacing {
                        desired.width += spacing;
                    }
                }
                Orientation::Vertical => {
                    desired.width = desired.width.max(measured.width);
                    desired.height += measured.height;
                    if add_spacing {
                        desired.height += spacing;
                    }
                }
            }
        }

        desired + border_and_padding
    }

    fn arrange_override(&mut self, rect: Rect) -> Size {
        let border_and_padding = self.border_and_padding();
        let content = rect.size() - border_and_padding.size();

        let spacing = self.spacing;
        let count = self.children.len();
        tracing::debug!(children = count, orientation = ?self.orientation, "arranging stack panel");

        let mut snap_points_changed = self.snap_points.resize(count);

        let mut x = border_and_padding.left;
        let mut y = border_and_padding.top;
        let mut previous_extent = 0.0;
        let mut arranged = match self.orientation {
            Orientation::Horizontal => Size::new(0.0, content.height),
            Orientation::Vertical => Size::new(content.width, 0.0),
        };

        for (index, child) in self.children.iter_mut().enumerate() {
            let desired = child.desired_size();
            let gap = if index == 0 { 0.0 } else { spacing };

            let (child_rect, snap_point) = match self.orientation {
                Orientation::Horizontal => {
                    x += previous_extent + gap;
                    previous_extent = desired.width;
                    let child_rect = Rect::new(
                        Point::new(x, y),
                        Size::new(desired.width, content.height.max(desired.height)),
                    );
                    (child_rect, child_rect.right())
                }
                Orientation::Vertical => {
                    y += previous_extent + gap;
                    previous_extent = desired.height;
                    let child_rect = Rect::new(
                        Point::new(x, y),
                        Size::new(content.width.max(desired.width), desired.height),
                    );
                    (child_rect, child_rect.bottom())
                }
            };

            snap_points_changed |= self.snap_points.record(index, snap_point);

            child.arrange(child_rect);

            // The native layer may clamp or round the frame it was given.
            let actual = child.actual_size();
            match self.orientation {
                Orientation::Horizontal => {
                    arranged.height = arranged.height.max(actual.height);
                    arranged.width += actual.width;
                }
                Orientation::Vertical => {
                    arranged.width = arranged.width.max(actual.width);
                    arranged.height += actual.height;
                }
            }
        }

        if snap_points_changed {
            tracing::trace!(points = ?self.snap_points.as_slice(), "snap points changed");
            let points = self.snap_points.as_slice();
            match self.orientation {
                Orientation::Horizontal => self.horizontal_snap_points_changed.raise(points),
                Orientation::Vertical => self.vertical_snap_points_changed.raise(points),
            }
        }

        arranged + border_and_padding.size()
    }
}
