//! A single-cell grid that overlays its children.
//!
//! Every child is offered the full available size and is arranged to the
//! grid's full bounds, later children on top of earlier ones. The window uses
//! it to stack its primary content and its fullscreen overlay.

use alloc::{boxed::Box, vec::Vec};

use trellis_core::{Element, LayoutState, Rect, Size};

/// Overlays children in one shared cell.
#[derive(Debug)]
pub struct Grid<E = Box<dyn Element>> {
    state: LayoutState,
    children: Vec<E>,
}

impl<E> Default for Grid<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Grid<E> {
    /// An empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: LayoutState::new(),
            children: Vec::new(),
        }
    }

    /// A grid holding `children`, bottom-most first.
    pub fn with_children(children: impl IntoIterator<Item = E>) -> Self {
        Self {
            state: LayoutState::new(),
            children: children.into_iter().collect(),
        }
    }

    /// Children, bottom-most first.
    #[must_use]
    pub fn children(&self) -> &[E] {
        &self.children
    }

    /// Mutable access to the children.
    pub fn children_mut(&mut self) -> &mut [E] {
        &mut self.children
    }

    /// Appends a child on top.
    pub fn push(&mut self, child: E) {
        self.children.push(child);
        self.state.invalidate_measure();
    }
}

impl<E: Element> Element for Grid<E> {
    fn layout_state(&self) -> &LayoutState {
        &self.state
    }

    fn layout_state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }

    fn measure_override(&mut self, available: Size) -> Size {
        self.children
            .iter_mut()
            .map(|child| child.measure(available))
            .fold(Size::zero(), Size::max)
    }

    fn arrange_override(&mut self, rect: Rect) -> Size {
        let cell = Rect::from_size(rect.size());
        for child in &mut self.children {
            child.arrange(cell);
        }
        rect.size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::FixedElement;
    use trellis_core::Visibility;

    #[test]
    fn test_grid_desires_largest_child() {
        let mut grid = Grid::with_children([FixedElement::new(30.0, 10.0), FixedElement::new(20.0, 40.0)]);

        assert_eq!(grid.measure(Size::INFINITY), Size::new(30.0, 40.0));
    }

    #[test]
    fn test_grid_arranges_children_to_full_cell() {
        let mut grid = Grid::with_children([FixedElement::new(30.0, 10.0), FixedElement::new(20.0, 40.0)]);
        grid.measure(Size::new(100.0, 100.0));
        grid.arrange(Rect::from_size(Size::new(100.0, 100.0)));

        for child in grid.children() {
            assert_eq!(child.bounds(), Rect::from_size(Size::new(100.0, 100.0)));
        }
    }

    #[test]
    fn test_collapsed_child_does_not_contribute() {
        let mut grid = Grid::with_children([FixedElement::new(30.0, 10.0), FixedElement::new(80.0, 80.0)]);
        grid.children_mut()[1].set_visibility(Visibility::Collapsed);

        assert_eq!(grid.measure(Size::INFINITY), Size::new(30.0, 10.0));
    }
}
