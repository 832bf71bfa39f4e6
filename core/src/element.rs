//! The polymorphic visual element and its native adapter.
//!
//! Layout follows the two-pass XAML protocol:
//!
//! 1. **Measure** ([`Element::measure`]): the parent offers an available size
//!    and the element reports the size it would like to occupy.
//! 2. **Arrange** ([`Element::arrange`]): the parent assigns a final rectangle
//!    and the element reports the size it actually took.
//!
//! Both results are cached on the element in a [`LayoutState`], so parents can
//! read a child's desired size during arrange without measuring it again.
//!
//! Containers implement [`Element`] directly. Platform widgets implement the
//! smaller [`NativeView`] trait and are wrapped in a [`NativeElement`], which
//! keeps the layout algorithms independent of any particular view system.

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::layout::{Rect, Size, Visibility};

/// Layout results cached on every element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutState {
    desired_size: Size,
    bounds: Rect,
    actual_size: Size,
    visibility: Visibility,
    measure_valid: bool,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutState {
    /// A fresh, never-measured state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            desired_size: Size::zero(),
            bounds: Rect::from_size(Size::zero()),
            actual_size: Size::zero(),
            visibility: Visibility::Visible,
            measure_valid: false,
        }
    }

    /// Output of the last measure pass.
    #[must_use]
    pub const fn desired_size(&self) -> Size {
        self.desired_size
    }

    /// Rectangle assigned by the last arrange pass, relative to the parent.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Size actually taken during the last arrange pass.
    #[must_use]
    pub const fn actual_size(&self) -> Size {
        self.actual_size
    }

    /// Current visibility.
    #[must_use]
    pub const fn visibility(&self) -> Visibility {
        self.visibility
    }

    /// Returns false once a property affecting measure has changed.
    #[must_use]
    pub const fn is_measure_valid(&self) -> bool {
        self.measure_valid
    }

    /// Marks the cached desired size stale.
    pub const fn invalidate_measure(&mut self) {
        self.measure_valid = false;
    }

    /// Updates visibility, invalidating measure when it changes.
    pub fn set_visibility(&mut self, visibility: Visibility) {
        if self.visibility != visibility {
            self.visibility = visibility;
            self.measure_valid = false;
        }
    }

    const fn finish_measure(&mut self, desired_size: Size) {
        self.desired_size = desired_size;
        self.measure_valid = true;
    }

    const fn finish_arrange(&mut self, bounds: Rect, actual_size: Size) {
        self.bounds = bounds;
        self.actual_size = actual_size;
    }
}

/// A node of the visual tree.
///
/// Implementors provide [`measure_override`](Self::measure_override) and
/// [`arrange_override`](Self::arrange_override); the provided
/// [`measure`](Self::measure) and [`arrange`](Self::arrange) handle
/// visibility and caching.
pub trait Element: Debug {
    /// Cached layout results.
    fn layout_state(&self) -> &LayoutState;

    /// Mutable access to the cached layout results.
    fn layout_state_mut(&mut self) -> &mut LayoutState;

    /// Computes the desired size for `available`. Either axis of `available`
    /// may be [`f32::INFINITY`].
    fn measure_override(&mut self, available: Size) -> Size;

    /// Lays out content inside `rect` and returns the size actually used.
    fn arrange_override(&mut self, rect: Rect) -> Size;

    /// Measures the element and caches its desired size.
    ///
    /// Collapsed elements desire nothing.
    fn measure(&mut self, available: Size) -> Size {
        let desired = match self.visibility() {
            Visibility::Collapsed => Size::zero(),
            Visibility::Visible => self.measure_override(available),
        };
        self.layout_state_mut().finish_measure(desired);
        desired
    }

    /// Assigns the final rectangle and caches the actual size.
    ///
    /// Collapsed elements are given an empty rectangle at the same origin.
    fn arrange(&mut self, rect: Rect) {
        match self.visibility() {
            Visibility::Collapsed => {
                let empty = Rect::new(rect.origin(), Size::zero());
                self.layout_state_mut().finish_arrange(empty, Size::zero());
            }
            Visibility::Visible => {
                let actual = self.arrange_override(rect);
                self.layout_state_mut().finish_arrange(rect, actual);
            }
        }
    }

    /// Output of the last measure pass.
    fn desired_size(&self) -> Size {
        self.layout_state().desired_size()
    }

    /// Size assigned by the last arrange pass.
    fn actual_size(&self) -> Size {
        self.layout_state().actual_size()
    }

    /// Rectangle assigned by the last arrange pass.
    fn bounds(&self) -> Rect {
        self.layout_state().bounds()
    }

    /// Current visibility.
    fn visibility(&self) -> Visibility {
        self.layout_state().visibility()
    }

    /// Shows or collapses the element.
    fn set_visibility(&mut self, visibility: Visibility) {
        self.layout_state_mut().set_visibility(visibility);
    }

    /// Marks the element's desired size stale.
    fn invalidate_measure(&mut self) {
        self.layout_state_mut().invalidate_measure();
    }

    /// Returns false if the element needs to be measured again.
    fn is_measure_valid(&self) -> bool {
        self.layout_state().is_measure_valid()
    }
}

impl<E: Element + ?Sized> Element for Box<E> {
    fn layout_state(&self) -> &LayoutState {
        (**self).layout_state()
    }

    fn layout_state_mut(&mut self) -> &mut LayoutState {
        (**self).layout_state_mut()
    }

    fn measure_override(&mut self, available: Size) -> Size {
        (**self).measure_override(available)
    }

    fn arrange_override(&mut self, rect: Rect) -> Size {
        (**self).arrange_override(rect)
    }

    fn measure(&mut self, available: Size) -> Size {
        (**self).measure(available)
    }

    fn arrange(&mut self, rect: Rect) {
        (**self).arrange(rect);
    }

    fn desired_size(&self) -> Size {
        (**self).desired_size()
    }

    fn actual_size(&self) -> Size {
        (**self).actual_size()
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn visibility(&self) -> Visibility {
        (**self).visibility()
    }

    fn set_visibility(&mut self, visibility: Visibility) {
        (**self).set_visibility(visibility);
    }

    fn invalidate_measure(&mut self) {
        (**self).invalidate_measure();
    }

    fn is_measure_valid(&self) -> bool {
        (**self).is_measure_valid()
    }
}

// ============================================================================
// Native adapter
// ============================================================================

/// Measurement and geometry primitives supplied by a platform view system.
///
/// Sizes are logical pixels; the platform binding performs any density
/// conversion.
pub trait NativeView: Debug {
    /// Asks the native view for its desired size under `constraint`.
    fn measure(&mut self, constraint: Size) -> Size;

    /// Assigns the native view's frame.
    fn set_frame(&mut self, frame: Rect);

    /// The size the native layer actually applied. It may differ from the
    /// last frame because of clamping or pixel rounding.
    fn frame_size(&self) -> Size;
}

/// Wraps a [`NativeView`] so it can live in the visual tree.
#[derive(Debug)]
pub struct NativeElement<V> {
    view: V,
    state: LayoutState,
}

impl<V: NativeView> NativeElement<V> {
    /// Wraps `view`.
    pub const fn new(view: V) -> Self {
        Self {
            view,
            state: LayoutState::new(),
        }
    }

    /// Returns the wrapped view.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the wrapped view mutably.
    pub const fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}

impl<V: NativeView> Element for NativeElement<V> {
    fn layout_state(&self) -> &LayoutState {
        &self.state
    }

    fn layout_state_mut(&mut self) -> &mut LayoutState {
        &mut self.state
    }

    fn measure_override(&mut self, available: Size) -> Size {
        self.view.measure(available)
    }

    fn arrange_override(&mut self, rect: Rect) -> Size {
        self.view.set_frame(rect);
        self.view.frame_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Point;

    /// Rounds frames down to whole pixels like a native layer would.
    #[derive(Debug, Default)]
    struct RoundingView {
        natural: Size,
        frame: Rect,
        measure_calls: usize,
    }

    impl NativeView for RoundingView {
        fn measure(&mut self, constraint: Size) -> Size {
            self.measure_calls += 1;
            Size::new(
                self.natural.width.min(constraint.width),
                self.natural.height.min(constraint.height),
            )
        }

        fn set_frame(&mut self, frame: Rect) {
            self.frame = frame;
        }

        fn frame_size(&self) -> Size {
            Size::new(self.frame.width().floor(), self.frame.height().floor())
        }
    }

    #[test]
    fn test_native_element_caches_desired_size() {
        let mut element = NativeElement::new(RoundingView {
            natural: Size::new(40.0, 20.0),
            ..RoundingView::default()
        });
        assert!(!element.is_measure_valid());

        let desired = element.measure(Size::new(30.0, f32::INFINITY));

        assert_eq!(desired, Size::new(30.0, 20.0));
        assert_eq!(element.desired_size(), desired);
        assert!(element.is_measure_valid());
        assert_eq!(element.view().measure_calls, 1);
    }

    #[test]
    fn test_native_element_reports_clamped_actual_size() {
        let mut element = NativeElement::new(RoundingView::default());
        let rect = Rect::new(Point::new(1.0, 2.0), Size::new(10.6, 4.2));

        element.arrange(rect);

        assert_eq!(element.bounds(), rect);
        assert_eq!(element.actual_size(), Size::new(10.0, 4.0));
        assert_eq!(element.view().frame, rect);
    }

    #[test]
    fn test_native_view_change_needs_new_measure() {
        let mut element = NativeElement::new(RoundingView {
            natural: Size::new(10.0, 10.0),
            ..RoundingView::default()
        });
        element.measure(Size::INFINITY);

        element.view_mut().natural = Size::new(25.0, 10.0);
        element.invalidate_measure();

        assert_eq!(element.measure(Size::INFINITY), Size::new(25.0, 10.0));
        assert_eq!(element.view().measure_calls, 2);
    }

    #[test]
    fn test_collapsed_element_is_skipped() {
        let mut element = NativeElement::new(RoundingView {
            natural: Size::new(40.0, 20.0),
            ..RoundingView::default()
        });
        element.set_visibility(Visibility::Collapsed);

        assert_eq!(element.measure(Size::INFINITY), Size::zero());
        assert_eq!(element.view().measure_calls, 0);

        element.arrange(Rect::new(Point::new(5.0, 5.0), Size::new(10.0, 10.0)));
        assert_eq!(element.actual_size(), Size::zero());
        assert_eq!(element.bounds().origin(), Point::new(5.0, 5.0));
    }

    #[test]
    fn test_boxed_element_delegates() {
        let mut element: Box<dyn Element> = Box::new(NativeElement::new(RoundingView {
            natural: Size::new(8.0, 8.0),
            ..RoundingView::default()
        }));

        assert_eq!(element.measure(Size::INFINITY), Size::new(8.0, 8.0));
        element.set_visibility(Visibility::Collapsed);
        assert!(!element.is_measure_valid());
        assert_eq!(element.measure(Size::INFINITY), Size::zero());
    }
}
