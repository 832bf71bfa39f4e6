//! Geometry types shared by every layout container.
//!
//! # Logical Pixels
//!
//! All values here are **logical pixels** (density-independent points). Native
//! hosts convert physical pixels to logical units before handing geometry to
//! the layout engine, see `trellis_window::DisplayScale`.
//!
//! # Unconstrained Axes
//!
//! A measure constraint uses [`f32::INFINITY`] on an axis to mean "unconstrained
//! along this axis". [`Size::INFINITY`] relaxes both axes.

use core::ops::{Add, Sub};

// ============================================================================
// Orientation / Visibility
// ============================================================================

/// Stacking direction of a panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Children are laid out left to right.
    Horizontal,
    /// Children are laid out top to bottom.
    #[default]
    Vertical,
}

/// Whether an element takes part in layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Visibility {
    /// The element is measured, arranged and displayed.
    #[default]
    Visible,
    /// The element reports a zero desired size and is not arranged.
    Collapsed,
}

// ============================================================================
// Size
// ============================================================================

/// Two-dimensional size expressed in logical pixels.
///
/// Subtraction saturates at zero so that constraints never go negative before
/// they reach native layout.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width in points.
    pub width: f32,
    /// The height in points.
    pub height: f32,
}

impl Size {
    /// Unconstrained on both axes.
    pub const INFINITY: Self = Self {
        width: f32::INFINITY,
        height: f32::INFINITY,
    };

    /// Constructs a [`Size`] with the given `width` and `height`.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Creates a [`Size`] with zero width and height.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Returns true if both dimensions are zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }

    /// Returns true if the width carries the unconstrained sentinel.
    #[must_use]
    pub const fn is_width_unbounded(&self) -> bool {
        self.width == f32::INFINITY
    }

    /// Returns true if the height carries the unconstrained sentinel.
    #[must_use]
    pub const fn is_height_unbounded(&self) -> bool {
        self.height == f32::INFINITY
    }

    /// Component-wise maximum.
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Extent along `orientation`.
    #[must_use]
    pub const fn along(&self, orientation: Orientation) -> f32 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }

    /// Returns a copy whose extent along `orientation` is replaced by `value`.
    #[must_use]
    pub const fn with_along(self, orientation: Orientation, value: f32) -> Self {
        match orientation {
            Orientation::Horizontal => Self::new(value, self.height),
            Orientation::Vertical => Self::new(self.width, value),
        }
    }
}

impl Add for Size {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.width + rhs.width, self.height + rhs.height)
    }
}

impl Sub for Size {
    type Output = Self;

    /// Component-wise difference, clamped at zero.
    fn sub(self, rhs: Self) -> Self {
        Self::new(
            (self.width - rhs.width).max(0.0),
            (self.height - rhs.height).max(0.0),
        )
    }
}

// ============================================================================
// Point
// ============================================================================

/// Absolute coordinate relative to a parent element's origin.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// The x-coordinate in points.
    pub x: f32,
    /// The y-coordinate in points.
    pub y: f32,
}

impl Point {
    /// Constructs a [`Point`] at the given `x` and `y`.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Creates a [`Point`] at the origin (0, 0).
    #[must_use]
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned rectangle relative to its parent.
///
/// `right` and `bottom` are derived from the origin and size.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    origin: Point,
    size: Size,
}

impl Rect {
    /// Creates a new [`Rect`] with the provided `origin` and `size`.
    #[must_use]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Creates a rectangle from origin (0, 0) with the given size.
    #[must_use]
    pub const fn from_size(size: Size) -> Self {
        Self {
            origin: Point::zero(),
            size,
        }
    }

    /// Returns the rectangle's origin (top-left corner).
    #[must_use]
    pub const fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the rectangle's size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Returns the rectangle's x-coordinate (left edge).
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.origin.x
    }

    /// Returns the rectangle's y-coordinate (top edge).
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.origin.y
    }

    /// Returns the rectangle's width.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.size.width
    }

    /// Returns the rectangle's height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.size.height
    }

    /// Returns the right edge (`x + width`).
    #[must_use]
    pub const fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Returns the bottom edge (`y + height`).
    #[must_use]
    pub const fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Shrinks the rectangle by `thickness` on each edge. The resulting size
    /// never goes negative.
    #[must_use]
    pub fn deflate(&self, thickness: &Thickness) -> Self {
        Self::new(
            Point::new(
                self.origin.x + thickness.left,
                self.origin.y + thickness.top,
            ),
            self.size - thickness.size(),
        )
    }
}

// ============================================================================
// Thickness
// ============================================================================

/// Distances applied to the four edges of a rectangle (border, padding,
/// window insets).
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thickness {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Thickness {
    /// All edges zero.
    pub const EMPTY: Self = Self {
        left: 0.0,
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
    };

    /// Creates a [`Thickness`] with explicit edges, in XAML order.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same value on every edge.
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// `left + right`.
    #[must_use]
    pub const fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// `top + bottom`.
    #[must_use]
    pub const fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Space consumed by the thickness on both axes.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.horizontal(), self.vertical())
    }

    /// Returns true if every edge is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns true if every edge is finite and non-negative.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        let edges = [self.left, self.top, self.right, self.bottom];
        let mut i = 0;
        while i < edges.len() {
            if !edges[i].is_finite() || edges[i] < 0.0 {
                return false;
            }
            i += 1;
        }
        true
    }
}

impl Add for Thickness {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.left + rhs.left,
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_subtract_clamps_at_zero() {
        let size = Size::new(10.0, 5.0) - Size::new(4.0, 8.0);
        assert_eq!(size, Size::new(6.0, 0.0));
    }

    #[test]
    fn test_size_subtract_keeps_infinity() {
        let size = Size::INFINITY - Size::new(20.0, 20.0);
        assert!(size.is_width_unbounded());
        assert!(size.is_height_unbounded());
    }

    #[test]
    fn test_size_along_axis() {
        let size = Size::new(3.0, 7.0);
        assert_eq!(size.along(Orientation::Horizontal), 3.0);
        assert_eq!(size.along(Orientation::Vertical), 7.0);
        assert_eq!(
            size.with_along(Orientation::Vertical, f32::INFINITY),
            Size::new(3.0, f32::INFINITY)
        );
    }

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(Point::new(10.0, 20.0), Size::new(100.0, 50.0));

        assert_eq!(rect.right(), 110.0);
        assert_eq!(rect.bottom(), 70.0);
    }

    #[test]
    fn test_rect_deflate() {
        let rect = Rect::from_size(Size::new(100.0, 100.0));
        let inner = rect.deflate(&Thickness::new(20.0, 10.0, 20.0, 10.0));

        assert_eq!(inner.x(), 20.0);
        assert_eq!(inner.y(), 10.0);
        assert_eq!(inner.width(), 60.0);
        assert_eq!(inner.height(), 80.0);

        let collapsed = rect.deflate(&Thickness::uniform(80.0));
        assert_eq!(collapsed.size(), Size::zero());
    }

    #[test]
    fn test_thickness_validation() {
        assert!(Thickness::uniform(2.0).is_valid());
        assert!(!Thickness::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!Thickness::new(0.0, f32::NAN, 0.0, 0.0).is_valid());
        assert!(Thickness::EMPTY.is_empty());
    }
}
