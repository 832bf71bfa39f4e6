//! Physical pixel to logical unit conversion.

use trellis_core::{ConfigError, Point, Rect, Size, Thickness};

/// Number of physical pixels per logical unit (Android `density`, UIKit
/// `scale`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct DisplayScale(f32);

impl Default for DisplayScale {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl DisplayScale {
    /// One physical pixel per logical unit.
    pub const IDENTITY: Self = Self(1.0);

    /// Wraps a scale factor.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidScale`] unless `factor` is finite and
    /// greater than zero.
    pub fn new(factor: f32) -> Result<Self, ConfigError> {
        if factor.is_finite() && factor > 0.0 {
            Ok(Self(factor))
        } else {
            Err(ConfigError::InvalidScale(factor))
        }
    }

    /// The raw factor.
    #[must_use]
    pub const fn factor(self) -> f32 {
        self.0
    }

    /// Converts a physical length to logical units.
    #[must_use]
    pub fn to_logical(self, physical: f32) -> f32 {
        physical / self.0
    }

    /// Converts a logical length to physical pixels.
    #[must_use]
    pub fn to_physical(self, logical: f32) -> f32 {
        logical * self.0
    }

    /// Converts an integral pixel count, as reported by the platform.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn pixels_to_logical(self, pixels: i64) -> f32 {
        self.to_logical(pixels as f32)
    }

    /// Converts every component of a physical rectangle.
    #[must_use]
    pub fn rect_to_logical(self, rect: Rect) -> Rect {
        Rect::new(
            Point::new(self.to_logical(rect.x()), self.to_logical(rect.y())),
            Size::new(
                self.to_logical(rect.width()),
                self.to_logical(rect.height()),
            ),
        )
    }

    /// Converts every edge of a physical thickness.
    #[must_use]
    pub fn thickness_to_logical(self, thickness: Thickness) -> Thickness {
        Thickness::new(
            self.to_logical(thickness.left),
            self.to_logical(thickness.top),
            self.to_logical(thickness.right),
            self.to_logical(thickness.bottom),
        )
    }
}
