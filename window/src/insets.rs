//! Window insets as delivered by the platform.

use trellis_core::Thickness;

use crate::DisplayScale;

/// System window insets in physical pixels, captured from the last
/// apply-insets callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InsetsSnapshot {
    /// Left inset.
    pub left: i32,
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
}

impl InsetsSnapshot {
    /// Creates a snapshot from physical edge values.
    #[must_use]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Converts to logical units.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_logical(self, scale: DisplayScale) -> Thickness {
        scale.thickness_to_logical(Thickness::new(
            self.left as f32,
            self.top as f32,
            self.right as f32,
            self.bottom as f32,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_logical() {
        let scale = DisplayScale::new(2.0).unwrap();
        let insets = InsetsSnapshot::new(0, 48, 10, 96).to_logical(scale);

        assert_eq!(insets, Thickness::new(0.0, 24.0, 5.0, 48.0));
    }
}
