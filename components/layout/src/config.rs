//! Declarative stack panel properties.

use trellis_core::{ConfigError, Orientation, Thickness, validate_spacing, validate_thickness};

/// Properties read by [`StackPanel`](crate::StackPanel) during layout.
///
/// With the `serde` feature this can be loaded from markup or settings; any
/// missing field takes its default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct StackPanelConfig {
    /// Stacking direction.
    pub orientation: Orientation,
    /// Gap between consecutive children.
    pub spacing: f32,
    /// Inner padding.
    pub padding: Thickness,
    /// Border thickness.
    pub border_thickness: Thickness,
}

impl StackPanelConfig {
    /// Checks every property.
    ///
    /// # Errors
    ///
    /// Returns the first invalid value: spacing, then padding, then border.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_spacing(self.spacing)?;
        validate_thickness(self.padding)?;
        validate_thickness(self.border_thickness)?;
        Ok(())
    }
}
