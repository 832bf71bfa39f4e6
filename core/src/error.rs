use crate::layout::Thickness;

/// Rejected layout or display configuration.
///
/// Layout passes themselves never fail; only invalid property values do.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// Spacing was negative, NaN or infinite.
    #[error("spacing must be finite and non-negative, got {0}")]
    InvalidSpacing(f32),
    /// A border or padding edge was negative, NaN or infinite.
    #[error("thickness edges must be finite and non-negative, got {0:?}")]
    InvalidThickness(Thickness),
    /// The physical-to-logical scale factor was not a positive finite number.
    #[error("display scale must be finite and positive, got {0}")]
    InvalidScale(f32),
}

/// Validates a spacing value.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidSpacing`] for negative or non-finite values.
pub fn validate_spacing(spacing: f32) -> Result<f32, ConfigError> {
    if spacing.is_finite() && spacing >= 0.0 {
        Ok(spacing)
    } else {
        Err(ConfigError::InvalidSpacing(spacing))
    }
}

/// Validates a border or padding thickness.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidThickness`] if any edge is negative or
/// non-finite.
pub const fn validate_thickness(thickness: Thickness) -> Result<Thickness, ConfigError> {
    if thickness.is_valid() {
        Ok(thickness)
    } else {
        Err(ConfigError::InvalidThickness(thickness))
    }
}
