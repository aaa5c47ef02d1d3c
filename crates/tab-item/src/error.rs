use thiserror::Error;

use crate::metrics::ContentConfiguration;

/// Rejected item geometry
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricsError {
    #[error("minimum width {min} exceeds maximum width {max}")]
    InvertedWidthRange { min: f32, max: f32 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    NegativeValue { field: &'static str, value: f32 },

    #[error(
        "{configuration:?} insets ({horizontal} horizontal) leave no room under the maximum width {max_width}"
    )]
    InsetsExceedMaxWidth {
        configuration: ContentConfiguration,
        horizontal: f32,
        max_width: f32,
    },
}
