//! Intrinsic content measurement for layout resolution.
//!
//! The item view never shapes text itself. It asks a [`ContentMeasurer`] for the size
//! of its title, which keeps this crate independent of any text engine. Backends like
//! `tab-item-text` implement the trait.

use glam::Vec2;

/// Request to measure the size of a piece of text, optionally wrapped.
#[derive(Debug, Clone)]
pub struct MeasureTextRequest<'a> {
    pub text: &'a str,
    pub font_size: f32,
    /// Optional font family name (backend-defined meaning)
    pub family: Option<&'a str>,
    /// Maximum width constraint for wrapping (None = single unwrapped line)
    pub max_width: Option<f32>,
    /// Maximum number of lines kept after wrapping (None = unlimited)
    pub max_lines: Option<usize>,
}

impl<'a> MeasureTextRequest<'a> {
    /// Unwrapped text at the given font size
    pub fn new(text: &'a str, font_size: f32) -> Self {
        Self {
            text,
            font_size,
            family: None,
            max_width: None,
            max_lines: None,
        }
    }

    pub fn with_family(mut self, family: Option<&'a str>) -> Self {
        self.family = family;
        self
    }

    pub fn with_max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = Some(max_lines);
        self
    }
}

/// Measured size of a piece of content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntrinsicSize {
    pub width: f32,
    pub height: f32,
}

impl IntrinsicSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub const fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Componentwise minimum
    pub fn min(self, other: Self) -> Self {
        Vec2::from(self).min(Vec2::from(other)).into()
    }
}

impl From<IntrinsicSize> for Vec2 {
    fn from(size: IntrinsicSize) -> Self {
        Vec2::new(size.width, size.height)
    }
}

impl From<Vec2> for IntrinsicSize {
    fn from(v: Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Backend-agnostic content measurement.
///
/// Implementors provide size information for text. Measuring must be deterministic:
/// the same request always yields the same size, so layout stays idempotent.
pub trait ContentMeasurer {
    /// Measure the bounding box of the shaped text.
    ///
    /// When `max_width` is set the text wraps at that width and keeps at most `max_lines`
    /// lines. The result excludes any insets (those are handled by layout).
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize;
}
