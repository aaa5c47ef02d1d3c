use crate::accessibility::AccessibilityElement;
use crate::measure::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};
use crate::primitives::Rect;

/// Default title font size in pixels
pub const TITLE_FONT_SIZE: f32 = 14.0;
/// Titles wrap to at most this many lines
pub const TITLE_MAX_LINES: usize = 2;

/// Title of a tab item
///
/// Text shaping is delegated to a [`ContentMeasurer`]; the label only decides what to ask.
#[derive(Debug, Clone)]
pub struct TitleLabel {
    pub text: Option<String>,
    /// Font size in pixels
    pub font_size: f32,
    pub max_lines: usize,
    /// Font family passed to the measurer (None = backend default)
    pub family: Option<String>,
    /// Frame relative to the item's content view
    pub frame: Rect,
    pub accessibility: AccessibilityElement,
}

impl TitleLabel {
    /// Centered, two-line label excluded from the accessibility tree
    pub fn new() -> Self {
        Self {
            text: None,
            font_size: TITLE_FONT_SIZE,
            max_lines: TITLE_MAX_LINES,
            family: None,
            frame: Rect::zero(),
            accessibility: AccessibilityElement::hidden(),
        }
    }

    pub fn with_font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.family = Some(family.into());
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    /// Non-empty text is present
    pub fn has_text(&self) -> bool {
        self.text.as_deref().is_some_and(|text| !text.is_empty())
    }

    /// Natural size of the title on a single line
    pub fn intrinsic_size(&self, measurer: &mut dyn ContentMeasurer) -> IntrinsicSize {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => {
                measurer.measure_text(self.request(text).with_max_lines(1))
            }
            _ => IntrinsicSize::zero(),
        }
    }

    /// Size needed to show the title wrapped at `proposed.width`, up to `max_lines` lines.
    ///
    /// The proposed height does not truncate the result.
    pub fn size_that_fits(
        &self,
        measurer: &mut dyn ContentMeasurer,
        proposed: IntrinsicSize,
    ) -> IntrinsicSize {
        match self.text.as_deref() {
            Some(text) if !text.is_empty() => measurer.measure_text(
                self.request(text)
                    .with_max_width(proposed.width)
                    .with_max_lines(self.max_lines),
            ),
            _ => IntrinsicSize::zero(),
        }
    }

    fn request<'a>(&'a self, text: &'a str) -> MeasureTextRequest<'a> {
        MeasureTextRequest::new(text, self.font_size).with_family(self.family.as_deref())
    }
}

impl Default for TitleLabel {
    fn default() -> Self {
        Self::new()
    }
}
