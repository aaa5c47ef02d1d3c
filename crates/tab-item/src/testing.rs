//! Deterministic measurer for tests.
//!
//! Every character advances by the same amount and every line has the same height, so
//! expected sizes can be computed by hand.

use crate::measure::{ContentMeasurer, IntrinsicSize, MeasureTextRequest};

#[derive(Debug, Clone, Copy)]
pub struct FixedAdvanceMeasurer {
    /// Width of every character, spaces included
    pub advance: f32,
    pub line_height: f32,
}

impl FixedAdvanceMeasurer {
    pub const fn new(advance: f32, line_height: f32) -> Self {
        Self {
            advance,
            line_height,
        }
    }

    /// Widths of the lines produced by greedy word wrapping at `max_width`.
    ///
    /// Words wider than `max_width` are broken between characters.
    fn wrap(&self, text: &str, max_width: f32) -> Vec<f32> {
        let per_line = ((max_width / self.advance).floor() as usize).max(1);
        let mut lines = Vec::new();
        let mut current: Option<f32> = None;

        for word in text.split_whitespace() {
            let chars = word.chars().count();
            let word_width = chars as f32 * self.advance;

            if let Some(width) = current {
                let joined = width + self.advance + word_width;
                if joined <= max_width {
                    current = Some(joined);
                    continue;
                }
                lines.push(width);
                current = None;
            }

            if word_width <= max_width {
                current = Some(word_width);
                continue;
            }

            let full_lines = chars / per_line;
            let remainder = chars % per_line;
            let pushed = if remainder == 0 {
                full_lines - 1
            } else {
                full_lines
            };
            lines.extend(std::iter::repeat_n(per_line as f32 * self.advance, pushed));
            current = Some(if remainder == 0 {
                per_line as f32 * self.advance
            } else {
                remainder as f32 * self.advance
            });
        }

        lines.extend(current);
        lines
    }
}

impl Default for FixedAdvanceMeasurer {
    fn default() -> Self {
        Self::new(8.0, 20.0)
    }
}

impl ContentMeasurer for FixedAdvanceMeasurer {
    fn measure_text(&mut self, request: MeasureTextRequest<'_>) -> IntrinsicSize {
        if request.text.is_empty() {
            return IntrinsicSize::zero();
        }

        let mut lines = match request.max_width {
            Some(max_width) => self.wrap(request.text, max_width),
            None => vec![request.text.chars().count() as f32 * self.advance],
        };
        if let Some(max_lines) = request.max_lines {
            lines.truncate(max_lines);
        }

        let width = lines.iter().copied().fold(0.0f32, f32::max);
        IntrinsicSize::new(width, lines.len() as f32 * self.line_height)
    }
}
