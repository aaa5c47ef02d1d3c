//! Item geometry: size limits, insets and the content configuration they are keyed by.

use crate::error::MetricsError;
use crate::layout::Spacing;

pub const MIN_WIDTH: f32 = 90.0;
pub const MAX_WIDTH: f32 = 360.0;
/// Minimum height when only a title or only an icon is shown
pub const MIN_HEIGHT_SINGLE_CONTENT: f32 = 48.0;
pub const MIN_HEIGHT_TEXT_AND_IMAGE: f32 = 72.0;
/// Vertical gap between the icon and the title
pub const IMAGE_TITLE_PADDING: f32 = 3.0;

pub const TEXT_AND_IMAGE_INSETS: Spacing = Spacing::trbl(12.0, 16.0, 12.0, 16.0);
pub const TEXT_ONLY_INSETS: Spacing = Spacing::trbl(8.0, 16.0, 8.0, 16.0);
pub const IMAGE_ONLY_INSETS: Spacing = Spacing::trbl(12.0, 16.0, 12.0, 16.0);

/// Which of title and icon an item currently shows
///
/// Derived on every layout and measure pass, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentConfiguration {
    None,
    TextOnly,
    ImageOnly,
    TextAndImage,
}

impl ContentConfiguration {
    pub const ALL: [ContentConfiguration; 4] = [
        ContentConfiguration::None,
        ContentConfiguration::TextOnly,
        ContentConfiguration::ImageOnly,
        ContentConfiguration::TextAndImage,
    ];

    pub const fn from_content(has_title: bool, has_icon: bool) -> Self {
        match (has_title, has_icon) {
            (false, false) => ContentConfiguration::None,
            (true, false) => ContentConfiguration::TextOnly,
            (false, true) => ContentConfiguration::ImageOnly,
            (true, true) => ContentConfiguration::TextAndImage,
        }
    }
}

/// Tunable item geometry
///
/// `Default` yields the standard tab item values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height_single_content: f32,
    pub min_height_text_and_image: f32,
    pub image_title_padding: f32,
    pub text_and_image_insets: Spacing,
    pub text_only_insets: Spacing,
    pub image_only_insets: Spacing,
}

impl Default for ItemMetrics {
    fn default() -> Self {
        Self {
            min_width: MIN_WIDTH,
            max_width: MAX_WIDTH,
            min_height_single_content: MIN_HEIGHT_SINGLE_CONTENT,
            min_height_text_and_image: MIN_HEIGHT_TEXT_AND_IMAGE,
            image_title_padding: IMAGE_TITLE_PADDING,
            text_and_image_insets: TEXT_AND_IMAGE_INSETS,
            text_only_insets: TEXT_ONLY_INSETS,
            image_only_insets: IMAGE_ONLY_INSETS,
        }
    }
}

impl ItemMetrics {
    pub fn with_width_range(mut self, min_width: f32, max_width: f32) -> Self {
        self.min_width = min_width;
        self.max_width = max_width;
        self
    }

    pub fn with_min_heights(mut self, single_content: f32, text_and_image: f32) -> Self {
        self.min_height_single_content = single_content;
        self.min_height_text_and_image = text_and_image;
        self
    }

    pub fn with_image_title_padding(mut self, padding: f32) -> Self {
        self.image_title_padding = padding;
        self
    }

    pub fn with_text_and_image_insets(mut self, insets: Spacing) -> Self {
        self.text_and_image_insets = insets;
        self
    }

    pub fn with_text_only_insets(mut self, insets: Spacing) -> Self {
        self.text_only_insets = insets;
        self
    }

    pub fn with_image_only_insets(mut self, insets: Spacing) -> Self {
        self.image_only_insets = insets;
        self
    }

    /// Edge insets between the item bounds and its content view.
    ///
    /// `None` has no content view placement; it reports zero insets.
    pub fn insets_for(&self, configuration: ContentConfiguration) -> Spacing {
        match configuration {
            ContentConfiguration::None => Spacing::zero(),
            ContentConfiguration::TextOnly => self.text_only_insets,
            ContentConfiguration::ImageOnly => self.image_only_insets,
            ContentConfiguration::TextAndImage => self.text_and_image_insets,
        }
    }

    pub fn min_height_for(&self, configuration: ContentConfiguration) -> f32 {
        match configuration {
            ContentConfiguration::TextAndImage => self.min_height_text_and_image,
            _ => self.min_height_single_content,
        }
    }

    /// Clamp a width into the allowed range
    pub fn clamp_width(&self, width: f32) -> f32 {
        width.max(self.min_width).min(self.max_width)
    }

    pub fn validate(&self) -> Result<(), MetricsError> {
        let scalars = [
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("min_height_single_content", self.min_height_single_content),
            ("min_height_text_and_image", self.min_height_text_and_image),
            ("image_title_padding", self.image_title_padding),
        ];
        let insets = [
            ("text_and_image_insets", self.text_and_image_insets),
            ("text_only_insets", self.text_only_insets),
            ("image_only_insets", self.image_only_insets),
        ];
        let values = scalars.into_iter().chain(
            insets
                .into_iter()
                .flat_map(|(field, insets)| insets.edges().map(|edge| (field, edge))),
        );

        for (field, value) in values {
            if !value.is_finite() {
                return Err(MetricsError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(MetricsError::NegativeValue { field, value });
            }
        }

        if self.min_width > self.max_width {
            return Err(MetricsError::InvertedWidthRange {
                min: self.min_width,
                max: self.max_width,
            });
        }

        for configuration in ContentConfiguration::ALL {
            let horizontal = self.insets_for(configuration).get_horizontal();
            if configuration != ContentConfiguration::None && horizontal >= self.max_width {
                return Err(MetricsError::InsetsExceedMaxWidth {
                    configuration,
                    horizontal,
                    max_width: self.max_width,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_are_valid() {
        assert_eq!(ItemMetrics::default().validate(), Ok(()));
    }

    #[test]
    fn test_configuration_from_content() {
        assert_eq!(
            ContentConfiguration::from_content(false, false),
            ContentConfiguration::None
        );
        assert_eq!(
            ContentConfiguration::from_content(true, false),
            ContentConfiguration::TextOnly
        );
        assert_eq!(
            ContentConfiguration::from_content(false, true),
            ContentConfiguration::ImageOnly
        );
        assert_eq!(
            ContentConfiguration::from_content(true, true),
            ContentConfiguration::TextAndImage
        );
    }

    #[test]
    fn test_lookup_tables() {
        let metrics = ItemMetrics::default();

        assert_eq!(
            metrics.insets_for(ContentConfiguration::TextOnly),
            Spacing::trbl(8.0, 16.0, 8.0, 16.0)
        );
        assert_eq!(metrics.min_height_for(ContentConfiguration::None), 48.0);
        assert_eq!(metrics.min_height_for(ContentConfiguration::ImageOnly), 48.0);
        assert_eq!(
            metrics.min_height_for(ContentConfiguration::TextAndImage),
            72.0
        );
    }

    #[test]
    fn test_clamp_width() {
        let metrics = ItemMetrics::default();
        assert_eq!(metrics.clamp_width(10.0), 90.0);
        assert_eq!(metrics.clamp_width(120.0), 120.0);
        assert_eq!(metrics.clamp_width(1000.0), 360.0);
    }

    #[test]
    fn test_inverted_width_range_rejected() {
        let metrics = ItemMetrics::default().with_width_range(200.0, 100.0);
        assert_eq!(
            metrics.validate(),
            Err(MetricsError::InvertedWidthRange {
                min: 200.0,
                max: 100.0
            })
        );
    }

    #[test]
    fn test_negative_inset_rejected() {
        let metrics =
            ItemMetrics::default().with_text_only_insets(Spacing::trbl(8.0, -1.0, 8.0, 16.0));
        assert_eq!(
            metrics.validate(),
            Err(MetricsError::NegativeValue {
                field: "text_only_insets",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_nan_width_rejected() {
        let metrics = ItemMetrics::default().with_width_range(f32::NAN, 360.0);
        assert!(matches!(
            metrics.validate(),
            Err(MetricsError::NonFinite {
                field: "min_width",
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_inset_rejected() {
        let metrics = ItemMetrics::default()
            .with_image_only_insets(Spacing::trbl(12.0, 16.0, f32::NAN, 16.0));
        assert!(matches!(
            metrics.validate(),
            Err(MetricsError::NonFinite {
                field: "image_only_insets",
                ..
            })
        ));

        let metrics = ItemMetrics::default().with_image_title_padding(f32::INFINITY);
        assert_eq!(
            metrics.validate(),
            Err(MetricsError::NonFinite {
                field: "image_title_padding",
                value: f32::INFINITY
            })
        );
    }

    #[test]
    fn test_oversized_insets_rejected() {
        let metrics = ItemMetrics::default().with_width_range(20.0, 30.0);
        // 16 + 16 >= 30, reported for the first configuration with insets
        assert!(matches!(
            metrics.validate(),
            Err(MetricsError::InsetsExceedMaxWidth {
                configuration: ContentConfiguration::TextOnly,
                ..
            })
        ));
    }
}
