use crate::accessibility::AccessibilityElement;
use crate::content::{ContentMode, IconImage};
use crate::measure::IntrinsicSize;
use crate::primitives::Rect;

/// Icon of a tab item
#[derive(Debug, Clone)]
pub struct IconView {
    pub image: Option<IconImage>,
    pub content_mode: ContentMode,
    /// Frame relative to the item's content view
    pub frame: Rect,
    pub accessibility: AccessibilityElement,
}

impl IconView {
    /// Aspect-fit icon view excluded from the accessibility tree
    pub fn new() -> Self {
        Self {
            image: None,
            content_mode: ContentMode::AspectFit,
            frame: Rect::zero(),
            accessibility: AccessibilityElement::hidden(),
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    /// Natural size of the current image, zero without one
    pub fn intrinsic_size(&self) -> IntrinsicSize {
        self.image
            .as_ref()
            .map_or(IntrinsicSize::zero(), |image| image.size)
    }

    /// Where the image is drawn, in the icon view's local space
    pub fn image_rect(&self) -> Rect {
        let bounds = Rect::from_size(self.frame.size());
        let Some(image) = &self.image else {
            return bounds.local_center(IntrinsicSize::zero());
        };

        match self.content_mode {
            ContentMode::ScaleToFill => bounds,
            ContentMode::AspectFit => {
                if image.size.width <= 0.0 || image.size.height <= 0.0 {
                    return bounds.local_center(IntrinsicSize::zero());
                }
                let scale = (bounds.width() / image.size.width)
                    .min(bounds.height() / image.size.height)
                    .max(0.0);
                bounds.local_center(IntrinsicSize::new(
                    image.size.width * scale,
                    image.size.height * scale,
                ))
            }
        }
    }
}

impl Default for IconView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic_size_without_image_is_zero() {
        assert_eq!(IconView::new().intrinsic_size(), IntrinsicSize::zero());
    }

    #[test]
    fn test_aspect_fit_letterboxes_wide_image() {
        let view = IconView {
            image: Some(IconImage::new("wide", 48.0, 24.0)),
            frame: Rect::new([10.0, 0.0], [34.0, 24.0]),
            ..IconView::new()
        };

        assert_eq!(view.image_rect(), Rect::new([0.0, 6.0], [24.0, 18.0]));
    }

    #[test]
    fn test_scale_to_fill_covers_frame() {
        let view = IconView {
            image: Some(IconImage::new("wide", 48.0, 24.0)),
            content_mode: ContentMode::ScaleToFill,
            frame: Rect::new([10.0, 0.0], [34.0, 24.0]),
            ..IconView::new()
        };

        assert_eq!(view.image_rect(), Rect::new([0.0, 0.0], [24.0, 24.0]));
    }
}
