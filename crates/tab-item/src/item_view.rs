//! Tab bar item view: a title, an icon, both, or neither, laid out inside a bounded width.
//!
//! Layout and measurement both branch on [`ItemView::configuration`], so the frames placed
//! by [`ItemView::layout_subviews`] always agree with the size reported by
//! [`ItemView::size_that_fits`].

use crate::accessibility::AccessibilityElement;
use crate::content::IconImage;
use crate::error::MetricsError;
use crate::icon::IconView;
use crate::label::TitleLabel;
use crate::measure::{ContentMeasurer, IntrinsicSize};
use crate::metrics::{ContentConfiguration, ItemMetrics};
use crate::primitives::Rect;

/// Plain container holding the title and icon
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentView {
    /// Frame relative to the item's bounds
    pub frame: Rect,
}

/// A single tab bar item
#[derive(Debug, Clone)]
pub struct ItemView {
    metrics: ItemMetrics,
    bounds: Rect,
    content_view: ContentView,
    title_label: TitleLabel,
    icon_view: IconView,
    accessibility: AccessibilityElement,
    accessibility_label: Option<String>,
}

impl ItemView {
    /// Create an empty item with the standard geometry
    pub fn new() -> Self {
        Self::from_metrics(ItemMetrics::default())
    }

    /// Create an empty item with custom geometry
    pub fn with_metrics(metrics: ItemMetrics) -> Result<Self, MetricsError> {
        metrics.validate()?;
        Ok(Self::from_metrics(metrics))
    }

    fn from_metrics(metrics: ItemMetrics) -> Self {
        Self {
            metrics,
            bounds: Rect::zero(),
            content_view: ContentView::default(),
            title_label: TitleLabel::new(),
            icon_view: IconView::new(),
            accessibility: AccessibilityElement::element(),
            accessibility_label: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title_label.text = Some(title.into());
        self
    }

    /// Set the icon
    pub fn with_icon(mut self, icon: IconImage) -> Self {
        self.icon_view.image = Some(icon);
        self
    }

    pub fn metrics(&self) -> &ItemMetrics {
        &self.metrics
    }

    pub fn title(&self) -> Option<&str> {
        self.title_label.text.as_deref()
    }

    pub fn set_title(&mut self, title: Option<String>) {
        self.title_label.text = title;
    }

    pub fn icon(&self) -> Option<&IconImage> {
        self.icon_view.image.as_ref()
    }

    pub fn set_icon(&mut self, icon: Option<IconImage>) {
        self.icon_view.image = icon;
    }

    pub fn title_label(&self) -> &TitleLabel {
        &self.title_label
    }

    /// Label styling (font size, line limit) can be adjusted in place
    pub fn title_label_mut(&mut self) -> &mut TitleLabel {
        &mut self.title_label
    }

    pub fn icon_view(&self) -> &IconView {
        &self.icon_view
    }

    /// Frame of the content container, for host decorations such as a selection indicator
    pub fn content_frame(&self) -> Rect {
        self.content_view.frame
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Resize the item. Frames are only updated by the next layout pass.
    pub fn set_bounds(&mut self, size: IntrinsicSize) {
        self.bounds = Rect::from_size(size);
    }

    /// Title frame in the item's bounds space
    pub fn title_frame_in_bounds(&self) -> Rect {
        self.title_label.frame.translate(self.content_view.frame.min)
    }

    /// Icon frame in the item's bounds space
    pub fn icon_frame_in_bounds(&self) -> Rect {
        self.icon_view.frame.translate(self.content_view.frame.min)
    }

    pub fn accessibility(&self) -> AccessibilityElement {
        self.accessibility
    }

    /// Label read by assistive technology: the assigned label, else the title
    pub fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label.as_deref().or(self.title())
    }

    pub fn set_accessibility_label(&mut self, label: Option<String>) {
        self.accessibility_label = label;
    }

    /// Which content is currently shown
    pub fn configuration(&self) -> ContentConfiguration {
        ContentConfiguration::from_content(self.title_label.has_text(), self.icon_view.has_image())
    }

    /// Position the content view, title and icon within the current bounds.
    ///
    /// With neither title nor icon this leaves every frame untouched.
    pub fn layout_subviews(&mut self, measurer: &mut dyn ContentMeasurer) {
        let configuration = self.configuration();
        if configuration == ContentConfiguration::None {
            log::trace!("tab item layout skipped: no title or icon");
            return;
        }

        let content = self.bounds.inset(self.metrics.insets_for(configuration));
        self.content_view.frame = content;
        let available = content.size();

        match configuration {
            ContentConfiguration::None => {}
            ContentConfiguration::TextOnly => {
                let fitted = self.title_label.size_that_fits(measurer, available);
                let size =
                    IntrinsicSize::new(available.width, available.height.min(fitted.height));
                self.title_label.frame = content.local_center(size);
            }
            ContentConfiguration::ImageOnly => {
                let size = available.min(self.icon_view.intrinsic_size());
                self.icon_view.frame = content.local_center(size);
            }
            ContentConfiguration::TextAndImage => {
                let padding = self.metrics.image_title_padding;

                // Reserve one line of title below the icon
                let title_line = self.title_label.intrinsic_size(measurer);
                let icon_height = available.height - padding - title_line.height;
                let icon_size = self
                    .icon_view
                    .intrinsic_size()
                    .min(IntrinsicSize::new(available.width, icon_height));
                self.icon_view.frame = content.top_center(icon_size);

                let label_height = available.height - icon_size.height - padding;
                let label_size = self
                    .title_label
                    .size_that_fits(measurer, IntrinsicSize::new(available.width, label_height));
                self.title_label.frame = content.bottom_center(label_size);
            }
        }

        log::trace!(
            "tab item layout {:?}: content={:?} title={:?} icon={:?}",
            configuration,
            self.content_view.frame,
            self.title_label.frame,
            self.icon_view.frame
        );
    }

    /// Smallest size that shows the current content within the item's width range.
    ///
    /// `_proposed` is not used: text is always measured against the maximum item width.
    pub fn size_that_fits(
        &self,
        measurer: &mut dyn ContentMeasurer,
        _proposed: IntrinsicSize,
    ) -> IntrinsicSize {
        let metrics = &self.metrics;
        let configuration = self.configuration();
        let insets = metrics.insets_for(configuration);
        let min_height = metrics.min_height_for(configuration);
        let unbounded = IntrinsicSize::new(metrics.max_width - insets.get_horizontal(), f32::MAX);

        match configuration {
            ContentConfiguration::None => IntrinsicSize::new(metrics.min_width, min_height),
            ContentConfiguration::TextOnly => {
                let label = self.title_label.size_that_fits(measurer, unbounded);
                IntrinsicSize::new(
                    metrics.clamp_width(label.width + insets.get_horizontal()),
                    min_height.max(label.height + insets.get_vertical()),
                )
            }
            ContentConfiguration::ImageOnly => {
                let image = self.icon_view.intrinsic_size();
                IntrinsicSize::new(
                    metrics.clamp_width(image.width + insets.get_horizontal()),
                    min_height.max(image.height + insets.get_vertical()),
                )
            }
            ContentConfiguration::TextAndImage => {
                let label = self.title_label.size_that_fits(measurer, unbounded);
                let image = self.icon_view.intrinsic_size();
                let width = insets.left + image.width.max(label.width) + insets.right;
                let height = insets.top
                    + image.height
                    + metrics.image_title_padding
                    + label.height
                    + insets.bottom;
                IntrinsicSize::new(metrics.clamp_width(width), min_height.max(height))
            }
        }
    }

    /// Natural size, capped at the maximum item width
    pub fn intrinsic_content_size(&self, measurer: &mut dyn ContentMeasurer) -> IntrinsicSize {
        self.size_that_fits(
            measurer,
            IntrinsicSize::new(self.metrics.max_width, f32::MAX),
        )
    }
}

impl Default for ItemView {
    fn default() -> Self {
        Self::new()
    }
}
