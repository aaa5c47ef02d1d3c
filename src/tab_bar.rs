//! A row of tab items, used to show how a host consumes item sizes and content frames.

use tab_item::{ContentMeasurer, IntrinsicSize, ItemView, Rect};

/// Height of the selection indicator drawn under the selected item's content
pub const INDICATOR_HEIGHT: f32 = 2.0;

/// Items laid out left to right at their intrinsic widths, sharing the tallest height.
pub struct TabBar {
    pub items: Vec<ItemView>,
    /// Frame of every item in bar space, filled by `layout`
    pub item_frames: Vec<Rect>,
    pub selected: usize,
}

impl TabBar {
    pub fn new(items: Vec<ItemView>) -> Self {
        Self {
            items,
            item_frames: Vec::new(),
            selected: 0,
        }
    }

    /// Size every item, place them in a row and lay out their children.
    ///
    /// Returns the size of the whole bar.
    pub fn layout(&mut self, measurer: &mut dyn ContentMeasurer) -> IntrinsicSize {
        let sizes: Vec<IntrinsicSize> = self
            .items
            .iter()
            .map(|item| item.intrinsic_content_size(measurer))
            .collect();
        let height = sizes.iter().map(|size| size.height).fold(0.0f32, f32::max);

        self.item_frames.clear();
        let mut x = 0.0;
        for (item, size) in self.items.iter_mut().zip(&sizes) {
            let size = IntrinsicSize::new(size.width, height);
            item.set_bounds(size);
            item.layout_subviews(measurer);
            self.item_frames.push(Rect::from_min_size([x, 0.0], size));
            x += size.width;
        }

        IntrinsicSize::new(x, height)
    }

    /// Indicator under the selected item, aligned with its content frame
    pub fn indicator_rect(&self) -> Option<Rect> {
        let item = self.items.get(self.selected)?;
        let frame = self.item_frames.get(self.selected)?;
        let content = item.content_frame().translate(frame.min);
        Some(Rect::new(
            [content.min[0], frame.max[1] - INDICATOR_HEIGHT],
            [content.max[0], frame.max[1]],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tab_item::testing::FixedAdvanceMeasurer;
    use tab_item::IconImage;

    #[test]
    fn test_items_share_tallest_height() {
        let mut measurer = FixedAdvanceMeasurer::new(8.0, 20.0);
        let mut bar = TabBar::new(vec![
            ItemView::new().with_title("Home"),
            ItemView::new()
                .with_title("Home")
                .with_icon(IconImage::new("home", 24.0, 24.0)),
        ]);

        let size = bar.layout(&mut measurer);

        assert_eq!(size, IntrinsicSize::new(180.0, 72.0));
        assert_eq!(bar.item_frames[1], Rect::new([90.0, 0.0], [180.0, 72.0]));
        assert_eq!(bar.items[0].bounds().size(), IntrinsicSize::new(90.0, 72.0));
    }

    #[test]
    fn test_indicator_follows_content_frame() {
        let mut measurer = FixedAdvanceMeasurer::new(8.0, 20.0);
        let mut bar = TabBar::new(vec![
            ItemView::new().with_title("Home"),
            ItemView::new().with_title("Library"),
        ]);
        bar.layout(&mut measurer);
        bar.selected = 1;

        // Second item starts at 90, content inset by 16 on both sides
        assert_eq!(
            bar.indicator_rect(),
            Some(Rect::new([106.0, 46.0], [164.0, 48.0]))
        );
    }

    #[test]
    fn test_indicator_without_layout() {
        let bar = TabBar::new(vec![ItemView::new()]);
        assert_eq!(bar.indicator_rect(), None);
    }
}
