use glam::Vec2;

use crate::layout::Spacing;
use crate::measure::IntrinsicSize;

/// Axis-aligned rectangle defined by min and max corners
///
/// Frames are always expressed relative to the parent's bounds, with y growing down.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub min: [f32; 2],
    pub max: [f32; 2],
}

impl Rect {
    pub const fn new(min: [f32; 2], max: [f32; 2]) -> Self {
        Self { min, max }
    }

    pub const fn zero() -> Self {
        Self::new([0.0, 0.0], [0.0, 0.0])
    }

    pub fn from_min_size(min: [f32; 2], size: IntrinsicSize) -> Self {
        Self {
            min,
            max: [min[0] + size.width, min[1] + size.height],
        }
    }

    /// Rectangle at the origin with the given size (a view's bounds)
    pub fn from_size(size: IntrinsicSize) -> Self {
        Self::from_min_size([0.0, 0.0], size)
    }

    /// Rectangle of `size` whose center sits at `center`
    pub fn from_center_size(center: [f32; 2], size: IntrinsicSize) -> Self {
        let half = Vec2::from(size) * 0.5;
        let center = Vec2::from_array(center);
        Self {
            min: (center - half).to_array(),
            max: (center + half).to_array(),
        }
    }

    pub fn width(&self) -> f32 {
        self.max[0] - self.min[0]
    }

    pub fn height(&self) -> f32 {
        self.max[1] - self.min[1]
    }

    pub fn size(&self) -> IntrinsicSize {
        IntrinsicSize::new(self.width(), self.height())
    }

    /// Shrink the rectangle by the given edge insets.
    ///
    /// Insets larger than the rectangle produce a negative size; callers decide how to treat it.
    pub fn inset(&self, insets: Spacing) -> Self {
        Self {
            min: [self.min[0] + insets.left, self.min[1] + insets.top],
            max: [self.max[0] - insets.right, self.max[1] - insets.bottom],
        }
    }

    /// Move the rectangle by `(dx, dy)`
    pub fn translate(&self, offset: [f32; 2]) -> Self {
        Self {
            min: [self.min[0] + offset[0], self.min[1] + offset[1]],
            max: [self.max[0] + offset[0], self.max[1] + offset[1]],
        }
    }

    /// Place `size` horizontally centered and flush with this rect's top edge, in local space
    pub fn top_center(&self, size: IntrinsicSize) -> Self {
        let x = (self.width() - size.width) * 0.5;
        Self::from_min_size([x, 0.0], size)
    }

    /// Place `size` horizontally centered and flush with this rect's bottom edge, in local space
    pub fn bottom_center(&self, size: IntrinsicSize) -> Self {
        let x = (self.width() - size.width) * 0.5;
        let y = self.height() - size.height;
        Self::from_min_size([x, y], size)
    }

    /// Place `size` centered on both axes, in local space
    pub fn local_center(&self, size: IntrinsicSize) -> Self {
        Self::from_center_size([self.width() * 0.5, self.height() * 0.5], size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inset_shrinks_each_edge() {
        let bounds = Rect::from_size(IntrinsicSize::new(120.0, 72.0));
        let inner = bounds.inset(Spacing::trbl(12.0, 16.0, 12.0, 16.0));

        assert_eq!(inner.min, [16.0, 12.0]);
        assert_eq!(inner.max, [104.0, 60.0]);
        assert_eq!(inner.size(), IntrinsicSize::new(88.0, 48.0));
    }

    #[test]
    fn test_local_placement() {
        let frame = Rect::new([16.0, 12.0], [104.0, 60.0]);
        let icon = IntrinsicSize::new(24.0, 24.0);

        assert_eq!(frame.top_center(icon), Rect::new([32.0, 0.0], [56.0, 24.0]));
        assert_eq!(
            frame.bottom_center(icon),
            Rect::new([32.0, 24.0], [56.0, 48.0])
        );
        assert_eq!(
            frame.local_center(icon),
            Rect::new([32.0, 12.0], [56.0, 36.0])
        );
    }

    #[test]
    fn test_translate() {
        let rect = Rect::new([1.0, 2.0], [3.0, 4.0]).translate([10.0, 20.0]);
        assert_eq!(rect, Rect::new([11.0, 22.0], [13.0, 24.0]));
    }
}
