/// Edge insets around content
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Spacing {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Spacing {
    /// Create spacing with all sides equal
    pub const fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create zero spacing
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Create spacing with symmetric horizontal and vertical values (CSS-style)
    ///
    /// ```
    /// # use tab_item::Spacing;
    /// let spacing = Spacing::symmetric(16.0, 8.0);
    /// assert_eq!(spacing.left, 16.0);
    /// assert_eq!(spacing.right, 16.0);
    /// assert_eq!(spacing.top, 8.0);
    /// assert_eq!(spacing.bottom, 8.0);
    /// ```
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create spacing from individual top, right, bottom, left values (CSS-style)
    ///
    /// ```
    /// # use tab_item::Spacing;
    /// let spacing = Spacing::trbl(12.0, 16.0, 12.0, 16.0);
    /// assert_eq!(spacing.top, 12.0);
    /// assert_eq!(spacing.right, 16.0);
    /// assert_eq!(spacing.bottom, 12.0);
    /// assert_eq!(spacing.left, 16.0);
    /// ```
    pub const fn trbl(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn get_vertical(&self) -> f32 {
        self.top + self.bottom
    }

    pub const fn get_horizontal(&self) -> f32 {
        self.right + self.left
    }

    /// Edges in top, right, bottom, left order
    pub const fn edges(&self) -> [f32; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}
