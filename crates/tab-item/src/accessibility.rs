/// Accessibility traits of a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilityElement {
    /// The view is exposed to assistive technology as a single element
    pub is_element: bool,
    /// The view and its subtree are removed from the accessibility tree
    pub hidden: bool,
}

impl AccessibilityElement {
    /// A standalone accessibility element
    pub const fn element() -> Self {
        Self {
            is_element: true,
            hidden: false,
        }
    }

    /// Not visible to assistive technology
    pub const fn hidden() -> Self {
        Self {
            is_element: false,
            hidden: true,
        }
    }
}
