use crate::measure::IntrinsicSize;

/// Image shown by an item's icon view
///
/// Pixel data is owned by the renderer; layout only needs the name and natural size.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// Renderer-defined identifier (asset name, atlas key, ...)
    pub name: String,
    /// Natural size in points
    pub size: IntrinsicSize,
}

impl IconImage {
    pub fn new(name: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            name: name.into(),
            size: IntrinsicSize::new(width, height),
        }
    }
}

/// How an image is scaled inside its view's frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentMode {
    /// Scale uniformly to fit, preserving aspect ratio
    #[default]
    AspectFit,
    /// Stretch to fill the frame exactly
    ScaleToFill,
}
