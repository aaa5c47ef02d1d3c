//! # tab-item
//!
//! Layout and intrinsic sizing for a single tab bar item.
//!
//! An item shows a title, an icon, both, or neither, and sizes itself between a minimum and
//! maximum width. This crate has no dependency on a text engine or renderer: text is measured
//! through [`ContentMeasurer`], implemented by backends like `tab-item-text`.

mod accessibility;
mod content;
mod error;
mod icon;
mod item_view;
mod label;
mod layout;
mod measure;
mod metrics;
mod primitives;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use accessibility::*;
pub use content::*;
pub use error::*;
pub use icon::*;
pub use item_view::*;
pub use label::*;
pub use layout::*;
pub use measure::*;
pub use metrics::*;
pub use primitives::*;
