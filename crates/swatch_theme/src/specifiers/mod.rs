//! Compound style records
//!
//! A specifier bundles typed values read from one mapping in the theme:
//!
//! - [`ViewSpecifier`]: size, position, per-state background, padding
//! - [`TextLabelSpecifier`]: fonts, paragraph style, colors, case transform
//! - [`NavigationBarSpecifier`]: bar colors and nested title/button labels
//! - [`DashedBorderSpecifier`]: stroke and dash geometry
//! - [`AnimationSpecifier`]: duration, delay, and curve
//!
//! Nested fields go through [`Theme::dictionary_from_value`](crate::Theme::dictionary_from_value),
//! so any of them may be a key path to a mapping defined elsewhere.

mod animation;
mod dashed_border;
mod label;
mod navigation_bar;
mod view;

pub use animation::AnimationSpecifier;
pub use dashed_border::DashedBorderSpecifier;
pub use label::{AttributeKey, AttributedText, ParagraphStyle, TextAttributes, TextLabelSpecifier};
pub use navigation_bar::NavigationBarSpecifier;
pub use view::ViewSpecifier;

/// Interaction state of a control
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub enum ControlState {
    #[default]
    Normal,
    Highlighted,
    Disabled,
}
