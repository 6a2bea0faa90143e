//! Swatch Animation Curves
//!
//! Named timing curves that theme documents refer to by keyword
//! (`"easeInOut"`, `"easeIn"`, `"easeOut"`, `"linear"`). Curves are plain
//! values: running an animation is left to whatever consumes them.

pub mod easing;

pub use easing::Easing;
