//! Typed style values resolved from a theme
//!
//! - Colors (hex, alpha, darker/lighter, standard colors)
//! - Fonts (name, family, weight, size adjustments)
//! - Geometry (points, sizes, edge insets)
//! - Enumerated styles (alignment, line breaks, bar styles, ...)

mod color;
mod font;
mod geometry;
mod standard;
mod styles;

pub use font::*;
pub use standard::*;
pub use styles::*;
