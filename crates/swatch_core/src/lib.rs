//! Swatch Core Primitives
//!
//! This crate provides the value types that resolved theme styles are made of:
//!
//! - **Color**: RGBA color with strict hex parsing and HSB brightness transforms
//! - **Geometry**: `Point`, `Size` and `EdgeInsets`
//!
//! # Example
//!
//! ```rust
//! use swatch_core::Color;
//!
//! let red = Color::from_hex_str("#FF0000");
//! assert_eq!(red, Color::RED);
//!
//! let dimmed = red.darker(0.25);
//! assert!((dimmed.to_hsb().brightness - 0.75).abs() < 1e-6);
//! ```

pub mod color;
pub mod error;
pub mod geometry;

pub use color::{Color, Hsb};
pub use error::ColorParseError;
pub use geometry::{EdgeInsets, Point, Size};
