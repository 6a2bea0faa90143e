//! Swatch Theme Resolution
//!
//! Resolves typed styles out of nested, loosely-typed theme dictionaries.
//!
//! # Overview
//!
//! - **Key paths**: dotted keys (`"screen.title.color"`) walk nested mappings
//! - **Inheritance**: a theme falls back on its parent for keys it lacks
//! - **Indirection**: a string value may name another key path
//! - **Overrides**: an optional key path whose keys replace same-named keys of
//!   every resolved mapping
//! - **Typed accessors**: colors, fonts, geometry, and style constants
//! - **Specifiers**: view, label, navigation bar, dashed border, and animation
//!   bundles
//! - **Caching**: colors, fonts, and the view/label/navigation bar specifiers
//!   are memoized per theme
//!
//! Lookups never fail. Anything missing or of the wrong kind resolves to a
//! documented default, except a malformed color `hex` string, which panics.
//!
//! # Quick Start
//!
//! ```rust
//! use swatch_theme::{LoaderConfig, ThemeLoader};
//! use swatch_core::Color;
//!
//! let loader = ThemeLoader::from_toml_str(
//!     r#"
//!     [Default.button]
//!     color = { hex = "000000" }
//!     title = { font = { size = 17 }, textTransform = "uppercase" }
//!
//!     [Dark.button]
//!     color = { hex = "FFFFFF" }
//!     "#,
//!     LoaderConfig::default(),
//! )
//! .unwrap();
//!
//! let dark = loader.theme_named("Dark").unwrap();
//! assert_eq!(dark.color("button.color"), Color::WHITE);
//!
//! // Inherited from Default
//! let title = dark.text_label_specifier("button.title").unwrap();
//! assert_eq!(title.font.size, 17.0);
//! assert_eq!(title.transform("ok"), "OK");
//! ```

pub mod cache;
pub mod coerce;
pub mod error;
pub mod loader;
mod resolver;
pub mod specifiers;
pub mod theme;
pub mod tokens;
pub mod value;

pub use cache::{CacheCategory, CacheKey, CacheVariant, ResolutionCache};
pub use error::{Result, ThemeError};
pub use loader::{LoaderConfig, ThemeLoader, PARENT_THEME_KEY};
pub use specifiers::{
    AnimationSpecifier, AttributeKey, AttributedText, ControlState, DashedBorderSpecifier,
    NavigationBarSpecifier, ParagraphStyle, TextAttributes, TextLabelSpecifier, ViewSpecifier,
};
pub use theme::{Theme, DEFAULT_MAX_INDIRECTION_DEPTH};
pub use tokens::*;
pub use value::{Map, Value, KEY_PATH_SEPARATOR};

// Re-export the value types styles resolve to
pub use swatch_animation::Easing;
pub use swatch_core::{Color, EdgeInsets, Point, Size};
