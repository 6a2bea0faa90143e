//! Color accessors
//!
//! A color entry is either a mapping:
//!
//! ```toml
//! [button.background]
//! hex = "#1E66F5"   # 6 hex digits, `#` optional
//! alpha = 0.8       # optional, 0-1
//! darker = 0.1      # optional brightness shift; wins over `lighter`
//! ```
//!
//! or a string naming another color entry or a standard color
//! (`"standardColors.systemBlue"`).

use crate::cache::CacheKey;
use crate::theme::Theme;
use crate::tokens::standard::{standard_color_for_path, STANDARD_COLORS_PREFIX};
use crate::value::{Map, Value};
use swatch_core::Color;

impl Theme {
    /// Color at `key`; opaque black when absent. Cached.
    ///
    /// # Panics
    ///
    /// Panics when the entry carries a malformed `hex` string.
    pub fn color(&self, key: &str) -> Color {
        *self
            .caches()
            .colors
            .get_or_insert_with(CacheKey::new(key), || {
                self.color_from_value(self.object(key).as_ref())
            })
    }

    /// Color for a raw value; opaque black when it does not describe one
    pub fn color_from_value(&self, value: Option<&Value>) -> Color {
        self.optional_color_from_value(value).unwrap_or(Color::BLACK)
    }

    /// Color for a raw value, or `None` when it does not describe one.
    ///
    /// Used for optional specifier fields, where an absent color means "leave
    /// the widget's color alone" rather than black.
    pub fn optional_color_from_value(&self, value: Option<&Value>) -> Option<Color> {
        self.optional_color_at_depth(value?, 0)
    }

    fn optional_color_at_depth(&self, value: &Value, depth: usize) -> Option<Color> {
        match value {
            Value::Map(map) => Some(self.color_from_dictionary(Some(map))),
            Value::String(path) => {
                if let Some(color) = standard_color_for_path(path) {
                    return Some(color);
                }
                if path.starts_with(STANDARD_COLORS_PREFIX) {
                    tracing::trace!(theme = %self.name(), path, "not a standard color, resolving as key path");
                }
                if !self.may_follow(path, depth) {
                    return None;
                }
                let target = self.object(path)?;
                self.optional_color_at_depth(&target, depth + 1)
            }
            _ => None,
        }
    }

    /// Color described by a `hex`/`alpha`/`darker`/`lighter` mapping.
    ///
    /// Without `hex`, an `alpha` of exactly `0` gives a clear color and
    /// anything else opaque black.
    pub fn color_from_dictionary(&self, dictionary: Option<&Map>) -> Color {
        let Some(dictionary) = dictionary else {
            return Color::BLACK;
        };

        let alpha = dictionary.get("alpha");
        let base = match self.string_from_value(dictionary.get("hex")) {
            Some(hex) => {
                let color = Color::from_hex_str(&hex);
                match alpha {
                    Some(alpha) => color.with_alpha(self.float_from_value(Some(alpha))),
                    None => color,
                }
            }
            None => match alpha {
                Some(alpha) if self.float_from_value(Some(alpha)) == 0.0 => Color::TRANSPARENT,
                _ => Color::BLACK,
            },
        };

        if let Some(amount) = dictionary.get("darker") {
            base.darker(self.float_from_value(Some(amount)))
        } else if let Some(amount) = dictionary.get("lighter") {
            base.lighter(self.float_from_value(Some(amount)))
        } else {
            base
        }
    }
}
