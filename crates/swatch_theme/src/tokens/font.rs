//! Font tokens
//!
//! A font entry is a mapping with any of `name` (an exact face name), `family`
//! (a generic family), `size`, and `weight`. `name` wins over `family`; with
//! neither, the platform system font is used.

use crate::cache::CacheKey;
use crate::theme::Theme;
use crate::value::Map;
use std::sync::Arc;

/// Size used when an entry has no usable size (missing, or below one point)
pub const DEFAULT_FONT_SIZE: f32 = 15.0;

/// Named font weights
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    pub const ALL: [FontWeight; 9] = [
        FontWeight::UltraLight,
        FontWeight::Thin,
        FontWeight::Light,
        FontWeight::Regular,
        FontWeight::Medium,
        FontWeight::Semibold,
        FontWeight::Bold,
        FontWeight::Heavy,
        FontWeight::Black,
    ];

    /// Match a weight keyword, ignoring case
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|weight| weight.keyword().eq_ignore_ascii_case(keyword))
    }

    pub fn keyword(self) -> &'static str {
        match self {
            FontWeight::UltraLight => "ultraLight",
            FontWeight::Thin => "thin",
            FontWeight::Light => "light",
            FontWeight::Regular => "regular",
            FontWeight::Medium => "medium",
            FontWeight::Semibold => "semibold",
            FontWeight::Bold => "bold",
            FontWeight::Heavy => "heavy",
            FontWeight::Black => "black",
        }
    }

    /// Numeric weight on the 100-900 scale
    pub fn css_weight(self) -> u16 {
        match self {
            FontWeight::UltraLight => 100,
            FontWeight::Thin => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }
}

/// Which face a resolved font refers to
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontSource {
    /// An exact face name, e.g. `"Avenir-Heavy"`
    Named(String),
    /// A generic family such as `"Avenir"`, refined by weight
    Family(String),
    /// The platform system font
    System,
}

/// A resolved font
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    pub source: FontSource,
    /// Point size, always at least one
    pub size: f32,
    /// Requested weight, if any. Named faces carry their own weight.
    pub weight: Option<FontWeight>,
}

impl Font {
    pub fn system(size: f32) -> Self {
        Self {
            source: FontSource::System,
            size,
            weight: None,
        }
    }

    pub fn is_system(&self) -> bool {
        self.source == FontSource::System
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(DEFAULT_FONT_SIZE)
    }
}

/// Change applied to a font's size as it is resolved
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeAdjustment {
    /// Points added to the size
    Absolute(f32),
    /// Percentage of the size added to it; `10.0` grows a font by a tenth
    Proportional(f32),
}

impl SizeAdjustment {
    pub const NONE: SizeAdjustment = SizeAdjustment::Absolute(0.0);

    pub fn apply(self, size: f32) -> f32 {
        match self {
            SizeAdjustment::Absolute(points) => size + points,
            SizeAdjustment::Proportional(percent) => size + size * percent / 100.0,
        }
    }
}

impl Default for SizeAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl Theme {
    /// Font at `key`, unadjusted. Cached.
    pub fn font(&self, key: &str) -> Arc<Font> {
        self.font_with_adjustment(key, SizeAdjustment::NONE)
    }

    /// Font at `key` with its size adjusted. Each distinct adjustment is cached
    /// separately.
    pub fn font_with_adjustment(&self, key: &str, adjustment: SizeAdjustment) -> Arc<Font> {
        self.caches()
            .fonts
            .get_or_insert_with(CacheKey::with_adjustment(key, adjustment), || {
                let dictionary = self.dictionary(key);
                self.font_from_dictionary(dictionary.as_ref(), adjustment)
            })
    }

    /// Font described by a font mapping. Always produces a font.
    pub fn font_from_dictionary(&self, dictionary: Option<&Map>, adjustment: SizeAdjustment) -> Font {
        let field = |name: &str| dictionary.and_then(|d| d.get(name));

        let mut size = adjustment.apply(self.float_from_value(field("size")));
        if size < 1.0 {
            size = DEFAULT_FONT_SIZE;
        }

        let weight = self
            .string_from_value(field("weight"))
            .and_then(|keyword| {
                let weight = FontWeight::from_keyword(&keyword);
                if weight.is_none() {
                    tracing::trace!(theme = %self.name(), keyword, "unrecognized font weight");
                }
                weight
            });

        if let Some(name) = self.string_from_value(field("name")) {
            // An empty name explicitly asks for the system font.
            let source = if name.is_empty() {
                FontSource::System
            } else {
                FontSource::Named(name)
            };
            let weight = if source == FontSource::System { weight } else { None };
            return Font { source, size, weight };
        }

        match self.string_from_value(field("family")) {
            Some(family) if !family.is_empty() => Font {
                source: FontSource::Family(family),
                size,
                weight,
            },
            _ => Font {
                source: FontSource::System,
                size,
                weight,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_adjustment_is_a_percentage() {
        assert_eq!(SizeAdjustment::Proportional(50.0).apply(12.0), 18.0);
        assert_eq!(SizeAdjustment::Absolute(-2.0).apply(12.0), 10.0);
    }

    #[test]
    fn weights_match_loosely() {
        assert_eq!(FontWeight::from_keyword("SemiBold"), Some(FontWeight::Semibold));
        assert_eq!(FontWeight::from_keyword("ultralight"), Some(FontWeight::UltraLight));
        assert_eq!(FontWeight::from_keyword("book"), None);
        assert_eq!(FontWeight::Bold.css_weight(), 700);
    }
}
