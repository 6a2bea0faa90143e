//! Enumerated style constants
//!
//! Each style is read from a string and matched case-insensitively against a
//! fixed vocabulary. An absent, empty, or unrecognized string gives the style's
//! default.

use crate::theme::Theme;
use crate::value::Value;
use swatch_animation::Easing;

/// A style constant spelled as a keyword in theme documents
pub trait StyleKeyword: Copy + Default {
    /// Match a lowercased keyword
    fn from_keyword(keyword: &str) -> Option<Self>;
}

macro_rules! keyword_style {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => [$($keyword:literal),+ $(,)?]
            ),+ $(,)?
        }
        default $default:ident
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }

        impl StyleKeyword for $name {
            fn from_keyword(keyword: &str) -> Option<Self> {
                match keyword {
                    $($($keyword)|+ => Some($name::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

keyword_style! {
    /// Horizontal alignment of text
    TextAlignment {
        Left => ["left"],
        Center => ["center"],
        Right => ["right"],
        Justified => ["justified"],
        Natural => ["natural"],
    }
    default Left
}

keyword_style! {
    /// How text that does not fit is wrapped or truncated
    LineBreakMode {
        WordWrap => ["wordwrap"],
        CharWrap => ["charwrap"],
        Clip => ["clip"],
        TruncateHead => ["truncatehead"],
        TruncateTail => ["truncatetail"],
        TruncateMiddle => ["truncatemiddle"],
    }
    default TruncateTail
}

keyword_style! {
    StatusBarStyle {
        Default => ["default"],
        LightContent => ["lightcontent"],
        DarkContent => ["darkcontent"],
    }
    default Default
}

keyword_style! {
    /// Scroll indicator color. `white` is the platform default.
    ScrollIndicatorStyle {
        Default => ["default", "white"],
        Black => ["black"],
    }
    default Default
}

keyword_style! {
    UserInterfaceStyle {
        Unspecified => ["unspecified"],
        Light => ["light"],
        Dark => ["dark"],
    }
    default Unspecified
}

keyword_style! {
    BlurEffectStyle {
        ExtraLight => ["extralight"],
        Light => ["light"],
        Dark => ["dark"],
        Regular => ["regular"],
        Prominent => ["prominent"],
    }
    default ExtraLight
}

keyword_style! {
    ActivityIndicatorStyle {
        WhiteLarge => ["whitelarge"],
        White => ["white"],
        Gray => ["gray"],
    }
    default Gray
}

keyword_style! {
    BarStyle {
        Default => ["default"],
        Black => ["black"],
    }
    default Default
}

keyword_style! {
    KeyboardAppearance {
        Default => ["default"],
        Dark => ["dark"],
        Light => ["light"],
    }
    default Default
}

keyword_style! {
    /// Case applied to label text before display
    TextCaseTransform {
        None => ["none"],
        Upper => ["uppercase"],
        Lower => ["lowercase"],
    }
    default None
}

impl TextCaseTransform {
    pub fn apply(self, text: &str) -> String {
        match self {
            TextCaseTransform::None => text.to_string(),
            TextCaseTransform::Upper => text.to_uppercase(),
            TextCaseTransform::Lower => text.to_lowercase(),
        }
    }
}

impl StyleKeyword for Easing {
    fn from_keyword(keyword: &str) -> Option<Self> {
        Easing::from_keyword(keyword)
    }
}

impl Theme {
    /// Style constant at `key`
    pub fn style<S: StyleKeyword>(&self, key: &str) -> S {
        self.style_from_value(self.object(key).as_ref())
    }

    /// Style constant for a raw value; strings may be key paths
    pub fn style_from_value<S: StyleKeyword>(&self, value: Option<&Value>) -> S {
        let Some(keyword) = self.string_from_value(value) else {
            return S::default();
        };
        if keyword.is_empty() {
            return S::default();
        }
        S::from_keyword(&keyword.to_ascii_lowercase()).unwrap_or_else(|| {
            tracing::trace!(
                theme = %self.name(),
                keyword,
                style = std::any::type_name::<S>(),
                "unrecognized style keyword, using default"
            );
            S::default()
        })
    }

    // ========== Named Accessors ==========

    pub fn text_alignment(&self, key: &str) -> TextAlignment {
        self.style(key)
    }

    pub fn line_break_mode(&self, key: &str) -> LineBreakMode {
        self.style(key)
    }

    pub fn status_bar_style(&self, key: &str) -> StatusBarStyle {
        self.style(key)
    }

    pub fn scroll_indicator_style(&self, key: &str) -> ScrollIndicatorStyle {
        self.style(key)
    }

    pub fn user_interface_style(&self, key: &str) -> UserInterfaceStyle {
        self.style(key)
    }

    pub fn blur_effect_style(&self, key: &str) -> BlurEffectStyle {
        self.style(key)
    }

    pub fn activity_indicator_style(&self, key: &str) -> ActivityIndicatorStyle {
        self.style(key)
    }

    pub fn bar_style(&self, key: &str) -> BarStyle {
        self.style(key)
    }

    pub fn keyboard_appearance(&self, key: &str) -> KeyboardAppearance {
        self.style(key)
    }

    pub fn text_case_transform(&self, key: &str) -> TextCaseTransform {
        self.style(key)
    }

    /// Animation curve at `key`; `easeInOut` when unrecognized
    pub fn animation_curve(&self, key: &str) -> Easing {
        self.style(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_lowercase_matched() {
        assert_eq!(LineBreakMode::from_keyword("wordwrap"), Some(LineBreakMode::WordWrap));
        assert_eq!(ScrollIndicatorStyle::from_keyword("white"), Some(ScrollIndicatorStyle::Default));
        assert_eq!(TextAlignment::from_keyword("middle"), None);
    }

    #[test]
    fn defaults_per_style() {
        assert_eq!(TextAlignment::default(), TextAlignment::Left);
        assert_eq!(LineBreakMode::default(), LineBreakMode::TruncateTail);
        assert_eq!(BlurEffectStyle::default(), BlurEffectStyle::ExtraLight);
        assert_eq!(ActivityIndicatorStyle::default(), ActivityIndicatorStyle::Gray);
    }

    #[test]
    fn case_transform() {
        assert_eq!(TextCaseTransform::Upper.apply("Title"), "TITLE");
        assert_eq!(TextCaseTransform::Lower.apply("Title"), "title");
        assert_eq!(TextCaseTransform::None.apply("Title"), "Title");
    }
}
