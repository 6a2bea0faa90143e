use super::label::{AttributeKey, TextAttributes, TextLabelSpecifier};
use crate::cache::CacheKey;
use crate::theme::Theme;
use crate::tokens::{BarStyle, SizeAdjustment};
use crate::value::Map;
use std::sync::Arc;
use swatch_core::Color;

/// Colors, style, and label styling of a navigation bar
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavigationBarSpecifier {
    /// `false` unless the entry sets `translucency`
    pub translucent: bool,
    pub bar_style: BarStyle,
    pub popover_background_color: Option<Color>,
    pub bar_color: Option<Color>,
    pub tint_color: Option<Color>,
    pub title_label: Option<TextLabelSpecifier>,
    pub buttons_label: Option<TextLabelSpecifier>,
}

impl NavigationBarSpecifier {
    /// Font and foreground color for the bar title
    pub fn title_attributes(&self) -> Option<TextAttributes> {
        Self::bar_attributes(self.title_label.as_ref())
    }

    /// Font and foreground color for bar buttons
    pub fn button_attributes(&self) -> Option<TextAttributes> {
        Self::bar_attributes(self.buttons_label.as_ref())
    }

    fn bar_attributes(label: Option<&TextLabelSpecifier>) -> Option<TextAttributes> {
        label.map(|label| label.attributes(&[AttributeKey::Font, AttributeKey::ForegroundColor]))
    }
}

impl Theme {
    /// Navigation bar specifier at `key`, or `None` when no mapping is found.
    /// Cached.
    pub fn navigation_bar_specifier(&self, key: &str) -> Option<Arc<NavigationBarSpecifier>> {
        self.navigation_bar_specifier_with_adjustment(key, SizeAdjustment::NONE)
    }

    /// Like [`navigation_bar_specifier`](Self::navigation_bar_specifier), with
    /// the label fonts adjusted. Each adjustment is cached separately.
    pub fn navigation_bar_specifier_with_adjustment(
        &self,
        key: &str,
        adjustment: SizeAdjustment,
    ) -> Option<Arc<NavigationBarSpecifier>> {
        self.caches().navigation_bar_specifiers.get_or_try_insert_with(
            CacheKey::with_adjustment(key, adjustment),
            || {
                self.navigation_bar_specifier_from_dictionary(
                    self.dictionary(key).as_ref(),
                    adjustment,
                )
            },
        )
    }

    pub fn navigation_bar_specifier_from_dictionary(
        &self,
        dictionary: Option<&Map>,
        adjustment: SizeAdjustment,
    ) -> Option<NavigationBarSpecifier> {
        let dictionary = dictionary?;
        let label = |name: &str| {
            let nested = self.dictionary_from_value(dictionary.get(name));
            self.text_label_specifier_from_dictionary(nested.as_ref(), adjustment)
        };

        Some(NavigationBarSpecifier {
            translucent: self.bool_from_value(dictionary.get("translucency")),
            bar_style: self.style_from_value(dictionary.get("barStyle")),
            popover_background_color: self
                .optional_color_from_value(dictionary.get("popoverBackgroundColor")),
            bar_color: self.optional_color_from_value(dictionary.get("barColor")),
            tint_color: self.optional_color_from_value(dictionary.get("tintColor")),
            title_label: label("titleLabel"),
            buttons_label: label("buttonsLabel"),
        })
    }
}
