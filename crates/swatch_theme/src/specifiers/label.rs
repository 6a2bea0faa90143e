//! Text label specifiers and the attribute bundles derived from them

use super::ControlState;
use crate::cache::CacheKey;
use crate::theme::Theme;
use crate::tokens::{Font, LineBreakMode, SizeAdjustment, TextAlignment, TextCaseTransform};
use crate::value::Map;
use std::sync::Arc;
use swatch_core::{Color, EdgeInsets, Point, Size};

/// Everything needed to lay out and draw a label
#[derive(Clone, Debug, PartialEq)]
pub struct TextLabelSpecifier {
    pub font: Font,
    pub bold_font: Option<Font>,
    pub italic_font: Option<Font>,
    pub size: Size,
    /// When set, `size` is ignored and the label sizes itself to its text
    pub size_to_fit: bool,
    pub position: Point,
    /// `1` unless the entry says otherwise; `0` means unlimited
    pub number_of_lines: i64,

    pub paragraph_spacing: f32,
    pub paragraph_spacing_before: f32,
    /// Multiple of the font size; overrides `paragraph_spacing` when positive
    pub paragraph_spacing_multiple: f32,
    /// Multiple of the font size; overrides `paragraph_spacing_before` when positive
    pub paragraph_spacing_before_multiple: f32,
    /// Line spacing as a multiple of the font size
    pub line_spacing_multiple: f32,
    pub line_height_multiple: f32,
    pub head_indent: f32,

    pub alignment: TextAlignment,
    pub line_break_mode: LineBreakMode,
    pub text_transform: TextCaseTransform,

    pub color: Option<Color>,
    pub highlighted_color: Option<Color>,
    pub disabled_color: Option<Color>,
    pub background_color: Option<Color>,
    pub highlighted_background_color: Option<Color>,
    pub disabled_background_color: Option<Color>,

    /// Left to the binding layer to interpret
    pub padding: EdgeInsets,
}

/// Resolved paragraph layout of a label
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParagraphStyle {
    pub alignment: TextAlignment,
    pub line_break_mode: LineBreakMode,
    pub paragraph_spacing: f32,
    pub paragraph_spacing_before: f32,
    pub line_spacing: f32,
    pub line_height_multiple: f32,
    pub head_indent: f32,
}

/// Selects which attributes go into a [`TextAttributes`] bundle
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum AttributeKey {
    Font,
    ForegroundColor,
    BackgroundColor,
    ParagraphStyle,
}

impl AttributeKey {
    pub const ALL: [AttributeKey; 4] = [
        AttributeKey::Font,
        AttributeKey::ForegroundColor,
        AttributeKey::BackgroundColor,
        AttributeKey::ParagraphStyle,
    ];

    pub const FONT_AND_COLORS: [AttributeKey; 3] = [
        AttributeKey::Font,
        AttributeKey::ForegroundColor,
        AttributeKey::BackgroundColor,
    ];
}

/// Text attributes a binding layer applies to a run of text.
/// Absent fields leave the widget's own value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextAttributes {
    pub font: Option<Font>,
    pub foreground_color: Option<Color>,
    pub background_color: Option<Color>,
    pub paragraph_style: Option<ParagraphStyle>,
}

/// Transformed text paired with its attributes
#[derive(Clone, Debug, PartialEq)]
pub struct AttributedText {
    pub text: String,
    pub attributes: TextAttributes,
}

impl TextLabelSpecifier {
    /// Apply the label's case transform
    pub fn transform(&self, text: &str) -> String {
        self.text_transform.apply(text)
    }

    pub fn paragraph_style(&self) -> ParagraphStyle {
        let scaled = |multiple: f32, plain: f32| {
            if multiple > 0.0 {
                self.font.size * multiple
            } else if plain > 0.0 {
                plain
            } else {
                0.0
            }
        };

        ParagraphStyle {
            alignment: self.alignment,
            line_break_mode: self.line_break_mode,
            paragraph_spacing: scaled(self.paragraph_spacing_multiple, self.paragraph_spacing),
            paragraph_spacing_before: scaled(
                self.paragraph_spacing_before_multiple,
                self.paragraph_spacing_before,
            ),
            line_spacing: scaled(self.line_spacing_multiple, 0.0),
            line_height_multiple: self.line_height_multiple,
            head_indent: self.head_indent,
        }
    }

    /// Attributes for `keys`, using the label's normal colors
    pub fn attributes(&self, keys: &[AttributeKey]) -> TextAttributes {
        self.attributes_with_colors(keys, None, None)
    }

    /// Attributes for `keys`; the given colors take the place of the label's
    /// normal foreground and background when present
    pub fn attributes_with_colors(
        &self,
        keys: &[AttributeKey],
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> TextAttributes {
        let mut attributes = TextAttributes::default();
        for key in keys {
            match key {
                AttributeKey::Font => attributes.font = Some(self.font.clone()),
                AttributeKey::ForegroundColor => {
                    attributes.foreground_color = foreground.or(self.color)
                }
                AttributeKey::BackgroundColor => {
                    attributes.background_color = background.or(self.background_color)
                }
                AttributeKey::ParagraphStyle => {
                    attributes.paragraph_style = Some(self.paragraph_style())
                }
            }
        }
        attributes
    }

    pub fn font_and_color_attributes(&self) -> TextAttributes {
        self.attributes(&AttributeKey::FONT_AND_COLORS)
    }

    /// Full attribute bundle for a control state.
    ///
    /// For the highlighted and disabled states, a color the label does not
    /// define for that state is derived from the normal color with `alpha`,
    /// when one is given.
    pub fn attributes_for_state(&self, state: ControlState, alpha: Option<f32>) -> TextAttributes {
        let (mut foreground, mut background) = match state {
            ControlState::Normal => (self.color, self.background_color),
            ControlState::Highlighted => (self.highlighted_color, self.highlighted_background_color),
            ControlState::Disabled => (self.disabled_color, self.disabled_background_color),
        };

        if let (ControlState::Highlighted | ControlState::Disabled, Some(alpha)) = (state, alpha) {
            if foreground.is_none() {
                foreground = self.color.map(|color| color.with_alpha(alpha));
            }
            if background.is_none() {
                background = self.background_color.map(|color| color.with_alpha(alpha));
            }
        }

        self.attributes_with_colors(&AttributeKey::ALL, foreground, background)
    }

    /// Transformed text with the attributes for `state`
    pub fn attributed_text(&self, text: &str, state: ControlState, alpha: Option<f32>) -> AttributedText {
        AttributedText {
            text: self.transform(text),
            attributes: self.attributes_for_state(state, alpha),
        }
    }
}

impl Theme {
    /// Text label specifier at `key`, or `None` when no mapping is found.
    /// Cached.
    pub fn text_label_specifier(&self, key: &str) -> Option<Arc<TextLabelSpecifier>> {
        self.text_label_specifier_with_adjustment(key, SizeAdjustment::NONE)
    }

    /// Like [`text_label_specifier`](Self::text_label_specifier), with every
    /// font of the label adjusted. Each adjustment is cached separately.
    pub fn text_label_specifier_with_adjustment(
        &self,
        key: &str,
        adjustment: SizeAdjustment,
    ) -> Option<Arc<TextLabelSpecifier>> {
        self.caches().text_label_specifiers.get_or_try_insert_with(
            CacheKey::with_adjustment(key, adjustment),
            || self.text_label_specifier_from_dictionary(self.dictionary(key).as_ref(), adjustment),
        )
    }

    pub fn text_label_specifier_from_dictionary(
        &self,
        dictionary: Option<&Map>,
        adjustment: SizeAdjustment,
    ) -> Option<TextLabelSpecifier> {
        let dictionary = dictionary?;
        let field = |name: &str| dictionary.get(name);
        let nested = |name: &str| self.dictionary_from_value(field(name));
        let optional_font = |name: &str| {
            nested(name).map(|d| self.font_from_dictionary(Some(&d), adjustment))
        };

        let number_of_lines = match field("numberOfLines") {
            Some(value) => self.integer_from_value(Some(value)),
            None => 1,
        };

        Some(TextLabelSpecifier {
            font: self.font_from_dictionary(nested("font").as_ref(), adjustment),
            bold_font: optional_font("boldFont"),
            italic_font: optional_font("italicFont"),
            size: self.size_from_dictionary(nested("size").as_ref()),
            size_to_fit: self.bool_from_value(field("sizeToFit")),
            position: self.point_from_dictionary(nested("position").as_ref()),
            number_of_lines,

            paragraph_spacing: self.float_from_value(field("paragraphSpacing")),
            paragraph_spacing_before: self.float_from_value(field("paragraphSpacingBefore")),
            paragraph_spacing_multiple: self.float_from_value(field("paragraphSpacingMultiple")),
            paragraph_spacing_before_multiple: self
                .float_from_value(field("paragraphSpacingBeforeMultiple")),
            line_spacing_multiple: self.float_from_value(field("lineSpacingMultiple")),
            line_height_multiple: self.float_from_value(field("lineHeightMultiple")),
            head_indent: self.float_from_value(field("headIndent")),

            alignment: self.style_from_value(field("alignment")),
            line_break_mode: self.style_from_value(field("lineBreakMode")),
            text_transform: self.style_from_value(field("textTransform")),

            color: self.optional_color_from_value(field("color")),
            highlighted_color: self.optional_color_from_value(field("highlightedColor")),
            disabled_color: self.optional_color_from_value(field("disabledColor")),
            background_color: self.optional_color_from_value(field("backgroundColor")),
            highlighted_background_color: self
                .optional_color_from_value(field("highlightedBackgroundColor")),
            disabled_background_color: self
                .optional_color_from_value(field("disabledBackgroundColor")),

            padding: self.edge_insets_from_dictionary(nested("padding").as_ref()),
        })
    }
}
