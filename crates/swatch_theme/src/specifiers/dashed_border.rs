use crate::theme::Theme;
use swatch_core::{Color, EdgeInsets};

/// Stroke of a dashed outline
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DashedBorderSpecifier {
    pub line_width: f32,
    pub color: Option<Color>,
    pub corner_radius: f32,
    /// Length of each painted dash
    pub painted_segment_length: f32,
    /// Gap between dashes
    pub spacing_segment_length: f32,
    pub insets: EdgeInsets,
}

impl DashedBorderSpecifier {
    /// Dash pattern as `[painted, spacing]`, or `None` for a solid line
    pub fn dash_pattern(&self) -> Option<[f32; 2]> {
        if self.painted_segment_length > 0.0 && self.spacing_segment_length > 0.0 {
            Some([self.painted_segment_length, self.spacing_segment_length])
        } else {
            None
        }
    }
}

impl Theme {
    /// Dashed border specifier at `key`, or `None` when no mapping is found.
    /// Not cached.
    pub fn dashed_border_specifier(&self, key: &str) -> Option<DashedBorderSpecifier> {
        let dictionary = self.dictionary(key)?;
        let field = |name: &str| dictionary.get(name);

        Some(DashedBorderSpecifier {
            line_width: self.float_from_value(field("lineWidth")),
            color: self.optional_color_from_value(field("color")),
            corner_radius: self.float_from_value(field("cornerRadius")),
            painted_segment_length: self.float_from_value(field("paintedSegmentLength")),
            spacing_segment_length: self.float_from_value(field("spacingSegmentLength")),
            insets: self
                .edge_insets_from_dictionary(self.dictionary_from_value(field("insets")).as_ref()),
        })
    }
}
