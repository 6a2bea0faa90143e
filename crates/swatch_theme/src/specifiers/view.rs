use super::ControlState;
use crate::cache::CacheKey;
use crate::theme::Theme;
use crate::value::Map;
use std::sync::Arc;
use swatch_core::{Color, EdgeInsets, Point, Size};

/// Frame and background of a plain view
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewSpecifier {
    pub size: Size,
    pub position: Point,
    pub background_color: Option<Color>,
    pub highlighted_background_color: Option<Color>,
    pub disabled_background_color: Option<Color>,
    /// Not part of the frame; left to the binding layer to interpret
    pub padding: EdgeInsets,
}

impl ViewSpecifier {
    pub fn background_color_for_state(&self, state: ControlState) -> Option<Color> {
        match state {
            ControlState::Normal => self.background_color,
            ControlState::Highlighted => self.highlighted_background_color,
            ControlState::Disabled => self.disabled_background_color,
        }
    }
}

impl Theme {
    /// View specifier at `key`, or `None` when no mapping is found. Cached.
    pub fn view_specifier(&self, key: &str) -> Option<Arc<ViewSpecifier>> {
        self.caches()
            .view_specifiers
            .get_or_try_insert_with(CacheKey::new(key), || {
                self.view_specifier_from_dictionary(self.dictionary(key).as_ref())
            })
    }

    pub fn view_specifier_from_dictionary(&self, dictionary: Option<&Map>) -> Option<ViewSpecifier> {
        let dictionary = dictionary?;
        let nested = |field: &str| self.dictionary_from_value(dictionary.get(field));

        Some(ViewSpecifier {
            size: self.size_from_dictionary(nested("size").as_ref()),
            position: self.point_from_dictionary(nested("position").as_ref()),
            background_color: self.optional_color_from_value(dictionary.get("backgroundColor")),
            highlighted_background_color: self
                .optional_color_from_value(dictionary.get("highlightedBackgroundColor")),
            disabled_background_color: self
                .optional_color_from_value(dictionary.get("disabledBackgroundColor")),
            padding: self.edge_insets_from_dictionary(nested("padding").as_ref()),
        })
    }
}
