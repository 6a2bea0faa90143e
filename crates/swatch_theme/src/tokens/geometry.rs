//! Point, size, and inset accessors
//!
//! Every numeric field is read on its own; a missing field is `0`.

use crate::theme::Theme;
use crate::value::Map;
use swatch_core::{EdgeInsets, Point, Size};

impl Theme {
    /// Point from an `x`/`y` mapping at `key`
    pub fn point(&self, key: &str) -> Point {
        self.point_from_dictionary(self.dictionary(key).as_ref())
    }

    pub fn point_from_dictionary(&self, dictionary: Option<&Map>) -> Point {
        Point::new(
            self.float_field(dictionary, "x"),
            self.float_field(dictionary, "y"),
        )
    }

    /// Size from a `width`/`height` mapping at `key`
    pub fn size(&self, key: &str) -> Size {
        self.size_from_dictionary(self.dictionary(key).as_ref())
    }

    pub fn size_from_dictionary(&self, dictionary: Option<&Map>) -> Size {
        Size::new(
            self.float_field(dictionary, "width"),
            self.float_field(dictionary, "height"),
        )
    }

    /// Insets from a `top`/`left`/`bottom`/`right` mapping at `key`
    pub fn edge_insets(&self, key: &str) -> EdgeInsets {
        self.edge_insets_from_dictionary(self.dictionary(key).as_ref())
    }

    pub fn edge_insets_from_dictionary(&self, dictionary: Option<&Map>) -> EdgeInsets {
        EdgeInsets::new(
            self.float_field(dictionary, "top"),
            self.float_field(dictionary, "left"),
            self.float_field(dictionary, "bottom"),
            self.float_field(dictionary, "right"),
        )
    }

    fn float_field(&self, dictionary: Option<&Map>, field: &str) -> f32 {
        self.float_from_value(dictionary.and_then(|d| d.get(field)))
    }
}
