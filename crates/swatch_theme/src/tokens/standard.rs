//! Standard named colors
//!
//! Theme values of the form `standardColors.<name>` resolve against this
//! palette instead of the theme dictionary. Names match case-insensitively and
//! may carry a trailing `Color` (`redColor`, `labelColor`).

use swatch_core::Color;

/// Key path prefix reserved for standard colors
pub const STANDARD_COLORS_PREFIX: &str = "standardColors.";

const STANDARD_COLORS: &[(&str, Color)] = &[
    // Fixed colors
    ("black", Color::BLACK),
    ("darkGray", Color::rgb(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0)),
    ("lightGray", Color::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0)),
    ("white", Color::WHITE),
    ("gray", Color::rgb(0.5, 0.5, 0.5)),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("cyan", Color::rgb(0.0, 1.0, 1.0)),
    ("yellow", Color::rgb(1.0, 1.0, 0.0)),
    ("magenta", Color::rgb(1.0, 0.0, 1.0)),
    ("orange", Color::rgb(1.0, 0.5, 0.0)),
    ("purple", Color::rgb(0.5, 0.0, 0.5)),
    ("brown", Color::rgb(0.6, 0.4, 0.2)),
    ("clear", Color::TRANSPARENT),
    // System tints (light appearance)
    ("systemRed", Color::rgb(255.0 / 255.0, 59.0 / 255.0, 48.0 / 255.0)),
    ("systemOrange", Color::rgb(255.0 / 255.0, 149.0 / 255.0, 0.0)),
    ("systemYellow", Color::rgb(255.0 / 255.0, 204.0 / 255.0, 0.0)),
    ("systemGreen", Color::rgb(52.0 / 255.0, 199.0 / 255.0, 89.0 / 255.0)),
    ("systemMint", Color::rgb(0.0, 199.0 / 255.0, 190.0 / 255.0)),
    ("systemTeal", Color::rgb(48.0 / 255.0, 176.0 / 255.0, 199.0 / 255.0)),
    ("systemCyan", Color::rgb(50.0 / 255.0, 173.0 / 255.0, 230.0 / 255.0)),
    ("systemBlue", Color::rgb(0.0, 122.0 / 255.0, 255.0 / 255.0)),
    ("systemIndigo", Color::rgb(88.0 / 255.0, 86.0 / 255.0, 214.0 / 255.0)),
    ("systemPurple", Color::rgb(175.0 / 255.0, 82.0 / 255.0, 222.0 / 255.0)),
    ("systemPink", Color::rgb(255.0 / 255.0, 45.0 / 255.0, 85.0 / 255.0)),
    ("systemBrown", Color::rgb(162.0 / 255.0, 132.0 / 255.0, 94.0 / 255.0)),
    ("systemGray", Color::rgb(142.0 / 255.0, 142.0 / 255.0, 147.0 / 255.0)),
    // Semantic colors (light appearance)
    ("label", Color::BLACK),
    ("secondaryLabel", Color::rgba(60.0 / 255.0, 60.0 / 255.0, 67.0 / 255.0, 0.6)),
    ("tertiaryLabel", Color::rgba(60.0 / 255.0, 60.0 / 255.0, 67.0 / 255.0, 0.3)),
    ("placeholderText", Color::rgba(60.0 / 255.0, 60.0 / 255.0, 67.0 / 255.0, 0.3)),
    ("separator", Color::rgba(60.0 / 255.0, 60.0 / 255.0, 67.0 / 255.0, 0.29)),
    ("link", Color::rgb(0.0, 122.0 / 255.0, 255.0 / 255.0)),
    ("systemBackground", Color::WHITE),
    ("secondarySystemBackground", Color::rgb(242.0 / 255.0, 242.0 / 255.0, 247.0 / 255.0)),
    ("tertiarySystemBackground", Color::WHITE),
];

/// Look a standard color up by name
pub fn standard_color(name: &str) -> Option<Color> {
    let name = name.strip_suffix("Color").unwrap_or(name);
    STANDARD_COLORS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}

/// Resolve a `standardColors.<name>` path; other paths give `None`
pub fn standard_color_for_path(path: &str) -> Option<Color> {
    standard_color(path.strip_prefix(STANDARD_COLORS_PREFIX)?)
}

/// Names of every standard color
pub fn standard_color_names() -> impl Iterator<Item = &'static str> {
    STANDARD_COLORS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_loosely() {
        assert_eq!(standard_color("red"), Some(Color::RED));
        assert_eq!(standard_color("redColor"), Some(Color::RED));
        assert_eq!(standard_color("SYSTEMBLUE"), standard_color("systemBlue"));
        assert_eq!(standard_color("chartreuse"), None);
    }

    #[test]
    fn only_prefixed_paths_resolve() {
        assert_eq!(standard_color_for_path("standardColors.clear"), Some(Color::TRANSPARENT));
        assert_eq!(standard_color_for_path("colors.clear"), None);
    }
}
