use pretty_assertions::assert_eq;
use swatch_core::{Color, ColorParseError, EdgeInsets, Hsb, Size};

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn hex_strings_parse_with_or_without_hash() {
    assert_eq!(Color::from_hex_str("FF0000"), Color::RED);
    assert_eq!(Color::from_hex_str("#00ff00"), Color::GREEN);
    assert_eq!(Color::from_hex_str("  0000FF "), Color::BLUE);
}

#[test]
fn hex_string_ignores_trailing_digits() {
    assert_eq!(Color::from_hex_str("FFFFFF80"), Color::WHITE);
}

#[test]
fn empty_hex_string_is_black() {
    assert_eq!(Color::from_hex_str(""), Color::BLACK);
    assert_eq!(Color::try_from_hex_str("#"), Err(ColorParseError::Empty));
}

#[test]
fn malformed_hex_strings_are_reported() {
    assert!(matches!(
        Color::try_from_hex_str("FFF"),
        Err(ColorParseError::TooShort { len: 3, .. })
    ));
    assert!(matches!(
        Color::try_from_hex_str("GG0000"),
        Err(ColorParseError::InvalidDigit { digit: 'G', .. })
    ));
}

#[test]
#[should_panic(expected = "malformed theme color")]
fn malformed_hex_string_panics() {
    let _ = Color::from_hex_str("12345");
}

#[test]
fn hsb_round_trip_preserves_channels() {
    let color = Color::rgba(0.2, 0.4, 0.6, 0.8);
    let back = Color::from_hsb(color.to_hsb());
    assert!(approx(back.r, 0.2));
    assert!(approx(back.g, 0.4));
    assert!(approx(back.b, 0.6));
    assert!(approx(back.a, 0.8));
}

#[test]
fn primary_hues() {
    assert!(approx(Color::RED.to_hsb().hue, 0.0));
    assert!(approx(Color::GREEN.to_hsb().hue, 1.0 / 3.0));
    assert!(approx(Color::BLUE.to_hsb().hue, 2.0 / 3.0));
    assert_eq!(Color::WHITE.to_hsb().saturation, 0.0);
}

#[test]
fn darker_scales_brightness_only() {
    let base = Color::rgb(0.8, 0.4, 0.2);
    let before: Hsb = base.into();
    let after = base.darker(0.25).to_hsb();

    assert!(approx(after.brightness, before.brightness * 0.75));
    assert!(approx(after.hue, before.hue));
    assert!(approx(after.saturation, before.saturation));
}

#[test]
fn lighter_clamps_brightness() {
    let lit = Color::rgb(0.8, 0.4, 0.2).lighter(1.0);
    assert!(approx(lit.to_hsb().brightness, 1.0));

    let black = Color::WHITE.darker(2.0);
    assert!(approx(black.to_hsb().brightness, 0.0));
}

#[test]
fn edge_insets_shrink_size() {
    let insets = EdgeInsets::new(1.0, 2.0, 3.0, 4.0);
    assert_eq!(insets.horizontal(), 6.0);
    assert_eq!(insets.vertical(), 4.0);
    assert_eq!(insets.inset_size(Size::new(10.0, 10.0)), Size::new(4.0, 6.0));
}
