use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use swatch_theme::{
    BlurEffectStyle, Color, EdgeInsets, Easing, FontSource, FontWeight, KeyboardAppearance,
    LineBreakMode, Map, Point, Size, SizeAdjustment, StatusBarStyle, TextAlignment, Theme, Value,
    DEFAULT_FONT_SIZE,
};

fn theme(value: serde_json::Value) -> Theme {
    let dictionary = serde_json::from_value::<Value>(value)
        .unwrap()
        .into_map()
        .unwrap();
    Theme::new("test", dictionary)
}

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

// ========== Primitive Coercion ==========

#[test]
fn primitive_defaults_on_type_mismatch() {
    let theme = theme(json!({
        "flag": "yes",
        "count": "many",
        "list": [1, 2],
        "number": 3.75,
        "on": 1
    }));

    assert!(!theme.bool("flag"));
    assert!(theme.bool("on"));
    assert_eq!(theme.integer("count"), 0);
    assert_eq!(theme.integer("number"), 3);
    assert_eq!(theme.float("list"), 0.0);
    assert_eq!(theme.string("list"), None);
    assert_eq!(theme.string("number"), Some("3.75".to_string()));
    assert_eq!(theme.time_interval("number"), 3.75);
}

#[test]
fn image_names_must_be_non_empty() {
    let theme = theme(json!({ "icon": "gear", "blank": "" }));
    assert_eq!(theme.image_name("icon"), Some("gear".to_string()));
    assert_eq!(theme.image_name("blank"), None);
    assert_eq!(theme.image_name("missing"), None);
}

// ========== Colors ==========

#[test]
fn hex_colors() {
    let theme = theme(json!({
        "red": { "hex": "FF0000" },
        "green": { "hex": "#00ff00", "alpha": 0.5 }
    }));

    let red = theme.color("red");
    assert_eq!((red.r, red.g, red.b, red.a), (1.0, 0.0, 0.0, 1.0));
    assert_eq!(theme.color("green").a, 0.5);
    assert_eq!(theme.color("green").g, 1.0);
}

#[test]
fn colors_without_hex() {
    let theme = theme(json!({
        "clear": { "alpha": 0 },
        "half": { "alpha": 0.5 },
        "text": "plain words"
    }));

    assert_eq!(theme.color("clear"), Color::TRANSPARENT);
    assert_eq!(theme.color("half"), Color::BLACK);
    assert_eq!(theme.color("text"), Color::BLACK);
    assert_eq!(theme.color("missing"), Color::BLACK);
}

#[test]
fn darker_scales_brightness_only() {
    let theme = theme(json!({
        "base": { "hex": "3366CC" },
        "dim": { "hex": "3366CC", "darker": 0.25 },
        "both": { "hex": "3366CC", "darker": 0.25, "lighter": 0.5 }
    }));

    let base = theme.color("base").to_hsb();
    let dim = theme.color("dim").to_hsb();
    assert!(close(dim.brightness, base.brightness * 0.75));
    assert!(close(dim.hue, base.hue));
    assert!(close(dim.saturation, base.saturation));
    assert_eq!(theme.color("both"), theme.color("dim"));
}

#[test]
fn lighter_is_clamped() {
    let theme = theme(json!({ "white": { "hex": "FFFFFF", "lighter": 0.5 } }));
    assert_eq!(theme.color("white"), Color::WHITE);
}

#[test]
fn color_redirects() {
    let theme = theme(json!({
        "brand": { "hex": "1E66F5" },
        "button": { "tint": "brand", "link": "standardColors.systemBlue" },
        "chain": "button.tint"
    }));

    assert_eq!(theme.color("button.tint"), theme.color("brand"));
    assert_eq!(theme.color("chain"), theme.color("brand"));
    assert_eq!(
        theme.color("button.link"),
        swatch_theme::standard_color("systemBlue").unwrap()
    );
}

#[test]
#[should_panic(expected = "malformed theme color")]
fn malformed_hex_panics() {
    let theme = theme(json!({ "bad": { "hex": "ZZ0000" } }));
    theme.color("bad");
}

#[test]
fn repeated_color_lookups_agree() {
    let theme = theme(json!({ "ok": { "hex": "FF0000" } }));
    assert_eq!(theme.color("ok"), Color::RED);
    assert_eq!(theme.color("ok"), Color::RED);
}

// ========== Fonts ==========

#[test]
fn font_size_floor() {
    let theme = theme(json!({
        "missing": { "name": "Avenir" },
        "zero": { "size": 0 },
        "tiny": { "size": 0.5 },
        "shrunk": { "size": 3 }
    }));

    assert_eq!(theme.font("missing").size, DEFAULT_FONT_SIZE);
    assert_eq!(theme.font("zero").size, DEFAULT_FONT_SIZE);
    assert_eq!(theme.font("tiny").size, DEFAULT_FONT_SIZE);
    assert_eq!(theme.font("nowhere").size, DEFAULT_FONT_SIZE);
    // The floor applies after the adjustment.
    let shrunk = theme.font_with_adjustment("shrunk", SizeAdjustment::Absolute(-3.0));
    assert_eq!(shrunk.size, DEFAULT_FONT_SIZE);
}

#[test]
fn font_adjustments() {
    let theme = theme(json!({ "body": { "size": 16 } }));

    assert_eq!(theme.font_with_adjustment("body", SizeAdjustment::Absolute(2.0)).size, 18.0);
    assert_eq!(
        theme.font_with_adjustment("body", SizeAdjustment::Proportional(25.0)).size,
        20.0
    );
    assert_eq!(theme.font("body").size, 16.0);
}

#[test]
fn font_source_precedence() {
    let theme = theme(json!({
        "named": { "name": "Avenir-Heavy", "family": "Avenir", "weight": "bold", "size": 12 },
        "family": { "family": "Avenir", "weight": "Semibold" },
        "system": { "weight": "light" },
        "emptyName": { "name": "", "family": "Avenir" },
        "oddWeight": { "weight": "book" }
    }));

    let named = theme.font("named");
    assert_eq!(named.source, FontSource::Named("Avenir-Heavy".to_string()));
    assert_eq!(named.weight, None);

    let family = theme.font("family");
    assert_eq!(family.source, FontSource::Family("Avenir".to_string()));
    assert_eq!(family.weight, Some(FontWeight::Semibold));

    let system = theme.font("system");
    assert!(system.is_system());
    assert_eq!(system.weight, Some(FontWeight::Light));

    assert!(theme.font("emptyName").is_system());
    assert_eq!(theme.font("oddWeight").weight, None);
}

#[test]
fn fonts_are_cached_per_adjustment() {
    let theme = theme(json!({ "body": { "size": 16 } }));

    let first = theme.font("body");
    assert!(Arc::ptr_eq(&first, &theme.font("body")));
    assert!(Arc::ptr_eq(
        &first,
        &theme.font_with_adjustment("body", SizeAdjustment::Absolute(0.0))
    ));

    let absolute = theme.font_with_adjustment("body", SizeAdjustment::Absolute(2.0));
    let proportional = theme.font_with_adjustment("body", SizeAdjustment::Proportional(2.0));
    assert!(!Arc::ptr_eq(&absolute, &proportional));
    assert_ne!(absolute.size, proportional.size);
}

// ========== Geometry ==========

#[test]
fn geometry_fields_default_to_zero() {
    let theme = theme(json!({
        "origin": { "x": 4 },
        "frame": { "width": 100, "height": 44.5 },
        "padding": { "top": 1, "left": 2, "right": 4 },
        "aliased": "frame"
    }));

    assert_eq!(theme.point("origin"), Point::new(4.0, 0.0));
    assert_eq!(theme.size("frame"), Size::new(100.0, 44.5));
    assert_eq!(theme.size("aliased"), Size::new(100.0, 44.5));
    assert_eq!(theme.edge_insets("padding"), EdgeInsets::new(1.0, 2.0, 0.0, 4.0));
    assert_eq!(theme.point("missing"), Point::ZERO);
}

// ========== Styles ==========

#[test]
fn style_keywords_ignore_case() {
    let theme = theme(json!({
        "alignment": "CENTER",
        "lineBreak": "WordWrap",
        "status": "lightContent",
        "blur": "prominent",
        "keyboard": "Dark",
        "curve": "easeout",
        "aliased": "styles.alignment",
        "styles": { "alignment": "right" }
    }));

    assert_eq!(theme.text_alignment("alignment"), TextAlignment::Center);
    assert_eq!(theme.line_break_mode("lineBreak"), LineBreakMode::WordWrap);
    assert_eq!(theme.status_bar_style("status"), StatusBarStyle::LightContent);
    assert_eq!(theme.blur_effect_style("blur"), BlurEffectStyle::Prominent);
    assert_eq!(theme.keyboard_appearance("keyboard"), KeyboardAppearance::Dark);
    assert_eq!(theme.animation_curve("curve"), Easing::EaseOut);
    assert_eq!(theme.text_alignment("aliased"), TextAlignment::Right);
}

#[test]
fn unknown_style_keywords_use_defaults() {
    let theme = theme(json!({ "alignment": "middle", "lineBreak": "" , "curve": 3 }));

    assert_eq!(theme.text_alignment("alignment"), TextAlignment::Left);
    assert_eq!(theme.line_break_mode("lineBreak"), LineBreakMode::TruncateTail);
    assert_eq!(theme.line_break_mode("missing"), LineBreakMode::TruncateTail);
    assert_eq!(theme.blur_effect_style("missing"), BlurEffectStyle::ExtraLight);
    assert_eq!(theme.animation_curve("curve"), Easing::EaseInOut);
}

#[test]
fn empty_theme_resolves_everything_to_defaults() {
    let theme = Theme::new("empty", Map::default());
    assert_eq!(theme.color("a"), Color::BLACK);
    assert_eq!(theme.font("a").size, DEFAULT_FONT_SIZE);
    assert_eq!(theme.size("a"), Size::ZERO);
    assert!(theme.view_specifier("a").is_none());
}
