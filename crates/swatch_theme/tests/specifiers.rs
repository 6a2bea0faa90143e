use pretty_assertions::assert_eq;
use serde_json::json;
use std::time::Duration;
use swatch_theme::{
    AttributeKey, BarStyle, CacheCategory, Color, ControlState, Easing, EdgeInsets, FontSource,
    LineBreakMode, Point, Size, SizeAdjustment, TextAlignment, TextCaseTransform, Theme, Value,
};

fn theme(value: serde_json::Value) -> Theme {
    let dictionary = serde_json::from_value::<Value>(value)
        .unwrap()
        .into_map()
        .unwrap();
    Theme::new("test", dictionary)
}

fn sample() -> Theme {
    theme(json!({
        "colors": {
            "accent": { "hex": "FF0000" },
            "paper": { "hex": "FFFFFF" }
        },
        "fonts": {
            "body": { "family": "Avenir", "size": 14, "weight": "medium" }
        },
        "card": {
            "size": { "width": 320, "height": 120 },
            "position": { "x": 8, "y": 16 },
            "backgroundColor": "colors.paper",
            "disabledBackgroundColor": { "hex": "000000", "alpha": 0.4 },
            "padding": { "top": 4, "left": 8, "bottom": 4, "right": 8 }
        },
        "headline": {
            "font": "fonts.body",
            "boldFont": { "name": "Avenir-Heavy", "size": 14 },
            "size": { "width": 200, "height": 30 },
            "sizeToFit": true,
            "position": { "x": 1, "y": 2 },
            "paragraphSpacingMultiple": 0.5,
            "paragraphSpacingBefore": 6,
            "lineSpacingMultiple": 0.25,
            "alignment": "center",
            "lineBreakMode": "wordwrap",
            "textTransform": "uppercase",
            "color": "colors.accent",
            "backgroundColor": "colors.paper",
            "padding": { "left": 3 }
        },
        "caption": { "numberOfLines": 0 },
        "navbar": {
            "barStyle": "black",
            "translucency": 1,
            "barColor": "colors.paper",
            "tintColor": { "hex": "00FF00" },
            "titleLabel": "headline",
            "buttonsLabel": { "font": { "size": 12 }, "color": "colors.accent" }
        },
        "plainNavbar": { "barColor": "colors.accent" },
        "dashed": {
            "lineWidth": 2,
            "color": "colors.accent",
            "cornerRadius": 6,
            "paintedSegmentLength": 4,
            "spacingSegmentLength": 2,
            "insets": { "top": 1, "left": 1, "bottom": 1, "right": 1 }
        },
        "fade": { "duration": 0.3, "delay": 0.1, "curve": "easeIn" },
        "snap": { "duration": 0.2, "curve": "bounce" },
        "notAMapping": 42
    }))
}

// ========== View ==========

#[test]
fn view_specifier_fields() {
    let theme = sample();
    let view = theme.view_specifier("card").unwrap();

    assert_eq!(view.size, Size::new(320.0, 120.0));
    assert_eq!(view.position, Point::new(8.0, 16.0));
    assert_eq!(view.background_color, Some(Color::WHITE));
    assert_eq!(view.highlighted_background_color, None);
    assert_eq!(view.padding, EdgeInsets::new(4.0, 8.0, 4.0, 8.0));

    assert_eq!(view.background_color_for_state(ControlState::Normal), Some(Color::WHITE));
    assert_eq!(view.background_color_for_state(ControlState::Highlighted), None);
    assert_eq!(
        view.background_color_for_state(ControlState::Disabled),
        Some(Color::BLACK.with_alpha(0.4))
    );
}

#[test]
fn unresolved_specifiers_are_none() {
    let theme = sample();
    assert!(theme.view_specifier("missing").is_none());
    assert!(theme.view_specifier("notAMapping").is_none());
    assert!(theme.text_label_specifier("missing").is_none());
    assert!(theme.navigation_bar_specifier("missing").is_none());
    assert!(theme.dashed_border_specifier("missing").is_none());
    assert!(theme.animation_specifier("missing").is_none());
    assert_eq!(theme.cached_len(CacheCategory::ViewSpecifier), 0);
}

// ========== Text Label ==========

#[test]
fn text_label_specifier_fields() {
    let theme = sample();
    let label = theme.text_label_specifier("headline").unwrap();

    assert_eq!(label.font.source, FontSource::Family("Avenir".to_string()));
    assert_eq!(label.font.size, 14.0);
    assert_eq!(
        label.bold_font.as_ref().map(|font| font.source.clone()),
        Some(FontSource::Named("Avenir-Heavy".to_string()))
    );
    assert_eq!(label.italic_font, None);
    assert_eq!(label.size, Size::new(200.0, 30.0));
    assert!(label.size_to_fit);
    assert_eq!(label.position, Point::new(1.0, 2.0));
    assert_eq!(label.number_of_lines, 1);
    assert_eq!(label.alignment, TextAlignment::Center);
    assert_eq!(label.line_break_mode, LineBreakMode::WordWrap);
    assert_eq!(label.text_transform, TextCaseTransform::Upper);
    assert_eq!(label.color, Some(Color::RED));
    assert_eq!(label.background_color, Some(Color::WHITE));
    assert_eq!(label.padding, EdgeInsets::new(0.0, 3.0, 0.0, 0.0));
}

#[test]
fn text_label_defaults() {
    let theme = sample();
    let caption = theme.text_label_specifier("caption").unwrap();

    assert_eq!(caption.number_of_lines, 0);
    assert_eq!(caption.font.size, 15.0);
    assert!(caption.font.is_system());
    assert_eq!(caption.alignment, TextAlignment::Left);
    assert_eq!(caption.line_break_mode, LineBreakMode::TruncateTail);
    assert_eq!(caption.text_transform, TextCaseTransform::None);
    assert_eq!(caption.color, None);
}

#[test]
fn paragraph_style_scales_with_font() {
    let theme = sample();
    let style = theme.text_label_specifier("headline").unwrap().paragraph_style();

    assert_eq!(style.paragraph_spacing, 7.0);
    assert_eq!(style.paragraph_spacing_before, 6.0);
    assert_eq!(style.line_spacing, 3.5);
    assert_eq!(style.alignment, TextAlignment::Center);
}

#[test]
fn label_adjustment_applies_to_every_font() {
    let theme = sample();
    let label = theme
        .text_label_specifier_with_adjustment("headline", SizeAdjustment::Absolute(2.0))
        .unwrap();

    assert_eq!(label.font.size, 16.0);
    assert_eq!(label.bold_font.as_ref().map(|font| font.size), Some(16.0));
    assert_eq!(theme.text_label_specifier("headline").unwrap().font.size, 14.0);
    assert_eq!(theme.cached_len(CacheCategory::TextLabelSpecifier), 2);
}

#[test]
fn attributed_text_for_states() {
    let theme = sample();
    let label = theme.text_label_specifier("headline").unwrap();

    let normal = label.attributed_text("Save", ControlState::Normal, None);
    assert_eq!(normal.text, "SAVE");
    assert_eq!(normal.attributes.foreground_color, Some(Color::RED));

    let highlighted = label.attributed_text("Save", ControlState::Highlighted, Some(0.5));
    assert_eq!(highlighted.attributes.foreground_color, Some(Color::RED.with_alpha(0.5)));
    assert_eq!(highlighted.attributes.background_color, Some(Color::WHITE.with_alpha(0.5)));

    let plain = label.attributes(&[AttributeKey::Font]);
    assert!(plain.font.is_some());
    assert_eq!(plain.foreground_color, None);
    assert_eq!(plain.paragraph_style, None);
}

// ========== Navigation Bar ==========

#[test]
fn navigation_bar_specifier_fields() {
    let theme = sample();
    let bar = theme.navigation_bar_specifier("navbar").unwrap();

    assert!(bar.translucent);
    assert_eq!(bar.bar_style, BarStyle::Black);
    assert_eq!(bar.bar_color, Some(Color::WHITE));
    assert_eq!(bar.tint_color, Some(Color::GREEN));
    assert_eq!(bar.popover_background_color, None);

    let title = bar.title_label.as_ref().unwrap();
    assert_eq!(title.transform("home"), "HOME");

    let buttons = bar.button_attributes().unwrap();
    assert_eq!(buttons.font.map(|font| font.size), Some(12.0));
    assert_eq!(buttons.foreground_color, Some(Color::RED));
    assert_eq!(buttons.background_color, None);
}

#[test]
fn navigation_bar_defaults() {
    let theme = sample();
    let bar = theme.navigation_bar_specifier("plainNavbar").unwrap();

    assert!(!bar.translucent);
    assert_eq!(bar.bar_style, BarStyle::Default);
    assert!(bar.title_label.is_none());
    assert!(bar.title_attributes().is_none());
}

#[test]
fn navigation_bar_cache_keys_include_adjustment() {
    let theme = sample();
    let plain = theme.navigation_bar_specifier("navbar").unwrap();
    let larger = theme
        .navigation_bar_specifier_with_adjustment("navbar", SizeAdjustment::Proportional(50.0))
        .unwrap();

    let size = |bar: &swatch_theme::NavigationBarSpecifier| {
        bar.buttons_label.as_ref().map(|label| label.font.size)
    };
    assert_eq!(size(&plain), Some(12.0));
    assert_eq!(size(&larger), Some(18.0));
}

// ========== Dashed Border ==========

#[test]
fn dashed_border_specifier_fields() {
    let theme = sample();
    let border = theme.dashed_border_specifier("dashed").unwrap();

    assert_eq!(border.line_width, 2.0);
    assert_eq!(border.color, Some(Color::RED));
    assert_eq!(border.corner_radius, 6.0);
    assert_eq!(border.dash_pattern(), Some([4.0, 2.0]));
    assert_eq!(border.insets, EdgeInsets::uniform(1.0));
}

// ========== Animation ==========

#[test]
fn animation_specifier_fields() {
    let theme = sample();
    let fade = theme.animation_specifier("fade").unwrap();

    assert_eq!(fade.duration, 0.3);
    assert_eq!(fade.delay, 0.1);
    assert_eq!(fade.curve, Easing::EaseIn);
    assert!((fade.duration().as_secs_f64() - 0.3).abs() < 1e-6);
    assert!(fade.delay() < Duration::from_millis(101));

    let snap = theme.animation_specifier("snap").unwrap();
    assert_eq!(snap.delay, 0.0);
    assert_eq!(snap.curve, Easing::EaseInOut);
}
