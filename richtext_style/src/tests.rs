// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::color::palette::css::{BLACK, RED};
use peniko::Color;

use crate::{
    cascade, cascade_named, Background, ComputedStyle, ErrorKind, FontFace, FontFamily,
    FontMetrics, FontStyle, FontWeight, ListStyle, MissingGlyph, Property, RawValue, Style,
    TextAlign, Value, ValueKind,
};

/// A monospaced face: every ASCII letter is 500 units wide, `AV` kerns by -80.
#[derive(Debug)]
struct Mono(&'static str);

impl FontMetrics for Mono {
    fn postscript_name(&self) -> &str {
        self.0
    }

    fn ascender(&self) -> f32 {
        700.0
    }

    fn descender(&self) -> f32 {
        200.0
    }

    fn advance(&self, ch: char) -> Option<f32> {
        (ch.is_ascii_alphabetic() || ch == ' ').then_some(500.0)
    }

    fn kerning(&self, left: char, right: char) -> f32 {
        if (left, right) == ('A', 'V') {
            -80.0
        } else {
            0.0
        }
    }
}

fn close(a: f32, b: f32) -> bool {
    let d = a - b;
    d < 1e-4 && d > -1e-4
}

fn family() -> FontFamily {
    FontFamily::new(FontFace::new(Mono("Mono")))
}

fn root_style() -> Style {
    Style::new()
        .font_family(family())
        .font_size(10.0)
        .line_height(12.0)
}

#[test]
fn numbers_are_coerced_to_float() {
    let mut style = Style::new();
    style.set("font-size", 11).unwrap();
    assert_eq!(style.get(Property::FontSize), Some(&Value::Number(11.0)));

    style.set("font-size", " 12.5 ").unwrap();
    assert_eq!(style.get(Property::FontSize), Some(&Value::Number(12.5)));

    style.set("char_spacing", 0.25_f32).unwrap();
    assert_eq!(style.get(Property::CharSpacing), Some(&Value::Number(0.25)));
    assert_eq!(style.len(), 2, "re-assignment must replace, not append");
}

#[test]
fn rejected_values_report_their_kind() {
    let mut style = Style::new();

    let err = style.set("font-size", true).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.expected(), Some(ValueKind::Number));
    assert_eq!(err.property(), "font-size");

    let err = style.set("font-size", "large").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    let err = style.set("line-height", f64::NAN).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    let err = style.set("font-weight", "heavy").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    let err = style.set("font-family", "Helvetica").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);

    let err = style.set("colour", "red").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownProperty);
    assert_eq!(err.property(), "colour");

    assert!(style.is_empty(), "failed assignments must not store anything");
}

#[test]
fn keywords_and_flags() {
    let style = Style::new()
        .with("font-weight", "bold")
        .and_then(|s| s.with("text-style", "italic"))
        .and_then(|s| s.with("text-align", "justify"))
        .and_then(|s| s.with("list-style", "decimal"))
        .and_then(|s| s.with("kerning", 0))
        .unwrap();

    assert_eq!(
        style.get(Property::FontWeight),
        Some(&Value::FontWeight(FontWeight::Bold))
    );
    assert_eq!(
        style.get(Property::TextStyle),
        Some(&Value::FontStyle(FontStyle::Italic))
    );
    assert_eq!(
        style.get(Property::TextAlign),
        Some(&Value::TextAlign(TextAlign::Justify))
    );
    assert_eq!(
        style.get(Property::ListStyle),
        Some(&Value::ListStyle(ListStyle::Decimal))
    );
    assert_eq!(style.get(Property::Kerning), Some(&Value::Bool(false)));

    let mut style = Style::new();
    assert_eq!(
        style.set("kerning", "maybe").unwrap_err().kind(),
        ErrorKind::InvalidValue
    );
}

#[test]
fn colors_backgrounds_and_edges() {
    let mut style = Style::new();
    style.set("color", "#ff0000").unwrap();
    assert_eq!(style.get(Property::Color), Some(&Value::Color(RED)));

    style.set("background", RawValue::None).unwrap();
    assert_eq!(style.get(Property::Background), Some(&Value::Background(None)));

    style.set("text-background", BLACK).unwrap();
    assert_eq!(
        style.get(Property::TextBackground),
        Some(&Value::Background(Some(Background::solid(BLACK))))
    );

    style.set("margin", &[1.0, 2.0, 3.0, 4.0][..]).unwrap();
    assert_eq!(
        style.get(Property::Margin),
        Some(&Value::Edges([1.0, 2.0, 3.0, 4.0]))
    );

    let err = style.set("padding", &[1.0, 2.0][..]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    let err = style.set("padding", 3.0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
}

#[test]
fn nearest_declaration_wins() {
    let root = root_style();
    let middle = Style::new().font_size(8.0).color(RED);
    let leaf = Style::new().font_size(6.0);

    let chain = [&leaf, &middle, &root];
    assert_eq!(
        cascade(chain, Property::FontSize).unwrap(),
        Value::Number(6.0)
    );
    assert_eq!(cascade(chain, Property::Color).unwrap(), Value::Color(RED));
    assert_eq!(
        cascade(chain, Property::LineHeight).unwrap(),
        Value::Number(12.0)
    );
    assert_eq!(
        cascade_named(chain, "line_height").unwrap(),
        Value::Number(12.0)
    );
    assert_eq!(
        cascade_named(chain, "leading").unwrap_err().kind(),
        ErrorKind::UnknownProperty
    );
}

#[test]
fn initial_values_and_required_properties() {
    let empty = Style::new();
    for property in Property::ALL {
        let resolved = cascade([&empty], property);
        if property.is_required() {
            let err = resolved.unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MissingRequiredValue);
            assert_eq!(err.property(), property.name());
        } else {
            let value = resolved.unwrap();
            assert_eq!(value.kind(), property.kind(), "{property} initial value");
        }
    }
    assert_eq!(
        cascade([&empty], Property::Color).unwrap(),
        Value::Color(BLACK)
    );
}

#[test]
fn computed_style_matches_per_property_cascade() {
    let root = root_style();
    let leaf = Style::new()
        .font_weight(FontWeight::Bold)
        .kerning(false)
        .text_align(TextAlign::Center);
    let chain = [&leaf, &root];

    let computed = ComputedStyle::from_chain(chain).unwrap();
    for property in Property::ALL {
        assert_eq!(
            computed.get(property),
            cascade(chain, property).unwrap(),
            "{property}"
        );
    }
    assert_eq!(computed.font_size(), 10.0);
    assert!(!computed.kerning());
    assert_eq!(computed.font_face().postscript_name(), "Mono");
}

#[test]
fn non_finite_setter_values_fail_resolution() {
    let root = root_style();
    let leaf = Style::new().font_size(f32::NAN).char_spacing(f32::INFINITY);

    let err = cascade([&leaf, &root], Property::FontSize).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);
    assert_eq!(err.property(), "font-size");
    let err = ComputedStyle::from_chain([&leaf, &root]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidValue);

    // A nearer finite declaration hides the bad one.
    let fixed = Style::new().font_size(9.0).char_spacing(0.5);
    let computed = ComputedStyle::from_chain([&fixed, &leaf, &root]).unwrap();
    assert_eq!(computed.font_size(), 9.0);
    assert_eq!(computed.char_spacing(), 0.5);
}

#[test]
fn font_family_defaults_to_regular() {
    let regular = FontFace::new(Mono("Mono"));
    let bold = FontFace::new(Mono("Mono-Bold"));

    let family = FontFamily::from_faces(Some(regular.clone()), None, Some(bold.clone()), None)
        .unwrap();
    assert_eq!(family.face(FontStyle::Normal, FontWeight::Normal), &regular);
    assert_eq!(family.face(FontStyle::Italic, FontWeight::Normal), &regular);
    assert_eq!(family.face(FontStyle::Normal, FontWeight::Bold), &bold);
    assert_eq!(family.face(FontStyle::Italic, FontWeight::Bold), &regular);

    let err = FontFamily::from_faces(None, Some(bold), None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredValue);
    assert_eq!(err.property(), "regular");
}

#[test]
fn string_width_applies_kerning_and_spacing() {
    let face = FontFace::new(Mono("Mono"));
    let metrics = face.metrics();

    // 3 × 500 units at 10pt = 15.
    assert_eq!(metrics.string_width("ABC", 10.0, false, 0.0), Ok(15.0));
    // `AV` kerns by -80 units = -0.8.
    let kerned = metrics.string_width("AV", 10.0, true, 0.0).unwrap();
    assert!(close(kerned, 9.2), "kerned width {kerned}");
    assert_eq!(metrics.string_width("AV", 10.0, false, 0.0), Ok(10.0));
    // One point of spacing after each character.
    assert_eq!(metrics.string_width("AB", 10.0, false, 1.0), Ok(12.0));

    assert_eq!(
        metrics.string_width("A1", 10.0, false, 0.0),
        Err(MissingGlyph('1'))
    );
}

#[test]
fn char_advances_sum_to_string_width() {
    let face = FontFace::new(Mono("Mono"));
    let advances: Vec<f32> = face
        .char_advances("VAV", 10.0, true, 0.5)
        .collect::<Result<_, _>>()
        .unwrap();
    // Kerning only applies to the `AV` pair, never after the last character.
    assert_eq!(advances.len(), 3);
    assert!(close(advances[0], 5.5), "{advances:?}");
    assert!(close(advances[1], 4.7), "{advances:?}");
    assert!(close(advances[2], 5.5), "{advances:?}");

    let sum: f32 = advances.iter().sum();
    let width = face.metrics().string_width("VAV", 10.0, true, 0.5).unwrap();
    assert!(close(sum, width), "{sum} != {width}");
}

#[test]
fn merged_styles_prefer_overrides() {
    let base = Style::new().font_size(10.0).color(BLACK);
    let overrides = Style::new().font_size(7.0);
    let merged = base.merged(&overrides);
    assert_eq!(merged.get(Property::FontSize), Some(&Value::Number(7.0)));
    assert_eq!(merged.get(Property::Color), Some(&Value::Color(BLACK)));
    assert_eq!(merged.len(), 2);

    let color = Color::from_rgb8(0, 0, 255);
    let mut style = Style::new().color(color);
    assert_eq!(style.remove(Property::Color), Some(Value::Color(color)));
    assert!(style.is_empty());
}
