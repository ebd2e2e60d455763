// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Typed property values and the conversions applied on dynamic assignment.

use core::fmt;

use peniko::color::{parse_color, Srgb};
use peniko::Color;

use crate::{Error, FontFamily, FontStyle, FontWeight, Property};

/// Top, right, bottom and left lengths of a box edge property.
pub type Edges = [f32; 4];

/// A solid background painted behind a box or a glyph run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Background {
    color: Color,
}

impl Background {
    /// Creates a background filled with `color`.
    pub const fn solid(color: Color) -> Self {
        Self { color }
    }

    /// Returns the fill color.
    pub const fn color(&self) -> Color {
        self.color
    }
}

/// The marker style of list paragraphs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListStyle {
    /// No marker.
    #[default]
    None,
    /// A filled bullet.
    Disc,
    /// A hollow bullet.
    Circle,
    /// A filled square.
    Square,
    /// Decimal numbering.
    Decimal,
}

impl ListStyle {
    /// Parses a list style keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "none" => Self::None,
            "disc" => Self::Disc,
            "circle" => Self::Circle,
            "square" => Self::Square,
            "decimal" => Self::Decimal,
            _ => return None,
        })
    }
}

/// Horizontal placement of the words of a line.
///
/// All four values are accepted, but words are currently always placed left to right from the
/// start of the line; `Right`, `Center` and `Justify` produce the same positions as `Left`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Words start at the left edge.
    #[default]
    Left,
    /// Words end at the right edge.
    Right,
    /// Words are centered.
    Center,
    /// Inter-word space is stretched to fill the line.
    Justify,
}

impl TextAlign {
    /// Parses a `text-align` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "left" => Self::Left,
            "right" => Self::Right,
            "center" => Self::Center,
            "justify" => Self::Justify,
            _ => return None,
        })
    }
}

/// The kind of a [`Value`], as declared by the schema for each [`Property`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A [`FontFamily`].
    FontFamily,
    /// A finite `f32`.
    Number,
    /// A boolean flag.
    Bool,
    /// A [`FontWeight`].
    FontWeight,
    /// A [`FontStyle`].
    FontStyle,
    /// A [`Color`].
    Color,
    /// An optional [`Background`].
    Background,
    /// Four finite lengths.
    Edges,
    /// A [`ListStyle`].
    ListStyle,
    /// A [`TextAlign`].
    TextAlign,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FontFamily => "font family",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::FontWeight => "font weight",
            Self::FontStyle => "font style",
            Self::Color => "color",
            Self::Background => "background",
            Self::Edges => "edges",
            Self::ListStyle => "list style",
            Self::TextAlign => "text alignment",
        })
    }
}

/// A typed, schema-checked property value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// See [`ValueKind::FontFamily`].
    FontFamily(FontFamily),
    /// See [`ValueKind::Number`].
    Number(f32),
    /// See [`ValueKind::Bool`].
    Bool(bool),
    /// See [`ValueKind::FontWeight`].
    FontWeight(FontWeight),
    /// See [`ValueKind::FontStyle`].
    FontStyle(FontStyle),
    /// See [`ValueKind::Color`].
    Color(Color),
    /// See [`ValueKind::Background`].
    Background(Option<Background>),
    /// See [`ValueKind::Edges`].
    Edges(Edges),
    /// See [`ValueKind::ListStyle`].
    ListStyle(ListStyle),
    /// See [`ValueKind::TextAlign`].
    TextAlign(TextAlign),
}

impl Value {
    /// Returns the kind of this value.
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::FontFamily(_) => ValueKind::FontFamily,
            Self::Number(_) => ValueKind::Number,
            Self::Bool(_) => ValueKind::Bool,
            Self::FontWeight(_) => ValueKind::FontWeight,
            Self::FontStyle(_) => ValueKind::FontStyle,
            Self::Color(_) => ValueKind::Color,
            Self::Background(_) => ValueKind::Background,
            Self::Edges(_) => ValueKind::Edges,
            Self::ListStyle(_) => ValueKind::ListStyle,
            Self::TextAlign(_) => ValueKind::TextAlign,
        }
    }

    /// Returns the number, if this is a [`Value::Number`].
    pub const fn as_number(&self) -> Option<f32> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the flag, if this is a [`Value::Bool`].
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the font family, if this is a [`Value::FontFamily`].
    pub const fn as_font_family(&self) -> Option<&FontFamily> {
        match self {
            Self::FontFamily(value) => Some(value),
            _ => None,
        }
    }
}

/// An unchecked value offered for dynamic assignment with [`Style::set`](crate::Style::set).
///
/// The schema converts it into a [`Value`] of the property's kind: numbers and numeric strings
/// become `f32`, keywords become their enum values, and CSS color strings are parsed.
#[derive(Clone, Debug, PartialEq)]
pub enum RawValue<'a> {
    /// An integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A boolean.
    Bool(bool),
    /// A keyword, number or color written as text.
    Str(&'a str),
    /// A list of numbers (for edge properties).
    Numbers(&'a [f64]),
    /// The absence of a value (for optional properties).
    None,
    /// An already typed value.
    Value(Value),
}

impl From<i32> for RawValue<'_> {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for RawValue<'_> {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f32> for RawValue<'_> {
    fn from(value: f32) -> Self {
        Self::Float(value.into())
    }
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for RawValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value)
    }
}

impl<'a> From<&'a [f64]> for RawValue<'a> {
    fn from(value: &'a [f64]) -> Self {
        Self::Numbers(value)
    }
}

impl From<Value> for RawValue<'_> {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<FontFamily> for RawValue<'_> {
    fn from(value: FontFamily) -> Self {
        Self::Value(Value::FontFamily(value))
    }
}

impl From<FontWeight> for RawValue<'_> {
    fn from(value: FontWeight) -> Self {
        Self::Value(Value::FontWeight(value))
    }
}

impl From<FontStyle> for RawValue<'_> {
    fn from(value: FontStyle) -> Self {
        Self::Value(Value::FontStyle(value))
    }
}

impl From<Color> for RawValue<'_> {
    fn from(value: Color) -> Self {
        Self::Value(Value::Color(value))
    }
}

impl From<Background> for RawValue<'_> {
    fn from(value: Background) -> Self {
        Self::Value(Value::Background(Some(value)))
    }
}

impl From<Edges> for RawValue<'_> {
    fn from(value: Edges) -> Self {
        Self::Value(Value::Edges(value))
    }
}

impl From<ListStyle> for RawValue<'_> {
    fn from(value: ListStyle) -> Self {
        Self::Value(Value::ListStyle(value))
    }
}

impl From<TextAlign> for RawValue<'_> {
    fn from(value: TextAlign) -> Self {
        Self::Value(Value::TextAlign(value))
    }
}

/// Converts `raw` into a value of `property`'s kind, applying the schema's coercions.
pub(crate) fn convert(property: Property, raw: RawValue<'_>) -> Result<Value, Error> {
    let name = property.name();
    let kind = property.kind();
    let invalid = || Error::invalid_value(name);

    let value = match (kind, raw) {
        (_, RawValue::Value(value)) if value.kind() == kind => value,
        (ValueKind::Number, RawValue::Int(n)) => Value::Number(n as f32),
        #[expect(clippy::cast_possible_truncation, reason = "style numbers are stored as f32")]
        (ValueKind::Number, RawValue::Float(n)) => Value::Number(n as f32),
        (ValueKind::Number, RawValue::Str(s)) => {
            Value::Number(s.trim().parse::<f32>().map_err(|_| invalid())?)
        }
        (ValueKind::Bool, RawValue::Bool(b)) => Value::Bool(b),
        (ValueKind::Bool, RawValue::Int(n)) => Value::Bool(n != 0),
        (ValueKind::Bool, RawValue::Str(s)) => Value::Bool(match s.trim() {
            "true" => true,
            "false" => false,
            _ => return Err(invalid()),
        }),
        (ValueKind::FontWeight, RawValue::Str(s)) => {
            Value::FontWeight(FontWeight::parse(s).ok_or_else(invalid)?)
        }
        (ValueKind::FontStyle, RawValue::Str(s)) => {
            Value::FontStyle(FontStyle::parse(s).ok_or_else(invalid)?)
        }
        (ValueKind::ListStyle, RawValue::Str(s)) => {
            Value::ListStyle(ListStyle::parse(s).ok_or_else(invalid)?)
        }
        (ValueKind::TextAlign, RawValue::Str(s)) => {
            Value::TextAlign(TextAlign::parse(s).ok_or_else(invalid)?)
        }
        (ValueKind::Color, RawValue::Str(s)) => Value::Color(
            parse_color(s.trim())
                .map_err(|_| invalid())?
                .to_alpha_color::<Srgb>(),
        ),
        (ValueKind::Background, RawValue::None) => Value::Background(None),
        (ValueKind::Background, RawValue::Value(Value::Color(color))) => {
            Value::Background(Some(Background::solid(color)))
        }
        (ValueKind::Edges, RawValue::Numbers(numbers)) => {
            let [top, right, bottom, left] = numbers else {
                return Err(invalid());
            };
            #[expect(
                clippy::cast_possible_truncation,
                reason = "style numbers are stored as f32"
            )]
            Value::Edges([*top as f32, *right as f32, *bottom as f32, *left as f32])
        }
        _ => return Err(Error::type_mismatch(name, kind)),
    };
    check_finite(property, value)
}

/// Rejects numbers that are NaN or infinite with [`InvalidValue`](crate::ErrorKind::InvalidValue).
///
/// Applied on assignment through the schema and again on resolution, which catches values
/// stored by the typed [`Style`](crate::Style) setters.
pub(crate) fn check_finite(property: Property, value: Value) -> Result<Value, Error> {
    let finite = match &value {
        Value::Number(n) => n.is_finite(),
        Value::Edges(edges) => edges.iter().all(|n| n.is_finite()),
        _ => true,
    };
    if finite {
        Ok(value)
    } else {
        Err(Error::invalid_value(property.name()))
    }
}
