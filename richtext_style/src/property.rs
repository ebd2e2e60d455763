// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed property vocabulary and its schema.

use core::fmt;

use peniko::color::palette::css::BLACK;

use crate::{FontStyle, FontWeight, ListStyle, TextAlign, Value, ValueKind};

/// A style property known to the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Property {
    /// `font-family`: the [`FontFamily`](crate::FontFamily) faces are taken from.
    FontFamily,
    /// `font-size` in PostScript points.
    FontSize,
    /// `font-weight`: `normal` or `bold`.
    FontWeight,
    /// `text-style`: `normal` or `italic`.
    TextStyle,
    /// `line-height` in PostScript points.
    LineHeight,
    /// `kerning`: whether pair kerning is applied.
    Kerning,
    /// `char-spacing`: extra advance added after every character.
    CharSpacing,
    /// `color`: the fill color of glyphs.
    Color,
    /// `text-background`: an optional background behind glyph runs.
    TextBackground,
    /// `margin`: top, right, bottom and left margins of a box.
    Margin,
    /// `padding`: top, right, bottom and left padding of a box.
    Padding,
    /// `background`: an optional box background.
    Background,
    /// `list-style`: the marker style of list paragraphs.
    ListStyle,
    /// `text-align`: horizontal placement of words within a line.
    TextAlign,
}

impl Property {
    /// Every property in the schema, in declaration order.
    pub const ALL: [Self; 14] = [
        Self::FontFamily,
        Self::FontSize,
        Self::FontWeight,
        Self::TextStyle,
        Self::LineHeight,
        Self::Kerning,
        Self::CharSpacing,
        Self::Color,
        Self::TextBackground,
        Self::Margin,
        Self::Padding,
        Self::Background,
        Self::ListStyle,
        Self::TextAlign,
    ];

    /// Returns the property's name as used in dynamic assignment.
    pub const fn name(self) -> &'static str {
        match self {
            Self::FontFamily => "font-family",
            Self::FontSize => "font-size",
            Self::FontWeight => "font-weight",
            Self::TextStyle => "text-style",
            Self::LineHeight => "line-height",
            Self::Kerning => "kerning",
            Self::CharSpacing => "char-spacing",
            Self::Color => "color",
            Self::TextBackground => "text-background",
            Self::Margin => "margin",
            Self::Padding => "padding",
            Self::Background => "background",
            Self::ListStyle => "list-style",
            Self::TextAlign => "text-align",
        }
    }

    /// Looks a property up by name.
    ///
    /// Underscores are accepted in place of hyphens, so `font_size` names the same property as
    /// `font-size`.
    ///
    /// ```
    /// use richtext_style::Property;
    ///
    /// assert_eq!(Property::from_name("line-height"), Some(Property::LineHeight));
    /// assert_eq!(Property::from_name("line_height"), Some(Property::LineHeight));
    /// assert_eq!(Property::from_name("leading"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|property| {
            let canonical = property.name();
            canonical.len() == name.len()
                && canonical
                    .bytes()
                    .zip(name.bytes())
                    .all(|(a, b)| a == b || (a == b'-' && b == b'_'))
        })
    }

    /// Returns the kind of value the schema stores for this property.
    pub const fn kind(self) -> ValueKind {
        match self {
            Self::FontFamily => ValueKind::FontFamily,
            Self::FontSize | Self::LineHeight | Self::CharSpacing => ValueKind::Number,
            Self::FontWeight => ValueKind::FontWeight,
            Self::TextStyle => ValueKind::FontStyle,
            Self::Kerning => ValueKind::Bool,
            Self::Color => ValueKind::Color,
            Self::TextBackground | Self::Background => ValueKind::Background,
            Self::Margin | Self::Padding => ValueKind::Edges,
            Self::ListStyle => ValueKind::ListStyle,
            Self::TextAlign => ValueKind::TextAlign,
        }
    }

    /// Returns `true` if resolution fails when no style on the chain sets this property.
    pub const fn is_required(self) -> bool {
        matches!(self, Self::FontFamily | Self::FontSize | Self::LineHeight)
    }

    /// Returns the value used when no style on the resolution chain sets this property, or
    /// `None` for required properties.
    pub fn initial(self) -> Option<Value> {
        Some(match self {
            Self::FontFamily | Self::FontSize | Self::LineHeight => return None,
            Self::FontWeight => Value::FontWeight(FontWeight::Normal),
            Self::TextStyle => Value::FontStyle(FontStyle::Normal),
            Self::Kerning => Value::Bool(true),
            Self::CharSpacing => Value::Number(0.0),
            Self::Color => Value::Color(BLACK),
            Self::TextBackground | Self::Background => Value::Background(None),
            Self::Margin | Self::Padding => Value::Edges([0.0; 4]),
            Self::ListStyle => Value::ListStyle(ListStyle::None),
            Self::TextAlign => Value::TextAlign(TextAlign::Left),
        })
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
