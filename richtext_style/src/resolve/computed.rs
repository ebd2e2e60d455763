// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

use crate::value::check_finite;
use crate::{
    Background, Edges, Error, FontFace, FontFamily, FontStyle, FontWeight, ListStyle, Property,
    Style, TextAlign, Value,
};

/// A fully resolved style: every property of the schema with its effective value.
///
/// This is computed on demand by [`ComputedStyle::from_chain`] and never stored on a node.
#[derive(Clone, Debug, PartialEq)]
pub struct ComputedStyle {
    pub(crate) font_family: FontFamily,
    pub(crate) font_size: f32,
    pub(crate) font_weight: FontWeight,
    pub(crate) text_style: FontStyle,
    pub(crate) line_height: f32,
    pub(crate) kerning: bool,
    pub(crate) char_spacing: f32,
    pub(crate) color: Color,
    pub(crate) text_background: Option<Background>,
    pub(crate) margin: Edges,
    pub(crate) padding: Edges,
    pub(crate) background: Option<Background>,
    pub(crate) list_style: ListStyle,
    pub(crate) text_align: TextAlign,
}

// Looks up the nearest declaration of `$property` and unwraps the schema's value variant.
macro_rules! take {
    ($slots:expr, $property:expr, $variant:ident) => {
        match resolved(&$slots, $property)? {
            Value::$variant(value) => value,
            _ => return Err(Error::type_mismatch($property.name(), $property.kind())),
        }
    };
}

impl ComputedStyle {
    /// Resolves every property along `chain` (nearest style first) in a single walk.
    pub fn from_chain<'a, I>(chain: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = &'a Style>,
    {
        let mut slots: [Option<&'a Value>; Property::ALL.len()] = [None; Property::ALL.len()];
        for style in chain {
            for (property, value) in style.iter() {
                let slot = &mut slots[property as usize];
                if slot.is_none() {
                    *slot = Some(value);
                }
            }
        }

        Ok(Self {
            font_family: take!(slots, Property::FontFamily, FontFamily),
            font_size: take!(slots, Property::FontSize, Number),
            font_weight: take!(slots, Property::FontWeight, FontWeight),
            text_style: take!(slots, Property::TextStyle, FontStyle),
            line_height: take!(slots, Property::LineHeight, Number),
            kerning: take!(slots, Property::Kerning, Bool),
            char_spacing: take!(slots, Property::CharSpacing, Number),
            color: take!(slots, Property::Color, Color),
            text_background: take!(slots, Property::TextBackground, Background),
            margin: take!(slots, Property::Margin, Edges),
            padding: take!(slots, Property::Padding, Edges),
            background: take!(slots, Property::Background, Background),
            list_style: take!(slots, Property::ListStyle, ListStyle),
            text_align: take!(slots, Property::TextAlign, TextAlign),
        })
    }

    /// Returns the effective value of `property`.
    pub fn get(&self, property: Property) -> Value {
        match property {
            Property::FontFamily => Value::FontFamily(self.font_family.clone()),
            Property::FontSize => Value::Number(self.font_size),
            Property::FontWeight => Value::FontWeight(self.font_weight),
            Property::TextStyle => Value::FontStyle(self.text_style),
            Property::LineHeight => Value::Number(self.line_height),
            Property::Kerning => Value::Bool(self.kerning),
            Property::CharSpacing => Value::Number(self.char_spacing),
            Property::Color => Value::Color(self.color),
            Property::TextBackground => Value::Background(self.text_background),
            Property::Margin => Value::Edges(self.margin),
            Property::Padding => Value::Edges(self.padding),
            Property::Background => Value::Background(self.background),
            Property::ListStyle => Value::ListStyle(self.list_style),
            Property::TextAlign => Value::TextAlign(self.text_align),
        }
    }

    /// Returns the face selected by the family, `text-style` and `font-weight`.
    #[inline]
    pub fn font_face(&self) -> &FontFace {
        self.font_family.face(self.text_style, self.font_weight)
    }

    /// Returns the computed font family.
    #[inline]
    pub const fn font_family(&self) -> &FontFamily {
        &self.font_family
    }

    /// Returns the computed font size.
    #[inline]
    pub const fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the computed font weight.
    #[inline]
    pub const fn font_weight(&self) -> FontWeight {
        self.font_weight
    }

    /// Returns the computed text style.
    #[inline]
    pub const fn text_style(&self) -> FontStyle {
        self.text_style
    }

    /// Returns the computed line height.
    #[inline]
    pub const fn line_height(&self) -> f32 {
        self.line_height
    }

    /// Returns whether pair kerning is applied.
    #[inline]
    pub const fn kerning(&self) -> bool {
        self.kerning
    }

    /// Returns the extra advance added after every character.
    #[inline]
    pub const fn char_spacing(&self) -> f32 {
        self.char_spacing
    }

    /// Returns the glyph fill color.
    #[inline]
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Returns the text background, if any.
    #[inline]
    pub const fn text_background(&self) -> Option<Background> {
        self.text_background
    }

    /// Returns the box margins.
    #[inline]
    pub const fn margin(&self) -> Edges {
        self.margin
    }

    /// Returns the box padding.
    #[inline]
    pub const fn padding(&self) -> Edges {
        self.padding
    }

    /// Returns the box background, if any.
    #[inline]
    pub const fn background(&self) -> Option<Background> {
        self.background
    }

    /// Returns the list marker style.
    #[inline]
    pub const fn list_style(&self) -> ListStyle {
        self.list_style
    }

    /// Returns the text alignment.
    #[inline]
    pub const fn text_align(&self) -> TextAlign {
        self.text_align
    }
}

fn resolved(slots: &[Option<&Value>], property: Property) -> Result<Value, Error> {
    match slots[property as usize] {
        Some(value) => check_finite(property, value.clone()),
        None => property
            .initial()
            .ok_or_else(|| Error::missing_required_value(property.name())),
    }
}
