// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use peniko::Color;

use crate::value::convert;
use crate::{
    Background, Edges, Error, FontFamily, FontStyle, FontWeight, ListStyle, Property, RawValue,
    TextAlign, Value,
};

/// A node's local, partial style.
///
/// This is a declaration list holding at most one value per [`Property`]; setting a property
/// again replaces its earlier value in place. Values given to the typed setters are stored as
/// is, values given to [`set`](Self::set) go through the schema's conversions first. A
/// non-finite number stored by a typed setter is accepted here and fails resolution with
/// [`InvalidValue`](crate::ErrorKind::InvalidValue).
///
/// ```
/// use richtext_style::{Property, Style, Value};
///
/// let mut style = Style::new().font_size(10.0);
/// style.set("line-height", "12").unwrap();
/// assert_eq!(style.get(Property::LineHeight), Some(&Value::Number(12.0)));
/// assert!(style.set("leading", 2.0).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    declarations: Vec<(Property, Value)>,
}

impl Style {
    /// Creates an empty style (no declarations).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no property is set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Returns the number of properties set.
    #[inline]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns the locally set value of `property`, if any.
    pub fn get(&self, property: Property) -> Option<&Value> {
        self.declarations
            .iter()
            .find(|(declared, _)| *declared == property)
            .map(|(_, value)| value)
    }

    /// Returns the declarations in first-assignment order.
    pub fn iter(&self) -> impl Iterator<Item = (Property, &Value)> + '_ {
        self.declarations
            .iter()
            .map(|(property, value)| (*property, value))
    }

    /// Assigns a value to the property called `name`.
    ///
    /// Fails with [`UnknownProperty`](crate::ErrorKind::UnknownProperty) if the schema has no
    /// such property, and with [`TypeMismatch`](crate::ErrorKind::TypeMismatch) or
    /// [`InvalidValue`](crate::ErrorKind::InvalidValue) if the value cannot be converted.
    pub fn set<'a>(&mut self, name: &str, value: impl Into<RawValue<'a>>) -> Result<(), Error> {
        let property = Property::from_name(name).ok_or_else(|| Error::unknown_property(name))?;
        self.set_property(property, value)
    }

    /// Assigns a value to `property`, applying the schema's conversions.
    pub fn set_property<'a>(
        &mut self,
        property: Property,
        value: impl Into<RawValue<'a>>,
    ) -> Result<(), Error> {
        let value = convert(property, value.into())?;
        self.put(property, value);
        Ok(())
    }

    /// Builder form of [`set`](Self::set).
    pub fn with<'a>(mut self, name: &str, value: impl Into<RawValue<'a>>) -> Result<Self, Error> {
        self.set(name, value)?;
        Ok(self)
    }

    /// Removes the local value of `property`, returning it.
    pub fn remove(&mut self, property: Property) -> Option<Value> {
        let index = self
            .declarations
            .iter()
            .position(|(declared, _)| *declared == property)?;
        Some(self.declarations.remove(index).1)
    }

    /// Returns this style with every declaration of `overrides` laid over it.
    pub fn merged(&self, overrides: &Self) -> Self {
        let mut out = self.clone();
        for (property, value) in overrides.iter() {
            out.put(property, value.clone());
        }
        out
    }

    fn put(&mut self, property: Property, value: Value) {
        debug_assert_eq!(
            property.kind(),
            value.kind(),
            "typed setters must store values of the property's kind"
        );
        match self
            .declarations
            .iter_mut()
            .find(|(declared, _)| *declared == property)
        {
            Some((_, slot)) => *slot = value,
            None => self.declarations.push((property, value)),
        }
    }

    /// Sets `font-family`.
    pub fn font_family(mut self, family: FontFamily) -> Self {
        self.put(Property::FontFamily, Value::FontFamily(family));
        self
    }

    /// Sets `font-size`.
    ///
    /// The value must be finite; NaN or infinity fails resolution with
    /// [`InvalidValue`](crate::ErrorKind::InvalidValue).
    pub fn font_size(mut self, size: f32) -> Self {
        self.put(Property::FontSize, Value::Number(size));
        self
    }

    /// Sets `font-weight`.
    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.put(Property::FontWeight, Value::FontWeight(weight));
        self
    }

    /// Sets `text-style`.
    pub fn text_style(mut self, style: FontStyle) -> Self {
        self.put(Property::TextStyle, Value::FontStyle(style));
        self
    }

    /// Sets `line-height`.
    ///
    /// The value must be finite; NaN or infinity fails resolution with
    /// [`InvalidValue`](crate::ErrorKind::InvalidValue).
    pub fn line_height(mut self, height: f32) -> Self {
        self.put(Property::LineHeight, Value::Number(height));
        self
    }

    /// Sets `kerning`.
    pub fn kerning(mut self, kerning: bool) -> Self {
        self.put(Property::Kerning, Value::Bool(kerning));
        self
    }

    /// Sets `char-spacing`.
    ///
    /// The value must be finite; NaN or infinity fails resolution with
    /// [`InvalidValue`](crate::ErrorKind::InvalidValue).
    pub fn char_spacing(mut self, spacing: f32) -> Self {
        self.put(Property::CharSpacing, Value::Number(spacing));
        self
    }

    /// Sets `color`.
    pub fn color(mut self, color: Color) -> Self {
        self.put(Property::Color, Value::Color(color));
        self
    }

    /// Sets `text-background`.
    pub fn text_background(mut self, background: Option<Background>) -> Self {
        self.put(Property::TextBackground, Value::Background(background));
        self
    }

    /// Sets `margin`.
    pub fn margin(mut self, margin: Edges) -> Self {
        self.put(Property::Margin, Value::Edges(margin));
        self
    }

    /// Sets `padding`.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.put(Property::Padding, Value::Edges(padding));
        self
    }

    /// Sets `background`.
    pub fn background(mut self, background: Option<Background>) -> Self {
        self.put(Property::Background, Value::Background(background));
        self
    }

    /// Sets `list-style`.
    pub fn list_style(mut self, list_style: ListStyle) -> Self {
        self.put(Property::ListStyle, Value::ListStyle(list_style));
        self
    }

    /// Sets `text-align`.
    pub fn text_align(mut self, align: TextAlign) -> Self {
        self.put(Property::TextAlign, Value::TextAlign(align));
        self
    }
}
