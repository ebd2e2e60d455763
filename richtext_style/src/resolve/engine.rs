// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::value::check_finite;
use crate::{Error, Property, Style, Value};

/// Resolves `property` along `chain` (nearest style first).
///
/// A non-finite number found on the chain fails with
/// [`InvalidValue`](crate::ErrorKind::InvalidValue).
///
/// ```
/// use richtext_style::{cascade, Property, Style, Value};
///
/// let root = Style::new().font_size(12.0);
/// let child = Style::new().font_size(9.0);
/// let grandchild = Style::new();
///
/// let chain = [&grandchild, &child, &root];
/// assert_eq!(cascade(chain, Property::FontSize).unwrap(), Value::Number(9.0));
/// // `char-spacing` is set nowhere and falls back to the schema's initial value.
/// assert_eq!(cascade(chain, Property::CharSpacing).unwrap(), Value::Number(0.0));
/// // `line-height` is required.
/// assert!(cascade(chain, Property::LineHeight).is_err());
/// ```
pub fn cascade<'a, I>(chain: I, property: Property) -> Result<Value, Error>
where
    I: IntoIterator<Item = &'a Style>,
{
    let value = chain
        .into_iter()
        .find_map(|style| style.get(property))
        .cloned()
        .or_else(|| property.initial())
        .ok_or_else(|| Error::missing_required_value(property.name()))?;
    check_finite(property, value)
}

/// Resolves the property called `name` along `chain`.
///
/// Fails with [`UnknownProperty`](crate::ErrorKind::UnknownProperty) if the schema has no such
/// property.
pub fn cascade_named<'a, I>(chain: I, name: &str) -> Result<Value, Error>
where
    I: IntoIterator<Item = &'a Style>,
{
    let property = Property::from_name(name).ok_or_else(|| Error::unknown_property(name))?;
    cascade(chain, property)
}
