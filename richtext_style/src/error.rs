// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use crate::ValueKind;

/// Error type for style assignment and resolution.
///
/// Carries a non-exhaustive [`ErrorKind`] plus the name of the property involved and, for type
/// errors, the kind of value the schema expected.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The property name as given by the caller (or as declared by the schema).
    property: String,

    /// The value kind required by the schema, for [`ErrorKind::TypeMismatch`].
    expected: Option<ValueKind>,
}

impl Error {
    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The name of the property that failed.
    pub fn property(&self) -> &str {
        &self.property
    }

    /// The value kind the schema expected, for type mismatches.
    pub fn expected(&self) -> Option<ValueKind> {
        self.expected
    }

    pub(crate) fn unknown_property(name: &str) -> Self {
        Self {
            kind: ErrorKind::UnknownProperty,
            property: name.into(),
            expected: None,
        }
    }

    pub(crate) fn type_mismatch(name: &str, expected: ValueKind) -> Self {
        Self {
            kind: ErrorKind::TypeMismatch,
            property: name.into(),
            expected: Some(expected),
        }
    }

    pub(crate) fn invalid_value(name: &str) -> Self {
        Self {
            kind: ErrorKind::InvalidValue,
            property: name.into(),
            expected: None,
        }
    }

    /// Creates a [`ErrorKind::MissingRequiredValue`] error for `name`.
    pub fn missing_required_value(name: &str) -> Self {
        Self {
            kind: ErrorKind::MissingRequiredValue,
            property: name.into(),
            expected: None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            ErrorKind::UnknownProperty => write!(f, "unknown style property `{}`", self.property),
            ErrorKind::TypeMismatch => match self.expected {
                Some(expected) => write!(
                    f,
                    "style property `{}` expects a value of kind {}",
                    self.property, expected
                ),
                None => write!(f, "wrong value type for style property `{}`", self.property),
            },
            ErrorKind::InvalidValue => {
                write!(f, "value not accepted for style property `{}`", self.property)
            }
            ErrorKind::MissingRequiredValue => write!(
                f,
                "no value supplied for required style property `{}`",
                self.property
            ),
        }
    }
}

impl core::error::Error for Error {}

/// The non-exhaustive category of a style error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The property name is not part of the schema.
    UnknownProperty,

    /// The value has a type the property's schema cannot convert.
    TypeMismatch,

    /// The value has an acceptable type but is rejected by the schema's constraint
    /// (unknown keyword, non-finite number, wrong tuple length).
    InvalidValue,

    /// No node on the resolution chain supplies a value for a required property.
    MissingRequiredValue,
}
