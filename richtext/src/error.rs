// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use richtext_style::MissingGlyph;

use crate::NodeId;

/// Error type for tree construction, style resolution, measurement and rendering.
///
/// Every error carries a non-exhaustive [`ErrorKind`]. Depending on the kind it also names the
/// node involved, the offending character, and the underlying style error, which is exposed as
/// the [`source`](core::error::Error::source).
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    /// The non-exhaustive category describing this error.
    kind: ErrorKind,

    /// The node the failing operation was applied to, when known.
    node: Option<NodeId>,

    /// The character that could not be measured or encoded.
    character: Option<char>,

    /// The style error this error was converted from.
    style: Option<richtext_style::Error>,
}

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            node: None,
            character: None,
            style: None,
        }
    }

    pub(crate) fn with_node(mut self, node: NodeId) -> Self {
        if self.node.is_none() {
            self.node = Some(node);
        }
        self
    }

    pub(crate) fn with_character(mut self, character: char) -> Self {
        self.character = Some(character);
        self
    }

    /// The machine-readable category for this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The node the failing operation was applied to.
    ///
    /// For insertion errors this is the child being inserted; for resolution and measurement
    /// errors it is the node being resolved or measured.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }

    /// The character that has no glyph metrics or cannot be encoded in the output.
    pub fn character(&self) -> Option<char> {
        self.character
    }

    /// The style error this error was raised from, if any.
    pub fn style_error(&self) -> Option<&richtext_style::Error> {
        self.style.as_ref()
    }
}

impl From<richtext_style::Error> for Error {
    fn from(err: richtext_style::Error) -> Self {
        use richtext_style::ErrorKind as StyleKind;

        let kind = match err.kind() {
            StyleKind::UnknownProperty => ErrorKind::UnknownProperty,
            StyleKind::TypeMismatch => ErrorKind::TypeMismatch,
            StyleKind::MissingRequiredValue => ErrorKind::MissingRequiredValue,
            _ => ErrorKind::InvalidValue,
        };
        Self {
            style: Some(err),
            ..Self::new(kind)
        }
    }
}

impl From<MissingGlyph> for Error {
    fn from(MissingGlyph(ch): MissingGlyph) -> Self {
        Self::new(ErrorKind::MissingGlyphMetric).with_character(ch)
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::new(ErrorKind::Write)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(style) = &self.style {
            write!(f, "{style}")?;
        } else {
            match self.kind {
                ErrorKind::InvalidChildKind => write!(f, "child kind not allowed under parent")?,
                ErrorKind::AlreadyParented => write!(f, "node has already been inserted")?,
                ErrorKind::WouldCreateCycle => {
                    write!(f, "node cannot be inserted into its own subtree")?;
                }
                ErrorKind::IndexOutOfBounds => write!(f, "index out of bounds")?,
                ErrorKind::WrongNodeKind => write!(f, "node has the wrong kind for this view")?,
                ErrorKind::EmptyRootStyle => write!(f, "the root style must not be empty")?,
                ErrorKind::EmptySyllable => write!(f, "syllable text must not be empty")?,
                ErrorKind::MisplacedSoftBreak => {
                    write!(f, "a syllable may contain at most one soft hyphen")?;
                }
                ErrorKind::UnknownProperty => write!(f, "unknown style property")?,
                ErrorKind::TypeMismatch => write!(f, "style value has the wrong type")?,
                ErrorKind::InvalidValue => write!(f, "style value not accepted")?,
                ErrorKind::MissingRequiredValue => write!(f, "required style value missing")?,
                ErrorKind::MissingGlyphMetric => write!(f, "no glyph metrics for character")?,
                ErrorKind::UnencodableCharacter => {
                    write!(f, "character cannot be encoded in a PostScript string")?;
                }
                ErrorKind::InvalidFontData => write!(f, "font data could not be read")?,
                ErrorKind::Write => write!(f, "writing to the sink failed")?,
            }
        }
        if let Some(ch) = self.character {
            write!(f, " ({:?}, U+{:04X})", ch, ch as u32)?;
        }
        if let Some(node) = self.node {
            write!(f, " at node {}", node.index())?;
        }
        Ok(())
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.style
            .as_ref()
            .map(|err| err as &(dyn core::error::Error + 'static))
    }
}

/// The non-exhaustive category of an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The child's kind is not permitted under the parent's kind.
    InvalidChildKind,

    /// The child already has (or once had) a parent.
    AlreadyParented,

    /// The child is the parent itself or one of its ancestors.
    WouldCreateCycle,

    /// An insertion position or start index is past the end of the child list.
    IndexOutOfBounds,

    /// A view was requested for a node of a different kind.
    WrongNodeKind,

    /// The document root was given an empty style.
    EmptyRootStyle,

    /// A syllable was created from empty text, or from nothing but a soft hyphen.
    EmptySyllable,

    /// A syllable's text contains more than one soft hyphen.
    MisplacedSoftBreak,

    /// A property name is not part of the style schema.
    UnknownProperty,

    /// A style value has a type the schema cannot convert.
    TypeMismatch,

    /// A style value has an acceptable type but unacceptable content.
    InvalidValue,

    /// No node on the resolution chain supplies a required property.
    MissingRequiredValue,

    /// The font has no advance width for a character.
    MissingGlyphMetric,

    /// A character is outside the single-byte range of PostScript string literals.
    UnencodableCharacter,

    /// Font file data could not be parsed.
    InvalidFontData,

    /// The sink reported a write failure.
    Write,
}
