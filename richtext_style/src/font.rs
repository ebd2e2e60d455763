// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Font selection: faces, families and the metrics they are measured with.

use alloc::sync::Arc;
use core::fmt;
use core::iter::Peekable;
use core::str::Chars;

use crate::Error;

/// Visual slant of a font face.
///
/// In CSS terms this is the `font-style` property; the schema calls it `text-style`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// An upright face.
    #[default]
    Normal,
    /// An italic face.
    Italic,
}

impl FontStyle {
    /// Parses a `text-style` keyword.
    ///
    /// ```
    /// use richtext_style::FontStyle;
    ///
    /// assert_eq!(FontStyle::parse("italic"), Some(FontStyle::Italic));
    /// assert_eq!(FontStyle::parse("oblique"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "italic" => Self::Italic,
            _ => return None,
        })
    }
}

/// Visual weight of a font face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// The regular weight.
    #[default]
    Normal,
    /// The bold weight.
    Bold,
}

impl FontWeight {
    /// Parses a `font-weight` keyword.
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.trim() {
            "normal" => Self::Normal,
            "bold" => Self::Bold,
            _ => return None,
        })
    }
}

/// A character the metrics provider has no advance width for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MissingGlyph(pub char);

impl fmt::Display for MissingGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no glyph metrics for {:?} (U+{:04X})", self.0, self.0 as u32)
    }
}

impl core::error::Error for MissingGlyph {}

/// Glyph and vertical metrics of a single font face.
///
/// All values are in font units; [`units_per_em`](Self::units_per_em) relates them to the font
/// size. Implementations are provided by the layout crate (an in-memory table and a font file
/// reader); anything able to answer these questions can be used as a face.
pub trait FontMetrics {
    /// The PostScript name the face is selected by in emitted output.
    fn postscript_name(&self) -> &str;

    /// Font units per em. Type 1 metrics use 1000.
    fn units_per_em(&self) -> f32 {
        1000.0
    }

    /// Height above the baseline, in font units.
    fn ascender(&self) -> f32;

    /// Depth below the baseline as a positive distance, in font units.
    fn descender(&self) -> f32;

    /// Advance width of `ch`, or `None` if the face has no glyph for it.
    fn advance(&self, ch: char) -> Option<f32>;

    /// Pair kerning adjustment between `left` and a following `right`.
    fn kerning(&self, left: char, right: char) -> f32;

    /// Advance of `ch` at a font size of `scale * units_per_em`, in output units.
    ///
    /// The kerning adjustment towards `next` is included when `kerning` is set; there is no
    /// adjustment after the last character of a run. `char_spacing` is added unscaled.
    fn char_advance(
        &self,
        ch: char,
        next: Option<char>,
        scale: f32,
        kerning: bool,
        char_spacing: f32,
    ) -> Result<f32, MissingGlyph> {
        let advance = self.advance(ch).ok_or(MissingGlyph(ch))?;
        let kern = match next {
            Some(next) if kerning => self.kerning(ch, next),
            _ => 0.0,
        };
        Ok((advance + kern) * scale + char_spacing)
    }

    /// Width of `text` set at `size`: the sum of its [character advances](Self::char_advance).
    fn string_width(
        &self,
        text: &str,
        size: f32,
        kerning: bool,
        char_spacing: f32,
    ) -> Result<f32, MissingGlyph> {
        let scale = size / self.units_per_em();
        let mut width = 0.0;
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            width += self.char_advance(ch, chars.peek().copied(), scale, kerning, char_spacing)?;
        }
        Ok(width)
    }
}

/// A shared handle to one concrete font face.
///
/// Faces compare equal when they are the same allocation or carry the same PostScript name.
#[derive(Clone)]
pub struct FontFace(Arc<dyn FontMetrics + Send + Sync>);

impl FontFace {
    /// Wraps a metrics provider in a face handle.
    pub fn new(metrics: impl FontMetrics + Send + Sync + 'static) -> Self {
        Self(Arc::new(metrics))
    }

    /// Wraps an already shared metrics provider.
    pub fn from_arc(metrics: Arc<dyn FontMetrics + Send + Sync>) -> Self {
        Self(metrics)
    }

    /// Returns the face's PostScript name.
    pub fn postscript_name(&self) -> &str {
        self.0.postscript_name()
    }

    /// Returns the face's metrics provider.
    pub fn metrics(&self) -> &(dyn FontMetrics + Send + Sync) {
        &*self.0
    }

    /// Returns the per-character advances of `text` set at `size`.
    pub fn char_advances<'a>(
        &'a self,
        text: &'a str,
        size: f32,
        kerning: bool,
        char_spacing: f32,
    ) -> CharAdvances<'a> {
        CharAdvances {
            metrics: self.metrics(),
            chars: text.chars().peekable(),
            scale: size / self.0.units_per_em(),
            kerning,
            char_spacing,
        }
    }
}

impl PartialEq for FontFace {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.postscript_name() == other.postscript_name()
    }
}

impl fmt::Debug for FontFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FontFace")
            .field(&self.postscript_name())
            .finish()
    }
}

/// Iterator over the advances of a run of characters, see [`FontFace::char_advances`].
#[derive(Clone)]
pub struct CharAdvances<'a> {
    metrics: &'a (dyn FontMetrics + Send + Sync),
    chars: Peekable<Chars<'a>>,
    scale: f32,
    kerning: bool,
    char_spacing: f32,
}

impl fmt::Debug for CharAdvances<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CharAdvances")
            .field("face", &self.metrics.postscript_name())
            .field("scale", &self.scale)
            .field("kerning", &self.kerning)
            .field("char_spacing", &self.char_spacing)
            .finish_non_exhaustive()
    }
}

impl Iterator for CharAdvances<'_> {
    type Item = Result<f32, MissingGlyph>;

    fn next(&mut self) -> Option<Self::Item> {
        let ch = self.chars.next()?;
        let next = self.chars.peek().copied();
        Some(
            self.metrics
                .char_advance(ch, next, self.scale, self.kerning, self.char_spacing),
        )
    }
}

/// A set of four faces selected by style and weight.
///
/// Faces that are not supplied default to the regular face, which is always present.
#[derive(Clone, Debug, PartialEq)]
pub struct FontFamily {
    regular: FontFace,
    italic: FontFace,
    bold: FontFace,
    bold_italic: FontFace,
}

impl FontFamily {
    /// Creates a family whose every face is `regular`.
    pub fn new(regular: FontFace) -> Self {
        Self {
            italic: regular.clone(),
            bold: regular.clone(),
            bold_italic: regular.clone(),
            regular,
        }
    }

    /// Creates a family from optional faces.
    ///
    /// Fails with [`MissingRequiredValue`](crate::ErrorKind::MissingRequiredValue) when there is
    /// no regular face.
    pub fn from_faces(
        regular: Option<FontFace>,
        italic: Option<FontFace>,
        bold: Option<FontFace>,
        bold_italic: Option<FontFace>,
    ) -> Result<Self, Error> {
        let regular = regular.ok_or_else(|| Error::missing_required_value("regular"))?;
        Ok(Self {
            italic: italic.unwrap_or_else(|| regular.clone()),
            bold: bold.unwrap_or_else(|| regular.clone()),
            bold_italic: bold_italic.unwrap_or_else(|| regular.clone()),
            regular,
        })
    }

    /// Sets the italic face.
    pub fn with_italic(mut self, face: FontFace) -> Self {
        self.italic = face;
        self
    }

    /// Sets the bold face.
    pub fn with_bold(mut self, face: FontFace) -> Self {
        self.bold = face;
        self
    }

    /// Sets the bold italic face.
    pub fn with_bold_italic(mut self, face: FontFace) -> Self {
        self.bold_italic = face;
        self
    }

    /// Returns the regular face.
    pub fn regular(&self) -> &FontFace {
        &self.regular
    }

    /// Returns the face for the given style and weight.
    pub fn face(&self, style: FontStyle, weight: FontWeight) -> &FontFace {
        match (style, weight) {
            (FontStyle::Normal, FontWeight::Normal) => &self.regular,
            (FontStyle::Italic, FontWeight::Normal) => &self.italic,
            (FontStyle::Normal, FontWeight::Bold) => &self.bold,
            (FontStyle::Italic, FontWeight::Bold) => &self.bold_italic,
        }
    }
}
