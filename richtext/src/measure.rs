// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of syllables, words and paragraphs.
//!
//! The views in this module borrow a [`Document`] and measure on demand: every call resolves
//! the styles it needs by walking to the root, and nothing is cached. Widths and vertical
//! metrics are in output units (PostScript points for the PostScript sink).

use alloc::string::String;
use core::iter;
use core::ops::Range;

use richtext_style::{ComputedStyle, Style};

use crate::tree::{Document, NodeId, SyllableData};
use crate::Error;

/// Vertical metrics of a run of glyphs: the part above the median, the median itself and the
/// part below the baseline.
///
/// The three components always add up to the height of the run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cenders {
    /// Distance from the top of the run to the top of the median.
    pub ascender: f32,
    /// The part of the font size not covered by the ascender and descender.
    pub median: f32,
    /// Depth below the baseline.
    pub descender: f32,
}

impl Cenders {
    /// Returns the total height covered by the three components.
    pub fn sum(self) -> f32 {
        self.ascender + self.median + self.descender
    }

    /// Returns the component-wise maximum of `self` and `other`.
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        Self {
            ascender: self.ascender.max(other.ascender),
            median: self.median.max(other.median),
            descender: self.descender.max(other.descender),
        }
    }
}

/// A syllable node: a non-empty run of characters sharing one style.
#[derive(Clone, Copy, Debug)]
pub struct Syllable<'a> {
    doc: &'a Document,
    id: NodeId,
    data: &'a SyllableData,
}

impl<'a> Syllable<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId, data: &'a SyllableData) -> Self {
        Self { doc, id, data }
    }

    /// Returns the node this view refers to.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the text of the syllable without its soft hyphen marker.
    pub fn text(&self) -> &'a str {
        &self.data.text
    }

    /// Returns whether the syllable ends in a soft break.
    pub fn soft_hyphen(&self) -> bool {
        self.data.soft_hyphen
    }

    /// Returns the style laid over the syllable's style when measuring its trailing space.
    pub fn whitespace_style(&self) -> Option<&'a Style> {
        self.data.whitespace_style.as_ref()
    }

    /// Returns the effective style of the syllable.
    pub fn style(&self) -> Result<ComputedStyle, Error> {
        self.doc.computed_style(self.id)
    }

    /// Returns the width of the syllable's text set in its font.
    ///
    /// Pair kerning and character spacing are applied as the style says.
    pub fn width(&self) -> Result<f32, Error> {
        let style = self.style()?;
        style
            .font_face()
            .metrics()
            .string_width(
                self.text(),
                style.font_size(),
                style.kerning(),
                style.char_spacing(),
            )
            .map_err(|err| Error::from(err).with_node(self.id))
    }

    /// Returns the vertical metrics padded for the line height.
    ///
    /// Half of `line-height - font-size` is added to the ascender and to the descender.
    pub fn cenders(&self) -> Result<Cenders, Error> {
        let style = self.style()?;
        let padding = (style.line_height() - style.font_size()) / 2.0;
        let cenders = unpadded_cenders(&style);
        Ok(Cenders {
            ascender: cenders.ascender + padding,
            median: cenders.median,
            descender: cenders.descender + padding,
        })
    }

    /// Returns the font's vertical metrics scaled to the font size, without line height
    /// padding.
    pub fn cenders_unpadded(&self) -> Result<Cenders, Error> {
        Ok(unpadded_cenders(&self.style()?))
    }

    /// Returns the padded height of the syllable.
    pub fn height(&self) -> Result<f32, Error> {
        Ok(self.cenders()?.sum())
    }

    /// Returns the width of a space following this syllable.
    ///
    /// The space is set in the syllable's effective style, with the
    /// [whitespace style](Self::whitespace_style) laid over it when there is one.
    pub fn space_width(&self) -> Result<f32, Error> {
        let chain = self.doc.style_chain(self.id);
        let style = match self.whitespace_style() {
            Some(overlay) => ComputedStyle::from_chain(iter::once(overlay).chain(chain)),
            None => ComputedStyle::from_chain(chain),
        }
        .map_err(|err| Error::from(err).with_node(self.id))?;

        let metrics = style.font_face().metrics();
        let advance = metrics
            .advance(' ')
            .ok_or_else(|| Error::from(richtext_style::MissingGlyph(' ')).with_node(self.id))?;
        Ok(advance * style.font_size() / metrics.units_per_em())
    }
}

fn unpadded_cenders(style: &ComputedStyle) -> Cenders {
    let metrics = style.font_face().metrics();
    let scale = style.font_size() / metrics.units_per_em();
    let ascender = metrics.ascender() * scale;
    let descender = metrics.descender() * scale;
    Cenders {
        ascender,
        median: style.font_size() - (ascender + descender),
        descender,
    }
}

/// A word node: the unit between which lines are broken.
#[derive(Clone, Copy, Debug)]
pub struct Word<'a> {
    doc: &'a Document,
    id: NodeId,
}

impl<'a> Word<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    /// Returns the node this view refers to.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the number of syllables.
    pub fn len(&self) -> usize {
        self.doc.children(self.id).len()
    }

    /// Returns `true` if the word has no syllables.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the syllables in order.
    pub fn syllables(&self) -> impl DoubleEndedIterator<Item = Syllable<'a>> + Clone + 'a {
        let doc = self.doc;
        doc.children(self.id)
            .iter()
            .filter_map(move |&child| doc.syllable(child).ok())
    }

    /// Returns the text of all syllables, soft hyphens stripped.
    pub fn text(&self) -> String {
        self.syllables().map(|syllable| syllable.text()).collect()
    }

    /// Returns the sum of the syllable widths. Syllables are set without gaps.
    pub fn width(&self) -> Result<f32, Error> {
        self.syllables().map(|syllable| syllable.width()).sum()
    }

    /// Returns the component-wise maximum of the syllables' padded cenders.
    ///
    /// An empty word has all-zero cenders.
    pub fn cenders(&self) -> Result<Cenders, Error> {
        let mut syllables = self.syllables();
        let Some(first) = syllables.next() else {
            return Ok(Cenders::default());
        };
        syllables.try_fold(first.cenders()?, |cenders, syllable| -> Result<_, Error> {
            Ok(cenders.max(syllable.cenders()?))
        })
    }

    /// Returns the sum of the word's own [cenders](Self::cenders).
    ///
    /// This can exceed the height of every single syllable when the tallest ascender and the
    /// deepest descender come from different syllables.
    pub fn height(&self) -> Result<f32, Error> {
        Ok(self.cenders()?.sum())
    }

    /// Returns the width of the space following this word: the space width of its last
    /// syllable.
    pub fn space_width(&self) -> Result<f32, Error> {
        match self.syllables().next_back() {
            Some(last) => last.space_width(),
            None => Ok(0.0),
        }
    }
}

/// A paragraph node: a sequence of words broken into lines.
///
/// Line breaking lives in [`layout`](crate::layout), see [`Paragraph::lines`].
#[derive(Clone, Copy, Debug)]
pub struct Paragraph<'a> {
    pub(crate) doc: &'a Document,
    id: NodeId,
}

impl<'a> Paragraph<'a> {
    pub(crate) fn new(doc: &'a Document, id: NodeId) -> Self {
        Self { doc, id }
    }

    /// Returns the node this view refers to.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.doc.children(self.id).len()
    }

    /// Returns `true` if the paragraph has no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the word at `index`.
    pub fn word(&self, index: usize) -> Option<Word<'a>> {
        let id = *self.doc.children(self.id).get(index)?;
        Some(Word::new(self.doc, id))
    }

    /// Returns the words in order.
    pub fn words(
        &self,
    ) -> impl ExactSizeIterator<Item = Word<'a>> + DoubleEndedIterator + Clone + 'a {
        self.words_in(0..self.len())
    }

    /// Returns the words with indices in `range`.
    ///
    /// Panics if `range` is out of bounds.
    pub(crate) fn words_in(
        &self,
        range: Range<usize>,
    ) -> impl ExactSizeIterator<Item = Word<'a>> + DoubleEndedIterator + Clone + 'a {
        let doc = self.doc;
        doc.children(self.id)[range]
            .iter()
            .map(move |&child| Word::new(doc, child))
    }

    /// Returns `(index, word)` pairs starting with the word at `index`.
    ///
    /// The iterator is empty when `index` is at or past the end.
    pub fn words_from(&self, index: usize) -> impl Iterator<Item = (usize, Word<'a>)> + Clone + 'a {
        self.words().enumerate().skip(index)
    }
}
