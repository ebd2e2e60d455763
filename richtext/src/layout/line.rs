// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::ops::Range;

use crate::measure::{Cenders, Paragraph, Word};
use crate::Error;

/// Horizontal space consumed by the words of a line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    /// Word widths plus the trailing space of every word, the last one included.
    pub space_used: f32,
    /// Word widths only.
    pub word_space_used: f32,
    /// Trailing space widths only.
    pub white_space_used: f32,
}

/// One line of a paragraph, as produced by [`Lines`](super::Lines).
///
/// A line always holds at least one word.
#[derive(Clone, Debug)]
pub struct Line<'a> {
    pub(crate) paragraph: Paragraph<'a>,
    pub(crate) width: f32,
    pub(crate) words: Range<usize>,
    pub(crate) last: bool,
    pub(crate) metrics: LineMetrics,
}

impl<'a> Line<'a> {
    /// Returns the paragraph the line belongs to.
    pub fn paragraph(&self) -> Paragraph<'a> {
        self.paragraph
    }

    /// Returns the width the line was broken for.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the range of word indices in the paragraph.
    pub fn word_range(&self) -> Range<usize> {
        self.words.clone()
    }

    /// Returns the index of the first word in the paragraph.
    pub fn first_word_index(&self) -> usize {
        self.words.start
    }

    /// Returns the index of the last word in the paragraph.
    pub fn last_word_index(&self) -> usize {
        self.words.end - 1
    }

    /// Returns the number of words on the line.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`; a line holds at least one word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if this is the final line of the paragraph.
    pub fn is_last(&self) -> bool {
        self.last
    }

    /// Returns the space consumed by the line's words.
    pub fn metrics(&self) -> &LineMetrics {
        &self.metrics
    }

    /// Returns the words on the line, in order.
    pub fn words(
        &self,
    ) -> impl ExactSizeIterator<Item = Word<'a>> + DoubleEndedIterator + Clone + 'a {
        self.paragraph.words_in(self.words.clone())
    }

    /// Returns the component-wise maximum of the words' cenders.
    pub fn cenders(&self) -> Result<Cenders, Error> {
        let mut words = self.words();
        let Some(first) = words.next() else {
            return Ok(Cenders::default());
        };
        words.try_fold(first.cenders()?, |cenders, word| -> Result<_, Error> {
            Ok(cenders.max(word.cenders()?))
        })
    }

    /// Returns the height of the tallest word.
    pub fn height(&self) -> Result<f32, Error> {
        self.words()
            .try_fold(0.0_f32, |height, word| -> Result<_, Error> {
                Ok(height.max(word.height()?))
            })
    }

    /// Returns the horizontal start position of every word, in order.
    ///
    /// Positions follow the paragraph's `text-align`; see [`word_offsets`](super::word_offsets).
    pub fn word_offsets(&self) -> Result<Vec<f32>, Error> {
        let align = self.paragraph.text_align()?;
        super::word_offsets(self, align)
    }
}
