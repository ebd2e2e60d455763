// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy line breaking.

use core::iter::FusedIterator;

use crate::layout::{Line, LineMetrics};
use crate::measure::Paragraph;
use crate::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum BreakerState {
    /// Collecting words for a line starting at this word index.
    Collecting(usize),
    /// The last line has been emitted, or breaking failed.
    Done,
}

/// Lazy sequence of the lines of a paragraph, see [`Paragraph::lines`].
///
/// Each call to [`next`](Iterator::next) fits as many words as possible into the target width,
/// always taking at least one word so that a word wider than the line still gets a line of its
/// own. The iterator ends after the line whose [`is_last`](Line::is_last) is set. A measurement
/// failure is yielded once and ends the iterator; no partial line is produced.
#[derive(Clone, Debug)]
pub struct Lines<'a> {
    paragraph: Paragraph<'a>,
    width: f32,
    state: BreakerState,
}

impl<'a> Lines<'a> {
    pub(crate) fn new(paragraph: Paragraph<'a>, width: f32, first_word: usize) -> Self {
        let state = if first_word < paragraph.len() {
            BreakerState::Collecting(first_word)
        } else {
            BreakerState::Done
        };
        Self {
            paragraph,
            width,
            state,
        }
    }

    /// Returns the width lines are broken for.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Returns the index of the first word of the next line, or `None` when done.
    pub fn next_word_index(&self) -> Option<usize> {
        match self.state {
            BreakerState::Collecting(start) => Some(start),
            BreakerState::Done => None,
        }
    }

    /// Computes the line starting at word `start`.
    fn break_next(&self, start: usize) -> Result<Line<'a>, Error> {
        let mut metrics = LineMetrics::default();
        let mut end = start;
        for (index, word) in self.paragraph.words_from(start) {
            let word_width = word.width()?;
            if index > start && metrics.space_used + word_width > self.width {
                break;
            }
            let space_width = word.space_width()?;
            metrics.space_used += word_width + space_width;
            metrics.word_space_used += word_width;
            metrics.white_space_used += space_width;
            end = index + 1;
        }
        let last = end == self.paragraph.len();

        log::debug!(
            "line committed: words {start}..{end} of {}, {:.2} of {:.2} used{}",
            self.paragraph.len(),
            metrics.space_used,
            self.width,
            if last { ", last" } else { "" },
        );

        Ok(Line {
            paragraph: self.paragraph,
            width: self.width,
            words: start..end,
            last,
            metrics,
        })
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Result<Line<'a>, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let BreakerState::Collecting(start) = self.state else {
            return None;
        };
        let line = self.break_next(start);
        self.state = match &line {
            Ok(line) if !line.last => BreakerState::Collecting(line.words.end),
            _ => BreakerState::Done,
        };
        Some(line)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            BreakerState::Collecting(start) => (1, Some(self.paragraph.len() - start)),
            BreakerState::Done => (0, Some(0)),
        }
    }
}

impl FusedIterator for Lines<'_> {}
