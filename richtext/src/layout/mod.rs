// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Breaking paragraphs into lines.

mod alignment;
mod greedy;
mod line;

use richtext_style::{Property, TextAlign, Value};

use crate::measure::Paragraph;
use crate::{Error, ErrorKind};

pub use alignment::word_offsets;
pub use greedy::Lines;
pub use line::{Line, LineMetrics};

impl<'a> Paragraph<'a> {
    /// Breaks the paragraph into lines of at most `width`, starting with the first word.
    ///
    /// An empty paragraph has no lines.
    pub fn lines(&self, width: f32) -> Lines<'a> {
        Lines::new(*self, width, 0)
    }

    /// Breaks the paragraph into lines of at most `width`, starting with the word at
    /// `first_word`.
    ///
    /// Fails with [`IndexOutOfBounds`](ErrorKind::IndexOutOfBounds) if `first_word` is past the
    /// end of the paragraph. Starting exactly at the end produces no lines.
    pub fn lines_from(&self, width: f32, first_word: usize) -> Result<Lines<'a>, Error> {
        if first_word > self.len() {
            return Err(Error::new(ErrorKind::IndexOutOfBounds).with_node(self.id()));
        }
        Ok(Lines::new(*self, width, first_word))
    }

    /// Returns the paragraph's effective `text-align`.
    pub fn text_align(&self) -> Result<TextAlign, Error> {
        match self.doc.resolve(self.id(), Property::TextAlign)? {
            Value::TextAlign(align) => Ok(align),
            _ => Err(Error::new(ErrorKind::TypeMismatch).with_node(self.id())),
        }
    }
}
