// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures.
//!
//! All faces use 1000 units per em, so at the default 10pt size a 500 unit glyph is 5.0
//! wide and every expected value below is exact in `f32`.

mod fonts;

pub(crate) use fonts::{deep, family, serif, serif_bold};

use crate::{Document, NodeId, Style};

/// The root style every fixture document starts from: `Serif` at 10pt with 12pt leading.
pub(crate) fn root_style() -> Style {
    Style::new()
        .font_family(family())
        .font_size(10.0)
        .line_height(12.0)
}

/// A document holding a single paragraph under a single box.
pub(crate) struct TestDoc {
    pub(crate) doc: Document,
    pub(crate) block: NodeId,
    pub(crate) para: NodeId,
}

impl TestDoc {
    pub(crate) fn new() -> Self {
        let mut doc = Document::new(root_style()).unwrap();
        let block = doc.create_box(Style::new());
        let para = doc.create_paragraph(Style::new());
        doc.append(doc.root(), block).unwrap();
        doc.append(block, para).unwrap();
        Self { doc, block, para }
    }

    /// Builds a paragraph from words given as `|`-separated syllables.
    pub(crate) fn with_words(words: &[&str]) -> Self {
        let mut this = Self::new();
        for word in words {
            this.push_word(word);
        }
        this
    }

    /// Appends a word of unstyled syllables.
    pub(crate) fn push_word(&mut self, syllables: &str) -> NodeId {
        let styled: Vec<_> = syllables
            .split('|')
            .map(|text| (text, Style::new()))
            .collect();
        self.push_styled_word(&styled)
    }

    /// Appends a word whose syllables carry the given local styles.
    pub(crate) fn push_styled_word(&mut self, syllables: &[(&str, Style)]) -> NodeId {
        let word = self.doc.create_word(Style::new());
        for (text, style) in syllables {
            let syllable = self.doc.create_syllable(text, style.clone()).unwrap();
            self.doc.append(word, syllable).unwrap();
        }
        self.doc.append(self.para, word).unwrap();
        word
    }

    /// Returns the `index`th syllable of the `word`th word.
    pub(crate) fn syllable_id(&self, word: usize, index: usize) -> NodeId {
        let word = self.doc.children(self.para)[word];
        self.doc.children(word)[index]
    }
}

/// Asserts that two floats are equal up to rounding.
#[track_caller]
pub(crate) fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-4,
        "expected {expected}, got {actual}"
    );
}
