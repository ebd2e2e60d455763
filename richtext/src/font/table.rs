// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use hashbrown::HashMap;
use richtext_style::{FontFace, FontMetrics};

/// Font metrics held in memory, in the manner of an AFM file.
///
/// ```
/// use richtext::font::MetricsTable;
/// use richtext::FontMetrics;
///
/// let table = MetricsTable::new("Courier", 629.0, 157.0)
///     .with_advances("AV", 600.0)
///     .with_kerning('A', 'V', -20.0);
/// assert_eq!(table.advance('A'), Some(600.0));
/// assert_eq!(table.kerning('A', 'V'), -20.0);
/// assert_eq!(table.advance('B'), None);
/// ```
#[derive(Clone, Debug)]
pub struct MetricsTable {
    postscript_name: String,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    advances: HashMap<char, f32>,
    kerning: HashMap<(char, char), f32>,
}

impl MetricsTable {
    /// Creates a table without glyphs at 1000 units per em.
    ///
    /// `descender` is the depth below the baseline as a positive distance.
    pub fn new(postscript_name: impl Into<String>, ascender: f32, descender: f32) -> Self {
        Self {
            postscript_name: postscript_name.into(),
            units_per_em: 1000.0,
            ascender,
            descender,
            advances: HashMap::new(),
            kerning: HashMap::new(),
        }
    }

    /// Sets the number of font units per em.
    pub fn with_units_per_em(mut self, units_per_em: f32) -> Self {
        self.units_per_em = units_per_em;
        self
    }

    /// Sets the advance width of `ch`.
    pub fn with_advance(mut self, ch: char, advance: f32) -> Self {
        self.advances.insert(ch, advance);
        self
    }

    /// Sets the same advance width for every character of `chars`.
    pub fn with_advances(mut self, chars: &str, advance: f32) -> Self {
        self.advances.extend(chars.chars().map(|ch| (ch, advance)));
        self
    }

    /// Sets the kerning adjustment between `left` and a following `right`.
    pub fn with_kerning(mut self, left: char, right: char, adjustment: f32) -> Self {
        self.kerning.insert((left, right), adjustment);
        self
    }

    /// Wraps the table in a shareable [`FontFace`].
    pub fn into_face(self) -> FontFace {
        FontFace::new(self)
    }
}

impl FontMetrics for MetricsTable {
    fn postscript_name(&self) -> &str {
        &self.postscript_name
    }

    fn units_per_em(&self) -> f32 {
        self.units_per_em
    }

    fn ascender(&self) -> f32 {
        self.ascender
    }

    fn descender(&self) -> f32 {
        self.descender
    }

    fn advance(&self, ch: char) -> Option<f32> {
        self.advances.get(&ch).copied()
    }

    fn kerning(&self, left: char, right: char) -> f32 {
        self.kerning.get(&(left, right)).copied().unwrap_or(0.0)
    }
}
