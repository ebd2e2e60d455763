// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

use hashbrown::HashMap;
use linebender_resource_handle::Blob;
use richtext_style::{FontFace, FontMetrics};
use skrifa::instance::{LocationRef, Size};
use skrifa::raw::tables::kern::{Kern, SubtableKind};
use skrifa::raw::TableProvider;
use skrifa::string::StringId;
use skrifa::{FontRef, GlyphId, MetadataProvider};

use crate::{Error, ErrorKind};

#[derive(Clone, Copy, Debug)]
struct Glyph {
    id: GlyphId,
    advance: f32,
}

/// Metrics read from a TrueType or OpenType font file.
///
/// Values are unscaled font units at the default location of variable fonts. Advances and
/// the pairs of `kern` format 0 subtables are read once, when the face is loaded. Class based
/// `kern` subtables are looked up per pair. Kerning from GPOS pair positioning is not applied.
#[derive(Clone)]
pub struct SkrifaMetrics {
    data: Blob<u8>,
    index: u32,
    postscript_name: String,
    units_per_em: f32,
    ascender: f32,
    descender: f32,
    glyphs: HashMap<char, Glyph>,
    kerning: HashMap<(GlyphId, GlyphId), f32>,
    class_kerning: bool,
}

impl SkrifaMetrics {
    /// Reads the face at `index` in `data`.
    ///
    /// Fails with [`InvalidFontData`](ErrorKind::InvalidFontData) if the data is not a font,
    /// or the face has no PostScript name or no units per em.
    pub fn new(data: Blob<u8>, index: u32) -> Result<Self, Error> {
        let invalid = || Error::new(ErrorKind::InvalidFontData);
        let font = FontRef::from_index(data.data(), index).map_err(|_| invalid())?;
        let metrics = font.metrics(Size::unscaled(), LocationRef::default());
        if metrics.units_per_em == 0 {
            return Err(invalid());
        }
        let postscript_name: String = font
            .localized_strings(StringId::POSTSCRIPT_NAME)
            .english_or_first()
            .ok_or_else(invalid)?
            .chars()
            .collect();

        let glyph_metrics = font.glyph_metrics(Size::unscaled(), LocationRef::default());
        let glyphs = font
            .charmap()
            .mappings()
            .filter_map(|(codepoint, id)| {
                let ch = char::from_u32(codepoint)?;
                let advance = glyph_metrics.advance_width(id)?;
                Some((ch, Glyph { id, advance }))
            })
            .collect();

        let mut kerning = HashMap::new();
        let mut class_kerning = false;
        if let Ok(kern) = font.kern() {
            for subtable in horizontal_subtables(&kern) {
                match subtable {
                    SubtableKind::Format0(pairs) => {
                        for pair in pairs.pairs() {
                            let key = (GlyphId::from(pair.left()), GlyphId::from(pair.right()));
                            *kerning.entry(key).or_insert(0.0) += f32::from(pair.value());
                        }
                    }
                    SubtableKind::Format2(_) | SubtableKind::Format3(_) => class_kerning = true,
                    SubtableKind::Format1(_) => {}
                }
            }
        }
        log::debug!(
            "loaded {postscript_name}: {} kerning pairs{}",
            kerning.len(),
            if class_kerning { " and class kerning" } else { "" },
        );

        Ok(Self {
            data,
            index,
            postscript_name,
            units_per_em: f32::from(metrics.units_per_em),
            ascender: metrics.ascent,
            descender: -metrics.descent,
            glyphs,
            kerning,
            class_kerning,
        })
    }

    /// Wraps the metrics in a shareable [`FontFace`].
    pub fn into_face(self) -> FontFace {
        FontFace::new(self)
    }

    fn class_kerning(&self, left: GlyphId, right: GlyphId) -> f32 {
        let Some(kern) = FontRef::from_index(self.data.data(), self.index)
            .ok()
            .and_then(|font| font.kern().ok())
        else {
            return 0.0;
        };
        let adjustment: i32 = horizontal_subtables(&kern)
            .filter_map(|subtable| match subtable {
                SubtableKind::Format2(classes) => classes.kerning(left, right),
                SubtableKind::Format3(classes) => classes.kerning(left, right),
                SubtableKind::Format0(_) | SubtableKind::Format1(_) => None,
            })
            .sum();
        adjustment as f32
    }
}

/// Subtables holding horizontal adjustments along the line.
fn horizontal_subtables<'a>(kern: &Kern<'a>) -> impl Iterator<Item = SubtableKind<'a>> + 'a {
    kern.subtables()
        .filter_map(Result::ok)
        .filter(|subtable| {
            subtable.is_horizontal() && !subtable.is_cross_stream() && !subtable.is_variable()
        })
        .filter_map(|subtable| subtable.kind().ok())
}

impl fmt::Debug for SkrifaMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SkrifaMetrics")
            .field("postscript_name", &self.postscript_name)
            .field("index", &self.index)
            .field("units_per_em", &self.units_per_em)
            .field("glyphs", &self.glyphs.len())
            .field("kerning", &self.kerning.len())
            .finish_non_exhaustive()
    }
}

impl FontMetrics for SkrifaMetrics {
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
        self.glyphs.get(&ch).map(|glyph| glyph.advance)
    }

    fn kerning(&self, left: char, right: char) -> f32 {
        let (Some(left), Some(right)) = (self.glyphs.get(&left), self.glyphs.get(&right)) else {
            return 0.0;
        };
        let pair = self
            .kerning
            .get(&(left.id, right.id))
            .copied()
            .unwrap_or(0.0);
        if self.class_kerning {
            pair + self.class_kerning(left.id, right.id)
        } else {
            pair
        }
    }
}
