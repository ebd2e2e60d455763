// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing laid out text as PostScript.
//!
//! A [`Sink`] is the output side of a page: a text stream plus a font registry. A
//! [`RenderContext`] tracks which font the sink currently has selected, so that
//! `findfont`/`scalefont`/`setfont` sequences are only written when the selection changes.
//! Keep one context per sink.

mod postscript;

use alloc::format;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt::{self, Write};

use peniko::Color;
use richtext_style::FontFace;

use crate::layout::Line;
use crate::measure::{Syllable, Word};
use crate::Error;

pub use postscript::{string_literal, PostScriptSink};

/// The output side of a PostScript page.
pub trait Sink: Write {
    /// Makes `face` available to the page and returns the name it is selected by.
    ///
    /// Registering the same face again must return the same name.
    fn register_font(&mut self, face: &FontFace) -> Arc<str>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn register_font(&mut self, face: &FontFace) -> Arc<str> {
        (**self).register_font(face)
    }
}

#[derive(Clone, Debug, PartialEq)]
struct FontSelection {
    name: Arc<str>,
    size: f32,
    color: Color,
}

/// Per-sink render state: the font selection last written to the sink.
#[derive(Clone, Debug, Default)]
pub struct RenderContext {
    current: Option<FontSelection>,
}

impl RenderContext {
    /// Creates a context for a sink with no font selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forgets the current font selection, as at the start of a new page.
    pub fn reset(&mut self) {
        self.current = None;
    }

    /// Returns the name of the font currently selected in the sink, if any.
    pub fn current_font(&self) -> Option<&str> {
        self.current.as_ref().map(|selection| &*selection.name)
    }

    /// Renders `line` with its baseline raised by the line's descender.
    ///
    /// The output is wrapped in `gsave`/`grestore`. Since `grestore` also restores the font
    /// selected before the line, the context's font selection is restored along with it.
    ///
    /// The line is written to the sink only once all of it has rendered: on failure the sink's
    /// text is left untouched. Fonts registered for syllables before the failure stay
    /// registered.
    pub fn render_line<S: Sink + ?Sized>(
        &mut self,
        line: &Line<'_>,
        sink: &mut S,
    ) -> Result<(), Error> {
        let saved = self.current.clone();
        let mut staged = Staged::new(sink);
        let result = self.write_line(line, &mut staged);
        self.current = saved;
        result?;
        staged.commit()
    }

    fn write_line<S: Sink + ?Sized>(&mut self, line: &Line<'_>, sink: &mut S) -> Result<(), Error> {
        let cenders = line.cenders()?;
        let offsets = line.word_offsets()?;

        writeln!(sink, "gsave")?;
        writeln!(sink, "0 {} translate", Number(cenders.descender))?;
        writeln!(sink, "0 0 moveto")?;
        for (x, word) in offsets.into_iter().zip(line.words()) {
            writeln!(sink, "{} 0 moveto", Number(x))?;
            self.write_word(&word, sink)?;
        }
        writeln!(sink, "grestore")?;
        Ok(())
    }

    /// Renders the syllables of `word` at the current point.
    ///
    /// As with [`render_line`](Self::render_line), nothing is written and the font selection
    /// is unchanged when a syllable fails.
    pub fn render_word<S: Sink + ?Sized>(
        &mut self,
        word: &Word<'_>,
        sink: &mut S,
    ) -> Result<(), Error> {
        let saved = self.current.clone();
        let mut staged = Staged::new(sink);
        if let Err(err) = self.write_word(word, &mut staged) {
            self.current = saved;
            return Err(err);
        }
        staged.commit()
    }

    fn write_word<S: Sink + ?Sized>(&mut self, word: &Word<'_>, sink: &mut S) -> Result<(), Error> {
        for syllable in word.syllables() {
            self.render_syllable(&syllable, sink)?;
        }
        Ok(())
    }

    /// Renders `syllable` at the current point with an `xshow` of its per-character advances.
    ///
    /// The font is selected first if the `(font, size, color)` triple differs from the one
    /// last written to the sink.
    pub fn render_syllable<S: Sink + ?Sized>(
        &mut self,
        syllable: &Syllable<'_>,
        sink: &mut S,
    ) -> Result<(), Error> {
        let style = syllable.style()?;
        let face = style.font_face();
        let literal = string_literal(syllable.text()).map_err(|err| err.with_node(syllable.id()))?;
        let mut advances = String::new();
        for advance in face.char_advances(
            syllable.text(),
            style.font_size(),
            style.kerning(),
            style.char_spacing(),
        ) {
            let advance = advance.map_err(|err| Error::from(err).with_node(syllable.id()))?;
            advances.push_str(&format!(" {advance:.2}"));
        }

        let selection = FontSelection {
            name: sink.register_font(face),
            size: style.font_size(),
            color: style.color(),
        };
        if self.current.as_ref() != Some(&selection) {
            log::trace!("selecting font {} at {}", selection.name, selection.size);
            writeln!(sink, "/{} findfont", selection.name)?;
            writeln!(sink, "{} scalefont", Number(selection.size))?;
            writeln!(sink, "setfont")?;
            writeln!(sink, "{}", Rgb(selection.color))?;
            self.current = Some(selection);
        }
        writeln!(sink, "({literal}) [{advances} ] xshow")?;
        Ok(())
    }
}

/// Buffers text written during a render, passing font registration through to the sink.
struct Staged<'s, S: ?Sized> {
    sink: &'s mut S,
    text: String,
}

impl<'s, S: Sink + ?Sized> Staged<'s, S> {
    fn new(sink: &'s mut S) -> Self {
        Self {
            sink,
            text: String::new(),
        }
    }

    /// Writes the buffered text to the sink.
    fn commit(self) -> Result<(), Error> {
        self.sink.write_str(&self.text)?;
        Ok(())
    }
}

impl<S: Sink + ?Sized> Write for Staged<'_, S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.text.push_str(s);
        Ok(())
    }
}

impl<S: Sink + ?Sized> Sink for Staged<'_, S> {
    fn register_font(&mut self, face: &FontFace) -> Arc<str> {
        self.sink.register_font(face)
    }
}

/// Formats a number with at most four decimals and no trailing zeros.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Number(pub(crate) f32);

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.4}", self.0);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        if text == "-0" {
            f.write_str("0")
        } else {
            f.write_str(text)
        }
    }
}

/// Formats a color as a `setrgbcolor` command.
struct Rgb(Color);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, _] = self.0.components;
        write!(
            f,
            "{} {} {} setrgbcolor",
            Number(r),
            Number(g),
            Number(b)
        )
    }
}
