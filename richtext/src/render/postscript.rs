// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt::{self, Write};

use richtext_style::FontFace;

use super::Sink;
use crate::{Error, ErrorKind};

/// A [`Sink`] collecting PostScript in memory.
///
/// Fonts are registered under their PostScript names; [`fonts`](Self::fonts) lists them in
/// registration order, e.g. for a `%%DocumentNeededResources` comment.
#[derive(Clone, Debug, Default)]
pub struct PostScriptSink {
    buffer: String,
    fonts: Vec<Arc<str>>,
}

impl PostScriptSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the PostScript written so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Returns the names of all registered fonts, in registration order.
    pub fn fonts(&self) -> &[Arc<str>] {
        &self.fonts
    }

    /// Discards the written PostScript, keeping the registered fonts.
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Consumes the sink, returning the written PostScript.
    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Write for PostScriptSink {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buffer.push_str(s);
        Ok(())
    }
}

impl Sink for PostScriptSink {
    fn register_font(&mut self, face: &FontFace) -> Arc<str> {
        let name = face.postscript_name();
        if let Some(font) = self.fonts.iter().find(|font| ***font == *name) {
            return font.clone();
        }
        log::debug!("registered font {name}");
        let font: Arc<str> = Arc::from(name);
        self.fonts.push(font.clone());
        font
    }
}

/// Encodes `text` as the body of a PostScript string literal.
///
/// Characters up to U+00FF are written as single bytes: parentheses and backslashes are
/// escaped, bytes outside printable ASCII become three-digit octal escapes. Other characters
/// fail with [`UnencodableCharacter`](ErrorKind::UnencodableCharacter).
///
/// ```
/// use richtext::render::string_literal;
///
/// assert_eq!(string_literal("f(x)").unwrap(), r"f\(x\)");
/// assert_eq!(string_literal("café").unwrap(), r"caf\351");
/// assert!(string_literal("€").is_err());
/// ```
pub fn string_literal(text: &str) -> Result<String, Error> {
    let mut literal = String::with_capacity(text.len());
    for ch in text.chars() {
        let Ok(byte) = u8::try_from(ch) else {
            return Err(Error::new(ErrorKind::UnencodableCharacter).with_character(ch));
        };
        match byte {
            b'(' | b')' | b'\\' => {
                literal.push('\\');
                literal.push(ch);
            }
            0x20..=0x7e => literal.push(ch),
            _ => {
                let _ = write!(literal, "\\{byte:03o}");
            }
        }
    }
    Ok(literal)
}
