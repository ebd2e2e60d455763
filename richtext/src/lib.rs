// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rich text layout and PostScript emission.
//!
//! A [`Document`] is a tree of five node kinds:
//!
//! ```text
//! RichText ─ Box ─┬─ Box ...
//!                 └─ Paragraph ─ Word ─ Syllable
//! ```
//!
//! Every node owns a partial [`Style`]; effective values cascade from the root down and are
//! recomputed on every lookup. A [`Paragraph`] is broken into [`Line`]s by a greedy first-fit
//! breaker, and a [`RenderContext`] writes lines, words or syllables to a [`Sink`] as
//! PostScript, selecting fonts only when the `(font, size, color)` triple changes.
//!
//! ## Example
//!
//! ```
//! use richtext::font::MetricsTable;
//! use richtext::render::{PostScriptSink, RenderContext};
//! use richtext::{Document, FontFamily, Style};
//!
//! let face = MetricsTable::new("Mono", 800.0, 200.0)
//!     .with_advances("abcdefghijklmnopqrstuvwxyz ", 600.0)
//!     .into_face();
//! let root = Style::new()
//!     .font_family(FontFamily::new(face))
//!     .font_size(10.0)
//!     .line_height(12.0);
//!
//! let mut doc = Document::new(root).unwrap();
//! let block = doc.create_box(Style::new());
//! let para = doc.create_paragraph(Style::new());
//! doc.append(doc.root(), block).unwrap();
//! doc.append(block, para).unwrap();
//! for text in ["hello", "world"] {
//!     let word = doc.create_word(Style::new());
//!     let syllable = doc.create_syllable(text, Style::new()).unwrap();
//!     doc.append(word, syllable).unwrap();
//!     doc.append(para, word).unwrap();
//! }
//!
//! // "hello " is 36 wide, "world" another 30.
//! let lines = doc
//!     .paragraph(para)
//!     .unwrap()
//!     .lines(50.0)
//!     .collect::<Result<Vec<_>, _>>()
//!     .unwrap();
//! assert_eq!(lines.len(), 2);
//! assert!(lines[1].is_last());
//!
//! let mut sink = PostScriptSink::new();
//! let mut cx = RenderContext::new();
//! for line in &lines {
//!     cx.render_line(line, &mut sink).unwrap();
//! }
//! assert_eq!(sink.as_str().matches("findfont").count(), 2);
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library.
//! - `libm`: Use floating point implementations from `libm` in `no_std` builds.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("richtext requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub mod font;
pub mod layout;
pub mod measure;
pub mod render;
pub mod tree;

mod error;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use layout::{Line, LineMetrics, Lines};
pub use measure::{Cenders, Paragraph, Syllable, Word};
pub use render::{RenderContext, Sink};
pub use tree::{Document, NodeId, NodeKind, SyllableSpec, SOFT_HYPHEN};

pub use richtext_style::{
    self as style, Color, ComputedStyle, FontFace, FontFamily, FontMetrics, FontStyle,
    FontWeight, Property, Style, TextAlign, Value,
};
