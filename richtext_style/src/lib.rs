// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cascading styles for rich text trees.
//!
//! - [`Property`] is the closed vocabulary of style properties, each with a declared
//!   [`ValueKind`] and an optional [initial value](Property::initial).
//! - [`Style`] is a node's local, partial style. Dynamic assignment ([`Style::set`]) is checked
//!   against the schema and converts values where the schema allows it (numeric strings to
//!   numbers, keywords to enums, CSS color strings to colors).
//! - [`resolve`] implements the cascade: a property's effective value is the nearest value on
//!   the chain from a node to its root.
//! - [`FontFamily`] maps `(text-style, font-weight)` to one of four [`FontFace`]s, which are
//!   measured through the [`FontMetrics`] trait.
//!
//! ## Example
//!
//! ```
//! use richtext_style::{ComputedStyle, ErrorKind, Property, Style};
//!
//! let root = Style::new().font_size(10.0).line_height(12.0);
//! let mut local = Style::new();
//! local.set("font-size", 14).unwrap();
//!
//! // The root has no font family, so the full computation fails.
//! let err = ComputedStyle::from_chain([&local, &root]).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::MissingRequiredValue);
//! assert_eq!(err.property(), Property::FontFamily.name());
//! ```
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
#![no_std]

extern crate alloc;

pub mod resolve;

mod error;
mod font;
mod property;
mod style;
mod value;

#[cfg(test)]
mod tests;

pub use error::{Error, ErrorKind};
pub use font::{
    CharAdvances, FontFace, FontFamily, FontMetrics, FontStyle, FontWeight, MissingGlyph,
};
pub use property::Property;
pub use resolve::{cascade, cascade_named, ComputedStyle};
pub use style::Style;
pub use value::{Background, Edges, ListStyle, RawValue, TextAlign, Value, ValueKind};

pub use peniko::Color;
