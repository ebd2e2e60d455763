// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use richtext_style::Style;

use crate::{Error, ErrorKind};

/// The soft hyphen (U+00AD), marking an optional break inside a word.
pub const SOFT_HYPHEN: char = '\u{AD}';

/// Everything needed to create a syllable node.
///
/// ```
/// use richtext::{Style, SyllableSpec};
///
/// let spec = SyllableSpec::new("con")
///     .with_soft_hyphen(true)
///     .with_whitespace_style(Style::new().font_size(6.0));
/// assert!(spec.soft_hyphen);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SyllableSpec<'a> {
    /// The characters, optionally containing one soft hyphen marker.
    pub text: &'a str,
    /// The syllable's local style.
    pub style: Style,
    /// Style laid over the syllable's effective style when measuring its trailing space.
    pub whitespace_style: Option<Style>,
    /// Marks the syllable as ending in a soft break even when `text` has no marker.
    pub soft_hyphen: bool,
}

impl<'a> SyllableSpec<'a> {
    /// Creates a spec for `text` with an empty local style.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            ..Default::default()
        }
    }

    /// Sets the local style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Sets the whitespace style.
    pub fn with_whitespace_style(mut self, style: Style) -> Self {
        self.whitespace_style = Some(style);
        self
    }

    /// Sets the soft hyphen flag.
    pub fn with_soft_hyphen(mut self, soft_hyphen: bool) -> Self {
        self.soft_hyphen = soft_hyphen;
        self
    }
}

/// Removes the soft hyphen marker from `text`.
///
/// Returns the remaining characters and whether a marker was found.
pub(crate) fn strip_soft_hyphen(text: &str) -> Result<(String, bool), Error> {
    if text.is_empty() {
        return Err(Error::new(ErrorKind::EmptySyllable));
    }
    let mut markers = text.match_indices(SOFT_HYPHEN).map(|(index, _)| index);
    let (stripped, found) = match (markers.next(), markers.next()) {
        (None, _) => (String::from(text), false),
        (Some(_), Some(_)) => {
            return Err(Error::new(ErrorKind::MisplacedSoftBreak).with_character(SOFT_HYPHEN));
        }
        (Some(index), None) => {
            let mut stripped = String::with_capacity(text.len());
            stripped.push_str(&text[..index]);
            stripped.push_str(&text[index + SOFT_HYPHEN.len_utf8()..]);
            (stripped, true)
        }
    };
    if stripped.is_empty() {
        return Err(Error::new(ErrorKind::EmptySyllable));
    }
    Ok((stripped, found))
}
