// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::font::MetricsTable;
use crate::{FontFace, FontFamily};

const LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZé()\\";

/// Letters 500 units wide, space 250, ascender 700, descender 200, `AV` kerned by -80.
pub(crate) fn serif() -> FontFace {
    MetricsTable::new("Serif", 700.0, 200.0)
        .with_advances(LETTERS, 500.0)
        .with_advance(' ', 250.0)
        .with_kerning('A', 'V', -80.0)
        .into_face()
}

/// Letters 600 units wide, space 400.
pub(crate) fn serif_bold() -> FontFace {
    MetricsTable::new("Serif-Bold", 700.0, 200.0)
        .with_advances(LETTERS, 600.0)
        .with_advance(' ', 400.0)
        .into_face()
}

/// Letters 450 units wide, space 200.
fn serif_italic() -> FontFace {
    MetricsTable::new("Serif-Italic", 700.0, 200.0)
        .with_advances(LETTERS, 450.0)
        .with_advance(' ', 200.0)
        .into_face()
}

/// Ascender and descender of half an em each, so the median is zero.
pub(crate) fn deep() -> FontFamily {
    FontFamily::new(
        MetricsTable::new("Deep", 500.0, 500.0)
            .with_advances(LETTERS, 500.0)
            .with_advance(' ', 500.0)
            .into_face(),
    )
}

/// `Serif` with its bold and italic faces; bold italic falls back to regular.
pub(crate) fn family() -> FontFamily {
    FontFamily::new(serif())
        .with_bold(serif_bold())
        .with_italic(serif_italic())
}
