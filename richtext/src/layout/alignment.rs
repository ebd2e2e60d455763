// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use richtext_style::TextAlign;

use super::Line;
use crate::Error;

/// Computes the horizontal start position of every word on `line`.
///
/// Every word starts where the previous word and its trailing space end. Only left placement
/// is implemented: `right`, `center` and `justify` are accepted and placed the same way.
pub fn word_offsets(line: &Line<'_>, align: TextAlign) -> Result<Vec<f32>, Error> {
    match align {
        TextAlign::Left => {}
        TextAlign::Right | TextAlign::Center | TextAlign::Justify => {
            log::trace!("text-align {align:?} is placed left-aligned");
        }
    }
    left_offsets(line)
}

fn left_offsets(line: &Line<'_>) -> Result<Vec<f32>, Error> {
    let mut offsets = Vec::with_capacity(line.len());
    let mut x = 0.0;
    for word in line.words() {
        offsets.push(x);
        x += word.width()? + word.space_width()?;
    }
    Ok(offsets)
}
