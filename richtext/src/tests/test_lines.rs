// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::TestDoc;
use crate::{ErrorKind, Line, Style};

const SENTENCE: &[&str] = &[
    "Most", "words", "are", "short|er", "than", "anti|dis|establish|ment|arian|ism", "is",
];

#[test]
fn lines_cover_every_word_once() {
    let t = TestDoc::with_words(SENTENCE);
    let para = t.doc.paragraph(t.para).unwrap();

    for width in (1..=200).map(|w| w as f32 * 0.5) {
        let lines: Vec<_> = para.lines(width).collect::<Result<_, _>>().unwrap();
        assert!(!lines.is_empty());

        let mut next = 0;
        for (index, line) in lines.iter().enumerate() {
            assert_eq!(line.first_word_index(), next, "gap or overlap at width {width}");
            assert!(!line.is_empty());
            assert_eq!(line.is_last(), index == lines.len() - 1);
            assert_eq!(line.width(), width);
            next = line.last_word_index() + 1;
        }
        assert_eq!(next, para.len(), "words missing at width {width}");
    }
}

#[test]
fn words_fit_while_the_space_used_allows() {
    // Each word is 10.0 wide followed by a 2.5 space.
    let t = TestDoc::with_words(&["ab", "cd", "ef"]);
    let para = t.doc.paragraph(t.para).unwrap();

    // 12.5 + 10.0 fits exactly.
    let lines: Vec<_> = para.lines(22.5).collect::<Result<_, _>>().unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].word_range(), 0..2);
    assert_eq!(lines[1].word_range(), 2..3);

    let lines: Vec<_> = para.lines(22.4).collect::<Result<_, _>>().unwrap();
    assert_eq!(lines.len(), 3);

    let metrics = lines[0].metrics();
    assert_eq!(metrics.space_used, 12.5);
    assert_eq!(metrics.word_space_used, 10.0);
    assert_eq!(metrics.white_space_used, 2.5);
}

#[test]
fn overlong_word_gets_a_line_of_its_own() {
    let t = TestDoc::with_words(&["antidisestablishmentarianism"]);
    let para = t.doc.paragraph(t.para).unwrap();

    let lines: Vec<_> = para.lines(20.0).collect::<Result<_, _>>().unwrap();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];
    assert!(line.is_last());
    assert_eq!(line.word_range(), 0..1);
    assert!(line.metrics().word_space_used > line.width());
}

#[test]
fn overlong_words_between_short_ones() {
    let t = TestDoc::with_words(&["a", "b", "antidisestablishmentarianism", "c"]);
    let para = t.doc.paragraph(t.para).unwrap();

    let ranges: Vec<_> = para
        .lines(20.0)
        .map(|line| line.unwrap().word_range())
        .collect();
    assert_eq!(ranges, [0..2, 2..3, 3..4]);
}

#[test]
fn empty_paragraph_has_no_lines() {
    let t = TestDoc::new();
    let para = t.doc.paragraph(t.para).unwrap();
    let mut lines = para.lines(100.0);
    assert!(lines.next().is_none());
    assert!(lines.next().is_none());
    assert_eq!(lines.next_word_index(), None);
}

#[test]
fn breaking_from_a_start_index() {
    let t = TestDoc::with_words(&["ab", "cd", "ef", "gh"]);
    let para = t.doc.paragraph(t.para).unwrap();

    let lines: Vec<_> = para
        .lines_from(25.0, 1)
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    let ranges: Vec<_> = lines.iter().map(Line::word_range).collect();
    assert_eq!(ranges, [1..3, 3..4]);

    assert!(para.lines_from(25.0, 4).unwrap().next().is_none());
    let err = para.lines_from(25.0, 5).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IndexOutOfBounds);
    assert_eq!(err.node(), Some(t.para));

    let pairs: Vec<_> = para.words_from(2).map(|(i, w)| (i, w.text())).collect();
    assert_eq!(pairs, [(2, "ef".to_owned()), (3, "gh".to_owned())]);
}

#[test]
fn breaking_is_deterministic() {
    let t = TestDoc::with_words(SENTENCE);
    let para = t.doc.paragraph(t.para).unwrap();

    let first: Vec<_> = para
        .lines(40.0)
        .map(|line| {
            let line = line.unwrap();
            (line.word_range(), *line.metrics())
        })
        .collect();
    let second: Vec<_> = para
        .lines(40.0)
        .map(|line| {
            let line = line.unwrap();
            (line.word_range(), *line.metrics())
        })
        .collect();
    assert_eq!(first, second);
}

#[test]
fn measurement_failure_ends_the_sequence() {
    let t = TestDoc::with_words(&["ab", "cd", "e1", "gh"]);
    let para = t.doc.paragraph(t.para).unwrap();

    // The second line fails while testing whether `e1` still fits after `cd`.
    let mut lines = para.lines(15.0);
    assert_eq!(lines.next().unwrap().unwrap().word_range(), 0..1);
    let err = lines.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingGlyphMetric);
    assert_eq!(err.character(), Some('1'));
    assert!(lines.next().is_none());
    assert!(lines.next().is_none());
}

#[test]
fn line_vertical_metrics() {
    let mut t = TestDoc::with_words(&["ab"]);
    t.push_styled_word(&[("cd", Style::new().line_height(20.0))]);
    let para = t.doc.paragraph(t.para).unwrap();

    let line = para.lines(100.0).next().unwrap().unwrap();
    assert_eq!(line.len(), 2);
    // Leading 20 pads ascender and descender by 5 instead of 1.
    let cenders = line.cenders().unwrap();
    assert_eq!(cenders.ascender, 12.0);
    assert_eq!(cenders.median, 1.0);
    assert_eq!(cenders.descender, 7.0);
    assert_eq!(line.height().unwrap(), 20.0);
}

#[test]
fn every_alignment_places_words_left_to_right() {
    let mut t = TestDoc::with_words(&["ab", "cd", "ef"]);
    let mut offsets = Vec::new();
    for align in ["left", "right", "center", "justify"] {
        t.doc.style_mut(t.para).set("text-align", align).unwrap();
        let para = t.doc.paragraph(t.para).unwrap();
        let line = para.lines(100.0).next().unwrap().unwrap();
        offsets.push(line.word_offsets().unwrap());
    }
    for placed in &offsets {
        assert_eq!(placed, &[0.0, 12.5, 25.0]);
    }
}
