// Copyright 2025 the Richtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Write as _;
use std::sync::Arc;

use peniko::color::palette::css::RED;

use super::utils::{serif, serif_bold, TestDoc};
use crate::font::MetricsTable;
use crate::render::{string_literal, Number, PostScriptSink, RenderContext};
use crate::{ErrorKind, FontFace, FontFamily, FontWeight, Sink, Style};

fn render_first_line(t: &TestDoc, width: f32) -> String {
    let para = t.doc.paragraph(t.para).unwrap();
    let line = para.lines(width).next().unwrap().unwrap();
    let mut sink = PostScriptSink::new();
    RenderContext::new().render_line(&line, &mut sink).unwrap();
    sink.into_string()
}

#[test]
fn line_output() {
    let t = TestDoc::with_words(&["ab", "cd"]);
    let expected = "\
gsave
0 3 translate
0 0 moveto
0 0 moveto
/Serif findfont
10 scalefont
setfont
0 0 0 setrgbcolor
(ab) [ 5.00 5.00 ] xshow
12.5 0 moveto
(cd) [ 5.00 5.00 ] xshow
grestore
";
    assert_eq!(render_first_line(&t, 100.0), expected);
}

#[test]
fn identical_fonts_are_selected_once() {
    let t = TestDoc::with_words(&["con|tract", "ed"]);
    let output = render_first_line(&t, 100.0);
    assert_eq!(output.matches("findfont").count(), 1);
    assert_eq!(output.matches("scalefont").count(), 1);
    assert_eq!(output.matches("setrgbcolor").count(), 1);
    assert_eq!(output.matches("xshow").count(), 3);
}

#[test]
fn font_changes_are_selected_again() {
    let mut t = TestDoc::new();
    t.push_styled_word(&[
        ("ab", Style::new()),
        ("cd", Style::new().color(RED)),
        ("ef", Style::new().color(RED)),
        ("gh", Style::new().font_size(12.0).color(RED)),
        ("ij", Style::new().font_weight(FontWeight::Bold).font_size(12.0).color(RED)),
    ]);
    let output = render_first_line(&t, 100.0);

    let selections: Vec<_> = output
        .lines()
        .filter(|line| line.ends_with("findfont") || line.ends_with("setrgbcolor"))
        .collect();
    assert_eq!(
        selections,
        [
            "/Serif findfont",
            "0 0 0 setrgbcolor",
            "/Serif findfont",
            "1 0 0 setrgbcolor",
            "/Serif findfont",
            "1 0 0 setrgbcolor",
            "/Serif-Bold findfont",
            "1 0 0 setrgbcolor",
        ]
    );
    assert!(output.contains("12 scalefont\n"));
}

#[test]
fn font_cache_follows_gsave_and_grestore() {
    let t = TestDoc::with_words(&["ab", "cd", "ef"]);
    let para = t.doc.paragraph(t.para).unwrap();
    let mut sink = PostScriptSink::new();
    let mut cx = RenderContext::new();

    for line in para.lines(15.0) {
        cx.render_line(&line.unwrap(), &mut sink).unwrap();
    }
    // `grestore` drops the font selected inside each line.
    assert_eq!(sink.as_str().matches("findfont").count(), 3);
    assert_eq!(cx.current_font(), None);

    // Outside of lines the selection carries over until reset.
    let word = t.doc.word(t.doc.children(t.para)[0]).unwrap();
    let mut sink = PostScriptSink::new();
    cx.render_word(&word, &mut sink).unwrap();
    cx.render_word(&word, &mut sink).unwrap();
    assert_eq!(sink.as_str().matches("findfont").count(), 1);
    assert_eq!(cx.current_font(), Some("Serif"));

    cx.reset();
    cx.render_word(&word, &mut sink).unwrap();
    assert_eq!(sink.as_str().matches("findfont").count(), 2);
}

#[test]
fn advances_include_kerning_and_spacing() {
    let mut t = TestDoc::with_words(&["AV", "AV"]);
    let spaced = t.syllable_id(1, 0);
    *t.doc.style_mut(spaced) = Style::new().kerning(false).char_spacing(0.5);

    let para = t.doc.paragraph(t.para).unwrap();
    let line = para.lines(100.0).next().unwrap().unwrap();
    let mut sink = PostScriptSink::new();
    RenderContext::new().render_line(&line, &mut sink).unwrap();
    let shows: Vec<_> = sink
        .as_str()
        .lines()
        .filter(|line| line.ends_with("xshow"))
        .collect();
    // No kerning after the last character of a syllable.
    assert_eq!(
        shows,
        ["(AV) [ 4.20 5.00 ] xshow", "(AV) [ 5.50 5.50 ] xshow"]
    );
    // The second word starts after 9.2 + 2.5.
    assert!(sink.as_str().contains("11.7 0 moveto\n"));
}

#[test]
fn baseline_is_raised_by_the_deepest_descender() {
    let mut t = TestDoc::with_words(&["ab"]);
    t.push_styled_word(&[("cd", Style::new().line_height(20.0))]);
    let output = render_first_line(&t, 100.0);
    assert!(output.starts_with("gsave\n0 7 translate\n0 0 moveto\n"));
}

#[test]
fn sink_registers_each_font_once() {
    let mut sink = PostScriptSink::new();
    let regular = serif();
    let name = sink.register_font(&regular);
    assert_eq!(&*name, "Serif");
    assert_eq!(&*sink.register_font(&serif()), "Serif");
    assert_eq!(&*sink.register_font(&serif_bold()), "Serif-Bold");
    let fonts: Vec<&str> = sink.fonts().iter().map(|name| &**name).collect();
    assert_eq!(fonts, ["Serif", "Serif-Bold"]);

    // Registration goes through `&mut` sinks as well.
    fn register<S: Sink>(mut sink: S, face: &FontFace) -> Arc<str> {
        sink.register_font(face)
    }
    assert_eq!(&*register(&mut sink, &regular), "Serif");
    assert_eq!(sink.fonts().len(), 2);
}

#[test]
fn glyph_payload_encoding() {
    assert_eq!(string_literal("abc").unwrap(), "abc");
    assert_eq!(string_literal(r"a(b)\c").unwrap(), r"a\(b\)\\c");
    assert_eq!(string_literal("\u{e9}t\u{e9}").unwrap(), r"\351t\351");
    assert_eq!(string_literal("a\nb").unwrap(), r"a\012b");
    let err = string_literal("\u{2013}").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnencodableCharacter);
    assert_eq!(err.character(), Some('\u{2013}'));
}

#[test]
fn escaped_glyphs_in_output() {
    let t = TestDoc::with_words(&["(\u{e9})"]);
    let output = render_first_line(&t, 100.0);
    assert!(output.contains("(\\(\\351\\)) [ 5.00 5.00 5.00 ] xshow\n"));
}

#[test]
fn unencodable_syllables_fail() {
    let mut t = TestDoc::new();
    let word = t.doc.create_word(Style::new());
    let syllable = t.doc.create_syllable("\u{3b1}", Style::new()).unwrap();
    t.doc.append(word, syllable).unwrap();
    t.doc.append(t.para, word).unwrap();

    let syllable = t.doc.syllable(syllable).unwrap();
    let mut sink = PostScriptSink::new();
    let err = RenderContext::new()
        .render_syllable(&syllable, &mut sink)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnencodableCharacter);
    assert_eq!(err.node(), Some(syllable.id()));
    assert!(sink.as_str().is_empty(), "nothing is written for a failed syllable");
}

/// A family that can measure `α` but not encode it.
fn greek() -> FontFamily {
    FontFamily::new(
        MetricsTable::new("Greek", 700.0, 200.0)
            .with_advances("\u{3b1}", 500.0)
            .with_advance(' ', 250.0)
            .into_face(),
    )
}

#[test]
fn failed_lines_leave_the_sink_untouched() {
    let mut t = TestDoc::with_words(&["ab"]);
    t.push_styled_word(&[("\u{3b1}", Style::new().font_family(greek()))]);
    let para = t.doc.paragraph(t.para).unwrap();
    let line = para.lines(100.0).next().unwrap().unwrap();
    assert_eq!(line.len(), 2);

    let mut sink = PostScriptSink::new();
    sink.write_str("%!PS\n").unwrap();
    let mut cx = RenderContext::new();
    let err = cx.render_line(&line, &mut sink).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnencodableCharacter);
    assert_eq!(err.character(), Some('\u{3b1}'));
    assert_eq!(sink.as_str(), "%!PS\n", "no partial line is written");
    assert_eq!(cx.current_font(), None);

    // The sink still takes complete lines afterwards.
    let t = TestDoc::with_words(&["ab"]);
    let para = t.doc.paragraph(t.para).unwrap();
    let line = para.lines(100.0).next().unwrap().unwrap();
    cx.render_line(&line, &mut sink).unwrap();
    let output = sink.as_str();
    assert_eq!(output.matches("gsave").count(), output.matches("grestore").count());
    assert!(output.starts_with("%!PS\ngsave\n"));
}

#[test]
fn failed_words_leave_the_sink_untouched() {
    let mut t = TestDoc::new();
    let word = t.push_styled_word(&[
        ("ab", Style::new()),
        ("\u{3b1}", Style::new().font_family(greek())),
    ]);
    let word = t.doc.word(word).unwrap();

    let mut sink = PostScriptSink::new();
    let mut cx = RenderContext::new();
    let err = cx.render_word(&word, &mut sink).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnencodableCharacter);
    assert!(sink.as_str().is_empty());
    // `ab` was not written, so its font must not count as selected.
    assert_eq!(cx.current_font(), None);
}

#[test]
fn compact_numbers() {
    let cases = [
        (0.0, "0"),
        (-0.0, "0"),
        (12.5, "12.5"),
        (3.0, "3"),
        (1.0 / 3.0, "0.3333"),
        (-2.25, "-2.25"),
        (-0.00001, "0"),
    ];
    for (value, expected) in cases {
        assert_eq!(Number(value).to_string(), expected, "{value}");
    }
}
