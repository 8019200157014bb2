// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Segmentation scenarios and invariants (spec section 8).

use segtext::{BreakKind, Options};

use crate::util::split;

fn options(break_kind: BreakKind) -> Options {
    Options { break_kind, ..Options::default() }
}

#[test]
fn word_split_separates_words_and_punctuation() {
    let words = split("This is a sentence. And another.", &Options::default());
    assert_eq!(
        words,
        ["This", " ", "is", " ", "a", " ", "sentence", ".", " ", "And", " ", "another", "."]
    );
}

#[test]
fn sentence_split_keeps_trailing_whitespace_with_the_sentence() {
    let sentences = split("This is a sentence. And another.", &options(BreakKind::Sentence));
    assert_eq!(sentences, ["This is a sentence. ", "And another."]);
}

#[test]
fn sentence_split_with_trim_drops_a_suppressed_abbreviation_false_break() {
    let sample = segtext_dev::TextSamples::new().latin_with_abbreviation;
    let sentences = split(
        sample.text,
        &Options { break_kind: BreakKind::Sentence, trim: true, ..Options::default() },
    );
    assert_eq!(sentences, [sample.text]);
}

#[test]
fn line_split_keeps_break_opportunities_with_their_leading_word() {
    let lines = split("This is a sentence. And another.", &options(BreakKind::Line));
    assert_eq!(lines, ["This ", "is ", "a ", "sentence. ", "And ", "another."]);
}

#[test]
fn chinese_word_split_uses_the_dictionary() {
    let words = split(
        "布鲁赫",
        &Options { locale: Some("zh".to_string()), break_kind: BreakKind::Word, ..Options::default() },
    );
    assert_eq!(words, ["布", "鲁", "赫"]);
}

#[test]
fn zh_hant_falls_back_to_the_zh_dictionary_for_a_word_it_knows() {
    let words = split(
        "明德",
        &Options {
            locale: Some("zh-Hant".to_string()),
            break_kind: BreakKind::Word,
            ..Options::default()
        },
    );
    assert_eq!(words, ["明德"]);
}

// P1: concatenation of split(s) equals s exactly when trim=false.
#[test]
fn split_concatenation_reconstructs_the_input() {
    for (text, kind) in [
        ("This is a sentence. And another.", BreakKind::Word),
        ("This is a sentence. And another.", BreakKind::Sentence),
        ("This is a sentence. And another.", BreakKind::Line),
        ("布鲁赫", BreakKind::Grapheme),
    ] {
        let segments = split(text, &options(kind));
        assert_eq!(segments.concat(), text);
    }
}

// P2: next is a homomorphism - iterating next over s yields the same sequence as
// split(s, o) with trim=false.
#[test]
fn next_iterated_matches_split() {
    let text = "This is a sentence. And another.";
    let opts = Options::default();
    let mut collected = Vec::new();
    let mut rest = text.to_string();
    while let Some((segment, remainder)) = segtext::next(&rest, &opts).unwrap() {
        collected.push(segment);
        rest = remainder;
    }
    assert_eq!(collected, split(text, &opts));
}

// P3: break_before((before, after), o) iff split(before ++ after, o) has a boundary at
// position len(before).
#[test]
fn break_before_agrees_with_split_boundaries() {
    let opts = Options::default();
    let whole = "This is a sentence.";
    let segments = split(whole, &opts);
    let mut offset = 0;
    let mut boundaries = vec![0];
    for segment in &segments {
        offset += segment.len();
        boundaries.push(offset);
    }
    for pos in 0..=whole.len() {
        if !whole.is_char_boundary(pos) {
            continue;
        }
        let (before, after) = whole.split_at(pos);
        let expected = boundaries.contains(&pos);
        assert_eq!(
            segtext::break_before(before, after, &opts).unwrap(),
            expected,
            "boundary check failed at byte offset {pos}"
        );
    }
}

// P7: suppression disable/enable around a known abbreviation.
#[test]
fn suppression_toggle_changes_whether_an_abbreviation_period_breaks() {
    let text = "I saw Mr. Smith today.";
    let suppressed = split(text, &options(BreakKind::Sentence));
    assert_eq!(suppressed.len(), 1, "Mr. must not end a sentence when suppressions are on");

    let unsuppressed = split(
        text,
        &Options { break_kind: BreakKind::Sentence, suppressions: false, ..Options::default() },
    );
    assert!(
        unsuppressed.len() > 1,
        "disabling suppressions should let Mr. end a sentence: {unsuppressed:?}"
    );
}

// P8: locale fallback - zh-Hant-HK segmentation behaves like zh when no more specific
// data exists.
#[test]
fn zh_hant_hk_segmentation_matches_zh() {
    let opts_zh = Options { locale: Some("zh".to_string()), break_kind: BreakKind::Word, ..Options::default() };
    let opts_zh_hant_hk = Options {
        locale: Some("zh-Hant-HK".to_string()),
        break_kind: BreakKind::Word,
        ..Options::default()
    };
    assert_eq!(split("布鲁赫", &opts_zh), split("布鲁赫", &opts_zh_hant_hk));
}

#[test]
fn yue_hant_word_breaking_loads_the_zh_dictionary() {
    let opts = Options {
        locale: Some("yue-Hant".to_string()),
        break_kind: BreakKind::Word,
        ..Options::default()
    };
    assert_eq!(split("布鲁赫", &opts), ["布", "鲁", "赫"]);
}

#[test]
fn an_explicit_malformed_locale_is_an_error() {
    let opts = Options { locale: Some("1".to_string()), ..Options::default() };
    assert!(segtext::split("hello", &opts).is_err());
}

#[test]
fn splitter_yields_the_same_segments_as_split() {
    let text = "This is a sentence.";
    let opts = Options::default();
    let streamed: Vec<String> =
        segtext::splitter(text, &opts).unwrap().collect::<Result<_, _>>().unwrap();
    assert_eq!(streamed, split(text, &opts));
}
