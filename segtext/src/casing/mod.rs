// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The Case Folder and Case Mapper (4.8).

mod fold;
mod map;

pub(crate) use fold::{equals_ignoring_case, fold};
pub(crate) use map::{downcase, upcase};

use crate::driver::{self, Options};
use crate::locale::CasingLocale;
use crate::BreakKind;

/// Titlecases `s` (4.8): splits on word boundaries, then titlecases the first codepoint of
/// each segment and downcases the rest.
///
/// Consumes the word segmenter as specified, with the Dutch leading `ij`/`IJ` digraph
/// exception (4.8: "titlecasing a leading `ij` or `IJ` digraph produces `IJ`") applied
/// before the per-codepoint loop for each word.
#[must_use]
pub(crate) fn titlecase(s: &str, locale: CasingLocale) -> String {
    debug_assert_eq!(Options::default().break_kind, BreakKind::Word);
    let words = driver::split_str(s, &Options::default());
    let mut out = String::with_capacity(s.len());
    for word in words {
        out.push_str(&titlecase_word(&word, locale));
    }
    out
}

fn titlecase_word(word: &str, locale: CasingLocale) -> String {
    if word.is_empty() {
        return String::new();
    }
    if locale == CasingLocale::Dutch {
        if let Some(rest) = strip_ij_digraph(word) {
            let mut out = String::from("IJ");
            out.push_str(&downcase(rest, locale));
            return out;
        }
    }
    let mut chars = word.chars();
    let first = chars.as_str();
    let first_char = chars.next();
    let Some(first_char) = first_char else {
        return String::new();
    };
    let first_len = first_char.len_utf8();
    let rest = &first[first_len..];

    let mut out = titlecase_char(first_char, locale);
    out.push_str(&downcase(rest, locale));
    out
}

/// Titlecases a single codepoint. Unicode's titlecase mapping differs from simple upcase
/// only for a handful of digraphs (e.g. `ǅ`); everywhere else they coincide, so this uses
/// the same locale-aware upcase map 4.8 already defines for the first codepoint of a word.
fn titlecase_char(c: char, locale: CasingLocale) -> String {
    upcase(&c.to_string(), locale)
}

/// If `word` begins with the Dutch `ij`/`IJ` digraph (case-insensitive ASCII match), returns
/// the remainder of the word after the digraph.
fn strip_ij_digraph(word: &str) -> Option<&str> {
    let mut chars = word.char_indices();
    let (_, first) = chars.next()?;
    let (second_idx, second) = chars.next()?;
    if (first == 'i' || first == 'I') && (second == 'j' || second == 'J') {
        let (third_idx, _) = chars.next().unwrap_or((second_idx + second.len_utf8(), ' '));
        Some(&word[third_idx..])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dutch_titlecase_keeps_ij_digraph_uppercase() {
        assert_eq!(titlecase("ijsselmeer", CasingLocale::Dutch), "IJsselmeer");
    }

    #[test]
    fn default_titlecase_upcases_first_letter_of_each_word() {
        assert_eq!(titlecase("hello world", CasingLocale::Any), "Hello World");
    }
}
