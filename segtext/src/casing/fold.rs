// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The case folder (4.8): a deterministic, context-free codepoint-to-string mapping driven
//! by the Unicode CaseFolding table's `C`/`F`/`T` statuses.
//!
//! This does not transcribe `CaseFolding.txt` in full (~1,500 entries); see `DESIGN.md`.
//! It special-cases exactly the codepoints section 4.8 names by number (`U+0049`,
//! `U+0130`, Turkic `T` status) plus the handful of multi-codepoint `F` foldings a
//! case-insensitive-compare routine is expected to get right (German `ß`, the Latin
//! ligatures, Greek final sigma), and falls back to `char::to_lowercase` - itself Unicode's
//! default simple lowercase mapping - for everything else.

/// Folds one codepoint, appending the result to `out`.
fn fold_char(c: char, turkic: bool, out: &mut String) {
    match c {
        'I' if turkic => out.push('\u{0131}'),
        'I' => out.push('i'),
        '\u{0130}' if turkic => out.push('i'),
        '\u{0130}' => {
            out.push('i');
            out.push('\u{0307}');
        }
        '\u{00DF}' => out.push_str("ss"),
        '\u{FB00}' => out.push_str("ff"),
        '\u{FB01}' => out.push_str("fi"),
        '\u{FB02}' => out.push_str("fl"),
        '\u{FB03}' => out.push_str("ffi"),
        '\u{FB04}' => out.push_str("ffl"),
        '\u{FB05}' => out.push_str("st"),
        '\u{FB06}' => out.push_str("st"),
        '\u{03C2}' => out.push('\u{03C3}'),
        _ => out.extend(c.to_lowercase()),
    }
}

/// Case-folds `s` (4.8's "Turkic mode"): folds as `T` status for `U+0049`/`U+0130` when
/// `turkic` is set (explicit flag, or a language tag whose language is `tr`/`az`),
/// otherwise as `C`/`F` status.
#[must_use]
pub(crate) fn fold(s: &str, turkic: bool) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        fold_char(c, turkic, &mut out);
    }
    out
}

/// Whether `a` and `b` are equal under case folding (P5): `fold(a) == fold(b)`.
#[must_use]
pub(crate) fn equals_ignoring_case(a: &str, b: &str, turkic: bool) -> bool {
    fold(a, turkic) == fold(b, turkic)
}
