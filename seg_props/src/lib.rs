// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode character property lookups shared by the rule compiler and the case mapper.
//!
//! The segmentation rule data shipped with CLDR references UAX #29 enumerated properties
//! (`Word_Break`, `Sentence_Break`, `Grapheme_Cluster_Break`, `Line_Break`) by name inside
//! variable patterns, e.g. `[\p{Word_Break = ALetter}]`. The `regex` crate's own Unicode
//! tables cover general categories, scripts and binary properties, but not these
//! segmentation-specific enumerations, so this crate renders them down to an explicit
//! codepoint-range character class that `regex` can consume directly.
//!
//! The case mapper's context predicates (final sigma, more-above, after-soft-dotted, ...)
//! need a handful of direct per-codepoint binary property checks; those are exposed as
//! plain functions over `icu_properties`, bundled with `compiled_data` so no network access
//! or datagen step is required to obtain Unicode data.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

use icu_properties::props::{
    CanonicalCombiningClass, Case_Ignorable, Cased, GraphemeClusterBreak, LineBreak,
    SentenceBreak, SoftDotted, WhiteSpace, WordBreak,
};
use icu_properties::{CodePointMapData, CodePointSetData};

/// The combining class value Unicode assigns to "above" combining marks.
///
/// `more_above` and `after_soft_dotted` both need to distinguish combining marks that sit
/// above the base letter from every other combining class; Unicode encodes that as CCC 230.
const CCC_ABOVE: u8 = 230;

/// Returns the [UAX #29](https://unicode.org/reports/tr29/) word-break class of `c`.
#[must_use]
pub fn word_break(c: char) -> WordBreak {
    CodePointMapData::<WordBreak>::new().get(c)
}

/// Returns the grapheme-cluster-break class of `c`.
#[must_use]
pub fn grapheme_cluster_break(c: char) -> GraphemeClusterBreak {
    CodePointMapData::<GraphemeClusterBreak>::new().get(c)
}

/// Returns the sentence-break class of `c`.
#[must_use]
pub fn sentence_break(c: char) -> SentenceBreak {
    CodePointMapData::<SentenceBreak>::new().get(c)
}

/// Returns the line-break class of `c`.
#[must_use]
pub fn line_break(c: char) -> LineBreak {
    CodePointMapData::<LineBreak>::new().get(c)
}

/// Whether `c` has the `White_Space` binary property.
///
/// Used by the segmenter driver's trimming predicate: a segment is whitespace-only when
/// every codepoint it contains satisfies this.
#[must_use]
pub fn is_white_space(c: char) -> bool {
    CodePointSetData::new::<WhiteSpace>().contains(c)
}

/// Whether `c` has the `Cased` binary property.
#[must_use]
pub fn is_cased(c: char) -> bool {
    CodePointSetData::new::<Cased>().contains(c)
}

/// Whether `c` has the `Case_Ignorable` binary property.
#[must_use]
pub fn is_case_ignorable(c: char) -> bool {
    CodePointSetData::new::<Case_Ignorable>().contains(c)
}

/// Whether `c` has the `Soft_Dotted` binary property (e.g. `i`, `j`).
#[must_use]
pub fn is_soft_dotted(c: char) -> bool {
    CodePointSetData::new::<SoftDotted>().contains(c)
}

/// Whether `c` is a combining mark whose combining class is `Above` (CCC 230).
///
/// This is what the `more_above` and `after_soft_dotted` SpecialCasing contexts mean by
/// "a combining mark above" - not any combining mark, specifically this class.
#[must_use]
pub fn is_combining_class_above(c: char) -> bool {
    CodePointMapData::<CanonicalCombiningClass>::new().get(c) == CanonicalCombiningClass(CCC_ABOVE)
}

/// Whether `c` is any combining mark (nonzero combining class), used to test whether a
/// preceding "soft dotted" or "I" context is interrupted before a combining-above mark is
/// reached.
#[must_use]
pub fn is_combining_mark(c: char) -> bool {
    CodePointMapData::<CanonicalCombiningClass>::new().get(c) != CanonicalCombiningClass(0)
}

/// An error produced when [`render_property_class`] is given a property/value pair this
/// crate does not recognize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPropertyError {
    /// The raw `Property = Value` (or `Property`) token that could not be resolved.
    pub token: String,
}

impl core::fmt::Display for UnknownPropertyError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unrecognized unicode property token `{}`", self.token)
    }
}

impl std::error::Error for UnknownPropertyError {}

/// Renders a `\p{...}` property token from segmentation rule data into an explicit
/// codepoint-range character class (e.g. `[\u{61}-\u{7a}\u{c0}-\u{d6}]`) that the `regex`
/// crate can compile directly.
///
/// `token` is the content between the braces, e.g. `Word_Break = ALetter` or
/// `Line_Break=Numeric`. Property names are matched case-insensitively and surrounding
/// whitespace around `=` is ignored, matching how the rule compiler sees them after variable
/// substitution. Tokens this crate doesn't special-case (general categories, scripts, and
/// other binary properties that `regex`'s own Unicode tables already understand) are
/// returned unchanged, wrapped back into `\p{...}`, so the caller can splice the result
/// straight into a rule pattern either way.
pub fn render_property_class(token: &str) -> Result<String, UnknownPropertyError> {
    let Some((name, value)) = token.split_once('=') else {
        return Ok(format!("\\p{{{token}}}"));
    };
    let name = name.trim();
    let value = value.trim();
    let set = match name {
        "Word_Break" | "word_break" => word_break_set(value),
        "Sentence_Break" | "sentence_break" => sentence_break_set(value),
        "Grapheme_Cluster_Break" | "grapheme_cluster_break" => grapheme_cluster_break_set(value),
        "Line_Break" | "line_break" => line_break_set(value),
        _ => None,
    };
    let Some(set) = set else {
        return Ok(format!("\\p{{{token}}}"));
    };
    Ok(ranges_to_class(&set))
}

fn word_break_set(value: &str) -> Option<CodePointSetData> {
    let v = word_break_value(value)?;
    Some(CodePointMapData::<WordBreak>::new().as_borrowed().get_set_for_value(v))
}

fn sentence_break_set(value: &str) -> Option<CodePointSetData> {
    let v = sentence_break_value(value)?;
    Some(CodePointMapData::<SentenceBreak>::new().as_borrowed().get_set_for_value(v))
}

fn grapheme_cluster_break_set(value: &str) -> Option<CodePointSetData> {
    let v = grapheme_cluster_break_value(value)?;
    Some(CodePointMapData::<GraphemeClusterBreak>::new().as_borrowed().get_set_for_value(v))
}

fn line_break_set(value: &str) -> Option<CodePointSetData> {
    let v = line_break_value(value)?;
    Some(CodePointMapData::<LineBreak>::new().as_borrowed().get_set_for_value(v))
}

fn word_break_value(value: &str) -> Option<WordBreak> {
    Some(match value {
        "ALetter" => WordBreak::ALetter,
        "CR" => WordBreak::CR,
        "Double_Quote" => WordBreak::DoubleQuote,
        "Extend" => WordBreak::Extend,
        "ExtendNumLet" => WordBreak::ExtendNumLet,
        "Format" => WordBreak::Format,
        "Hebrew_Letter" => WordBreak::HebrewLetter,
        "Katakana" => WordBreak::Katakana,
        "LF" => WordBreak::LF,
        "MidLetter" => WordBreak::MidLetter,
        "MidNum" => WordBreak::MidNum,
        "MidNumLet" => WordBreak::MidNumLet,
        "Newline" => WordBreak::Newline,
        "Numeric" => WordBreak::Numeric,
        "Regional_Indicator" => WordBreak::RegionalIndicator,
        "Single_Quote" => WordBreak::SingleQuote,
        "WSegSpace" => WordBreak::WSegSpace,
        "ZWJ" => WordBreak::ZWJ,
        _ => return None,
    })
}

fn sentence_break_value(value: &str) -> Option<SentenceBreak> {
    Some(match value {
        "ATerm" => SentenceBreak::ATerm,
        "Close" => SentenceBreak::Close,
        "CR" => SentenceBreak::CR,
        "Extend" => SentenceBreak::Extend,
        "Format" => SentenceBreak::Format,
        "LF" => SentenceBreak::LF,
        "Lower" => SentenceBreak::Lower,
        "Numeric" => SentenceBreak::Numeric,
        "OLetter" => SentenceBreak::OLetter,
        "SContinue" => SentenceBreak::SContinue,
        "Sep" => SentenceBreak::Sep,
        "Sp" => SentenceBreak::Sp,
        "STerm" => SentenceBreak::STerm,
        "Upper" => SentenceBreak::Upper,
        _ => return None,
    })
}

fn grapheme_cluster_break_value(value: &str) -> Option<GraphemeClusterBreak> {
    Some(match value {
        "Control" => GraphemeClusterBreak::Control,
        "CR" => GraphemeClusterBreak::CR,
        "Extend" => GraphemeClusterBreak::Extend,
        "Extended_Pictographic" => GraphemeClusterBreak::ExtendedPictographic,
        "L" => GraphemeClusterBreak::L,
        "LF" => GraphemeClusterBreak::LF,
        "LV" => GraphemeClusterBreak::LV,
        "LVT" => GraphemeClusterBreak::LVT,
        "Prepend" => GraphemeClusterBreak::Prepend,
        "Regional_Indicator" => GraphemeClusterBreak::RegionalIndicator,
        "SpacingMark" => GraphemeClusterBreak::SpacingMark,
        "T" => GraphemeClusterBreak::T,
        "V" => GraphemeClusterBreak::V,
        "ZWJ" => GraphemeClusterBreak::ZWJ,
        _ => return None,
    })
}

fn line_break_value(value: &str) -> Option<LineBreak> {
    Some(match value {
        "Numeric" => LineBreak::Numeric,
        "Alphabetic" => LineBreak::Alphabetic,
        "Glue" => LineBreak::Glue,
        "WordJoiner" => LineBreak::WordJoiner,
        "Infix_Numeric" => LineBreak::InfixNumeric,
        "Mandatory_Break" => LineBreak::MandatoryBreak,
        "Contingent_Break" => LineBreak::ContingentBreak,
        "Close_Punctuation" => LineBreak::ClosePunctuation,
        "Hyphen" => LineBreak::Hyphen,
        "Space" => LineBreak::Space,
        "Ideographic" => LineBreak::Ideographic,
        _ => return None,
    })
}

fn ranges_to_class(set: &CodePointSetData) -> String {
    let mut out = String::from("[");
    for range in set.as_borrowed().iter_ranges() {
        let start = *range.start();
        let end = *range.end();
        if start == end {
            out.push_str(&format!("\\u{{{start:x}}}"));
        } else {
            out.push_str(&format!("\\u{{{start:x}}}-\\u{{{end:x}}}"));
        }
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_break_classifies_ascii_letters_as_aletter() {
        assert_eq!(word_break('a'), WordBreak::ALetter);
        assert_eq!(word_break(' '), WordBreak::WSegSpace);
    }

    #[test]
    fn white_space_matches_ascii_space_and_not_letters() {
        assert!(is_white_space(' '));
        assert!(!is_white_space('a'));
    }

    #[test]
    fn soft_dotted_is_true_for_i_and_j() {
        assert!(is_soft_dotted('i'));
        assert!(is_soft_dotted('j'));
        assert!(!is_soft_dotted('a'));
    }

    #[test]
    fn combining_class_above_matches_combining_acute() {
        assert!(is_combining_class_above('\u{0301}'));
        assert!(!is_combining_class_above('a'));
    }

    #[test]
    fn render_property_class_resolves_word_break_aletter() {
        let class = render_property_class("Word_Break = ALetter").unwrap();
        assert!(class.starts_with('['));
        assert!(class.contains("\\u{"));
    }

    #[test]
    fn render_property_class_passes_through_unknown_tokens() {
        assert_eq!(render_property_class("Alphabetic").unwrap(), "\\p{Alphabetic}");
    }
}
