// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale-aware Unicode text segmentation (grapheme clusters, words, sentences, line-break
//! opportunities) and Unicode case folding/mapping, built on a data-driven rule interpreter
//! for [UAX #29](https://unicode.org/reports/tr29/)-style break rules distributed by CLDR.
//!
//! ```
//! use segtext::Options;
//!
//! let opts = Options::default(); // root locale, word breaking
//! let words = segtext::split("This is a sentence.", &opts).unwrap();
//! assert_eq!(words, ["This", " ", "is", " ", "a", " ", "sentence", "."]);
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod casing;
mod catalog;
mod driver;
pub mod evaluator;
pub mod locale;

pub use driver::{split, splitter, Decision, Options, Splitter};
pub use locale::{CasingLocale, LocaleInput};

/// The four segmentation modes section 3 names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BreakKind {
    /// User-perceived characters.
    Grapheme,
    /// Word boundaries (the default).
    #[default]
    Word,
    /// Sentence boundaries.
    Sentence,
    /// Line-break opportunities.
    Line,
}

impl BreakKind {
    /// Parses a break kind from any of the spellings section 6 accepts.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBreakKind`] for anything else.
    pub fn parse(s: &str) -> Result<Self, Error> {
        Ok(match s {
            "grapheme" => Self::Grapheme,
            "word" => Self::Word,
            "sentence" => Self::Sentence,
            "line" => Self::Line,
            other => return Err(Error::InvalidBreakKind(other.to_string())),
        })
    }

    fn to_segment_kind(self) -> seg_data::SegmentKind {
        match self {
            Self::Grapheme => seg_data::SegmentKind::GraphemeClusterBreak,
            Self::Word => seg_data::SegmentKind::WordBreak,
            Self::Sentence => seg_data::SegmentKind::SentenceBreak,
            Self::Line => seg_data::SegmentKind::LineBreak,
        }
    }
}

/// A runtime error raised by a segmentation operation (section 7).
///
/// Data bugs (`variable_not_found`, `invalid_rule`, `regex_compile_error`) are not
/// represented here: they can only arise from corrupt bundled data, which this crate
/// treats as a startup-time defect (see `segtext::catalog`), not a condition callers
/// recover from per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The caller explicitly requested a locale this crate has no data for at all (not
    /// even by falling back to `root`/`any` - that fallback only applies when the caller
    /// did not specify a locale).
    UnknownLocale(String),
    /// The resolved locale carries no data for the requested segment kind.
    UnknownSegmentType(String),
    /// `break_kind` was not one of `grapheme`/`word`/`sentence`/`line`.
    InvalidBreakKind(String),
    /// A dictionary locale was requested but its word list is not packaged.
    DictionaryUnavailable(String),
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownLocale(l) => write!(f, "unknown locale `{l}`"),
            Self::UnknownSegmentType(l) => write!(f, "no segmentation data for `{l}`"),
            Self::InvalidBreakKind(k) => write!(f, "invalid break kind `{k}`"),
            Self::DictionaryUnavailable(l) => write!(f, "dictionary for `{l}` is not installed"),
        }
    }
}

impl std::error::Error for Error {}

/// Per-call options for the case mapper (4.8/6): which locale's casing rules to apply.
#[derive(Debug, Clone, Default)]
pub struct CaseOptions {
    /// The locale whose casing rules apply. `None` resolves to [`CasingLocale::Any`] - the
    /// generic Unicode mapping, with no locale-specific exceptions.
    pub locale: Option<String>,
}

fn resolved_casing_locale(options: &CaseOptions) -> CasingLocale {
    locale::resolve_casing_locale(options.locale.as_deref().map(LocaleInput::Str))
}

/// Case-folds `s` for caseless comparison (4.8), in non-Turkic mode.
#[must_use]
pub fn fold(s: &str) -> String {
    casing::fold(s, false)
}

/// Case-folds `s` in Turkic mode (`turkic: true` folds `U+0049`/`U+0130` as the Turkish/
/// Azeri `T`-status entries require; see [`fold`]).
#[must_use]
pub fn fold_with(s: &str, turkic: bool) -> String {
    casing::fold(s, turkic)
}

/// Whether `a` and `b` are equal under [`fold`] (P5).
#[must_use]
pub fn equals_ignoring_case(a: &str, b: &str) -> bool {
    casing::equals_ignoring_case(a, b, false)
}

/// Whether `a` and `b` are equal under [`fold_with`].
#[must_use]
pub fn equals_ignoring_case_with(a: &str, b: &str, turkic: bool) -> bool {
    casing::equals_ignoring_case(a, b, turkic)
}

/// Upcases `s` under `options`'s resolved casing locale (4.8).
#[must_use]
pub fn upcase(s: &str, options: &CaseOptions) -> String {
    casing::upcase(s, resolved_casing_locale(options))
}

/// Downcases `s` under `options`'s resolved casing locale (4.8).
#[must_use]
pub fn downcase(s: &str, options: &CaseOptions) -> String {
    casing::downcase(s, resolved_casing_locale(options))
}

/// Titlecases `s` under `options`'s resolved casing locale (4.8).
#[must_use]
pub fn titlecase(s: &str, options: &CaseOptions) -> String {
    casing::titlecase(s, resolved_casing_locale(options))
}

/// The segmentation locales this build carries direct data for (section 6).
#[must_use]
pub fn known_segmentation_locales() -> Vec<&'static str> {
    catalog::known_segmentation_locales()
}

/// The dictionary locales this build recognizes, whether or not their word list is
/// actually packaged (section 6). See [`driver::break_before`]/[`next`] for the runtime
/// [`Error::DictionaryUnavailable`] condition.
#[must_use]
pub fn known_dictionary_locales() -> Vec<&'static str> {
    seg_dict::KNOWN_DICTIONARY_LOCALES.to_vec()
}

/// The locales with dedicated case-mapping rules (section 6): everything other than
/// `any`, which denotes "no special rules".
#[must_use]
pub fn special_casing_locales() -> Vec<&'static str> {
    locale::CasingLocale::known().to_vec()
}

/// `break?` (section 6) - `break` is a reserved word in Rust. Returns whether a boundary
/// exists between `before` and `after` under `options`.
///
/// # Errors
///
/// See [`Error`].
pub fn break_before(before: &str, after: &str, options: &Options) -> Result<bool, Error> {
    driver::decide(before, after, options)
        .map(|decision| decision.operator == evaluator::Operator::Break)
}

/// Exposes the raw evaluator decision for the boundary between `before` and `after`.
///
/// # Errors
///
/// See [`Error`].
pub fn decide<'a>(before: &'a str, after: &'a str, options: &Options) -> Result<Decision<'a>, Error> {
    driver::decide(before, after, options)
}

/// Produces one segment from the start of `s`, plus the remainder, or `None` if `s` is
/// exhausted.
///
/// # Errors
///
/// See [`Error`].
pub fn next(s: &str, options: &Options) -> Result<Option<(String, String)>, Error> {
    driver::next(s, options)
}
