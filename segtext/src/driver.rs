// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The segmenter driver (4.7): resolves a locale and rule set for a [`BreakKind`], then
//! walks a string boundary by boundary, dispatching to the dictionary word-breaker
//! ([`seg_dict`]) instead of the rule evaluator when the resolved locale has one.

pub use crate::evaluator::Decision;
use crate::evaluator::{self, Operator};
use crate::locale::{self, LocaleInput};
use crate::{catalog, BreakKind, Error};
use seg_data::SegmentKind;

/// Per-call segmentation options (4.7).
#[derive(Debug, Clone)]
pub struct Options {
    /// The locale to segment under, resolved per 4.6. `None` means root/default.
    pub locale: Option<String>,
    /// Which of the four break kinds to apply.
    pub break_kind: BreakKind,
    /// Whether sentence-break suppression (abbreviations, 4.5) is applied. Ignored for
    /// break kinds other than [`BreakKind::Sentence`].
    pub suppressions: bool,
    /// Whether [`split`]/[`splitter`] drop whitespace-only segments from the output.
    pub trim: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { locale: None, break_kind: BreakKind::default(), suppressions: true, trim: false }
    }
}

/// Resolves `options.locale` to an effective segmentation locale string.
///
/// # Errors
///
/// Returns [`Error::UnknownLocale`] when the caller passed an explicit locale that is not
/// even a well-formed BCP 47 tag (section 7: an explicit unknown locale is an error, while
/// an unspecified one silently defaults to `root`).
fn resolved_locale(options: &Options) -> Result<String, Error> {
    locale::resolve_segmentation_locale(
        options.locale.as_deref().map(LocaleInput::Str),
        catalog::is_known_locale,
    )
    .map_err(|_| Error::UnknownLocale(options.locale.clone().unwrap_or_default()))
}

/// Evaluates the boundary between `before` and `after` under `options` (4.7/4.3).
///
/// # Errors
///
/// See [`Error`].
pub fn decide<'a>(before: &'a str, after: &'a str, options: &Options) -> Result<Decision<'a>, Error> {
    let kind = options.break_kind.to_segment_kind();
    let resolved = resolved_locale(options)?;
    let rules = catalog::rule_set(&resolved, kind, options.suppressions)?;
    Ok(evaluator::evaluate(before, after, &rules))
}

/// Looks up a dictionary segmentation for `s` under `resolved`, if `resolved` folds to a
/// known dictionary locale (4.7's "dispatch to the dictionary word-breaker").
///
/// Returns `Ok(None)` when `resolved` is not a dictionary locale at all - the caller should
/// fall back to the regular rule evaluator in that case. Returns
/// [`Error::DictionaryUnavailable`] when `resolved` is a recognized dictionary locale whose
/// word list simply is not packaged in this build.
fn dictionary_next<'s>(resolved: &str, s: &'s str) -> Result<Option<(&'s str, &'s str)>, Error> {
    match seg_dict::dictionary_for(resolved) {
        Ok(dict) => Ok(Some(dict.next(s))),
        Err(seg_dict::DictError::NotADictionaryLocale(_)) => Ok(None),
        Err(seg_dict::DictError::Unavailable(locale)) => {
            Err(Error::DictionaryUnavailable(locale.to_string()))
        }
    }
}

/// Produces one segment from the start of `s`, plus the remainder (4.7), or `None` if `s`
/// is already exhausted.
///
/// For [`BreakKind::Word`], first tries the caller's requested locale against the
/// dictionary word-breaker (CJK/Thai/Lao/Khmer/Burmese, folded to its canonical dictionary
/// locale); if that locale has no dictionary at all, falls back to the regular rule
/// evaluator for the resolved segmentation locale, walking `s` boundary by boundary until
/// the evaluator reports a break past the start of the string.
///
/// # Errors
///
/// See [`Error`].
pub fn next(s: &str, options: &Options) -> Result<Option<(String, String)>, Error> {
    if s.is_empty() {
        return Ok(None);
    }

    let kind = options.break_kind.to_segment_kind();
    let resolved = resolved_locale(options)?;

    if kind == SegmentKind::WordBreak {
        // Dictionary folding (`yue`/`ja` -> `zh`, etc.) only looks at the primary
        // language subtag (seg_dict::canonical_dictionary_locale), independent of
        // whether that locale has any *bundled segmentation data* of its own - so this
        // dispatches off the caller's raw request, not `resolved` (which has already
        // fallen back to `root` for locales like `yue-Hant` that have no bundled
        // segmentation XML, even though they do have a dictionary via folding).
        let dictionary_locale = options.locale.as_deref().unwrap_or(resolved.as_str());
        if let Some((word, rest)) = dictionary_next(dictionary_locale, s)? {
            return Ok(Some((word.to_string(), rest.to_string())));
        }
    }

    let rules = catalog::rule_set(&resolved, kind, options.suppressions)?;
    let mut offset = 0usize;
    loop {
        let before = &s[..offset];
        let after = &s[offset..];
        let decision = evaluator::evaluate(before, after, &rules);
        if decision.operator == Operator::Break && offset > 0 {
            let (segment, rest) = s.split_at(offset);
            return Ok(Some((segment.to_string(), rest.to_string())));
        }
        if after.is_empty() {
            return Ok(Some((s.to_string(), String::new())));
        }
        offset += decision.consumed.len();
    }
}

/// Splits the whole of `s` into segments (4.7), repeatedly applying [`next`].
///
/// # Errors
///
/// See [`Error`].
pub fn split(s: &str, options: &Options) -> Result<Vec<String>, Error> {
    splitter(s, options)?.collect()
}

/// An internal, infallible helper for callers (the case mapper's `titlecase`) that always
/// segment under the root locale and therefore cannot hit [`Error`].
pub(crate) fn split_str(s: &str, options: &Options) -> Vec<String> {
    split(s, options).expect("root-locale word splitting cannot fail")
}

/// A lazy, restartable iterator over `s`'s segments under `options` (4.7's "stream"
/// requirement - named `splitter` since `stream` would shadow nothing but reads oddly next
/// to [`Iterator`]).
///
/// Each call to [`Iterator::next`] resolves the rule set (a cheap cache lookup after the
/// first call for a given `(locale, kind, suppressions)`) and advances one segment; dropping
/// the iterator simply stops - there is no background work to cancel.
///
/// # Errors
///
/// `splitter` itself never fails - building the iterator does no locale resolution or rule
/// lookup. Each call to [`Iterator::next`] on the returned [`Splitter`] can fail the way
/// [`next`] can (a malformed explicit locale, or a dictionary locale with no packaged word
/// list); such an error is yielded once, and the iterator is exhausted afterward.
pub fn splitter<'a>(s: &'a str, options: &'a Options) -> Result<Splitter<'a>, Error> {
    Ok(Splitter { remaining: s, options, trim: options.trim })
}

/// See [`splitter`].
#[derive(Debug)]
pub struct Splitter<'a> {
    remaining: &'a str,
    options: &'a Options,
    trim: bool,
}

impl Iterator for Splitter<'_> {
    type Item = Result<String, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.remaining.is_empty() {
                return None;
            }
            match next(self.remaining, self.options) {
                Ok(Some((segment, _rest))) => {
                    self.remaining = &self.remaining[segment.len()..];
                    if self.trim && is_whitespace_only(&segment) {
                        continue;
                    }
                    return Some(Ok(segment));
                }
                Ok(None) => return None,
                Err(e) => {
                    self.remaining = "";
                    return Some(Err(e));
                }
            }
        }
    }
}

fn is_whitespace_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(seg_props::is_white_space)
}
