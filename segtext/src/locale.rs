// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The locale resolver (4.6): maps a caller-supplied locale (string, symbol, or a
//! structured [`locale_tag::Language`]) to the best available segmentation or casing
//! locale, by walking progressively less specific candidates.

use locale_tag::{Language, ParseLanguageError};

/// A caller-supplied locale, accepted in any of the forms section 4.6 names.
///
/// "Symbol" (Ruby/Lisp-style interned identifier) has no Rust analogue; callers who would
/// pass `:en_US` in those languages pass a `&str` here instead - the distinction the spec
/// draws is about *input shape*, and a plain string already covers both the hyphenated and
/// underscored spellings via [`Language::parse`].
#[derive(Debug, Clone, Copy)]
pub enum LocaleInput<'a> {
    /// A string or symbol form, e.g. `"en-US"`, `"zh_Hant_HK"`.
    Str(&'a str),
    /// An already-parsed structured tag.
    Tag(Language),
}

impl<'a> From<&'a str> for LocaleInput<'a> {
    fn from(s: &'a str) -> Self {
        Self::Str(s)
    }
}

impl From<Language> for LocaleInput<'_> {
    fn from(tag: Language) -> Self {
        Self::Tag(tag)
    }
}

impl LocaleInput<'_> {
    /// The canonical `language[-Script][-REGION]` form (step 1 of 4.6), for callers that
    /// need to distinguish a genuinely malformed tag from one that is merely unbundled.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`ParseLanguageError`] if `self` is a string that is not
    /// even a well-formed BCP 47 prefix (e.g. contains no valid primary language subtag).
    /// A structured [`Language`] tag is always already valid and never errors.
    fn try_canonical(&self) -> Result<Language, ParseLanguageError> {
        match self {
            Self::Str(s) => Language::parse(s),
            Self::Tag(tag) => Ok(*tag),
        }
    }

    /// As [`Self::try_canonical`], but falls back to [`Language::UND`] on malformed input.
    /// Used by casing resolution (section 6's casing operations have no error channel to
    /// report a malformed locale through).
    fn canonical_lossy(&self) -> Language {
        self.try_canonical().unwrap_or(Language::UND)
    }
}

/// Progressively less specific candidate forms for a canonical tag (step 2 of 4.6):
/// `lang-Script-Region -> lang-Region -> lang-Script -> lang`.
fn candidates(tag: Language) -> Vec<String> {
    let lang = tag.language();
    let script = tag.script();
    let region = tag.region();
    let mut out = Vec::with_capacity(4);
    if let (Some(script), Some(region)) = (script, region) {
        out.push(format!("{lang}-{script}-{region}"));
    }
    if let Some(region) = region {
        out.push(format!("{lang}-{region}"));
    }
    if let Some(script) = script {
        out.push(format!("{lang}-{script}"));
    }
    out.push(lang.to_string());
    out
}

/// Resolves a segmentation locale: the first candidate (most to least specific) present
/// in `known`, falling back to `"root"` (4.6's default for segmentation) if none match.
///
/// `input: None` means the caller did not specify a locale at all; this resolves straight
/// to `"root"` without consulting `known`, since there is nothing to look up.
///
/// # Errors
///
/// Returns [`ParseLanguageError`] only when the caller passed an explicit locale that is
/// not even a well-formed BCP 47 tag prefix - section 7's "returns an error if the caller
/// supplied an explicit unknown locale". A well-formed tag that simply has no bundled data
/// of its own (e.g. `tr`, or `xx-Yyyy-ZZ`) is not an error: per I5, every valid locale has
/// an effective fallback to `root`, and scenario 8 treats that fallback as the ordinary
/// path, not a failure one.
pub fn resolve_segmentation_locale(
    input: Option<LocaleInput<'_>>,
    known: impl Fn(&str) -> bool,
) -> Result<String, ParseLanguageError> {
    let Some(input) = input else {
        return Ok("root".to_string());
    };
    let tag = input.try_canonical()?;
    for candidate in candidates(tag) {
        if known(&candidate) {
            return Ok(candidate);
        }
    }
    Ok("root".to_string())
}

/// A resolved casing locale: either a recognized locale hook or the "no special rules"
/// default (4.6: "default for casing is `any`").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasingLocale {
    /// Turkish or Azeri: dotted/dotless I exceptions.
    TurkishAzeri,
    /// Lithuanian: retained dot-above.
    Lithuanian,
    /// Dutch: `ij`/`IJ` digraph titlecasing.
    Dutch,
    /// Greek: diacritic-stripping upcase and final sigma.
    Greek,
    /// No locale-specific casing rules.
    Any,
}

impl CasingLocale {
    /// The locale identifiers [`crate::special_casing_locales`] advertises, in the order
    /// this enum's non-`Any` variants are declared.
    #[must_use]
    pub const fn known() -> &'static [&'static str] {
        &["tr", "az", "lt", "nl", "el"]
    }
}

/// Resolves a casing locale from a caller-supplied locale, falling back to
/// [`CasingLocale::Any`] for anything unrecognized, including `input: None`.
#[must_use]
pub fn resolve_casing_locale(input: Option<LocaleInput<'_>>) -> CasingLocale {
    let Some(input) = input else {
        return CasingLocale::Any;
    };
    match input.canonical_lossy().language() {
        "tr" | "az" => CasingLocale::TurkishAzeri,
        "lt" => CasingLocale::Lithuanian,
        "nl" => CasingLocale::Dutch,
        "el" => CasingLocale::Greek,
        _ => CasingLocale::Any,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_through_script_then_region_then_language() {
        let known = |s: &str| matches!(s, "zh" | "root");
        let resolved =
            resolve_segmentation_locale(Some(LocaleInput::Str("zh-Hant-HK")), known).unwrap();
        assert_eq!(resolved, "zh");
    }

    #[test]
    fn unspecified_locale_resolves_to_root_without_consulting_known() {
        let resolved = resolve_segmentation_locale(None, |_| {
            panic!("must not consult `known` when no locale was specified")
        })
        .unwrap();
        assert_eq!(resolved, "root");
    }

    #[test]
    fn unbundled_but_well_formed_explicit_locale_falls_back_to_root() {
        let known = |s: &str| s == "root";
        let resolved =
            resolve_segmentation_locale(Some(LocaleInput::Str("xx-Yyyy-ZZ")), known).unwrap();
        assert_eq!(resolved, "root");
    }

    #[test]
    fn malformed_explicit_locale_is_an_error() {
        let known = |s: &str| s == "root";
        assert!(resolve_segmentation_locale(Some(LocaleInput::Str("1")), known).is_err());
    }

    #[test]
    fn casing_locale_recognizes_turkish_and_azeri() {
        assert_eq!(resolve_casing_locale(Some(LocaleInput::Str("tr"))), CasingLocale::TurkishAzeri);
        assert_eq!(resolve_casing_locale(Some(LocaleInput::Str("az-Latn"))), CasingLocale::TurkishAzeri);
        assert_eq!(resolve_casing_locale(Some(LocaleInput::Str("en"))), CasingLocale::Any);
        assert_eq!(resolve_casing_locale(None), CasingLocale::Any);
    }
}
