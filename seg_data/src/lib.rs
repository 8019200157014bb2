// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loads locale segmentation data: the `Segment Data Loader` of the segmentation engine.
//!
//! This crate owns parsing `segments/<locale>.xml` files (bundled at compile time; see
//! [`Catalog::bundled`]) into the raw, uncompiled form the rule compiler consumes: a set of
//! `(variable name, pattern)` pairs, a list of `(rule id, rule text)` pairs, and a list of
//! suppression strings, per segment kind, per locale. It knows nothing about regexes; turning
//! this raw data into an executable rule set is the rule compiler's job.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

mod xml;

use hashbrown::HashMap;

/// One locale's segmentation data, bundled into the binary at compile time.
///
/// On disk, file names replace `-` with `_`; the first element here is always the hyphenated,
/// lowercased form used as the catalog key.
const BUNDLED_SEGMENTS: &[(&str, &str)] = &[
    ("root", include_str!("data/segments/root.xml")),
    ("zh", include_str!("data/segments/zh.xml")),
];

/// A segmentation rule id.
///
/// Rule ids are decimal sequence numbers (`"10"`, `"10.5"`, `"11"`) used purely for ordering
/// and tie-breaking; lower ids fire first. They are rationals, not integers, so that a
/// synthesized rule (the suppression rule, at `10.5`) can be inserted between two adjacent
/// standard rules without renumbering anything else.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleId {
    text: Box<str>,
    value: f64,
}

impl RuleId {
    /// Parses a rule id from its textual form in the data file.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let value: f64 = text.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self { text: text.into(), value })
    }

    /// Builds a synthetic rule id from a numeric value, for rules generated at compile time
    /// rather than read from a data file (the suppression rule uses this).
    #[must_use]
    pub fn synthetic(value: f64) -> Self {
        Self { text: format!("{value}").into(), value }
    }

    /// The id's original textual form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The id's numeric value, used for ordering.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl Eq for RuleId {}

impl PartialOrd for RuleId {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RuleId {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl core::fmt::Display for RuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.text)
    }
}

/// A `(name, pattern)` pair as read from a data file's `<variables>` section.
#[derive(Debug, Clone)]
pub struct RawVariable {
    /// The variable's name, including its leading `$`.
    pub name: Box<str>,
    /// The variable's regex-fragment pattern, possibly referencing other variables.
    pub pattern: Box<str>,
}

/// A `(rule id, rule text)` pair as read from a data file's `<rules>` section.
#[derive(Debug, Clone)]
pub struct RawRule {
    /// This rule's ordering id.
    pub id: RuleId,
    /// The unparsed rule text, e.g. `"$AHLetter × $AHLetter"`.
    pub text: Box<str>,
}

/// The raw, uncompiled segmentation data for one `(locale, segment_kind)` pair.
#[derive(Debug, Clone, Default)]
pub struct RawSegmentData {
    /// Variables in declaration order; later variables may reference earlier ones.
    pub variables: Vec<RawVariable>,
    /// Rules in file order (not yet sorted by id; the compiler sorts after expansion).
    pub rules: Vec<RawRule>,
    /// Literal suppression strings (e.g. `"Mr."`), present only for `sentence_break`.
    pub suppressions: Vec<Box<str>>,
}

impl RawSegmentData {
    /// Appends `other`'s fields after `self`'s, in place.
    ///
    /// Used by [`Catalog::effective_segment`] to implement the ancestor merge (I5): the caller
    /// folds root-to-specific, so that locale-specific variables shadow root ones by
    /// declaration order and locale-specific suppressions/rules are appended after root's.
    fn extend(&mut self, other: &RawSegmentData) {
        self.variables.extend(other.variables.iter().cloned());
        self.rules.extend(other.rules.iter().cloned());
        self.suppressions.extend(other.suppressions.iter().cloned());
    }
}

/// One of the four segment kinds the loader recognizes, in their canonical snake_case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// User-perceived characters (UAX #29 grapheme clusters).
    GraphemeClusterBreak,
    /// Word boundaries.
    WordBreak,
    /// Sentence boundaries.
    SentenceBreak,
    /// Line-break opportunities.
    LineBreak,
}

impl SegmentKind {
    /// Parses a segment kind from any of its data-file spellings, normalizing to the
    /// canonical snake_case form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s {
            "grapheme_cluster_break" | "grapheme" | "grapheme_cluster" => {
                Self::GraphemeClusterBreak
            }
            "word_break" | "word" => Self::WordBreak,
            "sentence_break" | "sentence" => Self::SentenceBreak,
            "line_break" | "line" => Self::LineBreak,
            _ => return None,
        })
    }

    /// The canonical snake_case name, as produced by the loader.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GraphemeClusterBreak => "grapheme_cluster_break",
            Self::WordBreak => "word_break",
            Self::SentenceBreak => "sentence_break",
            Self::LineBreak => "line_break",
        }
    }
}

impl core::fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error raised by the data loader.
#[derive(Debug, Clone, PartialEq)]
pub enum DataError {
    /// No data file is known for the requested locale (not even by ancestor fallback to
    /// `root`, which should not happen for a correctly bundled catalog).
    UnknownLocale(Box<str>),
    /// The locale is known, but carries no data for the requested segment kind.
    UnknownSegmentType(Box<str>, SegmentKind),
    /// A data file failed to parse; always a data bug, never a runtime condition.
    Xml(String),
}

impl core::fmt::Display for DataError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownLocale(locale) => write!(f, "unknown segmentation locale `{locale}`"),
            Self::UnknownSegmentType(locale, kind) => {
                write!(f, "locale `{locale}` has no `{kind}` segmentation data")
            }
            Self::Xml(msg) => write!(f, "segmentation data error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

/// The parsed, in-memory form of every bundled segmentation data file.
///
/// Construction parses XML and is fallible; lookups after that are infallible except for
/// asking about a locale or kind the catalog genuinely has no data for.
#[derive(Debug)]
pub struct Catalog {
    locales: HashMap<Box<str>, HashMap<SegmentKind, RawSegmentData>>,
}

impl Catalog {
    /// Parses every bundled `segments/<locale>.xml` file.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Xml`] if any bundled file fails to parse. Since the data is
    /// bundled at compile time this indicates a defect in the shipped data, not a runtime
    /// condition a caller can recover from.
    pub fn bundled() -> Result<Self, DataError> {
        let mut locales = HashMap::new();
        for (locale, xml) in BUNDLED_SEGMENTS {
            let parsed = xml::parse_locale_data(locale, xml)?;
            locales.insert((*locale).into(), parsed);
        }
        Ok(Self { locales })
    }

    /// The set of locales this catalog has direct (non-inherited) data for.
    pub fn known_locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(|s| &**s)
    }

    /// Normalizes a locale identifier for catalog lookups: lowercases it and replaces `_`
    /// with `-`, per the data-directory naming convention (section 9's open question:
    /// normalize both directions on ingest).
    #[must_use]
    pub fn normalize_locale(locale: &str) -> String {
        locale.to_lowercase().replace('_', "-")
    }

    /// The ancestor chain for a locale, most specific first, always ending in `"root"`.
    ///
    /// For `"a-b-c"` this is `["a-b-c", "a-b", "a", "root"]` (I5): each step drops the last
    /// hyphen-separated component, regardless of whether it is a script or region subtag.
    #[must_use]
    pub fn ancestor_chain(locale: &str) -> Vec<String> {
        let normalized = Self::normalize_locale(locale);
        if normalized == "root" {
            return vec!["root".to_string()];
        }
        let mut chain = Vec::new();
        let parts: Vec<&str> = normalized.split('-').collect();
        for i in (1..=parts.len()).rev() {
            chain.push(parts[..i].join("-"));
        }
        chain.push("root".to_string());
        chain
    }

    /// All segment kinds this catalog has *direct* data for, for the given locale.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownLocale`] if no data file exists for `locale` exactly (no
    /// ancestor fallback; for that, see [`Self::effective_segment`]).
    pub fn segments(
        &self,
        locale: &str,
    ) -> Result<&HashMap<SegmentKind, RawSegmentData>, DataError> {
        let key = Self::normalize_locale(locale);
        self.locales
            .get(key.as_str())
            .ok_or_else(|| DataError::UnknownLocale(key.into()))
    }

    /// The direct (non-inherited) data for one `(locale, kind)` pair.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::UnknownLocale`] or [`DataError::UnknownSegmentType`].
    pub fn segment(&self, locale: &str, kind: SegmentKind) -> Result<&RawSegmentData, DataError> {
        let key = Self::normalize_locale(locale);
        self.segments(&key)?
            .get(&kind)
            .ok_or_else(|| DataError::UnknownSegmentType(key.into(), kind))
    }

    /// The effective data for `(locale, kind)`: the ancestor-chain merge described by I5.
    ///
    /// Locales with no direct data contribute nothing and are silently skipped; `root` always
    /// contributes (it is the base of every chain), so this only fails if `root` itself lacks
    /// data for `kind`, which indicates a defect in the bundled data.
    pub fn effective_segment(
        &self,
        locale: &str,
        kind: SegmentKind,
    ) -> Result<RawSegmentData, DataError> {
        let mut effective = RawSegmentData::default();
        for ancestor in Self::ancestor_chain(locale).iter().rev() {
            if let Ok(segments) = self.segments(ancestor) {
                if let Some(data) = segments.get(&kind) {
                    effective.extend(data);
                }
            }
        }
        if effective.rules.is_empty() && effective.variables.is_empty() {
            return Err(DataError::UnknownSegmentType(
                Self::normalize_locale(locale).into(),
                kind,
            ));
        }
        Ok(effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestor_chain_drops_components_right_to_left() {
        assert_eq!(
            Catalog::ancestor_chain("zh-Hant-HK"),
            vec!["zh-hant-hk", "zh-hant", "zh", "root"]
        );
        assert_eq!(Catalog::ancestor_chain("en"), vec!["en", "root"]);
        assert_eq!(Catalog::ancestor_chain("root"), vec!["root"]);
    }

    #[test]
    fn normalize_locale_accepts_underscore_and_hyphen() {
        assert_eq!(Catalog::normalize_locale("zh_Hant_HK"), "zh-hant-hk");
        assert_eq!(Catalog::normalize_locale("zh-Hant-HK"), "zh-hant-hk");
    }

    #[test]
    fn bundled_catalog_parses_root_and_zh() {
        let catalog = Catalog::bundled().expect("bundled data must parse");
        assert!(catalog.known_locales().any(|l| l == "root"));
        assert!(catalog.known_locales().any(|l| l == "zh"));
        let root_word = catalog
            .segment("root", SegmentKind::WordBreak)
            .expect("root must have word_break data");
        assert!(!root_word.rules.is_empty());
    }

    #[test]
    fn effective_segment_merges_zh_over_root_for_line_break() {
        let catalog = Catalog::bundled().expect("bundled data must parse");
        let merged = catalog
            .effective_segment("zh-Hant-HK", SegmentKind::LineBreak)
            .expect("zh-Hant-HK must fall back through zh to root");
        // zh's ideograph-no-break rule plus root's generic space-break rules.
        assert!(merged.rules.iter().any(|r| r.id.as_str() == "8.5"));
        assert!(merged.rules.iter().any(|r| r.id.as_str() == "9"));
    }

    #[test]
    fn unknown_locale_is_an_error() {
        let catalog = Catalog::bundled().expect("bundled data must parse");
        assert!(matches!(
            catalog.segments("klingon"),
            Err(DataError::UnknownLocale(_))
        ));
    }
}
