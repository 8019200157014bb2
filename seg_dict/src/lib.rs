// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dictionary word-breaker: longest-match word segmentation for scripts that do not
//! separate words with whitespace (Chinese, Japanese, Thai, Lao, Khmer, Burmese).
//!
//! Word lists are bundled at compile time (see [`BUNDLED_DICTIONARIES`]) and compiled into a
//! trie on first use; the compiled trie is cached for the rest of the process, keyed by
//! canonical dictionary locale, behind a single writer lock with lock-free reads once
//! populated - this crate never mutates or evicts a stored trie.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

use std::sync::{Arc, OnceLock, RwLock};

use hashbrown::HashMap;

/// Bundled word lists, keyed by canonical dictionary locale.
///
/// These are representative subsets, not the full CLDR/ICU dictionaries (section 5 of the
/// design notes puts the real Chinese dictionary at roughly 100 MiB decoded; bundling that
/// verbatim is out of scope here). See `DESIGN.md` for the tradeoff.
const BUNDLED_DICTIONARIES: &[(&str, &str)] = &[
    ("zh", include_str!("data/dictionaries/zh.txt")),
    ("th", include_str!("data/dictionaries/th.txt")),
    ("lo", include_str!("data/dictionaries/lo.txt")),
    ("km", include_str!("data/dictionaries/km.txt")),
    ("my", include_str!("data/dictionaries/my.txt")),
];

/// The locale identifiers this crate recognizes as dictionary locales, before folding to
/// their canonical dictionary (e.g. `yue` folds to the `zh` dictionary).
pub const KNOWN_DICTIONARY_LOCALES: &[&str] = &["zh", "yue", "ja", "th", "lo", "km", "my"];

/// A trie lookup result for a candidate codepoint sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The sequence is a complete dictionary entry.
    Word,
    /// The sequence is a strict prefix of at least one longer dictionary entry, but is not
    /// itself an entry.
    Prefix,
    /// The sequence does not appear in the dictionary at all, not even as a prefix.
    Absent,
}

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

/// A compiled word list.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.is_word = true;
    }

    /// Looks up the verdict for an exact candidate sequence (I6).
    #[must_use]
    pub fn lookup(&self, s: &str) -> Verdict {
        let mut node = &self.root;
        for c in s.chars() {
            match node.children.get(&c) {
                Some(next) => node = next,
                None => return Verdict::Absent,
            }
        }
        if node.is_word {
            Verdict::Word
        } else {
            Verdict::Prefix
        }
    }
}

/// A compiled dictionary for one canonical dictionary locale.
#[derive(Debug, Default)]
pub struct Dictionary {
    trie: Trie,
}

impl Dictionary {
    /// Parses a word list in the packaged text format: one word per line, optional
    /// tab-separated integer weight (ignored - it plays no role in longest-match breaking),
    /// `#`-prefixed and blank lines ignored.
    #[must_use]
    pub fn from_word_list(text: &str) -> Self {
        let mut trie = Trie::default();
        for line in text.lines() {
            let line = line.trim_start_matches('\u{feff}').trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let word = line.split('\t').next().unwrap_or(line).trim();
            if !word.is_empty() {
                trie.insert(word);
            }
        }
        Self { trie }
    }

    /// Looks up the verdict for an exact candidate sequence.
    #[must_use]
    pub fn lookup(&self, s: &str) -> Verdict {
        self.trie.lookup(s)
    }

    /// Produces one segment from the start of `s`, plus the remainder.
    ///
    /// `s` must be non-empty. Extends the candidate codepoint by codepoint while the trie
    /// still has a path for it; the emitted segment is the longest extension that was a
    /// complete word. If no prefix of `s` is ever a word, falls back to the first codepoint.
    #[must_use]
    pub fn next<'s>(&self, s: &'s str) -> (&'s str, &'s str) {
        debug_assert!(!s.is_empty(), "Dictionary::next called on an empty string");
        let mut node = &self.trie.root;
        let mut longest_word_end = None;
        let mut offset = 0usize;
        for c in s.chars() {
            let Some(next) = node.children.get(&c) else {
                break;
            };
            node = next;
            offset += c.len_utf8();
            if node.is_word {
                longest_word_end = Some(offset);
            }
        }
        let split_at = longest_word_end.unwrap_or_else(|| {
            s.chars().next().map(char::len_utf8).unwrap_or(0)
        });
        s.split_at(split_at)
    }

    /// Repeatedly applies [`Self::next`] until `s` is exhausted.
    #[must_use]
    pub fn split(&self, mut s: &str) -> Vec<String> {
        let mut out = Vec::new();
        while !s.is_empty() {
            let (word, rest) = self.next(s);
            out.push(word.to_string());
            s = rest;
        }
        out
    }
}

/// An error raised while resolving or loading a dictionary.
#[derive(Debug, Clone, PartialEq)]
pub enum DictError {
    /// The requested locale does not fold to any recognized dictionary locale.
    NotADictionaryLocale(Box<str>),
    /// The locale folds to a recognized dictionary locale, but no word list is packaged for
    /// it (a missing-data condition; see section 7's `dictionary_unavailable`).
    Unavailable(&'static str),
}

impl core::fmt::Display for DictError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotADictionaryLocale(locale) => {
                write!(f, "`{locale}` is not a dictionary locale")
            }
            Self::Unavailable(locale) => write!(f, "dictionary for `{locale}` is not installed"),
        }
    }
}

impl std::error::Error for DictError {}

/// Folds a caller-supplied locale down to its canonical dictionary locale.
///
/// Cantonese and Hong-Kong Chinese variants, and Japanese, all share the Chinese dictionary -
/// this mirrors how ICU's own CJK dictionary data is packaged as a single shared word list.
#[must_use]
pub fn canonical_dictionary_locale(locale: &str) -> Option<&'static str> {
    let normalized = locale.to_lowercase();
    let language = normalized.split(['-', '_']).next().unwrap_or("");
    match language {
        "zh" | "yue" | "ja" => Some("zh"),
        "th" => Some("th"),
        "lo" => Some("lo"),
        "km" => Some("km"),
        "my" => Some("my"),
        _ => None,
    }
}

fn bundled_word_list(canonical_locale: &str) -> Option<&'static str> {
    BUNDLED_DICTIONARIES
        .iter()
        .find(|(locale, _)| *locale == canonical_locale)
        .map(|(_, text)| *text)
}

static CACHE: OnceLock<RwLock<HashMap<&'static str, Arc<Dictionary>>>> = OnceLock::new();

/// Returns the compiled dictionary for `locale`, loading and caching it on first use.
///
/// # Errors
///
/// Returns [`DictError::NotADictionaryLocale`] if `locale` does not fold to a recognized
/// dictionary locale, or [`DictError::Unavailable`] if it does but no word list is packaged.
pub fn dictionary_for(locale: &str) -> Result<Arc<Dictionary>, DictError> {
    let canonical = canonical_dictionary_locale(locale)
        .ok_or_else(|| DictError::NotADictionaryLocale(locale.into()))?;

    let cache = CACHE.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(dict) = cache.read().unwrap_or_else(|e| e.into_inner()).get(canonical) {
        return Ok(dict.clone());
    }

    let mut guard = cache.write().unwrap_or_else(|e| e.into_inner());
    if let Some(dict) = guard.get(canonical) {
        return Ok(dict.clone());
    }
    let word_list = bundled_word_list(canonical).ok_or(DictError::Unavailable(canonical))?;
    let dict = Arc::new(Dictionary::from_word_list(word_list));
    guard.insert(canonical, dict.clone());
    Ok(dict)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_locale_folds_cantonese_and_japanese_to_chinese() {
        assert_eq!(canonical_dictionary_locale("zh"), Some("zh"));
        assert_eq!(canonical_dictionary_locale("zh-Hant"), Some("zh"));
        assert_eq!(canonical_dictionary_locale("yue-Hant"), Some("zh"));
        assert_eq!(canonical_dictionary_locale("ja"), Some("zh"));
        assert_eq!(canonical_dictionary_locale("en"), None);
    }

    #[test]
    fn next_falls_back_to_single_codepoint_when_absent() {
        let dict = Dictionary::from_word_list("明德\t95\n");
        let (seg, rest) = dict.next("布鲁赫");
        assert_eq!(seg, "布");
        assert_eq!(rest, "鲁赫");
    }

    #[test]
    fn next_takes_the_longest_registered_word() {
        let dict = Dictionary::from_word_list("明德\t95\n");
        let (seg, rest) = dict.next("明德");
        assert_eq!(seg, "明德");
        assert_eq!(rest, "");
    }

    #[test]
    fn split_exhausts_the_input() {
        let dict = Dictionary::from_word_list("明德\t95\n");
        assert_eq!(dict.split("明德布"), vec!["明德", "布"]);
    }

    #[test]
    fn lookup_prefix_consistency_holds() {
        let dict = Dictionary::from_word_list("可以\n");
        assert_eq!(dict.lookup("可以"), Verdict::Word);
        assert_eq!(dict.lookup("可"), Verdict::Prefix);
        assert_eq!(dict.lookup("以"), Verdict::Absent);
    }

    #[test]
    fn comments_and_blank_lines_and_weights_are_ignored() {
        let dict = Dictionary::from_word_list("# comment\n\nword\tnotaweight\n");
        assert_eq!(dict.lookup("word"), Verdict::Word);
    }

    #[test]
    fn dictionary_for_loads_and_caches_bundled_chinese() {
        let dict = dictionary_for("zh").expect("zh is bundled");
        assert_eq!(dict.lookup("明德"), Verdict::Word);
        let dict2 = dictionary_for("zh-Hant").expect("zh-Hant folds to zh");
        assert!(Arc::ptr_eq(&dict, &dict2));
    }

    #[test]
    fn dictionary_for_rejects_non_dictionary_locales() {
        assert!(matches!(
            dictionary_for("en"),
            Err(DictError::NotADictionaryLocale(_))
        ));
    }
}
