// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The process-wide compiled rule catalog (section 5): built lazily on first use, then
//! read-only. Keyed by `(locale, kind, with_suppressions)` rather than just `(locale,
//! kind)`, since the driver may request a rule set with suppressions enabled or disabled
//! for the same locale and kind, and both must be cacheable without recompiling.
//!
//! Mirrors `seg_dict`'s own dictionary cache: a single `OnceLock<RwLock<HashMap<...>>>`,
//! read-then-upgrade-to-write on miss, entries never evicted or mutated once inserted.

use std::sync::{Arc, OnceLock, RwLock};

use hashbrown::HashMap;
use seg_compile::RuleSet;
use seg_data::{Catalog as DataCatalog, SegmentKind};

use crate::Error;

type CacheKey = (String, SegmentKind, bool);

static DATA: OnceLock<DataCatalog> = OnceLock::new();
static RULES: OnceLock<RwLock<HashMap<CacheKey, Arc<RuleSet>>>> = OnceLock::new();

/// The bundled segmentation data catalog, parsed once.
///
/// # Panics
///
/// Panics if the bundled data fails to parse. This can only happen if the data shipped
/// with this crate is corrupt - a data bug (section 7), not a runtime condition any
/// caller can recover from, so it is treated the same way `seg_dict`'s bundled word lists
/// are: trusted at compile time.
fn data() -> &'static DataCatalog {
    DATA.get_or_init(|| DataCatalog::bundled().expect("bundled segmentation data must parse"))
}

/// The set of segmentation locales this build carries direct data for.
pub(crate) fn known_segmentation_locales() -> Vec<&'static str> {
    let mut locales: Vec<&'static str> = data().known_locales().collect();
    locales.sort_unstable();
    locales
}

/// Whether `locale` (already normalized or not) has direct bundled segmentation data -
/// used by the locale resolver (4.6) to decide whether a candidate is worth trying before
/// falling back to a less specific one.
pub(crate) fn is_known_locale(locale: &str) -> bool {
    let normalized = DataCatalog::normalize_locale(locale);
    data().known_locales().any(|known| known == normalized)
}

/// Returns the compiled rule set for `(locale, kind, with_suppressions)`, compiling and
/// caching it on first request.
///
/// # Errors
///
/// Returns [`Error::UnknownSegmentType`] if no ancestor in `locale`'s chain (up to `root`)
/// carries data for `kind`.
pub(crate) fn rule_set(
    locale: &str,
    kind: SegmentKind,
    with_suppressions: bool,
) -> Result<Arc<RuleSet>, Error> {
    let normalized = DataCatalog::normalize_locale(locale);
    let key: CacheKey = (normalized.clone(), kind, with_suppressions);

    let cache = RULES.get_or_init(|| RwLock::new(HashMap::new()));
    if let Some(set) = cache.read().unwrap_or_else(|e| e.into_inner()).get(&key) {
        return Ok(set.clone());
    }

    let mut guard = cache.write().unwrap_or_else(|e| e.into_inner());
    if let Some(set) = guard.get(&key) {
        return Ok(set.clone());
    }

    let raw = data()
        .effective_segment(&normalized, kind)
        .map_err(|_| Error::UnknownSegmentType(format!("{normalized}/{kind}")))?;
    let compiled = seg_compile::compile_for_kind(&raw, kind, with_suppressions)
        .unwrap_or_else(|e| panic!("bundled `{normalized}/{kind}` data failed to compile: {e}"));
    let compiled = Arc::new(compiled);
    guard.insert(key, compiled.clone());
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_set_is_cached_by_locale_kind_and_suppressions() {
        let a = rule_set("en", SegmentKind::SentenceBreak, true).unwrap();
        let b = rule_set("en", SegmentKind::SentenceBreak, true).unwrap();
        assert!(Arc::ptr_eq(&a, &b));

        let c = rule_set("en", SegmentKind::SentenceBreak, false).unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn an_unrecognized_locale_still_resolves_through_root_inheritance() {
        // Rule-set lookup always walks the ancestor chain down to `root`, which carries
        // data for every kind, so this never fails - only the locale resolver (4.6)
        // distinguishes "unrecognized" from "falls back silently".
        assert!(rule_set("klingon-does-not-exist", SegmentKind::WordBreak, true).is_ok());
    }
}
