// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rule evaluator (4.3): finds the first rule in a compiled rule set whose left regex
//! matches the tail of `before` and whose right regex matches the head of `after`.
//!
//! Because left regexes are end-anchored and right regexes are start-anchored (I4), this
//! walk never considers any string position other than the current boundary: `left.is_match`
//! only succeeds if the match reaches `before`'s end, and `right.find` only reports matches
//! starting at `after`'s start.

pub use seg_compile::Operator;
use seg_compile::{CompiledRule, RuleSet};

/// The outcome of evaluating one boundary (4.3's `Decision = {operator, (before,
/// (consumed, remainder))}`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision<'a> {
    /// Whether a boundary exists at this position.
    pub operator: Operator,
    /// The text before the boundary.
    pub before: &'a str,
    /// The text the firing rule's right side matched at the head of `after` (or the
    /// first codepoint of `after`, for a rule whose right side is `ANY`).
    pub consumed: &'a str,
    /// What remains of `after` once `consumed` is removed.
    pub remainder: &'a str,
}

/// Evaluates the boundary between `before` and `after` against `rules`, in ascending id
/// order (I3), returning the first rule's decision, or the documented default when none
/// fires.
#[must_use]
pub fn evaluate<'a>(before: &'a str, after: &'a str, rules: &RuleSet) -> Decision<'a> {
    if after.is_empty() {
        return Decision { operator: Operator::Break, before, consumed: "", remainder: "" };
    }
    for rule in rules.rules() {
        if let Some(len) = rule_fires(rule, before, after) {
            let (consumed, remainder) = after.split_at(len);
            return Decision { operator: rule.operator, before, consumed, remainder };
        }
    }
    let len = after.chars().next().map_or(0, char::len_utf8);
    let (consumed, remainder) = after.split_at(len);
    Decision { operator: Operator::Break, before, consumed, remainder }
}

/// Returns the byte length of `after` that `rule`'s right side consumed, if `rule` fires
/// (both sides match); `None` if it does not fire.
///
/// A rule with both sides `ANY` is degenerate (4.3: "If both sides are `ANY`, skip") and
/// never fires, since it would match unconditionally at every position.
fn rule_fires(rule: &CompiledRule, before: &str, after: &str) -> Option<usize> {
    if rule.left.is_none() && rule.right.is_none() {
        return None;
    }
    let left_ok = match &rule.left {
        Some(re) => re.is_match(before),
        None => true,
    };
    if !left_ok {
        return None;
    }
    match &rule.right {
        Some(re) => re.find(after).filter(|m| m.start() == 0).map(|m| m.end()),
        None => Some(after.chars().next().map_or(0, char::len_utf8)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seg_data::{Catalog, SegmentKind};

    fn word_rules() -> RuleSet {
        let catalog = Catalog::bundled().unwrap();
        let raw = catalog.effective_segment("root", SegmentKind::WordBreak).unwrap();
        seg_compile::compile_for_kind(&raw, SegmentKind::WordBreak, true).unwrap()
    }

    #[test]
    fn letters_do_not_break_between_each_other() {
        let rules = word_rules();
        let decision = evaluate("Thi", "s", &rules);
        assert_eq!(decision.operator, Operator::NoBreak);
    }

    #[test]
    fn letter_then_space_breaks() {
        let rules = word_rules();
        // No rule keeps a letter and a following space together; the default rule fires.
        let decision = evaluate("This", " is", &rules);
        assert_eq!(decision.operator, Operator::Break);
        assert_eq!(decision.consumed, " ");
    }

    #[test]
    fn end_of_text_is_always_a_break_with_empty_consumed() {
        let rules = word_rules();
        let decision = evaluate("hi", "", &rules);
        assert_eq!(decision.operator, Operator::Break);
        assert_eq!(decision.consumed, "");
        assert_eq!(decision.remainder, "");
    }
}
