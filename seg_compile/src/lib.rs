// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rule compiler: turns [`seg_data::RawSegmentData`] into an executable [`RuleSet`], and
//! synthesizes the sentence-break suppression rule from a locale's abbreviation list.
//!
//! Compiling a rule set means, per variable in declaration order, textually substituting
//! already-expanded `$name` references to build up a name -> pattern map (so later variables
//! may reference earlier ones but never the reverse); then, per rule, substituting variables,
//! splitting on the single `÷`/`×` operator, anchoring each side, and compiling both sides as
//! Unicode-mode regexes. `Word_Break`/`Sentence_Break`/`Grapheme_Cluster_Break`/`Line_Break`
//! property tokens (`\p{Word_Break = ALetter}`) are rewritten to explicit codepoint-range
//! classes by `seg_props` before compilation, since `regex`'s own Unicode tables don't cover
//! UAX #29 enumerated properties.
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

use hashbrown::HashMap;
use regex::Regex;
use seg_data::{RawSegmentData, RuleId, SegmentKind};

/// A rule's break/no-break operator, after translating the data file's `÷`/`×` glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `÷` - a boundary exists here.
    Break,
    /// `×` - no boundary exists here.
    NoBreak,
}

/// One compiled rule: an ordering id, an operator, and two optionally-absent regexes.
///
/// `left`/`right` of `None` represent `ANY`, which matches the empty string (I2's rules
/// whose left or right side was absent in the data).
#[derive(Debug)]
pub struct CompiledRule {
    /// This rule's ordering id; lower fires first (I3).
    pub id: RuleId,
    /// Whether this rule, once fired, declares a break or a no-break.
    pub operator: Operator,
    /// The end-anchored regex matched against the tail of `string_before`, or `None` for
    /// `ANY`.
    pub left: Option<Regex>,
    /// The start-anchored regex matched against the head of `string_after`, or `None` for
    /// `ANY`.
    pub right: Option<Regex>,
}

/// An ordered, compiled rule set for one `(locale, segment_kind)` pair (I3).
#[derive(Debug, Default)]
pub struct RuleSet {
    rules: Vec<CompiledRule>,
}

impl RuleSet {
    /// The rules, in ascending id order.
    #[must_use]
    pub fn rules(&self) -> &[CompiledRule] {
        &self.rules
    }
}

/// An error raised while compiling a rule set. All variants are data bugs (section 7):
/// detected at compile time, they halt construction of the affected rule set.
#[derive(Debug, Clone, PartialEq)]
pub enum CompileError {
    /// A `$name` reference inside a variable or rule pattern never resolved (I1).
    VariableNotFound(String),
    /// A rule's text did not split into exactly one `left OP right` (I2).
    InvalidRule(String),
    /// A fully expanded regex fragment failed to compile.
    RegexCompileError {
        /// The offending fragment, after variable and property expansion.
        fragment: String,
        /// The underlying regex engine's error message.
        message: String,
    },
}

impl core::fmt::Display for CompileError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::VariableNotFound(name) => write!(f, "variable `{name}` is never defined"),
            Self::InvalidRule(text) => {
                write!(f, "rule `{text}` does not split into exactly one left OP right")
            }
            Self::RegexCompileError { fragment, message } => {
                write!(f, "failed to compile `{fragment}`: {message}")
            }
        }
    }
}

impl std::error::Error for CompileError {}

/// Compiles `raw` into an executable rule set, with no suppression rule synthesized.
///
/// # Errors
///
/// See [`CompileError`].
pub fn compile(raw: &RawSegmentData) -> Result<RuleSet, CompileError> {
    let (_var_map, mut rules) = compile_rules(raw)?;
    rules.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(RuleSet { rules })
}

/// Compiles `raw` (for `kind`) into an executable rule set, synthesizing and inserting the
/// sentence-break suppression rule when `with_suppressions` is set and the locale carries a
/// non-empty suppression list (4.4). For any kind other than `sentence_break`, or when the
/// list is empty, this is equivalent to [`compile`].
///
/// # Errors
///
/// See [`CompileError`].
pub fn compile_for_kind(
    raw: &RawSegmentData,
    kind: SegmentKind,
    with_suppressions: bool,
) -> Result<RuleSet, CompileError> {
    let (var_map, mut rules) = compile_rules(raw)?;
    if with_suppressions && kind == SegmentKind::SentenceBreak && !raw.suppressions.is_empty() {
        rules.push(build_suppression_rule(&var_map, &raw.suppressions)?);
    }
    rules.sort_by(|a, b| a.id.cmp(&b.id));
    Ok(RuleSet { rules })
}

/// Builds the variable map and compiles every rule, without sorting - shared by [`compile`]
/// and [`compile_for_kind`], which differ only in whether a suppression rule is appended
/// before the final sort.
fn compile_rules(
    raw: &RawSegmentData,
) -> Result<(HashMap<String, String>, Vec<CompiledRule>), CompileError> {
    let var_map = expand_variables(raw)?;
    let mut rules = Vec::with_capacity(raw.rules.len());
    for raw_rule in &raw.rules {
        rules.push(compile_rule(raw_rule.text.trim(), raw_rule.id.clone(), &var_map, false)?);
    }
    Ok((var_map, rules))
}

/// Builds the variable name -> expanded-pattern map (step 1 of the compiler algorithm).
///
/// Each variable's pattern is substituted against the map built from *earlier* variables
/// only, so forward references are impossible by construction (the Design Notes call this
/// out explicitly: it matches the shipped data, which never needs forward references).
fn expand_variables(raw: &RawSegmentData) -> Result<HashMap<String, String>, CompileError> {
    let mut map = HashMap::new();
    for var in &raw.variables {
        let expanded = substitute_variables(&var.pattern, &map)?;
        map.insert(var.name.to_string(), expanded);
    }
    Ok(map)
}

/// Replaces every `$name` reference in `pattern` using `map`, built so far.
fn substitute_variables(pattern: &str, map: &HashMap<String, String>) -> Result<String, CompileError> {
    let mut out = String::with_capacity(pattern.len());
    let chars: Vec<char> = pattern.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i] == '$' && i + 1 < chars.len() && is_id_start(chars[i + 1]) {
            let start = i;
            i += 1;
            while i < chars.len() && is_id_continue(chars[i]) {
                i += 1;
            }
            let name: String = chars[start..i].iter().collect();
            let expansion = map
                .get(&name)
                .ok_or_else(|| CompileError::VariableNotFound(name.clone()))?;
            out.push_str(expansion);
        } else {
            out.push(chars[i]);
            i += 1;
        }
    }
    Ok(out)
}

/// A minimal ID-start predicate for variable names (section 4.2 permits restricting to
/// `A..Z`; the shipped data never needs more, but lowercase is accepted too since none of the
/// bundled variable names rely on the distinction).
fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic()
}

fn is_id_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits `text` on its single `÷`/`×` operator (I2), compiles both sides, and returns the
/// compiled rule.
fn compile_rule(
    text: &str,
    id: RuleId,
    var_map: &HashMap<String, String>,
    case_insensitive: bool,
) -> Result<CompiledRule, CompileError> {
    let substituted = substitute_variables(text, var_map)?;
    let (left_text, operator, right_text) = split_operator(&substituted)?;
    let left = compile_side(left_text.trim(), Anchor::End, case_insensitive)?;
    let right = compile_side(right_text.trim(), Anchor::Start, case_insensitive)?;
    Ok(CompiledRule { id, operator, left, right })
}

fn split_operator(text: &str) -> Result<(&str, Operator, &str), CompileError> {
    let break_positions: Vec<usize> = text.match_indices('÷').map(|(pos, _)| pos).collect();
    let no_break_positions: Vec<usize> = text.match_indices('×').map(|(pos, _)| pos).collect();
    match (break_positions.as_slice(), no_break_positions.as_slice()) {
        (&[pos], &[]) => Ok((&text[..pos], Operator::Break, &text[pos + '÷'.len_utf8()..])),
        (&[], &[pos]) => Ok((&text[..pos], Operator::NoBreak, &text[pos + '×'.len_utf8()..])),
        _ => Err(CompileError::InvalidRule(text.to_string())),
    }
}

enum Anchor {
    Start,
    End,
}

/// Rewrites property tokens, wraps in the compiler's flags, anchors, and compiles one side
/// of a rule. An empty side compiles to `ANY` (`None`).
fn compile_side(
    text: &str,
    anchor: Anchor,
    case_insensitive: bool,
) -> Result<Option<Regex>, CompileError> {
    if text.is_empty() {
        return Ok(None);
    }
    let rewritten = rewrite_property_classes(text)?;
    let flags = if case_insensitive { "(?ix)(?s)" } else { "(?x)(?s)" };
    let pattern = match anchor {
        Anchor::End => format!("{flags}(?:{rewritten})$"),
        Anchor::Start => format!("{flags}^(?:{rewritten})"),
    };
    Regex::new(&pattern)
        .map(Some)
        .map_err(|e| CompileError::RegexCompileError { fragment: rewritten, message: e.to_string() })
}

/// Rewrites `\p{Property = Value}` tokens that `seg_props` recognizes as UAX #29
/// enumerations into explicit codepoint-range classes; everything else passes through
/// unchanged for `regex`'s native Unicode table support.
fn rewrite_property_classes(pattern: &str) -> Result<String, CompileError> {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;
    while let Some(start) = rest.find("\\p{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 3..];
        let Some(end) = after_open.find('}') else {
            out.push_str(&rest[start..]);
            rest = "";
            break;
        };
        let token = &after_open[..end];
        let rendered = seg_props::render_property_class(token).map_err(|e| {
            CompileError::RegexCompileError { fragment: token.to_string(), message: e.to_string() }
        })?;
        out.push_str(&rendered);
        rest = &after_open[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Synthesizes the sentence-break suppression rule (4.4): a no-break rule whose left side is
/// `<SpacesBefore?> <Suppressions> <Close*> <Sp*> <ParaSep?>`, matched case-insensitively,
/// and whose right side is `ANY`. Its id (10.5) is chosen to fire before the standard
/// structural sentence-break rules (9, 10, 11 in the bundled root data).
fn build_suppression_rule(
    var_map: &HashMap<String, String>,
    suppressions: &[Box<str>],
) -> Result<CompiledRule, CompileError> {
    const SUPPRESSION_RULE_ID: f64 = 10.5;

    let spaces_before = var_map.get("$SpacesBefore").cloned().unwrap_or_default();
    let close = var_map.get("$Close").cloned().unwrap_or_default();
    let sp = var_map.get("$Sp").cloned().unwrap_or_default();
    let para_sep = var_map.get("$ParaSep").cloned().unwrap_or_default();

    let alternation = suppressions
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");

    let left_text =
        format!("{spaces_before}(?:{alternation})(?:{close})*(?:{sp})*(?:{para_sep})?");
    let left = compile_side(&left_text, Anchor::End, true)?;

    Ok(CompiledRule {
        id: RuleId::synthetic(SUPPRESSION_RULE_ID),
        operator: Operator::NoBreak,
        left,
        right: None,
    })
}
