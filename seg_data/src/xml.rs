// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashMap;
use roxmltree::Document;

use crate::{DataError, RawRule, RawSegmentData, RawVariable, RuleId, SegmentKind};

/// Parses one locale's `<segments>` data file into its per-[`SegmentKind`] records.
///
/// `locale` is used only to annotate error messages; the file's own name is not consulted.
pub(crate) fn parse_locale_data(
    locale: &str,
    xml: &str,
) -> Result<HashMap<SegmentKind, RawSegmentData>, DataError> {
    let doc = Document::parse(xml).map_err(|e| DataError::Xml(format!("{locale}: {e}")))?;
    let root = doc.root_element();
    let mut out = HashMap::new();
    for seg_el in root
        .children()
        .filter(|n| n.is_element() && n.has_tag_name("segmentation"))
    {
        let kind_str = seg_el.attribute("type").ok_or_else(|| {
            DataError::Xml(format!("{locale}: <segmentation> is missing a `type` attribute"))
        })?;
        let kind = SegmentKind::parse(kind_str).ok_or_else(|| {
            DataError::Xml(format!("{locale}: unknown segment kind `{kind_str}`"))
        })?;

        let mut variables = Vec::new();
        let mut rules = Vec::new();
        let mut suppressions = Vec::new();

        for section in seg_el.children().filter(|n| n.is_element()) {
            match section.tag_name().name() {
                "variables" => {
                    for v in section
                        .children()
                        .filter(|n| n.is_element() && n.has_tag_name("variable"))
                    {
                        let name = v.attribute("id").ok_or_else(|| {
                            DataError::Xml(format!("{locale}/{kind}: <variable> missing `id`"))
                        })?;
                        let pattern = v.text().unwrap_or("").trim();
                        variables.push(RawVariable {
                            name: name.into(),
                            pattern: pattern.into(),
                        });
                    }
                }
                "rules" => {
                    for r in section
                        .children()
                        .filter(|n| n.is_element() && n.has_tag_name("rule"))
                    {
                        let id_str = r.attribute("id").ok_or_else(|| {
                            DataError::Xml(format!("{locale}/{kind}: <rule> missing `id`"))
                        })?;
                        let id = RuleId::parse(id_str).ok_or_else(|| {
                            DataError::Xml(format!(
                                "{locale}/{kind}: rule id `{id_str}` is not a decimal number"
                            ))
                        })?;
                        let text = r.text().unwrap_or("").trim();
                        rules.push(RawRule { id, text: text.into() });
                    }
                }
                "suppressions" => {
                    for s in section
                        .children()
                        .filter(|n| n.is_element() && n.has_tag_name("suppression"))
                    {
                        suppressions.push(s.text().unwrap_or("").trim().into());
                    }
                }
                _ => {}
            }
        }

        out.insert(kind, RawSegmentData { variables, rules, suppressions });
    }
    Ok(out)
}
