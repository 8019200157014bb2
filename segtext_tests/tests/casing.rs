// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Case folding and case mapping scenarios and invariants (spec section 8).

use segtext::CaseOptions;

fn locale(tag: &str) -> CaseOptions {
    CaseOptions { locale: Some(tag.to_string()) }
}

#[test]
fn turkish_upcase_dots_the_i() {
    assert_eq!(segtext::upcase("Diyarbakır", &locale("tr")), "DİYARBAKIR");
}

#[test]
fn turkish_downcase_undots_the_i() {
    assert_eq!(segtext::downcase("DİYARBAKIR", &locale("tr")), "diyarbakır");
}

#[test]
fn greek_downcase_turns_trailing_sigma_into_final_form() {
    assert_eq!(segtext::downcase("ὈΔΥΣΣΕΎΣ", &locale("el")), "ὀδυσσεύς");
}

#[test]
fn greek_upcase_strips_diacritics() {
    assert_eq!(
        segtext::upcase("Πατάτα, Αέρας, Μυστήριο", &locale("el")),
        "ΠΑΤΑΤΑ, ΑΕΡΑΣ, ΜΥΣΤΗΡΙΟ"
    );
}

#[test]
fn dutch_titlecase_keeps_the_ij_digraph_uppercase() {
    let sample = segtext_dev::TextSamples::new().dutch;
    assert_eq!(segtext::titlecase(sample.text, &locale("nl")), "IJsselmeer");
}

#[test]
fn sharp_s_and_double_s_compare_equal_under_folding() {
    assert!(segtext::equals_ignoring_case("beißen", "beissen"));
    assert!(!segtext::equals_ignoring_case("grüßen", "grussen"));
}

// P4: upcase . downcase . upcase == upcase, for locale=any.
#[test]
fn upcase_downcase_upcase_round_trips_to_upcase() {
    let any = CaseOptions::default();
    for text in ["Hello World", "straße", "İstanbul", "ﬁlter"] {
        let once = segtext::upcase(text, &any);
        let round_tripped = segtext::upcase(&segtext::downcase(&once, &any), &any);
        assert_eq!(round_tripped, once, "failed for {text:?}");
    }
}

// P5: fold(a) == fold(b) iff equals_ignoring_case(a, b).
#[test]
fn fold_equality_agrees_with_equals_ignoring_case() {
    let pairs = [
        ("beißen", "beissen", true),
        ("grüßen", "grussen", false),
        ("Straße", "STRASSE", true),
        ("HELLO", "hello", true),
        ("hello", "world", false),
    ];
    for (a, b, expected) in pairs {
        assert_eq!(segtext::fold(a) == segtext::fold(b), expected, "fold mismatch for {a:?}/{b:?}");
        assert_eq!(
            segtext::equals_ignoring_case(a, b),
            expected,
            "equals_ignoring_case mismatch for {a:?}/{b:?}"
        );
        assert_eq!(
            segtext::fold(a) == segtext::fold(b),
            segtext::equals_ignoring_case(a, b),
            "fold/equals_ignoring_case disagreed for {a:?}/{b:?}"
        );
    }
}

#[test]
fn known_locale_lists_are_non_empty_and_include_the_named_hooks() {
    assert!(segtext::known_segmentation_locales().contains(&"root"));
    assert!(segtext::known_dictionary_locales().contains(&"zh"));
    for hook in ["tr", "az", "lt", "nl", "el"] {
        assert!(segtext::special_casing_locales().contains(&hook));
    }
}
