// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! # Segtext Dev
//!
//! This crate provides sample texts and break-test fixtures shared by `segtext_tests`
//! (mirrors `parley_dev`).

/// A sample to be used for development or testing.
#[derive(Debug)]
pub struct Sample {
    /// The name of the sample.
    pub name: &'static str,
    /// The text of the sample.
    pub text: &'static str,
}

/// A collection of text samples covering the scripts and locale hooks this crate cares
/// about: plain Latin prose, Chinese text with no whitespace between words, and text
/// exercising the Turkish/Greek/Dutch casing locales.
#[derive(Debug)]
pub struct TextSamples {
    /// Plain Latin-script prose with ordinary sentence and word boundaries.
    pub latin: Sample,
    /// A sentence containing an abbreviation (`Ph.D.`) that sentence-break suppression
    /// must not treat as a sentence-ending period.
    pub latin_with_abbreviation: Sample,
    /// Unsegmented Chinese text (no whitespace between words), for dictionary word
    /// breaking.
    pub chinese: Sample,
    /// Turkish text exercising the dotted/dotless `I`/`ı`/`İ`/`i` casing exceptions.
    pub turkish: Sample,
    /// Greek text exercising final-sigma downcasing and diacritic-stripping upcasing.
    pub greek: Sample,
    /// Dutch text exercising the leading `ij`/`IJ` digraph titlecasing rule.
    pub dutch: Sample,
}

impl TextSamples {
    /// Creates a new collection of text samples.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latin: Sample { name: "latin", text: "This is a sentence. And another." },
            latin_with_abbreviation: Sample {
                name: "latin_with_abbreviation",
                text: "No, I don't have a Ph.D. but I don't think it matters.",
            },
            chinese: Sample { name: "chinese", text: "布鲁赫" },
            turkish: Sample { name: "turkish", text: "Diyarbakır" },
            greek: Sample { name: "greek", text: "Πατάτα, Αέρας, Μυστήριο" },
            dutch: Sample { name: "dutch", text: "ijsselmeer" },
        }
    }
}

impl Default for TextSamples {
    fn default() -> Self {
        Self::new()
    }
}
