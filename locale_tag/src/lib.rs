// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A compact, zero-allocation BCP 47 language tag.
//!
//! This crate is a lightweight vocabulary layer shared by the segmentation and casing engines
//! in this workspace: both need to canonicalize a caller-supplied locale (string, symbol, or
//! structured tag) down to `language[-Script][-REGION]` before walking a fallback chain over
//! the data they carry.
//!
//! ## Example
//!
//! ```
//! use locale_tag::Language;
//!
//! let lang = Language::parse("zh_hant_hk").unwrap();
//! assert_eq!(lang.as_str(), "zh-Hant-HK");
//! assert_eq!(lang.language(), "zh");
//! assert_eq!(lang.script(), Some("Hant"));
//! assert_eq!(lang.region(), Some("HK"));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![warn(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

mod language;

pub use language::{Language, ParseLanguageError};
