// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `segtext`.
//!
//! - The `util` module contains shared utility functions needed by different test methods.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, the same way `segtext`'s teacher crate does. This
//!   makes it easier to define shared utility functions needed by different tests.
//! - `segmentation` covers the Rule Evaluator, Segmenter Driver, and Dictionary
//!   Word-Breaker (grapheme/word/sentence/line splitting, suppression, locale fallback).
//! - `casing` covers the Case Folder and Case Mapper (fold, upcase, downcase, titlecase,
//!   and the locale hooks).

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod casing;
mod segmentation;
#[macro_use]
mod util;
