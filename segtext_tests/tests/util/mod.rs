// Copyright 2026 the Segtext Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across tests.

/// Returns the current function name (for use in test naming).
#[macro_export]
macro_rules! test_name {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        let name = &name[..name.len() - 3];
        let name = &name[name.rfind(':').map(|x| x + 1).unwrap_or(0)..];

        name
    }};
}

/// Splits `s` into segments under `options`, panicking with `test_name!()`-style context on
/// error - every scenario this suite exercises uses well-formed, known locales, so a split
/// failure here is a test bug, not a condition worth asserting on per call site.
pub(crate) fn split(s: &str, options: &segtext::Options) -> Vec<String> {
    segtext::split(s, options).expect("test fixtures only use well-formed, known locales")
}
