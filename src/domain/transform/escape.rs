// Copyright (c) 2026 The picel authors
// SPDX-License-Identifier: MIT

//! Escaping for the reserved `_` path delimiter.
//!
//! `_` separates the image id from the parameter list, so a literal
//! underscore inside an id or extension is doubled. Both directions are a
//! single left-to-right replacement pass and never fail.

/// Escape a raw URL part by doubling every `_`.
pub fn escape(raw: &str) -> String {
    raw.replace('_', "__")
}

/// Unescape a URL part by collapsing every `__` back to `_`.
pub fn unescape(raw: &str) -> String {
    raw.replace("__", "_")
}
