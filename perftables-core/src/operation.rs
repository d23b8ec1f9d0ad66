// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Canonical operation names and cross-backend name normalization.

use std::collections::BTreeSet;

/// Canonical operations in table order.
///
/// The order is also the normalization tie-break: the first name contained in
/// a raw operation label wins.
pub const CANONICAL_OPERATIONS: [&str; 7] = [
    "sum",
    "mean",
    "std",
    "transpose",
    "reshape",
    "write to txt",
    "read from txt",
];

/// Map a raw operation label from a log line onto its canonical name.
///
/// Labels that match no canonical name are returned trimmed but otherwise
/// unchanged.
pub fn normalize_operation_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let lowered = trimmed.to_lowercase();

    // pandas labels reshape as e.g. "reshape (flat -> 50)"
    if lowered.contains("reshape") {
        return "reshape".to_string();
    }

    CANONICAL_OPERATIONS
        .iter()
        .find(|canonical| lowered.contains(**canonical))
        .map(|canonical| canonical.to_string())
        .unwrap_or_else(|| trimmed.to_string())
}

/// Order operation names: canonical ones first in canonical order, then the
/// rest lexically. Duplicates are dropped.
pub fn order_operations<'a, I>(operations: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let present: BTreeSet<&str> = operations.into_iter().collect();

    let mut ordered: Vec<String> = CANONICAL_OPERATIONS
        .iter()
        .filter(|op| present.contains(*op))
        .map(|op| op.to_string())
        .collect();

    ordered.extend(
        present
            .iter()
            .filter(|op| !CANONICAL_OPERATIONS.contains(*op))
            .map(|op| op.to_string()),
    );

    ordered
}
