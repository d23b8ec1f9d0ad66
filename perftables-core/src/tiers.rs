// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Test tier enumeration in size order.

use std::collections::BTreeSet;

use crate::types::AggregatedData;

/// Size buckets in presentation order, matched as lowercase substrings.
pub const TIER_SIZE_ORDER: [&str; 4] = ["tiny", "small", "medium", "large"];

/// Order tier names: each size bucket in turn (lexical within a bucket), then
/// every remaining name lexically. Duplicates are dropped.
pub fn order_tiers<'a, I>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let unique: BTreeSet<&str> = names.into_iter().collect();
    let mut ordered: Vec<String> = Vec::with_capacity(unique.len());

    for size in TIER_SIZE_ORDER {
        for name in &unique {
            let placed = ordered.iter().any(|t| t.as_str() == *name);
            if !placed && name.to_lowercase().contains(size) {
                ordered.push(name.to_string());
            }
        }
    }

    for name in &unique {
        if !ordered.iter().any(|t| t.as_str() == *name) {
            ordered.push(name.to_string());
        }
    }

    ordered
}

/// All tier names across every parsed backend, in size order.
pub fn enumerate_tiers(data: &AggregatedData) -> Vec<String> {
    order_tiers(
        data.backends()
            .flat_map(|backend| backend.log.keys().map(String::as_str)),
    )
}

/// First tier (in `tiers` order) whose name contains `selector`, ignoring case.
pub fn find_tier<'a>(tiers: &'a [String], selector: &str) -> Option<&'a str> {
    let needle = selector.to_lowercase();
    tiers
        .iter()
        .find(|tier| tier.to_lowercase().contains(&needle))
        .map(String::as_str)
}
