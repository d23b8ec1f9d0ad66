// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Default console overview: backends, tiers and every table.

use perftables_core::{Aggregation, Config, DocumentBuilder, TableFormatter};

const RULE_WIDTH: usize = 80;

pub fn execute(config: &Config, aggregation: &Aggregation) -> anyhow::Result<()> {
    let formatter = TableFormatter::new(config.backend_names());
    let builder = DocumentBuilder::new(&formatter, &aggregation.data);
    let rule = "=".repeat(RULE_WIDTH);

    println!("=== Found data for {} languages ===", aggregation.data.len());
    for name in aggregation.data.backend_names() {
        println!("- {}", name);
    }
    for skipped in &aggregation.skipped {
        println!("- {} (skipped: {})", skipped.name, skipped.reason);
    }

    println!();
    println!("=== Found {} test configurations ===", builder.tiers().len());
    for (index, tier) in builder.tiers().iter().enumerate() {
        println!("{}. {}", index + 1, tier);
    }

    println!();
    println!("{}", rule);
    println!("COMPREHENSIVE COMPARISON TABLES");
    println!("{}", rule);
    for tier in builder.tiers() {
        println!();
        println!("{}", formatter.comparison_table(&aggregation.data, tier));
    }

    if let Some(tiny) = builder.summary_tier() {
        println!("{}", rule);
        println!("README-STYLE SUMMARY TABLE ({})", tiny);
        println!("{}", rule);
        println!();
        println!("{}", formatter.summary_table(&aggregation.data, tiny));
    }

    Ok(())
}
