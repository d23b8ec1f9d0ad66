// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! `--all` - write every document shape to the output directory.

use perftables_core::{
    Aggregation, Config, DocumentBuilder, DocumentKind, MarkdownReporter, TableFormatter,
};

use super::report_skippable;

/// Document shapes written by `--all`, in generation order.
const ALL_DOCUMENTS: [DocumentKind; 3] = [
    DocumentKind::Sections,
    DocumentKind::Complete,
    DocumentKind::Summary,
];

pub fn execute(config: &Config, aggregation: &Aggregation) -> anyhow::Result<()> {
    let formatter = TableFormatter::new(config.backend_names());
    let builder = DocumentBuilder::new(&formatter, &aggregation.data);
    let reporter = MarkdownReporter::new(&config.output_dir)?;

    println!("=== Generating ALL formats ===");

    let mut generated = 0;
    for (index, kind) in ALL_DOCUMENTS.iter().enumerate() {
        println!("{}. Generating {}...", index + 1, kind);

        match builder.build(kind) {
            Ok(document) => {
                let path = reporter.save(&document)?;
                println!("Saved to {}", path.display());
                generated += 1;
            }
            Err(e) => report_skippable(e)?,
        }
    }

    if generated == ALL_DOCUMENTS.len() {
        println!("✅ All formats generated successfully!");
    } else {
        println!(
            "Generated {} of {} formats in {}",
            generated,
            ALL_DOCUMENTS.len(),
            reporter.output_dir().display()
        );
    }
    Ok(())
}
