// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Single document generation (`--sections`, `--readme-style`, `--test`).

use std::io;

use perftables_core::{
    Aggregation, Config, DocumentBuilder, DocumentKind, MarkdownReporter, OutputTarget,
    TableFormatter,
};

use super::report_skippable;

pub fn execute(
    config: &Config,
    aggregation: &Aggregation,
    kind: DocumentKind,
    save: bool,
) -> anyhow::Result<()> {
    let formatter = TableFormatter::new(config.backend_names());
    let builder = DocumentBuilder::new(&formatter, &aggregation.data);
    tracing::info!(
        languages = aggregation.data.len(),
        tests = builder.tiers().len(),
        document = %kind,
        "Generating document"
    );

    let document = match builder.build(&kind) {
        Ok(document) => document,
        Err(e) => return Ok(report_skippable(e)?),
    };

    // Nothing touches the output directory until there is a document to write
    let target = if save {
        OutputTarget::Files(MarkdownReporter::new(&config.output_dir)?)
    } else {
        OutputTarget::Print
    };

    let written = target.emit(&document, &mut io::stdout().lock())?;
    if let Some(path) = written {
        println!("Saved to {}", path.display());
    }
    Ok(())
}
