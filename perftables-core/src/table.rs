// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Markdown table rendering.
//!
//! Every table has one column per configured backend, in configured order,
//! whether or not that backend produced data. Each timing cell stacks the row
//! timing above the column timing with `<br>`.

use crate::operation::{order_operations, CANONICAL_OPERATIONS};
use crate::types::{AggregatedData, TimingEntry};

/// Fixed label of the orientation column.
pub const ORIENTATION_LABEL: &str = "row<br>col";

/// Comparison cell: partial data is shown with `-` for the missing side.
pub fn comparison_cell(entry: Option<&TimingEntry>) -> String {
    let Some(entry) = entry else {
        return String::new();
    };

    match (entry.has_row(), entry.has_col()) {
        (true, true) => format!("{}<br>{}", entry.row, entry.col),
        (true, false) => format!("{}<br>-", entry.row),
        (false, true) => format!("-<br>{}", entry.col),
        (false, false) => String::new(),
    }
}

/// Summary cell: populated only when both orientations are present.
pub fn summary_cell(entry: Option<&TimingEntry>) -> String {
    match entry {
        Some(entry) if entry.is_complete() => format!("{}<br>{}", entry.row, entry.col),
        _ => String::new(),
    }
}

/// Renders tables over a fixed backend column sequence.
#[derive(Debug, Clone)]
pub struct TableFormatter {
    backends: Vec<String>,
}

impl TableFormatter {
    pub fn new(backends: Vec<String>) -> Self {
        Self { backends }
    }

    pub fn backends(&self) -> &[String] {
        &self.backends
    }

    /// `## <tier>` section with one row per operation any backend recorded.
    pub fn comparison_table(&self, data: &AggregatedData, tier: &str) -> String {
        let operations = order_operations(
            self.backends
                .iter()
                .filter_map(|backend| data.get(backend)?.get(tier))
                .flat_map(|timings| timings.keys().map(String::as_str)),
        );

        let mut table = format!("## {}\n\n", tier);
        table.push_str(&self.header());
        for operation in &operations {
            table.push_str(&self.row(data, tier, operation, comparison_cell));
        }
        table
    }

    /// Headerless table over exactly the canonical operations.
    pub fn summary_table(&self, data: &AggregatedData, tier: &str) -> String {
        let mut table = self.header();
        for operation in CANONICAL_OPERATIONS {
            table.push_str(&self.row(data, tier, operation, summary_cell));
        }
        table
    }

    fn header(&self) -> String {
        let mut header = String::from("| Operation | Orientation | ");
        header.push_str(&self.backends.join(" | "));
        header.push_str(" |\n| --- | --- | ");
        header.push_str(&vec!["---"; self.backends.len()].join(" | "));
        header.push_str(" |\n");
        header
    }

    fn row(
        &self,
        data: &AggregatedData,
        tier: &str,
        operation: &str,
        cell: fn(Option<&TimingEntry>) -> String,
    ) -> String {
        let mut cells = vec![operation.to_string(), ORIENTATION_LABEL.to_string()];
        cells.extend(
            self.backends
                .iter()
                .map(|backend| cell(data.timing(backend, tier, operation))),
        );
        format!("| {} |\n", cells.join(" | "))
    }
}
