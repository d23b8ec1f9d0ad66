// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Composite markdown documents built from the comparison and summary tables.

use std::fmt;

use crate::error::{PerfTablesError, PerfTablesResult};
use crate::table::TableFormatter;
use crate::tiers::{enumerate_tiers, find_tier};
use crate::types::AggregatedData;

const TITLE: &str = "# Matrix Operations Performance Comparison";
const COMPLETE_TITLE: &str = "# Complete Matrix Operations Performance Comparison";
const SECTION_SEPARATOR: &str = "\n---\n\n";

/// Tier selector used for the README-style summary.
pub const SUMMARY_TIER: &str = "tiny";

/// The document shapes that can be generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentKind {
    /// Every tier as a section, separated by horizontal rules.
    Sections,
    /// Every tier, one table after another.
    Complete,
    /// Strict summary table of the tiny tier.
    Summary,
    /// Comparison table of the first tier matching a selector.
    Tier { selector: String },
}

impl DocumentKind {
    /// Fixed output file name for this shape.
    pub fn file_name(&self) -> String {
        match self {
            DocumentKind::Sections => "matrix_performance_all_tests.md".to_string(),
            DocumentKind::Complete => "complete_performance_comparison.md".to_string(),
            DocumentKind::Summary => "README_performance_table.md".to_string(),
            DocumentKind::Tier { selector } => {
                format!("{}_test_results.md", selector.replace(['/', '\\'], "_"))
            }
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Sections => write!(f, "sectioned file for all test sizes"),
            DocumentKind::Complete => write!(f, "complete comparison"),
            DocumentKind::Summary => write!(f, "README-style summary"),
            DocumentKind::Tier { selector } => write!(f, "{} test results", selector),
        }
    }
}

/// A rendered markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub kind: DocumentKind,
    pub content: String,
}

impl Document {
    pub fn file_name(&self) -> String {
        self.kind.file_name()
    }
}

/// Builds documents over one aggregate.
pub struct DocumentBuilder<'a> {
    formatter: &'a TableFormatter,
    data: &'a AggregatedData,
    tiers: Vec<String>,
}

impl<'a> DocumentBuilder<'a> {
    pub fn new(formatter: &'a TableFormatter, data: &'a AggregatedData) -> Self {
        Self {
            formatter,
            data,
            tiers: enumerate_tiers(data),
        }
    }

    /// Tier names in presentation order.
    pub fn tiers(&self) -> &[String] {
        &self.tiers
    }

    /// Tier used by the summary document, if any.
    pub fn summary_tier(&self) -> Option<&str> {
        find_tier(&self.tiers, SUMMARY_TIER)
    }

    pub fn build(&self, kind: &DocumentKind) -> PerfTablesResult<Document> {
        let content = match kind {
            DocumentKind::Sections => self.sections(),
            DocumentKind::Complete => self.complete(),
            DocumentKind::Summary => self.summary()?,
            DocumentKind::Tier { selector } => self.tier(selector)?,
        };

        Ok(Document {
            kind: kind.clone(),
            content,
        })
    }

    fn sections(&self) -> String {
        let mut content = format!("{}\n\n", TITLE);
        content.push_str(
            "Comprehensive performance comparison across different languages and matrix sizes.\n\n",
        );
        content.push_str(&self.languages_tested());
        content.push_str(SECTION_SEPARATOR);

        let tables: Vec<String> = self
            .tiers
            .iter()
            .map(|tier| self.formatter.comparison_table(self.data, tier))
            .collect();
        content.push_str(&tables.join(SECTION_SEPARATOR));
        content
    }

    fn complete(&self) -> String {
        let mut content = format!("{}\n\n", COMPLETE_TITLE);
        content.push_str("Performance comparison across different languages and matrix sizes.\n\n");
        content.push_str(&self.languages_tested());
        content.push('\n');

        for tier in &self.tiers {
            content.push_str(&self.formatter.comparison_table(self.data, tier));
            content.push('\n');
        }
        content
    }

    fn summary(&self) -> PerfTablesResult<String> {
        let tier = self.summary_tier().ok_or(PerfTablesError::TinyTierAbsent)?;

        let mut content = format!("{}\n\n", TITLE);
        content.push_str(&format!(
            "Performance comparison across different languages for {}:\n\n",
            tier
        ));
        content.push_str(&self.formatter.summary_table(self.data, tier));
        Ok(content)
    }

    fn tier(&self, selector: &str) -> PerfTablesResult<String> {
        let tier = find_tier(&self.tiers, selector).ok_or_else(|| PerfTablesError::TierNotFound {
            requested: selector.to_string(),
            available: self.tiers.clone(),
        })?;

        let mut content = format!("# {} Performance Results\n\n", tier);
        content.push_str(&self.formatter.comparison_table(self.data, tier));
        Ok(content)
    }

    /// `## Languages Tested` list of the backends that produced data.
    fn languages_tested(&self) -> String {
        let mut list = String::from("## Languages Tested\n");
        for backend in self.formatter.backends() {
            if self.data.contains(backend) {
                list.push_str(&format!("- **{}**\n", backend));
            }
        }
        list
    }
}
