// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! perftables Core Library
//!
//! Turns the text logs written by the matrix/dataframe benchmark drivers into
//! markdown tables comparing every backend side by side.
//!
//! # Pipeline
//!
//! - **Config**: the backend table (log file, orientation markers, line pattern)
//! - **Parser**: one log file into tier -> operation -> row/col timings
//! - **Aggregate**: every backend's log, skipping missing or empty ones
//! - **Tables**: comparison and summary tables, assembled into documents
//! - **Reporter**: documents to stdout or to fixed-name markdown files

pub mod aggregate;
pub mod config;
pub mod document;
pub mod error;
pub mod operation;
pub mod parser;
pub mod reporter;
pub mod table;
pub mod tiers;
pub mod types;

// Re-export commonly used types
pub use aggregate::{aggregate, Aggregation, SkippedBackend};
pub use config::{BackendConfig, Config, ConfigLoader};
pub use document::{Document, DocumentBuilder, DocumentKind};
pub use error::{ConfigValidationError, PerfTablesError, PerfTablesResult, SkipReason};
pub use reporter::{MarkdownReporter, OutputTarget};
pub use table::TableFormatter;
pub use types::{AggregatedData, Orientation, ParsedLog, TimingEntry};
