// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for perftables.
//!
//! Fatal conditions are variants of [`PerfTablesError`]. Per-backend problems
//! that only skip one log are [`SkipReason`] values and never abort a run.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for log aggregation and table generation.
#[derive(Debug, Error)]
pub enum PerfTablesError {
    // =========================================================================
    // Configuration Errors - Fail-Fast on Invalid Config
    // =========================================================================
    #[error("Configuration validation error: {0}")]
    ConfigValidation(#[from] ConfigValidationError),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Generation Errors - Skip the affected unit of work
    // =========================================================================
    #[error("No log files found or parsed successfully")]
    NoBackendsAvailable,

    #[error("Test size '{requested}' not found (available: {})", .available.join(", "))]
    TierNotFound {
        requested: String,
        available: Vec<String>,
    },

    #[error("Tiny test not found for README-style table")]
    TinyTierAbsent,

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration errors prevent any log from being parsed.
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("Invalid field value: {field} = {value} - {reason}")]
    InvalidFieldValue {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Duplicate backend name: {name}")]
    DuplicateBackend { name: String },

    #[error("Invalid operation pattern for backend {backend}: {reason}")]
    InvalidPattern { backend: String, reason: String },

    #[error("Schema validation failed: {message}")]
    SchemaValidation { message: String },
}

/// Why a configured backend contributed no data to the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SkipReason {
    #[error("{path} not found")]
    MissingInputFile { path: PathBuf },

    #[error("no test sections parsed from {path}")]
    NoDataParsed { path: PathBuf },

    #[error("could not read {path}: {message}")]
    Unreadable { path: PathBuf, message: String },
}

/// Result type alias using PerfTablesError.
pub type PerfTablesResult<T> = Result<T, PerfTablesError>;
