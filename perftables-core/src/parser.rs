// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark log parsing.
//!
//! A log is a sequence of tier sections:
//!
//! ```text
//! --- Tiny Matrix Test (100 x 50) ---
//! Matrix shapes:
//! - row-major: (100, 50)
//!
//! === Multiple Operations Profiling ===
//! row-major sum: 0.000010 ± 0.000001 seconds (mean ± std over 1000 runs)
//! col-major sum: 0.000020 ± 0.000002 seconds (mean ± std over 1000 runs)
//! ```
//!
//! Only the lines after the profiling marker are searched for timings. Timing
//! tokens are carried through verbatim; nothing is re-parsed as a number.

use std::io::ErrorKind;
use std::path::Path;

use crate::config::BackendConfig;
use crate::error::SkipReason;
use crate::operation::normalize_operation_name;
use crate::types::{Orientation, ParsedLog, TierTimings};

/// Line that starts the timing region of a tier section.
pub const PROFILING_MARKER: &str = "=== Multiple Operations Profiling ===";

/// Words some drivers put into tier headers ("Tiny Matrix Test").
const TIER_NAME_ARTIFACTS: [&str; 2] = ["DataFrame ", "Matrix "];

/// One `--- <name> ---` section of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierBlock<'a> {
    /// Header text between the dashes, untrimmed.
    pub name: &'a str,
    /// Text after the profiling marker, up to the next header. `None` when the
    /// section has no marker.
    pub timings: Option<&'a str>,
}

/// Split log text into tier sections.
///
/// Text before the first header is ignored. A section runs until the next
/// header line or the end of the input.
pub fn split_tier_blocks(content: &str) -> Vec<TierBlock<'_>> {
    let mut blocks = Vec::new();
    // (name, start of timing region)
    let mut current: Option<(&str, Option<usize>)> = None;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if let Some(name) = tier_header(line) {
            if let Some((prev, region_start)) = current.take() {
                blocks.push(TierBlock {
                    name: prev,
                    timings: region_start.map(|start| &content[start..line_start]),
                });
            }
            current = Some((name, None));
            continue;
        }

        if let Some((_, region_start)) = current.as_mut() {
            if region_start.is_none() && line.trim() == PROFILING_MARKER {
                *region_start = Some(offset);
            }
        }
    }

    if let Some((name, region_start)) = current {
        blocks.push(TierBlock {
            name,
            timings: region_start.map(|start| &content[start..]),
        });
    }

    blocks
}

/// Header text of a `--- <name> ---` line.
fn tier_header(line: &str) -> Option<&str> {
    let inner = line
        .trim()
        .strip_prefix("--- ")?
        .strip_suffix(" ---")?;
    if inner.trim().is_empty() {
        None
    } else {
        Some(inner)
    }
}

/// Normalize a tier header so the same tier from different drivers compares
/// equal ("Tiny Matrix Test" and "Tiny DataFrame Test" both become "Tiny Test").
pub fn clean_tier_name(raw: &str) -> String {
    let mut name = raw.trim().to_string();
    for artifact in TIER_NAME_ARTIFACTS {
        if name.contains(artifact) {
            name = name.replace(artifact, "");
        }
    }
    name
}

/// Parse a whole log held in memory.
pub fn parse_log(content: &str, backend: &BackendConfig) -> ParsedLog {
    let mut log = ParsedLog::new();

    for block in split_tier_blocks(content) {
        let Some(region) = block.timings else {
            tracing::debug!(
                backend = %backend.name,
                tier = block.name.trim(),
                "Section has no profiling marker, ignoring"
            );
            continue;
        };

        let tier = log.entry(clean_tier_name(block.name)).or_default();
        extract_timings(region, backend, tier);
    }

    log
}

/// Collect every operation line of one timing region into `tier`.
fn extract_timings(region: &str, backend: &BackendConfig, tier: &mut TierTimings) {
    for caps in backend.pattern.captures_iter(region) {
        let (Some(tag), Some(operation), Some(mean), Some(std)) =
            (caps.get(1), caps.get(2), caps.get(3), caps.get(4))
        else {
            continue;
        };

        // Any tag other than the row marker counts as column.
        let orientation = if tag.as_str() == backend.row_marker {
            Orientation::Row
        } else {
            Orientation::Col
        };

        let timing = format!("{} ± {}s", mean.as_str(), std.as_str());
        tier.entry(normalize_operation_name(operation.as_str()))
            .or_default()
            .set(orientation, timing);
    }
}

/// Read and parse a backend's log file.
///
/// A missing or unreadable file is reported as a [`SkipReason`]; it never
/// aborts the run.
pub fn parse_log_file(path: &Path, backend: &BackendConfig) -> Result<ParsedLog, SkipReason> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Log file not found");
            return Err(SkipReason::MissingInputFile {
                path: path.to_path_buf(),
            });
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Log file unreadable");
            return Err(SkipReason::Unreadable {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
        }
    };

    Ok(parse_log(&content, backend))
}
