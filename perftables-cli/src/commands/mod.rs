// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! CLI command modules.

pub mod all;
pub mod generate;
pub mod overview;

use perftables_core::{PerfTablesError, PerfTablesResult};

/// Report a skippable generation error on stderr.
///
/// Returns the error again when it must abort the run.
pub(crate) fn report_skippable(err: PerfTablesError) -> PerfTablesResult<()> {
    match err {
        PerfTablesError::TierNotFound { .. } | PerfTablesError::TinyTierAbsent => {
            eprintln!("{}", err);
            Ok(())
        }
        other => Err(other),
    }
}
