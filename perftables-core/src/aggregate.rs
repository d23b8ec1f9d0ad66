// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Collects every configured backend log into one [`AggregatedData`].

use crate::config::Config;
use crate::error::{PerfTablesError, PerfTablesResult, SkipReason};
use crate::parser::parse_log_file;
use crate::types::AggregatedData;

/// A configured backend that contributed nothing to the aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedBackend {
    pub name: String,
    pub reason: SkipReason,
}

/// Result of parsing all backend logs.
#[derive(Debug, Clone, Default)]
pub struct Aggregation {
    pub data: AggregatedData,
    pub skipped: Vec<SkippedBackend>,
}

impl Aggregation {
    /// Fail with [`PerfTablesError::NoBackendsAvailable`] when every backend
    /// was skipped.
    pub fn require_data(self) -> PerfTablesResult<Self> {
        if self.data.is_empty() {
            return Err(PerfTablesError::NoBackendsAvailable);
        }
        Ok(self)
    }
}

/// Parse every backend's log in configured order.
///
/// Missing, unreadable and empty logs are skipped with a warning and recorded
/// in [`Aggregation::skipped`].
pub fn aggregate(config: &Config) -> Aggregation {
    let mut aggregation = Aggregation::default();

    for backend in &config.backends {
        let path = config.log_path(backend);
        tracing::info!(backend = %backend.name, path = %path.display(), "Parsing log file");

        let parsed = parse_log_file(&path, backend).and_then(|log| {
            if log.is_empty() {
                Err(SkipReason::NoDataParsed { path: path.clone() })
            } else {
                Ok(log)
            }
        });

        match parsed {
            Ok(log) => {
                tracing::info!(backend = %backend.name, tests = log.len(), "Found tests");
                aggregation.data.insert(backend.name.clone(), log);
            }
            Err(reason) => {
                tracing::warn!(backend = %backend.name, %reason, "No data found, skipping backend");
                aggregation.skipped.push(SkippedBackend {
                    name: backend.name.clone(),
                    reason,
                });
            }
        }
    }

    aggregation
}
