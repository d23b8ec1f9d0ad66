// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Parsed timing data shared by the parser, aggregator and formatter.

use std::collections::BTreeMap;

/// Memory layout a timing line was measured under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Row,
    Col,
}

/// Display strings (`"<mean> ± <std>s"`) for both orientations of one operation.
///
/// An empty string means no line was found for that orientation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingEntry {
    pub row: String,
    pub col: String,
}

impl TimingEntry {
    /// Store a timing for one orientation, replacing any earlier value.
    pub fn set(&mut self, orientation: Orientation, timing: String) {
        match orientation {
            Orientation::Row => self.row = timing,
            Orientation::Col => self.col = timing,
        }
    }

    pub fn has_row(&self) -> bool {
        !self.row.is_empty()
    }

    pub fn has_col(&self) -> bool {
        !self.col.is_empty()
    }

    /// True when both orientations carry data.
    pub fn is_complete(&self) -> bool {
        self.has_row() && self.has_col()
    }
}

/// Normalized operation name -> timings, for one tier of one backend.
pub type TierTimings = BTreeMap<String, TimingEntry>;

/// Cleaned tier name -> operations, for one backend log.
pub type ParsedLog = BTreeMap<String, TierTimings>;

/// One backend's parsed log within the aggregate.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendLog {
    pub name: String,
    pub log: ParsedLog,
}

/// Parsed logs for every backend that produced data, in configured order.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedData {
    backends: Vec<BackendLog>,
}

impl AggregatedData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a backend's log. A backend added twice keeps only the latest log.
    pub fn insert(&mut self, name: impl Into<String>, log: ParsedLog) {
        let name = name.into();
        match self.backends.iter().position(|b| b.name == name) {
            Some(index) => self.backends[index].log = log,
            None => self.backends.push(BackendLog { name, log }),
        }
    }

    pub fn get(&self, backend: &str) -> Option<&ParsedLog> {
        self.backends
            .iter()
            .find(|b| b.name == backend)
            .map(|b| &b.log)
    }

    pub fn contains(&self, backend: &str) -> bool {
        self.get(backend).is_some()
    }

    /// Timings for one operation of one tier of one backend.
    pub fn timing(&self, backend: &str, tier: &str, operation: &str) -> Option<&TimingEntry> {
        self.get(backend)?.get(tier)?.get(operation)
    }

    pub fn backends(&self) -> impl Iterator<Item = &BackendLog> {
        self.backends.iter()
    }

    pub fn backend_names(&self) -> impl Iterator<Item = &str> {
        self.backends.iter().map(|b| b.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.backends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }
}
