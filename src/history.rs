//! Append-only calculation log with replay support.
//!
//! Most-recent-first, keyed by a creation-time identifier, persisted as JSON.
//! The engine only ever appends; reading the log back is the caller's
//! business (replay reinvokes the engine with the stored triple).

use std::io;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::{CalculationResult, Operation};
use crate::error::{CalcError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub expression: String,
    pub operation: Operation,
    pub variable: String,
    pub result: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        History::default()
    }

    /// Prepend a new entry built from `result` and return it.
    pub fn record(&mut self, result: &CalculationResult) -> &HistoryEntry {
        let now = Utc::now();
        let entry = HistoryEntry {
            id: now.timestamp_millis(),
            expression: result.input.clone(),
            operation: result.operation,
            variable: result.variable.clone(),
            result: result.to_string(),
            timestamp: now,
        };
        self.entries.insert(0, entry);
        &self.entries[0]
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, id: i64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// The stored invocation triple for `id`, ready to hand back to the
    /// engine.
    pub fn replay(&self, id: i64) -> Option<(&str, Operation, &str)> {
        self.find(id)
            .map(|e| (e.expression.as_str(), e.operation, e.variable.as_str()))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn save_to<W: io::Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer(writer, &self.entries)
            .map_err(|e| CalcError::History(e.to_string()))
    }

    pub fn load_from<R: io::Read>(reader: R) -> Result<Self> {
        let entries = serde_json::from_reader(reader)
            .map_err(|e| CalcError::History(e.to_string()))?;
        Ok(History { entries })
    }
}
