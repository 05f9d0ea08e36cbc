//! In-memory record of documents processed during one session.

use models::ProcessingResult;

use std::time::SystemTime;

use humantime::format_rfc3339_seconds;
use log::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// RFC 3339 time the result was recorded.
    pub timestamp: String,
    pub document_name: String,
    pub tasks_count: usize,
    pub result: ProcessingResult,
}

/// Append-only list of processing results, oldest first.
#[derive(Debug, Clone, Default)]
pub struct SessionHistory {
    entries: Vec<HistoryEntry>,
}

impl SessionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `result` under `document_name`, stamped with the current time.
    pub fn record(
        &mut self,
        document_name: impl Into<String>,
        result: ProcessingResult,
    ) -> &HistoryEntry {
        self.record_at(document_name, result, SystemTime::now())
    }

    pub fn record_at(
        &mut self,
        document_name: impl Into<String>,
        result: ProcessingResult,
        at: SystemTime,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            timestamp: format_rfc3339_seconds(at).to_string(),
            document_name: document_name.into(),
            tasks_count: result.tasks.len(),
            result,
        };

        debug!(
            "History #{}: {} ({} tasks)",
            self.entries.len() + 1,
            entry.document_name,
            entry.tasks_count
        );

        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry by 1-based number, oldest = 1.
    pub fn get(&self, number: usize) -> Option<&HistoryEntry> {
        number.checked_sub(1).and_then(|index| self.entries.get(index))
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// `(number, entry)` pairs, most recent first.
    pub fn entries_newest_first(&self) -> impl Iterator<Item = (usize, &HistoryEntry)> {
        self.entries
            .iter()
            .enumerate()
            .rev()
            .map(|(index, entry)| (index + 1, entry))
    }

    pub fn total_tasks(&self) -> usize {
        self.entries.iter().map(|entry| entry.tasks_count).sum()
    }
}
