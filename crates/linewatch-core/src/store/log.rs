// ── Bounded, newest-first event log ──

use std::collections::VecDeque;

use chrono::Local;
use tracing::debug;

use crate::model::{LogEntry, Severity};

/// Default retention for the events dock.
pub const MAX_ITEMS: usize = 300;

/// Line appended by [`BoundedLog::clear`].
pub const CLEARED_MESSAGE: &str = "events cleared (Ctrl+L)";

/// Append-only log capped at `max_items` entries.
///
/// Position 0 is always the newest entry. Inserting past capacity silently
/// drops the oldest entries; nothing is ever rejected.
#[derive(Debug, Clone)]
pub struct BoundedLog {
    entries: VecDeque<LogEntry>,
    max_items: usize,
    next_sequence: u64,
}

impl Default for BoundedLog {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundedLog {
    pub fn new() -> Self {
        Self::with_max_items(MAX_ITEMS)
    }

    /// A log keeping at most `max_items` entries. Zero is raised to one so
    /// the audit line written by `clear` always survives.
    pub fn with_max_items(max_items: usize) -> Self {
        let max_items = max_items.max(1);
        Self {
            entries: VecDeque::with_capacity(max_items.min(MAX_ITEMS)),
            max_items,
            next_sequence: 0,
        }
    }

    /// Record a line at the head and trim the tail back to capacity.
    pub fn append(&mut self, severity: Severity, message: impl Into<String>) -> LogEntry {
        let entry = LogEntry {
            severity,
            message: message.into(),
            sequence: self.next_sequence,
            recorded_at: Local::now(),
        };
        self.next_sequence += 1;
        self.entries.push_front(entry.clone());

        while self.entries.len() > self.max_items {
            if let Some(evicted) = self.entries.pop_back() {
                debug!(sequence = evicted.sequence, "evicted oldest log entry");
            }
        }

        entry
    }

    /// Drop every entry, then record the clear itself.
    pub fn clear(&mut self) -> LogEntry {
        debug!(dropped = self.entries.len(), "clearing event log");
        self.entries.clear();
        self.append(Severity::Sys, CLEARED_MESSAGE)
    }

    /// Owned copy of all entries, newest first.
    pub fn snapshot(&self) -> Vec<LogEntry> {
        self.entries.iter().cloned().collect()
    }

    /// Borrowing iterator, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&LogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_items(&self) -> usize {
        self.max_items
    }
}
