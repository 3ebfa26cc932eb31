//! Snapshot history for undo/redo
//!
//! Entries are whole-table snapshots. Entry 0 is always the table as loaded
//! (until it is pushed out by the size bound); later entries are undo points
//! captured before each destructive edit.

use chrono::{DateTime, Utc};

use crate::csv::Table;

/// Default bound on the number of stored snapshots
pub const DEFAULT_MAX_HISTORY: usize = 20;

/// Smallest usable bound: the loaded table plus one undo point
pub const MIN_MAX_HISTORY: usize = 2;

/// What a history entry was recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    FileLoaded,
    DeleteRows,
    DeleteColumns,
    /// Live table captured on undo so redo can return to it
    Checkpoint,
}

impl HistoryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            HistoryAction::FileLoaded => "file_loaded",
            HistoryAction::DeleteRows => "delete_rows",
            HistoryAction::DeleteColumns => "delete_columns",
            HistoryAction::Checkpoint => "checkpoint",
        }
    }
}

impl std::fmt::Display for HistoryAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable table snapshot
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub table: Table,
    /// Position of the aggregate column in `table`, if it survives
    pub total_column: Option<usize>,
    pub action: HistoryAction,
    pub timestamp: DateTime<Utc>,
}

/// Bounded snapshot list with a current pointer
///
/// `index` always points at a valid entry; undo is possible while it is
/// above zero and redo while it is below the last entry.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    index: usize,
    max_size: usize,
}

impl History {
    /// Start a history whose first entry is the freshly loaded table
    pub fn new(initial: &Table, total_column: Option<usize>, max_size: usize) -> Self {
        Self {
            entries: vec![HistoryEntry {
                table: initial.clone(),
                total_column,
                action: HistoryAction::FileLoaded,
                timestamp: Utc::now(),
            }],
            index: 0,
            max_size: max_size.max(MIN_MAX_HISTORY),
        }
    }

    /// Push a snapshot, discarding any redo branch
    ///
    /// When the bound is exceeded the oldest entry is dropped and the
    /// pointer shifts with it.
    pub fn record(&mut self, table: &Table, total_column: Option<usize>, action: HistoryAction) {
        self.entries.truncate(self.index + 1);
        self.entries.push(HistoryEntry {
            table: table.clone(),
            total_column,
            action,
            timestamp: Utc::now(),
        });
        self.index = self.entries.len() - 1;

        if self.entries.len() > self.max_size {
            let excess = self.entries.len() - self.max_size;
            self.entries.drain(..excess);
            self.index -= excess;
            tracing::debug!(dropped = excess, "history bound reached");
        }
    }

    /// Move the pointer back one entry and return it
    pub fn step_back(&mut self) -> Option<&HistoryEntry> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.entries[self.index])
    }

    /// Move the pointer forward one entry and return it
    pub fn step_forward(&mut self) -> Option<&HistoryEntry> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.entries[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }
}
