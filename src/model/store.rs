//! Table store
//!
//! Owns the canonical table plus everything layered on top of it: selections,
//! the view sort and the undo history. It is a plain value; collaborators
//! receive it by reference and nothing in it is shared.
//!
//! History entries are undo points captured *before* each delete. The live
//! table after a delete is only captured when an undo needs to leave it, so a
//! later redo can come back to it.

use std::collections::BTreeSet;

use super::history::{History, HistoryAction, DEFAULT_MAX_HISTORY};
use super::selection::{Selection, SelectionSet};
use super::sort::{sorted_order, SortConfig};
use crate::csv::{Row, Table};

#[derive(Debug, Clone)]
pub struct TableStore {
    table: Table,
    selection: Selection,
    sort: Option<SortConfig>,
    /// Position of the aggregate column; follows column deletes and undo/redo
    total_column: Option<usize>,
    history: History,
    /// Live table has changed since the last snapshot at the history pointer
    unrecorded: bool,
}

impl Default for TableStore {
    fn default() -> Self {
        Self::new(Table::default(), DEFAULT_MAX_HISTORY)
    }
}

impl TableStore {
    pub fn new(table: Table, max_history: usize) -> Self {
        Self::with_total_column(table, None, max_history)
    }

    /// Store over a table whose aggregate column sits at `total_column`
    pub fn with_total_column(
        table: Table,
        total_column: Option<usize>,
        max_history: usize,
    ) -> Self {
        let total_column = total_column.filter(|&c| c < table.column_count());
        let history = History::new(&table, total_column, max_history);
        Self {
            table,
            selection: Selection::default(),
            sort: None,
            total_column,
            history,
            unrecorded: false,
        }
    }

    /// Replace the table with a freshly loaded one
    ///
    /// Selections, sort and history all start over.
    pub fn load(&mut self, table: Table, total_column: Option<usize>) {
        let max = self.history.max_size();
        *self = Self::with_total_column(table, total_column, max);
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn headers(&self) -> &[String] {
        self.table.headers()
    }

    pub fn rows(&self) -> &[Row] {
        self.table.rows()
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn column_count(&self) -> usize {
        self.table.column_count()
    }

    // ------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_rows(&self) -> &SelectionSet {
        &self.selection.rows
    }

    pub fn selected_columns(&self) -> &SelectionSet {
        &self.selection.columns
    }

    /// Click a row; out-of-range indices are ignored
    pub fn toggle_row(&mut self, index: usize, multi: bool, range: bool) -> bool {
        if index >= self.row_count() {
            return false;
        }
        self.selection.rows = self.selection.rows.toggled(index, multi, range);
        true
    }

    /// Click the row shown at display `position` in the current view
    pub fn toggle_row_at(&mut self, position: usize, multi: bool, range: bool) -> bool {
        let order = self.view_order();
        if position >= order.len() {
            return false;
        }
        self.selection.rows = self
            .selection
            .rows
            .toggled_in_view(&order, position, multi, range);
        true
    }

    /// Click a column; out-of-range indices are ignored
    pub fn toggle_column(&mut self, index: usize, multi: bool, range: bool) -> bool {
        if index >= self.column_count() {
            return false;
        }
        self.selection.columns = self.selection.columns.toggled(index, multi, range);
        true
    }

    pub fn select_all_rows(&mut self) {
        self.selection.rows = SelectionSet::all(self.row_count());
    }

    pub fn select_all_columns(&mut self) {
        self.selection.columns = SelectionSet::all(self.column_count());
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ------------------------------------------------------------------
    // Sort
    // ------------------------------------------------------------------

    pub fn sort_config(&self) -> Option<SortConfig> {
        self.sort
    }

    /// Sort by `column`, flipping direction when it is already the sort column
    pub fn sort_by(&mut self, column: usize) -> Option<SortConfig> {
        if column >= self.column_count() {
            return self.sort;
        }
        self.sort = Some(SortConfig::next(self.sort, column));
        self.sort
    }

    pub fn set_sort(&mut self, sort: Option<SortConfig>) {
        self.sort = sort.filter(|s| s.column < self.column_count());
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Canonical row index for each display position
    pub fn view_order(&self) -> Vec<usize> {
        match &self.sort {
            Some(config) => sorted_order(&self.table, config),
            None => (0..self.row_count()).collect(),
        }
    }

    /// Rows in display order
    pub fn sorted_rows(&self) -> Vec<&Row> {
        let rows = self.table.rows();
        self.view_order().into_iter().map(|i| &rows[i]).collect()
    }

    // ------------------------------------------------------------------
    // Structural edits
    // ------------------------------------------------------------------

    /// Delete rows by canonical index; returns the number removed
    ///
    /// An empty set, or one with no valid index, is a no-op.
    pub fn delete_rows(&mut self, indices: &BTreeSet<usize>) -> usize {
        let total = self.row_count();
        if !indices.iter().any(|&i| i < total) {
            return 0;
        }

        self.history.record(&self.table, self.total_column, HistoryAction::DeleteRows);
        let removed = self.table.remove_rows(indices);
        self.unrecorded = true;
        self.selection.clear();

        tracing::debug!(removed, remaining = self.row_count(), "deleted rows");
        removed
    }

    /// Delete columns by index; returns the number removed
    pub fn delete_columns(&mut self, indices: &BTreeSet<usize>) -> usize {
        let total = self.column_count();
        if !indices.iter().any(|&i| i < total) {
            return 0;
        }

        self.history.record(&self.table, self.total_column, HistoryAction::DeleteColumns);
        let removed = self.table.remove_columns(indices);
        self.unrecorded = true;
        self.selection.clear();
        self.sort = self.sort.and_then(|s| {
            shift_column(s.column, indices).map(|column| SortConfig { column, ..s })
        });
        self.total_column = self.total_column.and_then(|c| shift_column(c, indices));

        tracing::debug!(removed, remaining = self.column_count(), "deleted columns");
        removed
    }

    pub fn delete_selected_rows(&mut self) -> usize {
        let indices = self.selection.rows.as_set().clone();
        self.delete_rows(&indices)
    }

    pub fn delete_selected_columns(&mut self) -> usize {
        let indices = self.selection.columns.as_set().clone();
        self.delete_columns(&indices)
    }

    // ------------------------------------------------------------------
    // History
    // ------------------------------------------------------------------

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Restore the previous undo point; returns false when there is none
    pub fn undo(&mut self) -> bool {
        if !self.history.can_undo() {
            return false;
        }

        if self.unrecorded {
            self.history.record(&self.table, self.total_column, HistoryAction::Checkpoint);
            self.unrecorded = false;
        }

        match self.history.step_back() {
            Some(entry) => {
                self.table = entry.table.clone();
                self.total_column = entry.total_column;
                self.after_restore();
                true
            }
            None => false,
        }
    }

    /// Re-apply the next snapshot; returns false when there is none
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward() {
            Some(entry) => {
                self.table = entry.table.clone();
                self.total_column = entry.total_column;
                self.after_restore();
                true
            }
            None => false,
        }
    }

    fn after_restore(&mut self) {
        self.selection.clear();
        let columns = self.column_count();
        self.sort = self.sort.filter(|s| s.column < columns);
        tracing::debug!(
            index = self.history.index(),
            len = self.history.len(),
            "restored snapshot"
        );
    }

    /// Index of the aggregate column, unless it has been deleted
    pub fn total_column(&self) -> Option<usize> {
        self.total_column
    }
}

/// Follow a column across a column delete, or drop it if deleted
fn shift_column(column: usize, deleted: &BTreeSet<usize>) -> Option<usize> {
    if deleted.contains(&column) {
        return None;
    }
    Some(column - deleted.range(..column).count())
}
