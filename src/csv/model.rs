//! Table data model
//!
//! Two row types keep the width invariant out of everyday code:
//! - [`RawRow`] is tokenizer output, any length, only seen by normalization.
//! - [`Row`] lives inside a [`Table`] and always has exactly one cell per header.
//!
//! Every `Table` mutation updates headers and rows in the same call, so no
//! caller can observe a row whose length differs from `headers.len()`.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// A tokenized line before column filtering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    fields: Vec<String>,
}

impl RawRow {
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Field at `index`, or `None` past the end of a short row
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<&str>> for RawRow {
    fn from(fields: Vec<&str>) -> Self {
        Self::new(fields.into_iter().map(str::to_string).collect())
    }
}

/// A table row; its width always matches the owning table's headers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub(crate) fn from_cells(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    /// Cell value at `col` ("" when out of range)
    pub fn get(&self, col: usize) -> &str {
        self.cells.get(col).map(|s| s.as_str()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when every cell is the empty string
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|c| c.is_empty())
    }
}

/// Error for rows that do not match the header width
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    pub row: usize,
    pub expected: usize,
    pub found: usize,
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "row {} has {} cells, expected {}",
            self.row, self.found, self.expected
        )
    }
}

impl std::error::Error for ShapeError {}

/// Rectangular table of string cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, rejecting rows whose width differs from the headers
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ShapeError> {
        let width = headers.len();
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(ShapeError {
                row,
                expected: width,
                found: cells.len(),
            });
        }

        Ok(Self {
            headers,
            rows: rows.into_iter().map(Row::from_cells).collect(),
        })
    }

    /// Build from rows already projected to the header width
    pub(crate) fn from_projected(headers: Vec<String>, rows: Vec<Row>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get cell value at position ("" when out of range)
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows.get(row).map(|r| r.get(col)).unwrap_or("")
    }

    /// Remove rows by index; out-of-range indices are ignored
    ///
    /// Returns the number of rows removed.
    pub fn remove_rows(&mut self, indices: &BTreeSet<usize>) -> usize {
        let before = self.rows.len();
        let mut index = 0;
        self.rows.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        });
        before - self.rows.len()
    }

    /// Remove columns by index from headers and every row
    ///
    /// Returns the number of columns removed.
    pub fn remove_columns(&mut self, indices: &BTreeSet<usize>) -> usize {
        let width = self.headers.len();
        let doomed: Vec<usize> = indices.iter().rev().copied().filter(|&i| i < width).collect();
        if doomed.is_empty() {
            return 0;
        }

        // Highest index first so lower positions stay valid
        for &col in &doomed {
            self.headers.remove(col);
            for row in &mut self.rows {
                row.cells.remove(col);
            }
        }
        doomed.len()
    }

    /// Stable in-place reorder of the rows by a comparator
    pub(crate) fn sort_rows_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Row, &Row) -> Ordering,
    {
        self.rows.sort_by(compare);
    }

    /// Append a column; `values` must hold one entry per row
    pub(crate) fn push_column(&mut self, header: impl Into<String>, values: Vec<String>) {
        debug_assert_eq!(values.len(), self.rows.len());
        self.headers.push(header.into());
        let mut values = values.into_iter();
        for row in &mut self.rows {
            row.cells.push(values.next().unwrap_or_default());
        }
    }

    /// Split into owned headers and plain cell vectors
    pub fn into_parts(self) -> (Vec<String>, Vec<Vec<String>>) {
        let rows = self.rows.into_iter().map(|r| r.cells).collect();
        (self.headers, rows)
    }
}
