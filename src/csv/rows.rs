//! Row projection
//!
//! Applies the header's column mask to every data row and drops blank rows.

use std::collections::BTreeSet;

use super::error::IngestError;
use super::model::{RawRow, Row};
use super::sanitize::sanitize_cell;

/// Project raw data rows onto the clean header layout
///
/// `raw_width` is the raw header row's length and `width` the number of clean
/// headers. Short rows are padded with empty cells before filtering; cells
/// past the raw header are dropped. Every returned row has exactly `width`
/// cells.
pub fn project_rows(
    raw_rows: &[RawRow],
    ignored: &BTreeSet<usize>,
    raw_width: usize,
    width: usize,
) -> Result<Vec<Row>, IngestError> {
    let rows: Vec<Row> = raw_rows
        .iter()
        .map(|raw| project_row(raw, ignored, raw_width, width))
        .filter(|row| !row.is_blank())
        .collect();

    tracing::debug!(
        input = raw_rows.len(),
        kept = rows.len(),
        "projected data rows"
    );

    if rows.is_empty() {
        return Err(IngestError::NoDataRows);
    }
    Ok(rows)
}

fn project_row(raw: &RawRow, ignored: &BTreeSet<usize>, raw_width: usize, width: usize) -> Row {
    let mut cells: Vec<String> = (0..raw_width)
        .filter(|i| !ignored.contains(i))
        .map(|i| raw.get(i).map(sanitize_cell).unwrap_or_default())
        .collect();
    cells.resize(width, String::new());
    Row::from_cells(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ignored() -> BTreeSet<usize> {
        BTreeSet::from([0, 4, 6])
    }

    fn cells(row: &Row) -> Vec<&str> {
        row.cells().iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_drops_ignored_and_sanitizes() {
        let raw = vec![RawRow::from(vec!["x", "=1", "\"b\"", "c", "y", "d", "z"])];
        let rows = project_rows(&raw, &ignored(), 7, 4).unwrap();
        assert_eq!(cells(&rows[0]), vec!["1", "b", "c", "d"]);
    }

    #[test]
    fn test_short_rows_are_padded() {
        let raw = vec![RawRow::from(vec!["x", "a"])];
        let rows = project_rows(&raw, &ignored(), 7, 4).unwrap();
        assert_eq!(cells(&rows[0]), vec!["a", "", "", ""]);
    }

    #[test]
    fn test_long_rows_are_truncated() {
        let raw = vec![RawRow::from(vec!["x", "a", "b", "c", "y", "d", "z", "extra", "more"])];
        let rows = project_rows(&raw, &ignored(), 7, 4).unwrap();
        assert_eq!(cells(&rows[0]), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_blank_rows_removed() {
        let raw = vec![
            RawRow::from(vec!["only ignored", "", "", "", "noise", "", "noise"]),
            RawRow::from(vec!["", "a", "", "", "", "", ""]),
            RawRow::from(vec!["", "\"\"", "=", "", "", "", ""]),
        ];
        let rows = project_rows(&raw, &ignored(), 7, 4).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get(0), "a");
    }

    #[test]
    fn test_no_data_rows() {
        let raw = vec![RawRow::from(vec!["", "", ""])];
        assert_eq!(
            project_rows(&raw, &ignored(), 7, 4),
            Err(IngestError::NoDataRows)
        );
        assert_eq!(
            project_rows(&[], &ignored(), 7, 4),
            Err(IngestError::NoDataRows)
        );
    }
}
