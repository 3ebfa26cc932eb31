//! Ingestion pipeline
//!
//! Runs tokenizing, header normalization, row projection and aggregation in
//! order. The first structural failure aborts the run; no partial table is
//! ever returned.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::aggregate::{aggregate, AggregationSpec};
use super::error::{IngestError, Warning};
use super::headers::normalize_headers;
use super::model::Table;
use super::rows::project_rows;
use super::tokenizer::tokenize;

/// Fixed layout of the statement export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestLayout {
    /// 0-based raw row holding the column headers
    pub header_row_index: usize,
    /// 0-based raw columns dropped from headers and data
    pub ignored_columns: Vec<usize>,
    /// Clean column index used to group rows
    pub group_key_column: usize,
    /// Clean column index summed per group
    pub amount_column: usize,
    /// Header of the appended aggregate column
    pub total_header: String,
    /// Reorder rows by the group key before aggregating
    pub sort_by_group_key: bool,
}

impl Default for IngestLayout {
    fn default() -> Self {
        Self {
            header_row_index: 10,
            ignored_columns: vec![0, 4, 6],
            group_key_column: 3,
            amount_column: 5,
            total_header: "Total".to_string(),
            sort_by_group_key: true,
        }
    }
}

impl IngestLayout {
    /// Minimum number of non-blank raw rows a file must have
    pub fn required_rows(&self) -> usize {
        self.header_row_index + 1
    }

    fn ignored_set(&self) -> BTreeSet<usize> {
        self.ignored_columns.iter().copied().collect()
    }

    fn aggregation(&self) -> AggregationSpec {
        AggregationSpec {
            key_column: self.group_key_column,
            amount_column: self.amount_column,
            total_header: self.total_header.clone(),
            sort_by_key: self.sort_by_group_key,
        }
    }
}

/// Successful ingestion result
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedTable {
    /// Clean table including the Total column
    pub table: Table,
    /// Position of the appended Total column
    pub total_column: usize,
    /// Raw header row as found in the file
    pub original_headers: Vec<String>,
    /// Informational notices, in the order they arose
    pub warnings: Vec<Warning>,
    /// Number of non-blank raw lines in the file
    pub raw_row_count: usize,
}

/// Process file text into a clean table
pub fn process(content: &str, layout: &IngestLayout) -> Result<ProcessedTable, IngestError> {
    let raw_rows = tokenize(content);
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyFile);
    }

    let required = layout.required_rows();
    if raw_rows.len() < required {
        return Err(IngestError::InsufficientRows {
            found: raw_rows.len(),
            required,
        });
    }

    let mut warnings = Vec::new();
    let ignored = layout.ignored_set();

    let header_row = raw_rows.get(layout.header_row_index);
    let normalized = normalize_headers(header_row, &ignored, &mut warnings)?;
    let raw_width = header_row.map(|r| r.len()).unwrap_or(0);

    let data = &raw_rows[layout.header_row_index + 1..];
    let rows = project_rows(data, &ignored, raw_width, normalized.headers.len())?;

    let mut table = Table::from_projected(normalized.headers, rows);
    let total_column = aggregate(&mut table, &layout.aggregation(), &mut warnings);

    tracing::info!(
        rows = table.row_count(),
        columns = table.column_count(),
        warnings = warnings.len(),
        "processed statement"
    );

    Ok(ProcessedTable {
        table,
        total_column,
        original_headers: normalized.original_headers,
        warnings,
        raw_row_count: raw_rows.len(),
    })
}

/// Read a source file as text
///
/// Invalid UTF-8 sequences are replaced rather than rejected, since bank
/// exports are frequently Latin-1.
pub fn read_source(path: &Path) -> Result<String, IngestError> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::ReadFailure(e.to_string()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preamble() -> String {
        (0..10).map(|i| format!("Statement line {}\n", i)).collect()
    }

    fn statement(data: &[&str]) -> String {
        let mut text = preamble();
        text.push_str("Id,Date,Ref,Memo,Bank,Name,Branch,Credit,Debit\n");
        for line in data {
            text.push_str(line);
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_process_happy_path() {
        let text = statement(&[
            "1,2024-01-02,R1,Coffee,X,bob,Y,,4.50",
            "2,2024-01-03,R2,Lunch,X,alice,Y,,12",
            "3,2024-01-04,R3,Tea,X,bob,Y,,2.25",
        ]);
        let result = process(&text, &IngestLayout::default()).unwrap();
        let table = &result.table;

        assert_eq!(
            table.headers(),
            &["Date", "Ref", "Memo", "Name", "Credit", "Debit", "Total"].map(String::from)[..]
        );
        assert_eq!(table.row_count(), 3);
        // Sorted by Name: alice, bob, bob
        assert_eq!(table.get(0, 3), "alice");
        assert_eq!(table.get(0, 6), "12.00");
        assert_eq!(table.get(1, 6), "");
        assert_eq!(table.get(2, 6), "6.75");
        assert_eq!(result.original_headers.len(), 9);
        assert_eq!(result.raw_row_count, 14);
    }

    #[test]
    fn test_warning_order() {
        let text = statement(&["1,d,r,m,b,n,x,c,1"]);
        let result = process(&text, &IngestLayout::default()).unwrap();
        assert_eq!(result.warnings[0], Warning::IgnoredColumns(vec![1, 5, 7]));
        assert!(matches!(
            result.warnings[result.warnings.len() - 2],
            Warning::SortedForGrouping { .. }
        ));
        assert!(matches!(
            result.warnings.last(),
            Some(Warning::AggregationBasis { .. })
        ));
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(
            process("", &IngestLayout::default()),
            Err(IngestError::EmptyFile)
        );
        assert_eq!(
            process("\n  \n", &IngestLayout::default()),
            Err(IngestError::EmptyFile)
        );
    }

    #[test]
    fn test_insufficient_rows() {
        let result = process("a\nb\nc\n", &IngestLayout::default());
        assert_eq!(
            result,
            Err(IngestError::InsufficientRows {
                found: 3,
                required: 11
            })
        );
    }

    #[test]
    fn test_header_only_has_no_data() {
        let text = statement(&[]);
        assert_eq!(
            process(&text, &IngestLayout::default()),
            Err(IngestError::NoDataRows)
        );
    }

    #[test]
    fn test_custom_layout() {
        let layout = IngestLayout {
            header_row_index: 0,
            ignored_columns: vec![],
            group_key_column: 0,
            amount_column: 1,
            total_header: "Sum".into(),
            sort_by_group_key: false,
        };
        let result = process("who,amt\nb,1\na,2\nb,3\n", &layout).unwrap();
        assert_eq!(result.table.headers().last().map(|s| s.as_str()), Some("Sum"));
        assert_eq!(result.table.get(0, 0), "b");
        assert_eq!(result.table.get(2, 2), "4.00");
        assert_eq!(result.table.get(1, 2), "2.00");
        assert_eq!(result.total_column, 2);
    }

    #[test]
    fn test_source_column_named_like_total() {
        let layout = IngestLayout {
            header_row_index: 0,
            ignored_columns: vec![],
            group_key_column: 0,
            amount_column: 1,
            total_header: "Total".into(),
            sort_by_group_key: false,
        };
        let result = process("who,Total\na,5\na,7\n", &layout).unwrap();
        assert_eq!(result.table.headers(), &["who", "Total", "Total"].map(String::from)[..]);
        assert_eq!(result.total_column, 2);
        assert_eq!(result.table.get(1, 2), "12.00");
    }

    #[test]
    fn test_read_source_missing_file() {
        let result = read_source(Path::new("/nonexistent/statement.csv"));
        assert!(matches!(result, Err(IngestError::ReadFailure(_))));
    }
}
