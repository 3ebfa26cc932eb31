//! Report collaborator seam
//!
//! Report generators only format; they get a shape-consistent table and the
//! position of the aggregate column so they can highlight group totals.

use serde::Serialize;

use crate::csv::{Row, Table};
use crate::model::LoadedFile;
use crate::util::format_file_size;

/// Everything a report generator may read
#[derive(Debug, Clone, Copy)]
pub struct ReportInput<'a> {
    pub headers: &'a [String],
    pub rows: &'a [Row],
    pub file_name: &'a str,
    pub file_size: u64,
    /// Column holding group totals, if the table has one
    pub total_column: Option<usize>,
}

impl<'a> ReportInput<'a> {
    pub fn new(
        table: &'a Table,
        file_name: &'a str,
        file_size: u64,
        total_column: Option<usize>,
    ) -> Self {
        Self {
            headers: table.headers(),
            rows: table.rows(),
            file_name,
            file_size,
            total_column: total_column.filter(|&c| c < table.column_count()),
        }
    }

    pub fn from_document(doc: &'a LoadedFile) -> Self {
        Self::new(
            doc.store.table(),
            &doc.file_name,
            doc.file_size,
            doc.store.total_column(),
        )
    }

    /// True when `row` carries a group total
    pub fn is_total_row(&self, row: usize) -> bool {
        match (self.total_column, self.rows.get(row)) {
            (Some(col), Some(r)) => !r.get(col).is_empty(),
            _ => false,
        }
    }

    pub fn total_row_count(&self) -> usize {
        (0..self.rows.len()).filter(|&i| self.is_total_row(i)).count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportError(pub String);

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to generate report: {}", self.0)
    }
}

impl std::error::Error for ReportError {}

/// Turns a report input into a printable artifact
pub trait ReportGenerator {
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError>;
}

/// Overview figures for a loaded statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub file_name: String,
    pub file_size: String,
    pub rows: usize,
    pub columns: usize,
    pub total_rows: usize,
    pub grand_total: f64,
}

impl ReportSummary {
    pub fn from_input(input: &ReportInput<'_>) -> Self {
        let grand_total = match input.total_column {
            Some(col) => input
                .rows
                .iter()
                .filter_map(|r| crate::util::parse_finite(r.get(col)))
                .sum(),
            None => 0.0,
        };

        Self {
            file_name: input.file_name.to_string(),
            file_size: format_file_size(input.file_size),
            rows: input.rows.len(),
            columns: input.headers.len(),
            total_rows: input.total_row_count(),
            grand_total,
        }
    }
}

/// Emits the summary as pretty JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSummary;

impl ReportGenerator for JsonSummary {
    fn generate(&self, input: &ReportInput<'_>) -> Result<String, ReportError> {
        serde_json::to_string_pretty(&ReportSummary::from_input(input))
            .map_err(|e| ReportError(e.to_string()))
    }
}
