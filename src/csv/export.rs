//! Processed CSV export
//!
//! Writes a metadata preamble of `# ` comment lines, a blank line, then the
//! table as comma-separated text.

use chrono::{DateTime, SecondsFormat, Utc};

use super::model::Table;

/// Title line written at the top of every export
pub const EXPORT_TITLE: &str = "Bank Statement CSV Export";

/// Suffix replacing the original extension in export file names
pub const PROCESSED_SUFFIX: &str = "_processed.csv";

/// Number of lines before the header line (metadata plus blank separator)
pub const PREAMBLE_LINES: usize = 5;

/// Render a table as export text
pub fn export_csv(table: &Table, generated_at: DateTime<Utc>) -> String {
    let mut lines = Vec::with_capacity(PREAMBLE_LINES + 1 + table.row_count());

    lines.push(format!("# {}", EXPORT_TITLE));
    lines.push(format!(
        "# Generated: {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
    ));
    lines.push(format!("# Rows: {}", table.row_count()));
    lines.push(format!("# Columns: {}", table.column_count()));
    lines.push(String::new());

    lines.push(join_record(table.headers()));
    for row in table.rows() {
        lines.push(join_record(row.cells()));
    }

    lines.join("\n")
}

fn join_record(fields: &[String]) -> String {
    fields
        .iter()
        .map(|f| escape_csv_value(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Quote a field when it contains a comma, a quote or a newline
pub fn escape_csv_value(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Derive the export file name: the original stem plus `_processed.csv`
pub fn processed_file_name(original: &str) -> String {
    let stem = match original.rfind('.') {
        Some(dot) if dot > 0 => &original[..dot],
        _ => original,
    };
    format!("{}{}", stem, PROCESSED_SUFFIX)
}
