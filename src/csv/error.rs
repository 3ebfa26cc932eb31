//! Ingestion errors and warnings
//!
//! Errors abort the whole ingestion; warnings are collected in order and
//! attached to a successful result.

use crate::util::format_file_size;

/// Fatal ingestion failure
#[derive(Debug, Clone, PartialEq)]
pub enum IngestError {
    /// Source exceeds the size limit (rejected before reading)
    FileTooLarge { size: u64, limit: u64 },
    /// Neither extension nor MIME type is accepted (rejected before reading)
    UnsupportedFileType { name: String },
    /// The underlying read failed
    ReadFailure(String),
    /// No non-blank lines in the file
    EmptyFile,
    /// Fewer raw rows than the header position requires
    InsufficientRows { found: usize, required: usize },
    /// Header row missing or without fields
    EmptyHeaderRow,
    /// Every data row was blank after projection
    NoDataRows,
}

impl IngestError {
    /// Get a user-friendly error message that names the file
    pub fn user_message(&self, filename: &str) -> String {
        match self {
            Self::FileTooLarge { .. } | Self::UnsupportedFileType { .. } => {
                format!("Cannot open {}: {}", filename, self)
            }
            Self::ReadFailure(msg) => format!("Failed to read {}: {}", filename, msg),
            _ => format!("Error processing {}: {}", filename, self),
        }
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FileTooLarge { size, limit } => write!(
                f,
                "File size ({}) exceeds the {} limit",
                format_file_size(*size),
                format_file_size(*limit)
            ),
            Self::UnsupportedFileType { name } => {
                write!(f, "unsupported file type: {} (expected .csv or .txt)", name)
            }
            Self::ReadFailure(msg) => write!(f, "Failed to read file: {}", msg),
            Self::EmptyFile => write!(f, "CSV file is empty"),
            Self::InsufficientRows { found, required } => write!(
                f,
                "CSV file must have at least {} rows (found {})",
                required, found
            ),
            Self::EmptyHeaderRow => write!(f, "Header row is empty"),
            Self::NoDataRows => write!(f, "No data rows found after processing"),
        }
    }
}

impl std::error::Error for IngestError {}

/// Informational notice produced while processing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Raw columns dropped from headers and rows (1-based numbers)
    IgnoredColumns(Vec<usize>),
    /// A header was rewritten during normalization
    HeaderRenamed { original: String, cleaned: String },
    /// Rows were reordered by the group key before aggregation
    SortedForGrouping { column: String },
    /// The Total column was computed from these columns
    AggregationBasis { key: String, amount: String },
    /// Too few columns to aggregate; Total column left empty
    InsufficientColumnsForAggregation,
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IgnoredColumns(columns) => {
                let list: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
                write!(f, "Ignored columns: {} (1-based indexing)", list.join(", "))
            }
            Self::HeaderRenamed { original, cleaned } => {
                write!(f, "Header \"{}\" cleaned to \"{}\"", original, cleaned)
            }
            Self::SortedForGrouping { column } => {
                write!(f, "Data automatically sorted by \"{}\" column", column)
            }
            Self::AggregationBasis { key, amount } => write!(
                f,
                "Total column added from \"{}\" amounts grouped by \"{}\"",
                amount, key
            ),
            Self::InsufficientColumnsForAggregation => {
                write!(f, "Insufficient columns for grand total calculation")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_rows_message() {
        let err = IngestError::InsufficientRows {
            found: 4,
            required: 11,
        };
        assert_eq!(
            err.to_string(),
            "CSV file must have at least 11 rows (found 4)"
        );
    }

    #[test]
    fn test_too_large_message_uses_readable_sizes() {
        let err = IngestError::FileTooLarge {
            size: 60 * 1024 * 1024,
            limit: 50 * 1024 * 1024,
        };
        assert_eq!(err.to_string(), "File size (60 MB) exceeds the 50 MB limit");
    }

    #[test]
    fn test_user_message_names_file() {
        assert_eq!(
            IngestError::NoDataRows.user_message("may.csv"),
            "Error processing may.csv: No data rows found after processing"
        );
        assert_eq!(
            IngestError::ReadFailure("denied".into()).user_message("may.csv"),
            "Failed to read may.csv: denied"
        );
    }

    #[test]
    fn test_ignored_columns_warning() {
        let w = Warning::IgnoredColumns(vec![1, 5, 7]);
        assert_eq!(w.to_string(), "Ignored columns: 1, 5, 7 (1-based indexing)");
    }

    #[test]
    fn test_header_renamed_warning() {
        let w = Warning::HeaderRenamed {
            original: "Txn Date".into(),
            cleaned: "Txn_Date".into(),
        };
        assert_eq!(w.to_string(), "Header \"Txn Date\" cleaned to \"Txn_Date\"");
    }
}
