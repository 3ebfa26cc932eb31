//! Header normalization
//!
//! Turns the raw header row into identifier-safe, unique column names.

use std::collections::{BTreeSet, HashMap, HashSet};

use super::error::{IngestError, Warning};
use super::model::RawRow;
use super::sanitize::sanitize_cell;

/// Longest allowed header name, in characters
pub const MAX_HEADER_LEN: usize = 30;

/// Result of header normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedHeaders {
    /// Clean, unique names for the surviving columns
    pub headers: Vec<String>,
    /// The raw header row as read, including ignored columns
    pub original_headers: Vec<String>,
}

/// Normalize the raw header row
///
/// `ignored` holds raw column indices to drop. Warnings are appended to
/// `warnings` in the order they arise.
pub fn normalize_headers(
    header_row: Option<&RawRow>,
    ignored: &BTreeSet<usize>,
    warnings: &mut Vec<Warning>,
) -> Result<NormalizedHeaders, IngestError> {
    let row = match header_row {
        Some(row) if !row.is_empty() => row,
        _ => return Err(IngestError::EmptyHeaderRow),
    };

    if !ignored.is_empty() {
        warnings.push(Warning::IgnoredColumns(
            ignored.iter().map(|i| i + 1).collect(),
        ));
    }

    let surviving: Vec<&str> = row
        .fields()
        .iter()
        .enumerate()
        .filter(|(i, _)| !ignored.contains(i))
        .map(|(_, f)| f.as_str())
        .collect();

    // Occurrences per cleaned name, and every name handed out so far
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut taken: HashSet<String> = HashSet::new();
    let mut headers = Vec::with_capacity(surviving.len());

    for (index, raw) in surviving.iter().enumerate() {
        let position = index + 1;
        let base = clean_header(raw, position);

        let count = seen.entry(base.clone()).or_insert(0);
        *count += 1;
        let mut name = if *count > 1 {
            format!("{}_{}", base, count)
        } else {
            base.clone()
        };
        // A suffixed name can collide with a raw header such as "Amount_2"
        while taken.contains(&name) {
            *count += 1;
            name = format!("{}_{}", base, count);
        }
        taken.insert(name.clone());

        if name != *raw {
            warnings.push(Warning::HeaderRenamed {
                original: raw.to_string(),
                cleaned: name.clone(),
            });
        }
        headers.push(name);
    }

    tracing::debug!(
        columns = headers.len(),
        ignored = ignored.len(),
        "normalized header row"
    );

    Ok(NormalizedHeaders {
        headers,
        original_headers: row.fields().to_vec(),
    })
}

/// Clean one header value; `position` is 1-based among surviving columns
fn clean_header(raw: &str, position: usize) -> String {
    let fallback = || format!("Column_{}", position);

    let mut value = sanitize_cell(raw);
    if value.is_empty() {
        value = fallback();
    }

    let replaced: String = value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    let truncated: String = replaced.trim_matches('_').chars().take(MAX_HEADER_LEN).collect();

    if truncated.is_empty() {
        fallback()
    } else {
        truncated
    }
}
