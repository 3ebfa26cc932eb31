//! Line-oriented CSV tokenizer
//!
//! Handles the subset of CSV that bank exports actually produce: quoted
//! fields, doubled quotes as escapes, and commas inside quotes. Records never
//! span physical lines.

use super::model::RawRow;

const QUOTE: char = '"';
const DELIMITER: char = ',';

/// Split file text into raw rows
///
/// Lines that are empty after trimming are skipped. Each field is trimmed of
/// surrounding whitespace.
pub fn tokenize(content: &str) -> Vec<RawRow> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(tokenize_line)
        .collect()
}

/// Split one physical line into fields
pub fn tokenize_line(line: &str) -> RawRow {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }

    fields.push(current.trim().to_string());
    RawRow::new(fields)
}
