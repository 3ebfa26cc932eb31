//! Cell sanitizing
//!
//! Strips spreadsheet formula prefixes (`=`) and stray quote characters that
//! survive tokenizing, so exported values can never be evaluated as formulas.

/// Sanitize a single field
///
/// Trims, strips every leading `=` or `"`, strips every trailing `"`, and
/// trims again. Idempotent.
pub fn sanitize_cell(value: &str) -> String {
    let mut cleaned = value.trim();

    loop {
        let stripped = cleaned.trim_start_matches(['=', '"']).trim();
        let stripped = stripped.trim_end_matches('"').trim();
        if stripped.len() == cleaned.len() {
            break;
        }
        cleaned = stripped;
    }

    cleaned.to_string()
}
