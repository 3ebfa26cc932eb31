//! Number parsing and formatting helpers
//!
//! Cell values come from spreadsheet exports, so numeric interpretation is
//! lenient: the longest numeric prefix of a cell is its value ("12.50 EUR" is
//! 12.5), matching how the downstream report treats amounts.

/// Parse the longest leading decimal number in `s`
///
/// Leading whitespace is skipped. Accepts an optional sign, digits with an
/// optional fraction, and an optional exponent. `Infinity` (optionally signed)
/// is recognized. Returns `None` when no numeric prefix exists.
pub fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }

    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Parse a cell as a finite number, if it has a numeric prefix
pub fn parse_finite(s: &str) -> Option<f64> {
    parse_leading_float(s).filter(|n| n.is_finite())
}

/// Format `value` with `digits` fraction digits, the way `Number.toFixed` does
///
/// Exact halfway values round away from zero (0.125 -> "0.13") and negative
/// zero prints without a sign. Magnitudes of 1e21 and above fall back to
/// exponent notation ("1e+21"). `digits` is capped at 20.
pub fn format_fixed(value: f64, digits: usize) -> String {
    const MAX_DIGITS: usize = 20;
    let digits = digits.min(MAX_DIGITS);

    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-Infinity" } else { "Infinity" }.to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();

    if magnitude >= 1e21 {
        let exp = format!("{:e}", magnitude).replacen('e', "e+", 1);
        return format!("{}{}", sign, exp);
    }

    // A value exactly halfway between two `digits`-place decimals is an odd
    // multiple of 2^-(digits + 1). Anything else is rounded correctly by `{:.*}`.
    let scaled = magnitude * 2f64.powi(digits as i32 + 1);
    if scaled.fract() == 0.0 && scaled % 2.0 == 1.0 {
        let halves = scaled as u128 * 5u128.pow(digits as u32);
        let units = (halves + 1) / 2;
        let scale = 10u128.pow(digits as u32);
        let whole = units / scale;
        return if digits == 0 {
            format!("{}{}", sign, whole)
        } else {
            format!("{}{}.{:0width$}", sign, whole, units % scale, width = digits)
        };
    }

    format!("{}{:.*}", sign, digits, magnitude)
}

/// Format a byte count for display (e.g., "1.5 KB", "50 MB")
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let formatted = format!("{:.2}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    format!("{} {}", trimmed, UNITS[unit])
}
