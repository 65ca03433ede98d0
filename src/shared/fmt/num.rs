//! Number formatting utilities for human-readable display.
//!
//! Conversion results use a fixed rule: two decimals for values `>= 1`, and the
//! first two digits of the leading significant run for small fractions.

/// Format a conversion result for the result field.
///
/// - `value >= 1` → exactly two decimal places (`2.0` → `"2.00"`).
/// - `value < 1` → plain decimal text; if it reads `0.` followed by one or more
///   zeros and a non-zero digit, keep that digit and at most one more
///   (`0.0001234` → `"0.00012"`).
/// - non-zero magnitudes below `1e-6` count as exponent-notation text, which
///   never matches, so they fall back to two decimals (`1e-7` → `"0.00"`).
/// - anything else falls back to two decimals (`0.5` → `"0.50"`).
///
/// Two-decimal rounding is round-half-to-even on the exact binary value, so
/// `1.005` (stored as `1.00499…`) renders as `"1.00"`.
pub fn format_result(value: f64) -> String {
    if value >= 1.0 {
        return format!("{:.2}", value);
    }
    if value != 0.0 && value.abs() < 1e-6 {
        return format!("{:.2}", value);
    }
    leading_significant(&value.to_string()).unwrap_or_else(|| format!("{:.2}", value))
}

/// Match `0.0+[1-9]\d?` at the start of `text` and return the matched prefix.
fn leading_significant(text: &str) -> Option<String> {
    let fraction = text.strip_prefix("0.")?;
    let rest = fraction.trim_start_matches('0');
    let zeros = fraction.len() - rest.len();
    if zeros == 0 {
        return None;
    }

    let mut digits = rest.chars();
    let first = digits.next().filter(|c| matches!(c, '1'..='9'))?;

    let mut out = String::with_capacity(2 + zeros + 2);
    out.push_str("0.");
    out.push_str(&fraction[..zeros]);
    out.push(first);
    if let Some(second) = digits.next().filter(char::is_ascii_digit) {
        out.push(second);
    }
    Some(out)
}

/// Format a calculator result: at most ten decimals, trailing zeros trimmed.
pub fn format_calculator(value: f64) -> String {
    let formatted = format!("{:.10}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" | "" => "0".to_string(),
        other => other.to_string(),
    }
}
