//! Number formatting shared by the stat renderers and the report.

/// Token shown where a statistic has no defined value.
pub const UNDEFINED: &str = "undefined";

/// Format an integer count with `,` thousands separators.
pub fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// Same as [`group_thousands`] for signed values.
pub fn group_thousands_signed(value: i64) -> String {
    let grouped = group_thousands(value.unsigned_abs() as usize);
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// `part / whole` as a percentage with one decimal, without the `%` sign.
/// An empty whole reads as `0.0`.
pub fn percent(part: usize, whole: usize) -> String {
    if whole == 0 {
        return one_decimal(0.0);
    }
    one_decimal(part as f64 / whole as f64 * 100.0)
}

pub fn one_decimal(value: f64) -> String {
    format!("{value:.1}")
}

/// One decimal, or [`UNDEFINED`] when the value is absent or not finite.
pub fn one_decimal_or_undefined(value: Option<f64>) -> String {
    match value {
        Some(value) if value.is_finite() => one_decimal(value),
        _ => UNDEFINED.to_string(),
    }
}

/// `count (pct%)` with a grouped count.
pub fn count_with_percent(count: usize, total: usize) -> String {
    format!("{} ({}%)", group_thousands(count), percent(count, total))
}

/// Keep at most `max_chars` characters.
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
