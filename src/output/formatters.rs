//! Formatting utilities for terminal output

use std::fmt::Display;
use std::time::Duration;

/// Format an integer with comma thousands separators
///
/// # Examples
/// ```
/// use craftlist::output::formatters::humanize;
///
/// assert_eq!(humanize(123_456_789u64), "123,456,789");
/// assert_eq!(humanize(-456), "-456");
/// ```
#[must_use]
pub fn humanize<T: Display>(value: T) -> String {
    let text = value.to_string();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };

    let mut grouped = String::with_capacity(text.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Compact human-readable duration, e.g. `850ms`, `12.4s`, `3m 05s`
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs >= 60 {
        format!("{}m {:02}s", secs / 60, secs % 60)
    } else if secs >= 1 {
        format!("{:.1}s", duration.as_secs_f64())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Share of `part` in `whole` as a percentage, zero when `whole` is zero
#[must_use]
pub fn percentage(part: u128, whole: u128) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
