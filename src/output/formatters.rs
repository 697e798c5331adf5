//! Reusable formatting utilities for CLI output

use chrono::{DateTime, Local, Utc};

/// Format a UTC instant in local time.
///
/// # Example output
/// `2025-03-01 09:00 +01:00`
pub fn format_datetime_local(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%Y-%m-%d %H:%M %:z")
        .to_string()
}

/// Format a time window, collapsing the date when both ends share it.
///
/// # Example output
/// - `2025-03-01 08:00 - 09:00`
/// - `2025-03-01 22:00 - 2025-03-02 02:00`
pub fn format_window(start: DateTime<Utc>, end: DateTime<Utc>) -> String {
    let start = start.with_timezone(&Local);
    let end = end.with_timezone(&Local);

    if start.date_naive() == end.date_naive() {
        format!("{} - {}", start.format("%Y-%m-%d %H:%M"), end.format("%H:%M"))
    } else {
        format!(
            "{} - {}",
            start.format("%Y-%m-%d %H:%M"),
            end.format("%Y-%m-%d %H:%M")
        )
    }
}

/// Render an optional value, `-` when missing or blank
pub fn or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
