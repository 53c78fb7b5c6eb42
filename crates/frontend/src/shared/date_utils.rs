/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::DateTime;
use contracts::domain::common::Timestamp;

/// Format epoch seconds to DD.MM.YYYY HH:MM:SS (UTC)
/// Example: 1710511346 -> "15.03.2024 14:02:26"
pub fn format_timestamp(ts: Timestamp) -> String {
    i64::try_from(ts)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|dt| dt.format("%d.%m.%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

/// Same as [`format_timestamp`], rendering an absent timestamp as "-"
pub fn format_optional_timestamp(ts: Option<Timestamp>) -> String {
    ts.map(format_timestamp).unwrap_or_else(|| "-".to_string())
}
