/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, NaiveDate, Utc};

/// Format a date as DD/MM/YYYY
/// Example: 2024-03-15 -> "15/03/2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Format a UTC timestamp as DD/MM/YYYY HH:MM
pub fn format_datetime(datetime: DateTime<Utc>) -> String {
    datetime.format("%d/%m/%Y %H:%M").to_string()
}

/// Empty for a missing timestamp
pub fn format_optional_datetime(datetime: Option<DateTime<Utc>>) -> String {
    datetime.map(format_datetime).unwrap_or_default()
}

/// Parse the value of an `<input type="date">` (yyyy-mm-dd); empty or
/// malformed input is `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Value for an `<input type="date">`
pub fn date_input_value(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
