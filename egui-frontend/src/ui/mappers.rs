//! Display mappers: turn stored values into the strings the UI renders.

use chrono::NaiveDate;
use shared::TrackerConfig;

/// Format a monetary amount with the configured currency symbol and two
/// decimal places
pub fn format_currency(amount: f64, config: &TrackerConfig) -> String {
    format!("{}{:.2}", config.currency_symbol, amount)
}

/// Format a stored YYYY-MM-DD date for display (e.g. "Mar 01, 2024").
/// Unparseable values are shown as stored.
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%b %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// The stored form of a calendar date
pub fn storage_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a stored date back into a calendar date
pub fn parse_storage_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
