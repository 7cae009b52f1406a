/// Utilities for date parsing and formatting
///
/// Backend dates travel as ISO `YYYY-MM-DD` (optionally with a time part);
/// the UI shows them as `DD-MM-YYYY`.
use chrono::{NaiveDate, Utc};

/// Parse an ISO date, ignoring any time part
pub fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let date_part = s.trim().split('T').next().unwrap_or("");
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Format ISO date string to DD-MM-YYYY; unparseable input is returned as is
/// Example: "2024-03-15T14:02:26Z" -> "15-03-2024"
pub fn format_date(s: &str) -> String {
    match parse_iso_date(s) {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => s.to_string(),
    }
}

/// Today as an ISO date, used to prefill new documents
pub fn today_iso() -> String {
    Utc::now().date_naive().format("%Y-%m-%d").to_string()
}
