// Session date formatting.
//
// Purpose
// - Turn a session's optional start and end timestamps into the range string shown in the
//   session selector and the course card date field.
//
// Boundaries
// - Pure and total. Malformed timestamps fall back to the raw (trimmed) text.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::modules::course_entitlements::core::session::Session;

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y";

pub fn format_date(raw: &str) -> String {
    let raw = raw.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.format(DISPLAY_FORMAT).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format(DISPLAY_FORMAT).to_string();
    }
    raw.to_string()
}

pub fn format_date_range(start_date: Option<&str>, end_date: Option<&str>) -> String {
    let start = start_date
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(format_date);
    let end = end_date
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(format_date);

    match (start, end) {
        (Some(start), Some(end)) => format!("{start} to {end}"),
        (Some(start), None) => format!("Starts {start}"),
        (None, Some(end)) => format!("Ends {end}"),
        (None, None) => String::new(),
    }
}

/// Recomputes `display_date_range` for every session. Timing fields are left untouched.
pub fn format_session_dates(sessions: Vec<Session>) -> Vec<Session> {
    sessions
        .into_iter()
        .map(|mut session| {
            session.display_date_range =
                format_date_range(session.start_date.as_deref(), session.end_date.as_deref());
            session
        })
        .collect()
}
