//! Date helper functions

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Relative time against the current clock (like "2 hours ago")
pub fn time_ago(past: &DateTime<Utc>) -> String {
    time_ago_at(past, &Utc::now())
}

/// Relative time of `past` as seen from `now`.
///
/// Months are 30 days and years 365 days, both counted from whole days.
/// Units are always plural. A `past` later than `now` reads "Just now".
pub fn time_ago_at(past: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(*past).num_seconds().max(0);
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;
    let months = days / 30;
    let years = days / 365;

    if seconds < 60 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{} minutes ago", minutes)
    } else if hours < 24 {
        format!("{} hours ago", hours)
    } else if days < 30 {
        format!("{} days ago", days)
    } else if months < 12 {
        format!("{} months ago", months)
    } else {
        format!("{} years ago", years)
    }
}

/// Parse a front-matter timestamp. Values without an offset are read as UTC.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M:%S%.f",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}

/// Text shown after "Published at": relative time, or the raw value when it
/// is not a timestamp
pub fn published_label(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(dt) => time_ago(&dt),
        None => raw.to_string(),
    }
}
