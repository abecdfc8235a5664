use chrono::{DateTime, Utc};

/// Medium date-time pattern shared by every timestamp in a payload, e.g.
/// `Jan 5, 2024, 3:04:05 PM`. Always rendered in UTC.
pub const MEDIUM_DATE_TIME_PATTERN: &str = "%b %-d, %Y, %-I:%M:%S %p";

pub fn format_medium(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(MEDIUM_DATE_TIME_PATTERN).to_string()
}
