//! Timestamp presentation.
//!
//! Provider timestamps are ISO 8601 with a `+09:00` offset. They are shown
//! in their own offset as `YYYY/MM/DD HH:MM`, so the result does not depend
//! on the machine's time zone. Input that does not parse is returned as is.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

const DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Formats `raw` as `YYYY/MM/DD HH:MM`, or returns it unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let input = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return dt.format(DISPLAY_FORMAT).to_string();
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.format(DISPLAY_FORMAT).to_string();
        }
    }

    trace!("Leaving unparseable timestamp as is: {:?}", raw);
    raw.to_string()
}
