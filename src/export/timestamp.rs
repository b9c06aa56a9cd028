use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::ExportError;

/// Report display format: month/day and 24-hour time, no year or seconds
pub const DISPLAY_FORMAT: &str = "%m/%d %H:%M";

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

/// Parse an ISO-8601 timestamp as stored in the job store
///
/// A trailing `Z` or a `±HH:MM` offset is accepted but not applied: the
/// result is the wall-clock time exactly as written. A bare date means
/// midnight.
pub fn parse_timestamp(value: &str) -> Result<NaiveDateTime, ExportError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }

    let naive = trimmed
        .strip_suffix('Z')
        .or_else(|| trimmed.strip_suffix('z'))
        .unwrap_or(trimmed);

    let mut first_err = None;
    for format in NAIVE_FORMATS {
        match NaiveDateTime::parse_from_str(naive, format) {
            Ok(dt) => return Ok(dt),
            Err(e) => {
                first_err.get_or_insert(e);
            }
        }
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(trimmed, format) {
            return Ok(dt.naive_local());
        }
    }

    match NaiveDate::parse_from_str(naive, "%Y-%m-%d") {
        Ok(date) => Ok(date.and_time(NaiveTime::MIN)),
        Err(e) => Err(ExportError::Timestamp {
            value: value.to_string(),
            source: first_err.unwrap_or(e),
        }),
    }
}

/// Render an optional stored timestamp for the report
///
/// Missing and empty values become an empty field.
pub fn display_timestamp(value: Option<&str>) -> Result<String, ExportError> {
    match value.map(str::trim) {
        None | Some("") => Ok(String::new()),
        Some(s) => Ok(parse_timestamp(s)?.format(DISPLAY_FORMAT).to_string()),
    }
}
