//! Timestamp normalisation for form input.
//!
//! Browsers submit `datetime-local` values without an offset. They are read in
//! the server's local zone and sent to the backend as UTC with millisecond
//! precision, e.g. `2024-01-01T10:00:00.000Z`.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use thiserror::Error;

const LOCAL_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

/// Form time value that cannot be turned into a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("unrecognised timestamp '{0}'")]
    Unrecognised(String),

    #[error("local time '{0}' does not exist in this time zone")]
    NonexistentLocal(String),
}

/// Normalise a form time in the server's local time zone.
pub fn normalize_time(raw: &str) -> Result<String, TimeError> {
    normalize_time_in(raw, &Local)
}

/// Normalise a form time, reading offset-less values in `tz`.
///
/// Empty input stays empty. Whitespace is not trimmed, so a blank value is
/// rejected like any other unparseable one.
pub fn normalize_time_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Result<String, TimeError> {
    if raw.is_empty() {
        return Ok(String::new());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(to_iso(dt.with_timezone(&Utc)));
    }

    if let Some(naive) = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        let local = tz
            .from_local_datetime(&naive)
            .earliest()
            .ok_or_else(|| TimeError::NonexistentLocal(raw.to_string()))?;
        return Ok(to_iso(local.with_timezone(&Utc)));
    }

    // Date-only values are UTC midnight, not local midnight.
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(to_iso(midnight.and_utc()));
        }
    }

    Err(TimeError::Unrecognised(raw.to_string()))
}

fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
