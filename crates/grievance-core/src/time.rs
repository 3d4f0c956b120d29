use crate::error::CoreError;
use chrono::{DateTime, Local, NaiveDate, Utc};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

fn to_local(ts: i64) -> DateTime<Local> {
    DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
        .with_timezone(&Local)
}

/// Calendar day (local time) a timestamp falls on, as the `YYYY-MM-DD` key
/// used for daily metrics rows.
pub fn local_date_key(ts: i64) -> String {
    to_local(ts).format(DATE_FORMAT).to_string()
}

pub fn format_timestamp_datetime(ts: i64) -> String {
    to_local(ts).format(DATETIME_FORMAT).to_string()
}

/// Validates a user supplied `YYYY-MM-DD` day and returns it normalized.
pub fn parse_date_key(input: &str) -> Result<String, CoreError> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(input.to_string()))?;
    Ok(date.format(DATE_FORMAT).to_string())
}
