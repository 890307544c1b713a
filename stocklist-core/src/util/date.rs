use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::{Result, StockListError};

/// Today's date as YYYYMMDD in the local offset (UTC if the offset is unknown).
pub fn today_stamp() -> Result<String> {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    format_stamp(now.date())
}

pub fn format_stamp(d: Date) -> Result<String> {
    d.format(format_description!("[year][month][day]"))
        .map_err(|e| StockListError::Validation(format!("date format: {e}")))
}

/// Accepts only a real calendar date written as YYYYMMDD.
pub fn validate_stamp(s: &str) -> Result<String> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(StockListError::Validation(format!(
            "date must be YYYYMMDD, got {s:?}"
        )));
    }
    let d = Date::parse(s, format_description!("[year][month][day]"))
        .map_err(|e| StockListError::Validation(format!("invalid date {s:?}: {e}")))?;
    format_stamp(d)
}

/// Resolve the output date: the override when given, otherwise today.
pub fn resolve_stamp(date: Option<&str>) -> Result<String> {
    match date {
        Some(s) => validate_stamp(s),
        None => today_stamp(),
    }
}

/// Human readable mtime for log lines, in local time (UTC if the offset is unknown).
pub fn display_mtime(t: std::time::SystemTime) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    let dt = OffsetDateTime::from(t).to_offset(offset);
    let fmt = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    dt.format(fmt).unwrap_or_else(|_| format!("{dt}"))
}
