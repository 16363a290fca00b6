/// Day counting between two calendar dates
use chrono::NaiveDate;

use crate::error::{Result, TkdError};

const INPUT_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), INPUT_FORMAT)
        .map_err(|_| TkdError::InvalidDate(value.to_string()))
}

/// Absolute number of whole days between two `YYYY-MM-DD` dates
pub fn days_between(start: &str, end: &str) -> Result<u32> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;

    let days = end.signed_duration_since(start).num_days().unsigned_abs();
    // NaiveDate spans far less than u32::MAX days
    Ok(u32::try_from(days).unwrap_or(u32::MAX))
}

/// Render a date as dd/mm/yyyy
pub fn format_display_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
