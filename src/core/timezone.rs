use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::core::{AppError, Result};

/// Asia/Manila, where the school's forms are filled in
pub const DEFAULT_OFFSET_HOURS: i32 = 8;

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Builds the fixed offset forms are interpreted in
pub fn local_offset(offset_hours: i32) -> Result<FixedOffset> {
    FixedOffset::east_opt(offset_hours * 3600).ok_or_else(|| {
        AppError::Configuration(format!("Invalid timezone offset: {} hours", offset_hours))
    })
}

/// Today's calendar date at the given offset
pub fn local_today(offset: FixedOffset) -> NaiveDate {
    Utc::now().with_timezone(&offset).date_naive()
}

/// Parses a timestamp typed into a payment form.
///
/// Accepts RFC 3339, `datetime-local` style values and bare dates (taken as
/// local midnight). Values without an offset are read in `offset`.
pub fn parse_form_timestamp(raw: &str, offset: FixedOffset) -> Result<DateTime<Utc>> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(AppError::validation("Payment timestamp is required"));
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| AppError::validation(format!("Invalid payment timestamp: {}", value)))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| AppError::validation(format!("Invalid payment timestamp: {}", value)))
}
