//! Concrete codecs for the chrono value types.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};

use crate::format::FormatCodec;

/// `DateTime<Utc>` as RFC 3339 with a trailing `Z`.
pub fn utc_datetime() -> FormatCodec<DateTime<Utc>> {
  FormatCodec::new(
    |text| DateTime::parse_from_rfc3339(text).map(|parsed| parsed.with_timezone(&Utc)),
    |value| value.to_rfc3339_opts(SecondsFormat::AutoSi, true),
  )
}

/// `DateTime<FixedOffset>` as RFC 3339 with a numeric offset.
pub fn offset_datetime() -> FormatCodec<DateTime<FixedOffset>> {
  FormatCodec::new(DateTime::parse_from_rfc3339, |value| {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
  })
}

/// `NaiveDate` as `%Y-%m-%d`.
pub fn naive_date() -> FormatCodec<NaiveDate> {
  FormatCodec::new(
    |text| NaiveDate::parse_from_str(text, "%Y-%m-%d"),
    |value| value.format("%Y-%m-%d").to_string(),
  )
}

/// `NaiveTime` as `%H:%M:%S`, subseconds only when present.
pub fn naive_time() -> FormatCodec<NaiveTime> {
  FormatCodec::new(
    |text| NaiveTime::parse_from_str(text, "%H:%M:%S%.f"),
    |value| value.format("%H:%M:%S%.f").to_string(),
  )
}

/// `NaiveDateTime` as `%Y-%m-%dT%H:%M:%S`, subseconds only when present.
pub fn naive_datetime() -> FormatCodec<NaiveDateTime> {
  FormatCodec::new(
    |text| NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f"),
    |value| value.format("%Y-%m-%dT%H:%M:%S%.f").to_string(),
  )
}
