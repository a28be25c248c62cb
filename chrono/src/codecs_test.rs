#[cfg(test)]
mod tests {
  use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
  use rstest::rstest;

  use crate::settings::default_context;

  #[test]
  fn utc_datetime_round_trip() {
    let ctx = default_context();
    let value = Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap();
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(encoded, r#""2024-03-09T10:30:00Z""#);
    assert_eq!(ctx.from_json_str::<DateTime<Utc>>(&encoded).unwrap(), value);
  }

  #[test]
  fn utc_datetime_keeps_subseconds() {
    let ctx = default_context();
    let value = Utc.with_ymd_and_hms(2024, 3, 9, 10, 30, 0).unwrap() + chrono::Duration::milliseconds(250);
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(encoded, r#""2024-03-09T10:30:00.250Z""#);
    assert_eq!(ctx.from_json_str::<DateTime<Utc>>(&encoded).unwrap(), value);
  }

  #[test]
  fn offset_datetime_round_trip() {
    let ctx = default_context();
    let value = DateTime::parse_from_rfc3339("2024-03-09T10:30:00+09:00").unwrap();
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(encoded, r#""2024-03-09T10:30:00+09:00""#);
    assert_eq!(ctx.from_json_str::<DateTime<FixedOffset>>(&encoded).unwrap(), value);
  }

  #[test]
  fn naive_date_round_trip() {
    let ctx = default_context();
    let value = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(encoded, r#""2023-04-05""#);
    assert_eq!(ctx.from_json_str::<NaiveDate>(&encoded).unwrap(), value);
  }

  #[rstest]
  #[case("10:30:00", NaiveTime::from_hms_opt(10, 30, 0).unwrap())]
  #[case("23:59:59.250", NaiveTime::from_hms_milli_opt(23, 59, 59, 250).unwrap())]
  fn naive_time_round_trip(#[case] text: &str, #[case] value: NaiveTime) {
    let ctx = default_context();
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(encoded, format!("\"{text}\""));
    assert_eq!(ctx.from_json_str::<NaiveTime>(&encoded).unwrap(), value);
  }

  #[test]
  fn naive_datetime_round_trip() {
    let ctx = default_context();
    let value = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap().and_hms_opt(10, 30, 0).unwrap();
    let encoded = ctx.to_json_string(&value).unwrap();
    assert_eq!(encoded, r#""2023-04-05T10:30:00""#);
    assert_eq!(ctx.from_json_str::<NaiveDateTime>(&encoded).unwrap(), value);
  }

  #[rstest]
  #[case("null")]
  #[case(r#""""#)]
  fn optional_date_absent_tokens_read_as_none(#[case] input: &str) {
    let ctx = default_context();
    assert_eq!(ctx.from_json_str::<Option<NaiveDate>>(input).unwrap(), None);
  }

  #[rstest]
  #[case("null")]
  #[case(r#""""#)]
  fn non_optional_date_rejects_absent_tokens(#[case] input: &str) {
    let ctx = default_context();
    assert!(ctx.from_json_str::<NaiveDate>(input).unwrap_err().is_invalid_data());
  }

  #[test]
  fn unparsable_date_reports_invalid_data() {
    let ctx = default_context();
    let err = ctx.from_json_str::<NaiveDate>(r#""2023-13-40""#).unwrap_err();
    assert!(err.is_invalid_data(), "unexpected error: {err}");
  }

  #[test]
  fn optional_value_serializes_through_the_same_codec() {
    let ctx = default_context();
    let value = NaiveDate::from_ymd_opt(2023, 4, 5).unwrap();
    assert_eq!(ctx.to_json_string(&Some(value)).unwrap(), r#""2023-04-05""#);
    assert_eq!(ctx.to_json_string(&None::<NaiveDate>).unwrap(), "null");
  }
}
