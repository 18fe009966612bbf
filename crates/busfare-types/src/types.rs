//! Boundary value types shared across crates

use chrono::{DateTime, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A date as it arrives from outside the calculation core.
///
/// Stored documents carry either an ISO string or a seconds-since-epoch
/// timestamp. Both are normalised to a [`NaiveDate`] once, here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum DateValue {
    Iso(String),
    EpochSeconds(i64),
}

impl DateValue {
    /// Parse free-form user input: an integer is epoch seconds, anything else is ISO.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.parse::<i64>() {
            Ok(secs) => DateValue::EpochSeconds(secs),
            Err(_) => DateValue::Iso(trimmed.to_string()),
        }
    }

    /// Normalise to a calendar date (UTC for timestamps).
    pub fn to_date(&self) -> Result<NaiveDate> {
        match self {
            DateValue::Iso(s) => parse_iso_date(s),
            DateValue::EpochSeconds(secs) => DateTime::from_timestamp(*secs, 0)
                .map(|dt| dt.date_naive())
                .ok_or_else(|| Error::InvalidDate(secs.to_string())),
        }
    }
}

fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    let formats = ["%Y-%m-%d", "%Y/%m/%d", "%d-%m-%Y"];
    for fmt in formats {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(date);
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    Err(Error::InvalidDate(s.to_string()))
}

/// Parse a time of day given as `HH:MM` or `HH:MM:SS`
pub fn parse_time_of_day(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
        .map_err(|_| Error::InvalidTime(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_iso() {
        let value = DateValue::parse("2025-01-02");
        assert_eq!(value, DateValue::Iso("2025-01-02".to_string()));
        assert_eq!(
            value.to_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
        );
    }

    #[test]
    fn test_parse_rfc3339() {
        let date = DateValue::parse("2025-03-10T08:30:00+05:30").to_date().unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    }

    #[test]
    fn test_epoch_seconds() {
        // 2025-01-01T00:00:00Z
        let value = DateValue::parse("1735689600");
        assert_eq!(value, DateValue::EpochSeconds(1_735_689_600));
        assert_eq!(
            value.to_date().unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_invalid_date() {
        let result = DateValue::parse("next tuesday").to_date();
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }

    #[test]
    fn test_time_of_day() {
        assert_eq!(
            parse_time_of_day("23:00").unwrap(),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap()
        );
        assert_eq!(
            parse_time_of_day(" 04:59:30 ").unwrap(),
            NaiveTime::from_hms_opt(4, 59, 30).unwrap()
        );
        assert!(matches!(parse_time_of_day("11pm"), Err(Error::InvalidTime(_))));
        assert!(matches!(parse_time_of_day("24:00"), Err(Error::InvalidTime(_))));
    }

    #[test]
    fn test_tagged_json() {
        let json = serde_json::to_string(&DateValue::EpochSeconds(10)).unwrap();
        assert_eq!(json, r#"{"kind":"epochSeconds","value":10}"#);
        let back: DateValue =
            serde_json::from_str(r#"{"kind":"iso","value":"2025-01-01"}"#).unwrap();
        assert_eq!(back, DateValue::Iso("2025-01-01".to_string()));
    }
}
