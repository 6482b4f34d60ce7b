use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::BookingError;

/// JSON body accepted by the create and update endpoints.
///
/// Dates arrive as strings so that a malformed value can be reported as an
/// input error instead of a generic deserialization failure. Anything else in
/// the body (`user`, `hotel`, ...) is ignored: ownership and hotel come from the
/// token and the path, never from the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[serde(default)]
    pub check_in_date: Option<String>,
    #[serde(default)]
    pub check_out_date: Option<String>,
}

/// Parsed stay dates. A `None` means the client did not supply the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StayDates {
    pub check_in: Option<DateTime<Utc>>,
    pub check_out: Option<DateTime<Utc>>,
}

impl BookingRequest {
    pub fn new(check_in_date: impl Into<String>, check_out_date: impl Into<String>) -> Self {
        Self {
            check_in_date: Some(check_in_date.into()),
            check_out_date: Some(check_out_date.into()),
        }
    }

    /// Parse the raw strings. Blank values count as absent; present values must be dates.
    pub fn parse(&self) -> Result<StayDates, BookingError> {
        Ok(StayDates {
            check_in: parse_date_field("checkInDate", self.check_in_date.as_deref())?,
            check_out: parse_date_field("checkOutDate", self.check_out_date.as_deref())?,
        })
    }
}

impl StayDates {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_none() && self.check_out.is_none()
    }
}

fn parse_date_field(field: &str, raw: Option<&str>) -> Result<Option<DateTime<Utc>>, BookingError> {
    let raw = match raw.map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    parse_date(raw)
        .map(Some)
        .ok_or_else(|| BookingError::invalid_input(format!("{} must be a valid date, got '{}'", field, raw)))
}

/// Accepts RFC 3339 timestamps, naive `YYYY-MM-DDTHH:MM:SS[.f]` (read as UTC) and plain `YYYY-MM-DD` dates.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_plain_dates_as_utc_midnight() {
        let dates = BookingRequest::new("2024-06-01", "2024-06-03").parse().unwrap();
        assert_eq!(dates.check_in, Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()));
        assert_eq!(dates.check_out, Some(Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap()));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_date("2024-06-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap());
        assert!(parse_date("2024-06-01T12:00:00.000Z").is_some());
        assert!(parse_date("2024-06-01T12:00:00").is_some());
    }

    #[test]
    fn blank_and_missing_fields_are_absent() {
        let req = BookingRequest {
            check_in_date: Some("  ".into()),
            check_out_date: None,
        };
        let dates = req.parse().unwrap();
        assert!(dates.is_empty());
    }

    #[test]
    fn malformed_date_is_invalid_input() {
        let err = BookingRequest::new("next tuesday", "2024-06-03").parse().unwrap_err();
        match err {
            BookingError::InvalidInput(msg) => assert!(msg.contains("checkInDate")),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn deserializes_camel_case_body() {
        let req: BookingRequest = serde_json::from_value(serde_json::json!({
            "checkInDate": "2024-06-01",
            "checkOutDate": "2024-06-02",
            "user": "someone-else"
        }))
        .unwrap();
        assert_eq!(req.check_in_date.as_deref(), Some("2024-06-01"));
        assert_eq!(req.check_out_date.as_deref(), Some("2024-06-02"));
    }
}
