//! Wire Formats
//!
//! Request bodies and raw response shapes. The backend is inconsistent about
//! snake_case vs camelCase, so every response is decoded here once and
//! normalised into the types from `crate::models`.

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{Booking, Session};

// ========================
// Request Bodies
// ========================

#[derive(Debug, Serialize)]
pub struct AuthCheckBody<'a> {
    pub token: &'a str,
}

#[derive(Debug, Serialize)]
pub struct CreateBookingBody<'a> {
    pub token: &'a str,
    pub start_time: String,
    pub end_time: String,
}

// ========================
// Response Shapes
// ========================

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "userId")]
    user_id_camel: Option<i64>,
    user_id: Option<i64>,
    #[serde(default)]
    username: Option<String>,
}

impl AuthResponse {
    pub fn into_session(self) -> Result<Session, ApiError> {
        let user_id = self
            .user_id_camel
            .or(self.user_id)
            .ok_or_else(|| ApiError::Decode("auth response without user id".to_string()))?;

        Ok(Session {
            token: self.token,
            user_id,
            username: self.username.unwrap_or_default(),
        })
    }
}

/// `{ "bookings": [...] }`; a missing or null list means no bookings.
/// Entries are decoded one by one so a malformed record only drops itself.
#[derive(Debug, Default, Deserialize)]
pub struct BookingList {
    #[serde(default)]
    bookings: Option<Vec<serde_json::Value>>,
}

impl BookingList {
    pub fn into_bookings(self) -> Vec<Booking> {
        self.bookings
            .unwrap_or_default()
            .into_iter()
            .filter_map(|raw| match serde_json::from_value::<BookingRecord>(raw) {
                Ok(record) => Some(Booking::from(record)),
                Err(e) => {
                    log::warn!("[API] Skipping malformed booking record: {}", e);
                    None
                }
            })
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct BookingRecord {
    id: i64,
    user_id: Option<i64>,
    #[serde(rename = "userId")]
    user_id_camel: Option<i64>,
    start_time: Option<String>,
    #[serde(rename = "startTime")]
    start_time_camel: Option<String>,
    end_time: Option<String>,
    #[serde(rename = "endTime")]
    end_time_camel: Option<String>,
}

impl From<BookingRecord> for Booking {
    fn from(raw: BookingRecord) -> Self {
        let start = raw.start_time.or(raw.start_time_camel);
        let end = raw.end_time.or(raw.end_time_camel);
        Booking {
            id: raw.id,
            owner_user_id: raw.user_id.or(raw.user_id_camel),
            start_time: start.as_deref().and_then(parse_timestamp),
            end_time: end.as_deref().and_then(parse_timestamp),
        }
    }
}

/// Create response; the id arrives under one of three names
#[derive(Debug, Deserialize)]
pub struct CreatedBooking {
    #[serde(rename = "bookingId")]
    booking_id_camel: Option<i64>,
    booking_id: Option<i64>,
    id: Option<i64>,
}

impl CreatedBooking {
    pub fn into_id(self) -> Result<i64, ApiError> {
        self.booking_id_camel
            .or(self.booking_id)
            .or(self.id)
            .ok_or_else(|| ApiError::Decode("create response without booking id".to_string()))
    }
}

// ========================
// Timestamps
// ========================

/// Offset formats RFC 3339 is too strict for (seconds left out)
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M%#z", "%Y-%m-%d %H:%M%#z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parses a backend timestamp. Values without an offset are local time,
/// the same way a browser `Date` reads them.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_accepts_both_user_id_spellings() {
        let snake: AuthResponse =
            serde_json::from_str(r#"{"token":"T1","user_id":7,"username":"alice"}"#).unwrap();
        let camel: AuthResponse =
            serde_json::from_str(r#"{"token":"T1","userId":7,"username":"alice"}"#).unwrap();

        assert_eq!(snake.into_session().unwrap().user_id, 7);
        assert_eq!(camel.into_session().unwrap().user_id, 7);
    }

    #[test]
    fn test_auth_without_user_id_is_decode_error() {
        let raw: AuthResponse = serde_json::from_str(r#"{"token":"T1"}"#).unwrap();
        assert!(matches!(raw.into_session(), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_booking_list_missing_field_is_empty() {
        let list: BookingList = serde_json::from_str("{}").unwrap();
        assert!(list.into_bookings().is_empty());

        let list: BookingList = serde_json::from_str(r#"{"bookings":null}"#).unwrap();
        assert!(list.into_bookings().is_empty());
    }

    #[test]
    fn test_booking_record_camel_case() {
        let list: BookingList = serde_json::from_str(
            r#"{"bookings":[{"id":3,"userId":9,"startTime":"2024-01-01T10:00:00Z","endTime":"garbage"}]}"#,
        )
        .unwrap();
        let bookings = list.into_bookings();

        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].owner_user_id, Some(9));
        assert_eq!(
            bookings[0].start_time,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(bookings[0].end_time, None);
    }

    #[test]
    fn test_malformed_record_only_drops_itself() {
        let list: BookingList = serde_json::from_str(
            r#"{"bookings":[{"id":1,"user_id":3},{"user_id":3},{"id":"x"},{"id":2}]}"#,
        )
        .unwrap();
        let ids: Vec<i64> = list.into_bookings().iter().map(|b| b.id).collect();

        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_created_id_precedence() {
        let created: CreatedBooking =
            serde_json::from_str(r#"{"id":1,"booking_id":2,"bookingId":3}"#).unwrap();
        assert_eq!(created.into_id().unwrap(), 3);

        let created: CreatedBooking = serde_json::from_str(r#"{"id":42}"#).unwrap();
        assert_eq!(created.into_id().unwrap(), 42);
    }

    #[test]
    fn test_parse_timestamp_variants() {
        assert_eq!(
            parse_timestamp("2024-01-01T12:00:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2024-01-01T10:00Z"),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(
            parse_timestamp("2024-01-01T12:00+02:00"),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
        assert!(parse_timestamp("2024-01-01T10:00:00").is_some());
        assert!(parse_timestamp("2024-01-01 10:00").is_some());
        assert_eq!(parse_timestamp("not a date"), None);
        assert_eq!(parse_timestamp(""), None);
    }
}
