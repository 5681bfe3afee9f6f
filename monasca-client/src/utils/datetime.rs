//! Monasca timestamp handling.
//!
//! Query parameters and serialized bodies use the fixed second-precision
//! format `YYYY-MM-DDThh:mm:ssZ`. Responses are parsed leniently as RFC 3339
//! because the API emits millisecond fractions (`2015-03-05T20:33:45.000Z`).
//!
//! The `serialize`/`deserialize` pair is meant for
//! `#[serde(default, with = "crate::utils::datetime")]` on
//! `Option<DateTime<Utc>>` fields.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// `chrono` format string for the Monasca wire format.
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Render a timestamp as UTC with second precision.
pub fn format_time(dt: &DateTime<Utc>) -> String {
    dt.format(TIME_FORMAT).to_string()
}

/// Parse either the fixed wire format or any RFC 3339 timestamp.
pub fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, TIME_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Serialize `Option<DateTime<Utc>>` in the wire format.
#[allow(clippy::ref_option)]
pub fn serialize<S>(dt: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match dt {
        Some(dt) => serializer.serialize_some(&format_time(dt)),
        None => serializer.serialize_none(),
    }
}

/// Deserialize an optional timestamp; `null` and a missing field both become `None`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match Option::<String>::deserialize(deserializer)? {
        Some(s) => parse_time(&s)
            .map(Some)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        None => Ok(None),
    }
}
