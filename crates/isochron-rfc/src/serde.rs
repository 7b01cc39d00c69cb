//! Serde support for [`Instant`].
//!
//! `Instant` serializes as an RFC3339 string at nanosecond precision and
//! deserializes from any string the scanner accepts. `Option<Instant>` maps
//! to `null` when absent.
//!
//! For a different precision on a single field, use one of the modules here
//! with `#[serde(with = "...")]`:
//!
//! ```rust
//! use isochron_rfc::rfc::iso8601::Instant;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Event {
//!     #[serde(with = "isochron_rfc::serde::millis")]
//!     created: Instant,
//!     updated: Option<Instant>,
//! }
//! ```

use std::fmt;

use ::serde::de::{self, Visitor};
use ::serde::{Deserialize, Deserializer, Serialize, Serializer, ser};

use crate::rfc::iso8601::{Instant, Precision, encode, parse_datetime, parse_str};

fn serialize_at<S: Serializer>(
    instant: Instant,
    precision: Precision,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let text = encode(instant, precision).map_err(<S::Error as ser::Error>::custom)?;
    serializer.serialize_str(&text)
}

struct InstantVisitor;

impl Visitor<'_> for InstantVisitor {
    type Value = Instant;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an ISO8601 date-time string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        parse_str(value).map_err(E::custom)
    }

    fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
        parse_datetime(value).map_err(E::custom)
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_at(*self, Precision::Nanos, serializer)
    }
}

impl<'de> Deserialize<'de> for Instant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(InstantVisitor)
    }
}

/// Whole seconds: `2017-04-26T11:13:04Z`.
pub mod seconds {
    use super::{Deserialize, Deserializer, Instant, Precision, Serializer, serialize_at};

    /// ## Errors
    /// Fails if the year is outside 0-9999.
    pub fn serialize<S: Serializer>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_at(*instant, Precision::Seconds, serializer)
    }

    /// ## Errors
    /// Fails if the value is not a valid date-time string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        Instant::deserialize(deserializer)
    }
}

/// Milliseconds: `2017-04-26T11:13:04.123Z`.
pub mod millis {
    use super::{Deserialize, Deserializer, Instant, Precision, Serializer, serialize_at};

    /// ## Errors
    /// Fails if the year is outside 0-9999.
    pub fn serialize<S: Serializer>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_at(*instant, Precision::Millis, serializer)
    }

    /// ## Errors
    /// Fails if the value is not a valid date-time string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        Instant::deserialize(deserializer)
    }
}

/// Microseconds: `2017-04-26T11:13:04.123456Z`.
pub mod micros {
    use super::{Deserialize, Deserializer, Instant, Precision, Serializer, serialize_at};

    /// ## Errors
    /// Fails if the year is outside 0-9999.
    pub fn serialize<S: Serializer>(instant: &Instant, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_at(*instant, Precision::Micros, serializer)
    }

    /// ## Errors
    /// Fails if the value is not a valid date-time string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Instant, D::Error> {
        Instant::deserialize(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use ::serde::{Deserialize, Serialize};

    use crate::rfc::iso8601::{Instant, decode};

    #[derive(Debug, Serialize, Deserialize)]
    struct Response {
        ptr: Option<Instant>,
        nptr: Instant,
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::serde::millis")]
        created: Instant,
        #[serde(with = "crate::serde::seconds")]
        day: Instant,
    }

    #[test]
    fn deserialize_struct() {
        let resp: Response = serde_json::from_str(
            r#"{"ptr": "2017-04-26T11:13:04+01:00", "nptr": "2017-04-26T11:13:04+01:00"}"#,
        )
        .unwrap();

        let ptr = resp.ptr.unwrap();
        assert_eq!(ptr.year(), 2017);
        assert_eq!(ptr.day(), 26);
        assert_eq!(ptr.second(), 4);
        assert_eq!(resp.nptr, ptr);
    }

    #[test]
    fn deserialize_null_option() {
        let resp: Response =
            serde_json::from_str(r#"{"ptr": null, "nptr": "0001-01-01"}"#).unwrap();
        assert!(resp.ptr.is_none());
        assert_eq!(resp.nptr.year(), 1);
    }

    #[test]
    fn deserialize_rejects_number() {
        assert!(serde_json::from_str::<Instant>("123").is_err());
    }

    #[test]
    fn deserialize_reports_parse_error() {
        let err = serde_json::from_str::<Instant>(r#""2019-02-29""#).unwrap_err();
        assert!(err.to_string().contains("day 29 is not in range 1-28"));
    }

    #[test]
    fn serialize_nanos_by_default() {
        let instant = decode("2017-04-26T11:13:04.123456789Z").unwrap();
        assert_eq!(
            serde_json::to_string(&instant).unwrap(),
            r#""2017-04-26T11:13:04.123456789Z""#
        );
    }

    #[test]
    fn serialize_with_field_precision() {
        let instant = decode("2017-04-26T11:13:04.123456789Z").unwrap();
        let stamped = Stamped {
            created: instant,
            day: instant,
        };

        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"created":"2017-04-26T11:13:04.123Z","day":"2017-04-26T11:13:04Z"}"#
        );
    }

    #[test]
    fn serialize_rejects_out_of_range_year() {
        let instant = decode("10000-01-01").unwrap();
        assert!(serde_json::to_string(&instant).is_err());
    }

    #[test]
    fn round_trip_through_json() {
        let instant = decode("2017-04-26T11:13:04.5-07:00").unwrap();
        let json = serde_json::to_string(&instant).unwrap();
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instant);
        assert_eq!(back.offset_seconds(), -7 * 3600);
    }
}
