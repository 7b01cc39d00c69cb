//! Encode/decode round-trip tests.
//!
//! These verify that rendering and re-parsing an instant keeps every field at
//! the chosen precision and drops nothing else.

use super::fixtures::ROUND_TRIP_VALUES;
use crate::rfc::iso8601::{Instant, Precision, decode, decode_payload, encode, encode_payload};

fn instant(input: &str) -> Instant {
    decode(input).unwrap_or_else(|e| panic!("{input}: {e}"))
}

/// Encode, decode, and compare the wall-clock fields and offset.
fn round_trip(value: Instant, precision: Precision) -> Result<Instant, String> {
    let text = encode(value, precision).map_err(|e| format!("encode failed: {e}"))?;
    let back = decode(&text).map_err(|e| format!("decode of {text} failed: {e}"))?;

    if back.offset_seconds() != value.offset_seconds() {
        return Err(format!(
            "offset mismatch: {} vs {}",
            back.offset_seconds(),
            value.offset_seconds()
        ));
    }

    let expected = value.truncate(precision);
    if back.fields() != expected.fields() {
        return Err(format!(
            "field mismatch for {text}: {:?} vs {:?}",
            back.fields(),
            expected.fields()
        ));
    }

    Ok(back)
}

#[test]
fn round_trip_full_precision_is_exact() {
    for input in ROUND_TRIP_VALUES {
        let value = instant(input);
        let back = round_trip(value, Precision::Nanos).expect("round trip should succeed");
        assert_eq!(back, value, "{input}");
        assert_eq!(back.fields(), value.fields(), "{input}");
    }
}

#[test]
fn round_trip_reduced_precision_truncates() {
    for input in ROUND_TRIP_VALUES {
        let value = instant(input);
        for precision in [Precision::Seconds, Precision::Millis, Precision::Micros] {
            let back = round_trip(value, precision).expect("round trip should succeed");
            assert_eq!(
                back.nanosecond() % precision.resolution_nanos(),
                0,
                "{input} at {precision}"
            );
        }
    }
}

#[test]
fn round_trip_millis_keeps_milliseconds() {
    let value = instant("2017-04-26T11:13:04.123456789Z");
    let back = round_trip(value, Precision::Millis).unwrap();
    assert_eq!(back.nanosecond(), 123_000_000);
    assert_eq!(back, value.truncate(Precision::Millis));
    assert_ne!(back, value);
}

#[test]
fn encode_is_idempotent() {
    for input in ROUND_TRIP_VALUES {
        let value = instant(input);
        for precision in Precision::ALL {
            let once = encode(value, precision).unwrap();
            let twice = encode(decode(&once).unwrap(), precision).unwrap();
            assert_eq!(once, twice, "{input} at {precision}");
        }
    }
}

#[test]
fn truncate_before_encode_gives_exact_round_trip() {
    let value = instant("2017-04-26T11:13:04.123456789+02:00");
    for precision in Precision::ALL {
        let truncated = value.truncate(precision);
        let back = decode(&encode(truncated, precision).unwrap()).unwrap();
        assert_eq!(back, truncated, "{precision}");
    }
}

#[test]
fn payload_round_trip() {
    let value = instant("2017-04-26T11:13:04.123456789-03:00");
    let payload = encode_payload(value, Precision::Micros).unwrap();
    let back = decode_payload(payload.as_bytes()).unwrap().unwrap();
    assert_eq!(back, value.truncate(Precision::Micros));
}

#[test]
fn reparse_current_time() {
    let now = Instant::from(chrono::Utc::now());
    let back = decode(&now.to_string()).unwrap();
    assert_eq!(back, now);
}

/// `+hhmm`, `+hhmmss` or `Z`, the compact spelling of an offset.
fn basic_offset(seconds: i32) -> String {
    if seconds == 0 {
        return "Z".to_string();
    }
    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.unsigned_abs();
    let (hours, minutes, secs) = (magnitude / 3600, magnitude / 60 % 60, magnitude % 60);
    if secs == 0 {
        format!("{sign}{hours:02}{minutes:02}")
    } else {
        format!("{sign}{hours:02}{minutes:02}{secs:02}")
    }
}

#[test]
fn fraction_and_zone_spellings() {
    let zones = [
        ("Z", 0),
        ("+01", 3600),
        ("+0130", 5400),
        ("+01:30", 5400),
        ("-013015", -5415),
        ("-01:30:15", -5415),
        ("-01:3015", -5415),
        ("\u{2212}0130", -5400),
        ("+23:59:59", 86_399),
    ];
    let fraction = "123456789";

    for digits in 0..=fraction.len() {
        let (text, nanos) = if digits == 0 {
            (String::new(), 0)
        } else {
            let padded = format!("{:0<9}", &fraction[..digits]);
            (format!(".{}", &fraction[..digits]), padded.parse::<u32>().unwrap())
        };

        for (zone, offset) in zones {
            let input = format!("2024-02-29T23:59:59{text}{zone}");
            let value = decode(&input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert_eq!(value.nanosecond(), nanos, "{input}");
            assert_eq!(value.offset_seconds(), offset, "{input}");
            assert_eq!((value.month(), value.day(), value.second()), (2, 29, 59), "{input}");

            for precision in Precision::ALL {
                let back = round_trip(value, precision).unwrap_or_else(|e| panic!("{input}: {e}"));
                assert_eq!(back, value.truncate(precision), "{input} at {precision}");
            }
        }
    }
}

quickcheck::quickcheck! {
    fn prop_full_precision_round_trip(value: Instant) -> bool {
        round_trip(value, Precision::Nanos)
            .is_ok_and(|back| back == value && back.fields() == value.fields())
    }

    fn prop_reduced_precision_truncates(value: Instant) -> bool {
        Precision::ALL.into_iter().all(|precision| {
            round_trip(value, precision).is_ok_and(|back| back == value.truncate(precision))
        })
    }

    fn prop_encode_is_idempotent(value: Instant) -> bool {
        Precision::ALL.into_iter().all(|precision| {
            let Ok(once) = encode(value, precision) else {
                return false;
            };
            decode(&once)
                .ok()
                .and_then(|back| encode(back, precision).ok())
                .is_some_and(|twice| twice == once)
        })
    }

    fn prop_compact_spelling_decodes_same(value: Instant) -> bool {
        let text = format!(
            "{}{}",
            value.as_datetime().naive_local().format("%Y-%m-%dT%H:%M:%S%.f"),
            basic_offset(value.offset_seconds())
        );
        decode(&text).is_ok_and(|back| {
            back == value
                && back.offset_seconds() == value.offset_seconds()
                && back.fields() == value.fields()
        })
    }

    fn prop_encoding_is_rfc3339(value: Instant) -> quickcheck::TestResult {
        // RFC3339 offsets carry no seconds.
        if value.offset_seconds() % 60 != 0 {
            return quickcheck::TestResult::discard();
        }
        let parsed = encode(value, Precision::Nanos)
            .ok()
            .and_then(|text| chrono::DateTime::parse_from_rfc3339(&text).ok());
        quickcheck::TestResult::from_bool(parsed.is_some_and(|parsed| {
            parsed == *value.as_datetime() && parsed.offset() == value.as_datetime().offset()
        }))
    }
}
