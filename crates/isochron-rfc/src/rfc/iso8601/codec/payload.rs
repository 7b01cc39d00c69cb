//! Payload decoding.

use isochron_core::types::Precision;

use super::error::{CodecError, CodecResult};
use crate::rfc::iso8601::build::encode_into;
use crate::rfc::iso8601::core::Instant;
use crate::rfc::iso8601::parse::{ParseResult, parse_datetime, parse_str};

const NULL: &[u8] = b"null";
const QUOTE: u8 = b'"';

/// Decodes RFC3339 text.
///
/// ## Errors
/// Returns the scanner's [`ParseError`](crate::rfc::iso8601::parse::ParseError).
pub fn decode(text: &str) -> ParseResult<Instant> {
    parse_str(text)
}

/// Decodes a JSON-style payload.
///
/// `null` decodes to `None`. A value wrapped in double quotes is unquoted and
/// scanned; the interior is not unescaped.
///
/// ## Errors
/// - [`CodecError::NotString`] for any other payload shape; the scanner is
///   not run.
/// - [`CodecError::Parse`] if the quoted text is not a valid date-time.
pub fn decode_payload(payload: &[u8]) -> CodecResult<Option<Instant>> {
    if payload == NULL {
        return Ok(None);
    }

    match payload {
        [QUOTE, inner @ .., QUOTE] => Ok(Some(parse_datetime(inner)?)),
        _ => Err(CodecError::NotString),
    }
}

/// Decodes a payload into an existing value.
///
/// `null` leaves `dest` unchanged, as does any error.
///
/// ## Errors
/// See [`decode_payload`].
pub fn decode_payload_into(dest: &mut Instant, payload: &[u8]) -> CodecResult<()> {
    if let Some(instant) = decode_payload(payload)? {
        *dest = instant;
    }
    Ok(())
}

/// Encodes `instant` as a quoted payload at the given precision.
///
/// ## Errors
/// Returns [`CodecError::YearOutOfRange`] if the year is outside 0-9999.
pub fn encode_payload(instant: Instant, precision: Precision) -> CodecResult<String> {
    let mut out = String::with_capacity(40);
    out.push(char::from(QUOTE));
    encode_into(instant, precision, &mut out)?;
    out.push(char::from(QUOTE));
    Ok(out)
}
