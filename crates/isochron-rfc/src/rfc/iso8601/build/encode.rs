//! Precision-controlled RFC3339 rendering.

use std::fmt::{self, Write};

use isochron_core::constants::{MAX_OUTPUT_YEAR, MIN_OUTPUT_YEAR};
use isochron_core::types::Precision;

use crate::rfc::iso8601::codec::{CodecError, CodecResult};
use crate::rfc::iso8601::core::Instant;

/// Longest output: `YYYY-MM-DDThh:mm:ss.nnnnnnnnn+hh:mm:ss`.
const MAX_ENCODED_LEN: usize = 38;

/// Writes `instant` without checking the year range.
pub(crate) fn write_layout<W: Write>(out: &mut W, instant: Instant, precision: Precision) -> fmt::Result {
    write!(
        out,
        "{}",
        instant.as_datetime().naive_local().format(precision.format())
    )?;
    write_offset(out, instant.offset_seconds())
}

/// `Z` for UTC, otherwise `±hh:mm`, with `:ss` only when the offset has a
/// seconds part.
fn write_offset<W: Write>(out: &mut W, seconds: i32) -> fmt::Result {
    if seconds == 0 {
        return out.write_char('Z');
    }

    let sign = if seconds < 0 { '-' } else { '+' };
    let magnitude = seconds.unsigned_abs();
    let hours = magnitude / 3600;
    let minutes = magnitude / 60 % 60;
    let secs = magnitude % 60;

    write!(out, "{sign}{hours:02}:{minutes:02}")?;
    if secs != 0 {
        write!(out, ":{secs:02}")?;
    }
    Ok(())
}

/// Renders `instant` as RFC3339 text at the given precision.
///
/// Fraction digits beyond `precision` are truncated, not rounded; use
/// [`Instant::round`] first for rounding.
///
/// The fraction is fixed-width: `Millis`, `Micros` and `Nanos` always write
/// 3, 6 and 9 digits, keeping trailing zeros (`.500`, `.000`). This differs
/// from Go's `.999`-style layouts (`time.RFC3339Nano`), which drop trailing
/// zeros and omit a zero fraction entirely. Both forms decode to the same
/// instant.
///
/// ## Errors
/// Returns [`CodecError::YearOutOfRange`] if the year is outside 0-9999.
pub fn encode(instant: Instant, precision: Precision) -> CodecResult<String> {
    let mut out = String::with_capacity(MAX_ENCODED_LEN);
    encode_into(instant, precision, &mut out)?;
    Ok(out)
}

/// Appends the RFC3339 rendering of `instant` to `out`.
///
/// `out` is left untouched on error.
///
/// ## Errors
/// Returns [`CodecError::YearOutOfRange`] if the year is outside 0-9999.
pub fn encode_into(instant: Instant, precision: Precision, out: &mut String) -> CodecResult<()> {
    let year = instant.year();
    if !(MIN_OUTPUT_YEAR..=MAX_OUTPUT_YEAR).contains(&year) {
        return Err(CodecError::YearOutOfRange { year });
    }

    write_layout(out, instant, precision)?;
    Ok(())
}
