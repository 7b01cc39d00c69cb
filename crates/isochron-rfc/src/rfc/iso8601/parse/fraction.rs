//! Fraction-of-second normalisation.

use isochron_core::constants::{MAX_FRACTION_DIGITS, NANOS_PER_SECOND};

use super::error::{ParseError, ParseResult};

/// Rescales a fraction of `digits` decimal digits to nanoseconds.
///
/// `.5` (value 5, one digit) becomes 500 000 000 and `.000000001` becomes 1.
///
/// ## Errors
/// Returns [`ParseError::Precision`] if the fraction has more than nine
/// digits or does not fit below one second.
pub fn normalize_fraction(value: u64, digits: u32) -> ParseResult<u32> {
    let scale = MAX_FRACTION_DIGITS
        .checked_sub(digits)
        .map(|exponent| 10u64.pow(exponent))
        .ok_or(ParseError::Precision)?;

    value
        .checked_mul(scale)
        .and_then(|nanos| u32::try_from(nanos).ok())
        .filter(|nanos| *nanos < NANOS_PER_SECOND)
        .ok_or(ParseError::Precision)
}
