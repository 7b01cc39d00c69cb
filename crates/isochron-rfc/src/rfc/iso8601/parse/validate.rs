//! Range validation of scanned fields.

use chrono::{Datelike, NaiveDate};

use super::error::{Element, ParseError, ParseResult};
use super::fraction::normalize_fraction;
use super::scanner::RawFields;
use crate::rfc::iso8601::core::CalendarFields;

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: u64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in `month` (1-12) of `year`.
#[must_use]
pub const fn days_in_month(month: u32, year: u64) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

fn check(input: &[u8], element: Element, given: u64, min: u32, max: u32) -> ParseResult<u32> {
    u32::try_from(given)
        .ok()
        .filter(|value| (min..=max).contains(value))
        .ok_or_else(|| ParseError::range(input, element, given, min.into(), max.into()))
}

/// Checks scanned fields against their calendar bounds and normalises the
/// fraction of a second.
///
/// The fraction is checked first, then month, day, hour, minute, second and
/// finally the year. The first failure is reported.
pub(crate) fn validate(raw: &RawFields, input: &[u8]) -> ParseResult<CalendarFields> {
    let nanosecond = normalize_fraction(raw.fraction, raw.fraction_digits)?;

    let month = check(input, Element::Month, raw.month, 1, 12)?;
    let day = check(
        input,
        Element::Day,
        raw.day,
        1,
        days_in_month(month, raw.year),
    )?;
    let hour = check(input, Element::Hour, raw.hour, 0, 23)?;
    let minute = check(input, Element::Minute, raw.minute, 0, 59)?;
    let second = check(input, Element::Second, raw.second, 0, 59)?;

    let max_year = NaiveDate::MAX.year();
    let year = i32::try_from(raw.year)
        .ok()
        .filter(|year| *year <= max_year)
        .ok_or_else(|| ParseError::range(input, Element::Year, raw.year, 0, max_year.into()))?;

    Ok(CalendarFields {
        year,
        month,
        day,
        hour,
        minute,
        second,
        nanosecond,
    })
}
