//! Single-pass date-time scanner.
//!
//! The scanner walks the input once, left to right, accumulating the digits
//! of one field at a time. Delimiters close the open field and move the
//! cursor forward; the cursor never moves back. A sign after the date hands
//! the rest of the input to the zone parser.

use chrono::{Datelike, NaiveDate};

use super::error::{Element, ParseError, ParseResult};
use super::validate::validate;
use super::zone::{parse_zone, starts_with_sign};
use crate::rfc::iso8601::core::{Instant, ZoneOffset};

/// Field currently accumulating digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum ScanCursor {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
}

impl ScanCursor {
    const fn next(self) -> Self {
        match self {
            Self::Year => Self::Month,
            Self::Month => Self::Day,
            Self::Day => Self::Hour,
            Self::Hour => Self::Minute,
            Self::Minute => Self::Second,
            Self::Second | Self::Fraction => Self::Fraction,
        }
    }

    const fn in_time(self) -> bool {
        matches!(
            self,
            Self::Hour | Self::Minute | Self::Second | Self::Fraction
        )
    }
}

/// Field values as scanned, before range validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct RawFields {
    pub year: u64,
    pub month: u64,
    pub day: u64,
    pub hour: u64,
    pub minute: u64,
    pub second: u64,
    pub fraction: u64,
    pub fraction_digits: u32,
}

impl RawFields {
    fn store(&mut self, cursor: ScanCursor, value: u64) {
        match cursor {
            ScanCursor::Year => self.year = value,
            ScanCursor::Month => self.month = value,
            ScanCursor::Day => self.day = value,
            ScanCursor::Hour => self.hour = value,
            ScanCursor::Minute => self.minute = value,
            ScanCursor::Second => self.second = value,
            ScanCursor::Fraction => self.fraction = value,
        }
    }
}

struct Scanner<'a> {
    input: &'a [u8],
    cursor: ScanCursor,
    acc: u64,
    fields: RawFields,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            cursor: ScanCursor::Year,
            acc: 0,
            fields: RawFields::default(),
        }
    }

    fn push_digit(&mut self, digit: u8) {
        self.acc = self.acc.saturating_mul(10).saturating_add(u64::from(digit));
        if self.cursor == ScanCursor::Fraction {
            self.fields.fraction_digits = self.fields.fraction_digits.saturating_add(1);
        }
    }

    /// Stores the accumulator into the open field.
    fn close(&mut self) {
        self.fields.store(self.cursor, self.acc);
        self.acc = 0;
    }

    fn advance(&mut self) {
        self.close();
        self.cursor = self.cursor.next();
    }

    fn run(mut self) -> ParseResult<(RawFields, ZoneOffset<'a>)> {
        let input = self.input;
        let mut zone = ZoneOffset::utc();

        for (i, &byte) in input.iter().enumerate() {
            let cursor = self.cursor;
            match byte {
                b'0'..=b'9' => self.push_digit(byte - b'0'),
                b'-' if matches!(cursor, ScanCursor::Year | ScanCursor::Month) => self.advance(),
                b'T' if cursor == ScanCursor::Day => self.advance(),
                b':' if matches!(
                    cursor,
                    ScanCursor::Hour | ScanCursor::Minute | ScanCursor::Second
                ) =>
                {
                    self.advance();
                }
                b'.' if cursor == ScanCursor::Second => self.advance(),
                b'Z' if cursor.in_time() => {
                    self.close();
                    if i + 1 != input.len() {
                        return Err(ParseError::RemainingData);
                    }
                }
                _ if cursor.in_time() && starts_with_sign(&input[i..]) => {
                    self.close();
                    zone = parse_zone(&input[i..])?;
                    break;
                }
                _ => return Err(ParseError::unexpected(&input[i..])),
            }
        }

        // Input may end without a delimiter after the last field.
        if self.acc > 0 {
            self.close();
        }

        Ok((self.fields, zone))
    }
}

/// Parses an ISO8601 / RFC3339 date-time into an [`Instant`].
///
/// Accepted forms include `2017-04-24`, `2017-04-24T09`, `2017-04-24T09:41`,
/// `2017-04-24T09:41:34`, any number of fraction digits up to nine
/// (`09:41:34.502`), and a zone designator of `Z`, `±hh`, `±hhmm`,
/// `±hh:mm` or `±hh:mm:ss`. Missing time fields are zero and a missing zone
/// is UTC.
///
/// ## Errors
/// Returns a [`ParseError`] describing the first problem found: an
/// unexpected character, a malformed zone, data after `Z`, too many
/// fraction digits, or a field outside its calendar range.
pub fn parse_datetime(input: &[u8]) -> ParseResult<Instant> {
    let (raw, zone) = Scanner::new(input).run()?;
    let fields = validate(&raw, input)?;

    // Only fails at the edge of the representable range, where the offset
    // pushes the instant past it.
    Instant::from_fields(fields, zone).ok_or_else(|| {
        ParseError::range(
            input,
            Element::Year,
            raw.year,
            0,
            NaiveDate::MAX.year().into(),
        )
    })
}

/// Parses an ISO8601 / RFC3339 date-time string into an [`Instant`].
///
/// ## Errors
/// See [`parse_datetime`].
pub fn parse_str(input: &str) -> ParseResult<Instant> {
    parse_datetime(input.as_bytes())
}
