//! Zone designator parser.
//!
//! Accepts `Z`, or a sign (`+`, `-` or U+2212 MINUS SIGN) followed by one to
//! three two-digit groups (hours, minutes, seconds). Groups may be separated
//! by `:` (`+05:30`, `+05:30:15`) or written together (`+0530`). A colon is
//! only legal at offset 2 or 5 after the sign.

use super::error::{ParseError, ParseResult};
use crate::rfc::iso8601::core::ZoneOffset;

/// UTF-8 encoding of U+2212 MINUS SIGN.
pub(crate) const UNICODE_MINUS: &[u8] = "\u{2212}".as_bytes();

const MAX_GROUPS: usize = 3;
const GROUP_DIGITS: u8 = 2;

/// Returns true if `input` starts with a character that introduces a signed
/// zone offset.
pub(crate) fn starts_with_sign(input: &[u8]) -> bool {
    matches!(input.first(), Some(b'+' | b'-')) || input.starts_with(UNICODE_MINUS)
}

/// Hours, minutes and seconds accumulated while scanning an offset.
#[derive(Debug, Default)]
struct OffsetGroups {
    values: [i32; MAX_GROUPS],
    group: usize,
    digits: u8,
}

impl OffsetGroups {
    fn push_digit(&mut self, digit: u8) -> ParseResult<()> {
        if self.digits == GROUP_DIGITS {
            self.group += 1;
            self.digits = 0;
            if self.group >= MAX_GROUPS {
                return Err(ParseError::ZoneTooLong);
            }
        }
        self.values[self.group] = self.values[self.group] * 10 + i32::from(digit);
        self.digits += 1;
        Ok(())
    }

    /// A colon may only sit at offset 2 or 5 after the sign, closing a
    /// complete hours or minutes group.
    const fn push_colon(&mut self, position: usize) -> bool {
        if !matches!(position, 2 | 5)
            || self.digits != GROUP_DIGITS
            || self.group + 1 >= MAX_GROUPS
        {
            return false;
        }
        self.group += 1;
        self.digits = 0;
        true
    }

    fn total_seconds(&self) -> Option<i32> {
        if self.digits != GROUP_DIGITS {
            return None;
        }
        let [hours, minutes, seconds] = self.values;
        Some(hours * 3600 + minutes * 60 + seconds)
    }
}

/// Parses a zone designator into an offset from UTC.
///
/// `Z` is accepted without looking at any following bytes; for signed
/// offsets the whole input must be the designator.
///
/// ## Errors
/// - [`ParseError::UnexpectedCharacter`] if the input does not start with a
///   designator or contains a byte other than a digit or a well-placed `:`.
/// - [`ParseError::ZoneTooShort`] if fewer than two bytes follow the sign.
/// - [`ParseError::ZoneTooLong`] if more than three groups are given.
/// - [`ParseError::InvalidZone`] for an incomplete group, a negative zero
///   offset (`-00:00`) or an offset of 24 hours or more.
pub fn parse_zone(input: &[u8]) -> ParseResult<ZoneOffset<'_>> {
    let (negative, rest) = match input {
        [b'Z', ..] => return Ok(ZoneOffset::utc()),
        [b'+', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        _ => match input.strip_prefix(UNICODE_MINUS) {
            Some(rest) => (true, rest),
            None => return Err(ParseError::unexpected(input)),
        },
    };

    if rest.len() < usize::from(GROUP_DIGITS) {
        return Err(ParseError::ZoneTooShort);
    }

    let mut groups = OffsetGroups::default();
    for (i, &byte) in rest.iter().enumerate() {
        match byte {
            b'0'..=b'9' => groups.push_digit(byte - b'0')?,
            b':' if groups.push_colon(i) => {}
            _ => return Err(ParseError::unexpected(&rest[i..])),
        }
    }

    let magnitude = groups
        .total_seconds()
        .ok_or_else(|| ParseError::invalid_zone(input))?;
    if negative && magnitude == 0 {
        return Err(ParseError::invalid_zone(input));
    }
    let seconds = if negative { -magnitude } else { magnitude };

    // Only ASCII digits and colons follow an ASCII or U+2212 sign.
    let label = std::str::from_utf8(input).map_err(|_err| ParseError::invalid_zone(input))?;
    ZoneOffset::new(seconds, label).ok_or_else(|| ParseError::invalid_zone(input))
}
