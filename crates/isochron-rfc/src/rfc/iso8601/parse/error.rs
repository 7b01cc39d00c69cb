//! ISO8601 parse error types.

use std::fmt;

use thiserror::Error;

/// Result type for ISO8601 parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Element of a date-time value named by a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Zone,
}

impl Element {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Zone => "zone",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error that occurred while scanning a date-time or zone designator.
///
/// Every failure ends the parse call that raised it; no partial value is
/// produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A character that is not legal at the current scan position.
    ///
    /// Undecodable input is reported as U+FFFD.
    #[error("iso8601: unexpected character `{character}`")]
    UnexpectedCharacter { character: char },

    /// Fewer than two bytes follow the zone sign.
    #[error("iso8601: zone information is too short")]
    ZoneTooShort,

    /// More than three two-digit groups in the zone designator.
    #[error("iso8601: zone information is too long")]
    ZoneTooLong,

    /// A zone designator with an incomplete group, a negative zero offset, or
    /// an offset of a day or more.
    #[error("iso8601: cannot parse {value:?}: invalid {element}")]
    InvalidZone { value: String, element: Element },

    /// Bytes after a `Z` terminator.
    #[error("iso8601: unexpected remaining data after `Z`")]
    RemainingData,

    /// The fraction of a second has more digits than nanosecond resolution
    /// can hold.
    #[error("iso8601: too many digits in fraction of second")]
    Precision,

    /// A field outside its calendar bounds.
    #[error("iso8601: cannot parse {value:?}: {element} {given} is not in range {min}-{max}")]
    Range {
        /// The complete input text.
        value: String,
        element: Element,
        given: i64,
        min: i64,
        max: i64,
    },
}

impl ParseError {
    /// Creates an unexpected-character error from the leading character of
    /// `input`.
    #[must_use]
    pub fn unexpected(input: &[u8]) -> Self {
        Self::UnexpectedCharacter {
            character: leading_char(input),
        }
    }

    /// Creates an invalid-zone error for the raw zone designator.
    #[must_use]
    pub fn invalid_zone(raw: &[u8]) -> Self {
        Self::InvalidZone {
            value: String::from_utf8_lossy(raw).into_owned(),
            element: Element::Zone,
        }
    }

    /// Creates a range error for `element` in the given input text.
    #[must_use]
    pub fn range(input: &[u8], element: Element, given: u64, min: i64, max: i64) -> Self {
        Self::Range {
            value: String::from_utf8_lossy(input).into_owned(),
            element,
            given: i64::try_from(given).unwrap_or(i64::MAX),
            min,
            max,
        }
    }

    /// Returns the element this error is about, if it names one.
    #[must_use]
    pub const fn element(&self) -> Option<Element> {
        match self {
            Self::InvalidZone { element, .. } | Self::Range { element, .. } => Some(*element),
            Self::UnexpectedCharacter { .. }
            | Self::ZoneTooShort
            | Self::ZoneTooLong
            | Self::RemainingData
            | Self::Precision => None,
        }
    }
}

/// Decodes the first UTF-8 character of `input`, or U+FFFD if it is not
/// valid UTF-8.
pub(crate) fn leading_char(input: &[u8]) -> char {
    let window = &input[..input.len().min(4)];
    let valid = match std::str::from_utf8(window) {
        Ok(s) => s,
        Err(e) => std::str::from_utf8(&window[..e.valid_up_to()]).unwrap_or_default(),
    };
    valid.chars().next().unwrap_or(char::REPLACEMENT_CHARACTER)
}
