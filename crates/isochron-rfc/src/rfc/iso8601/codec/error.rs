//! Codec error types.

use thiserror::Error;

use crate::rfc::iso8601::parse::ParseError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors raised while encoding or decoding an instant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The payload is neither `null` nor a quoted string.
    #[error("iso8601: invalid payload type (expected string)")]
    NotString,

    /// RFC3339 years have exactly four digits.
    #[error("iso8601: year {year} outside of range [0,9999]")]
    YearOutOfRange { year: i32 },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("iso8601: formatting failed")]
    Format(#[from] std::fmt::Error),
}
