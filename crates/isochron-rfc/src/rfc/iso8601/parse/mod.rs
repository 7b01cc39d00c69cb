//! ISO8601 / RFC3339 parsing.
//!
//! ## Usage
//!
//! ```rust
//! use isochron_rfc::rfc::iso8601::parse::{parse_str, parse_zone};
//!
//! let instant = parse_str("2017-04-24T09:41:34.502+0100").unwrap();
//! assert_eq!(instant.hour(), 9);
//! assert_eq!(instant.offset_seconds(), 3600);
//!
//! let zone = parse_zone(b"-05:30").unwrap();
//! assert_eq!(zone.seconds(), -19_800);
//! ```
//!
//! ## Features
//!
//! - One forward pass over the bytes, no backtracking and no allocation on
//!   success
//! - Optional seconds and fraction digits, truncated date-only values
//! - `Z`, `±hh`, `±hhmm`, `±hh:mm` and `±hh:mm:ss` zone designators,
//!   including the U+2212 minus sign
//! - Range errors carry the element, the offending value, its bounds and the
//!   full input

mod error;
mod fraction;
mod scanner;
mod validate;
mod zone;


pub use error::{Element, ParseError, ParseResult};
pub use fraction::normalize_fraction;
pub use scanner::{parse_datetime, parse_str};
pub use validate::{days_in_month, is_leap_year};
pub use zone::parse_zone;
