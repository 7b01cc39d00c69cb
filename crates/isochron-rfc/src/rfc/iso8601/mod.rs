//! ISO8601 / RFC3339 date-times.
//!
//! - [`parse`]: byte scanner, zone parser and range validation
//! - [`core`](self::core): the [`Instant`] value and its parts
//! - [`build`]: precision-controlled rendering
//! - [`codec`]: text and payload encode/decode

pub mod build;
pub mod codec;
pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;

pub use codec::{
    CodecError, CodecResult, decode, decode_payload, decode_payload_into, encode, encode_into,
    encode_payload,
};
pub use self::core::{CalendarFields, Instant, ZoneOffset};
pub use isochron_core::types::Precision;
pub use parse::{Element, ParseError, ParseResult, parse_datetime, parse_str, parse_zone};
