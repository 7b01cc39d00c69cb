//! Text and payload codec.
//!
//! Encoding renders an [`Instant`](crate::rfc::iso8601::core::Instant) at an
//! explicit precision; decoding accepts plain text or a JSON-style payload
//! (a quoted string or `null`).
//!
//! Encoding at reduced precision loses the finer digits for good. Callers
//! needing exact round-trips truncate or round the value to the same
//! precision before encoding.

mod error;
mod payload;

pub use super::build::{encode, encode_into};
pub use error::{CodecError, CodecResult};
pub use payload::{decode, decode_payload, decode_payload_into, encode_payload};
