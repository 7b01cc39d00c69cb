//! ISO8601 serialization.
//!
//! Renders an [`Instant`](crate::rfc::iso8601::core::Instant) in the RFC3339
//! layout at an explicit [`Precision`](isochron_core::types::Precision).

mod encode;

pub use encode::{encode, encode_into};
pub(crate) use encode::write_layout;
