//! ISO8601 core models.
//!
//! [`Instant`] is the value produced by the parser and consumed by the
//! codec. [`ZoneOffset`] and [`CalendarFields`] describe its parts.

mod fields;
mod instant;
mod zone;

pub use fields::CalendarFields;
pub use instant::Instant;
pub use zone::ZoneOffset;
