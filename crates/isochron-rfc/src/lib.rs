//! ISO8601 / RFC3339 date-time parsing and rendering.
//!
//! ```rust
//! use isochron_rfc::rfc::iso8601::{Precision, decode, encode};
//!
//! let instant = decode("2017-04-24T09:41:34.502+0100").unwrap();
//! assert_eq!(
//!     encode(instant, Precision::Millis).unwrap(),
//!     "2017-04-24T09:41:34.502+01:00"
//! );
//! ```

pub mod error;
pub mod rfc;
pub mod serde;
