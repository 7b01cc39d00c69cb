//! Fixed zone offsets decoded from a zone designator.

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};
use isochron_core::constants::UTC_LABEL;

/// A fixed offset from UTC together with the text it was read from.
///
/// The label borrows the input and is only used for display; two offsets
/// with the same number of seconds compare equal only if their labels match
/// too, use [`ZoneOffset::seconds`] to compare offsets alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneOffset<'a> {
    offset: FixedOffset,
    label: &'a str,
}

impl<'a> ZoneOffset<'a> {
    /// The `Z` designator.
    #[must_use]
    pub fn utc() -> ZoneOffset<'static> {
        ZoneOffset {
            offset: Utc.fix(),
            label: UTC_LABEL,
        }
    }

    /// Creates an offset of `seconds` east of UTC.
    ///
    /// Returns `None` unless the magnitude is strictly less than one day.
    #[must_use]
    pub fn new(seconds: i32, label: &'a str) -> Option<Self> {
        FixedOffset::east_opt(seconds).map(|offset| Self { offset, label })
    }

    /// Seconds east of UTC (negative west of UTC).
    #[must_use]
    pub fn seconds(self) -> i32 {
        self.offset.local_minus_utc()
    }

    #[must_use]
    pub const fn label(self) -> &'a str {
        self.label
    }

    #[must_use]
    pub const fn fixed(self) -> FixedOffset {
        self.offset
    }

    #[must_use]
    pub fn is_utc(self) -> bool {
        self.seconds() == 0
    }
}

impl fmt::Display for ZoneOffset<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}
