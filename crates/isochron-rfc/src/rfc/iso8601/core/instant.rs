//! The parsed instant-in-time value.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, SubsecRound, Timelike, Utc};
use isochron_core::types::Precision;

use super::{CalendarFields, ZoneOffset};
use crate::rfc::iso8601::build::write_layout;
use crate::rfc::iso8601::parse::{ParseError, parse_str};

/// An instant in time together with the fixed offset it was written in.
///
/// Values are immutable; [`Instant::truncate`], [`Instant::round`] and
/// [`Instant::with_offset`] return new values. Equality and ordering compare
/// the instant itself, so `09:00+01:00` equals `08:00Z`.
///
/// Arithmetic, comparisons across zones and zone-database lookups are left
/// to `chrono`: use [`Instant::as_datetime`] or [`Instant::into_datetime`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(DateTime<FixedOffset>);

impl Instant {
    /// Builds an instant from validated fields interpreted in `zone`.
    ///
    /// Returns `None` if the instant falls outside `chrono`'s range.
    pub(crate) fn from_fields(fields: CalendarFields, zone: ZoneOffset<'_>) -> Option<Self> {
        NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)?
            .and_hms_nano_opt(fields.hour, fields.minute, fields.second, fields.nanosecond)?
            .and_local_timezone(zone.fixed())
            .single()
            .map(Self)
    }

    /// Creates a UTC instant from seconds and nanoseconds since the Unix
    /// epoch.
    ///
    /// Returns `None` if `nanos` is not below one second or the value is out
    /// of range.
    #[must_use]
    pub fn from_utc_timestamp(secs: i64, nanos: u32) -> Option<Self> {
        if nanos >= isochron_core::constants::NANOS_PER_SECOND {
            return None;
        }
        DateTime::from_timestamp(secs, nanos).map(Self::from)
    }

    #[must_use]
    pub fn year(self) -> i32 {
        self.0.year()
    }

    #[must_use]
    pub fn month(self) -> u32 {
        self.0.month()
    }

    #[must_use]
    pub fn day(self) -> u32 {
        self.0.day()
    }

    #[must_use]
    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    #[must_use]
    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    #[must_use]
    pub fn second(self) -> u32 {
        self.0.second()
    }

    #[must_use]
    pub fn nanosecond(self) -> u32 {
        self.0.nanosecond()
    }

    /// Seconds east of UTC of the offset this instant is expressed in.
    #[must_use]
    pub fn offset_seconds(self) -> i32 {
        self.0.offset().local_minus_utc()
    }

    /// The wall-clock fields in this instant's own offset.
    #[must_use]
    pub fn fields(self) -> CalendarFields {
        CalendarFields {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            nanosecond: self.nanosecond(),
        }
    }

    #[must_use]
    pub const fn as_datetime(&self) -> &DateTime<FixedOffset> {
        &self.0
    }

    #[must_use]
    pub const fn into_datetime(self) -> DateTime<FixedOffset> {
        self.0
    }

    /// The same instant expressed in UTC.
    #[must_use]
    pub fn to_utc(self) -> Self {
        Self::from(self.0.with_timezone(&Utc))
    }

    /// The same instant expressed in `zone`.
    #[must_use]
    pub fn with_offset(self, zone: ZoneOffset<'_>) -> Self {
        Self(self.0.with_timezone(&zone.fixed()))
    }

    /// Drops sub-second digits finer than `precision`.
    #[must_use]
    pub fn truncate(self, precision: Precision) -> Self {
        Self(self.0.trunc_subsecs(precision.digits()))
    }

    /// Rounds to the nearest multiple of `precision`, halfway values up.
    #[must_use]
    pub fn round(self, precision: Precision) -> Self {
        Self(self.0.round_subsecs(precision.digits()))
    }
}

impl Default for Instant {
    /// The Unix epoch in UTC.
    fn default() -> Self {
        Self::from(DateTime::<Utc>::default())
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self(value)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(value: DateTime<Utc>) -> Self {
        Self(value.into())
    }
}

impl From<Instant> for DateTime<FixedOffset> {
    fn from(value: Instant) -> Self {
        value.0
    }
}

impl fmt::Display for Instant {
    /// Renders at nanosecond precision. Years outside 0-9999 are written
    /// with a sign and more digits rather than rejected.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_layout(f, *self, Precision::Nanos)
    }
}

impl FromStr for Instant {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_str(s)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for Instant {
    /// Wall-clock fields with four-digit years in an offset strictly inside
    /// one day, so every value is encodable.
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;

        use crate::rfc::iso8601::parse::days_in_month;

        let year = i32::arbitrary(g).rem_euclid(10_000);
        let month = u32::arbitrary(g) % 12 + 1;
        let day = u32::arbitrary(g) % days_in_month(month, u64::from(year.unsigned_abs())) + 1;
        let hour = u32::arbitrary(g) % 24;
        let minute = u32::arbitrary(g) % 60;
        let second = u32::arbitrary(g) % 60;
        let nanosecond = u32::arbitrary(g) % isochron_core::constants::NANOS_PER_SECOND;
        let offset = i32::arbitrary(g).rem_euclid(2 * 86_399 + 1) - 86_399;

        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|date| date.and_hms_nano_opt(hour, minute, second, nanosecond))
            .zip(FixedOffset::east_opt(offset))
            .and_then(|(local, zone)| local.and_local_timezone(zone).single())
            .map(Self)
            .unwrap_or_default()
    }
}
