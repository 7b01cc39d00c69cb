//! Validated calendar and clock fields.

/// Calendar date and wall-clock time that passed range validation.
///
/// Only the field validator builds these; every field is within its
/// calendar bounds and `nanosecond` is below one second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarFields {
    pub(crate) year: i32,
    pub(crate) month: u32,
    pub(crate) day: u32,
    pub(crate) hour: u32,
    pub(crate) minute: u32,
    pub(crate) second: u32,
    pub(crate) nanosecond: u32,
}

impl CalendarFields {
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[must_use]
    pub const fn month(&self) -> u32 {
        self.month
    }

    #[must_use]
    pub const fn day(&self) -> u32 {
        self.day
    }

    #[must_use]
    pub const fn hour(&self) -> u32 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u32 {
        self.minute
    }

    #[must_use]
    pub const fn second(&self) -> u32 {
        self.second
    }

    #[must_use]
    pub const fn nanosecond(&self) -> u32 {
        self.nanosecond
    }

    /// Whole milliseconds of the fraction of a second.
    #[must_use]
    pub const fn millisecond(&self) -> u32 {
        self.nanosecond / 1_000_000
    }
}
