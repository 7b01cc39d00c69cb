/// Date and time portion shared by every output layout (`chrono` strftime syntax).
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Fraction layouts are fixed-width; trailing zeros are kept.
pub const SECONDS_FORMAT: &str = DATE_TIME_FORMAT;
pub const MILLIS_FORMAT: &str = const_str::concat!(DATE_TIME_FORMAT, "%.3f");
pub const MICROS_FORMAT: &str = const_str::concat!(DATE_TIME_FORMAT, "%.6f");
pub const NANOS_FORMAT: &str = const_str::concat!(DATE_TIME_FORMAT, "%.9f");

/// Output years are written with exactly four digits.
pub const MIN_OUTPUT_YEAR: i32 = 0;
pub const MAX_OUTPUT_YEAR: i32 = 9999;

pub const NANOS_PER_SECOND: u32 = 1_000_000_000;
pub const MAX_FRACTION_DIGITS: u32 = 9;

/// Display label of the `Z` designator.
pub const UTC_LABEL: &str = "UTC";

pub const ENV_PREFIX: &str = "ISOCHRON";
pub const CONFIG_FILE_STEM: &str = "isochron";
