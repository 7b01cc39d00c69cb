use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{MICROS_FORMAT, MILLIS_FORMAT, NANOS_FORMAT, SECONDS_FORMAT};
use crate::error::CoreError;

/// Sub-second precision used when rendering an instant as text.
///
/// Precision is always passed explicitly to the encoder; there is no global
/// selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precision {
    /// `2017-04-26T11:13:04Z`
    #[serde(alias = "second")]
    Seconds,
    /// `2017-04-26T11:13:04.123Z`
    #[serde(alias = "millisecond")]
    Millis,
    /// `2017-04-26T11:13:04.123456Z`
    #[serde(alias = "microsecond")]
    Micros,
    /// `2017-04-26T11:13:04.123456789Z`
    #[default]
    #[serde(alias = "nanosecond")]
    Nanos,
}

impl Precision {
    pub const ALL: [Self; 4] = [Self::Seconds, Self::Millis, Self::Micros, Self::Nanos];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Millis => "millis",
            Self::Micros => "micros",
            Self::Nanos => "nanos",
        }
    }

    /// Number of fraction-of-second digits written at this precision.
    #[must_use]
    pub const fn digits(self) -> u16 {
        match self {
            Self::Seconds => 0,
            Self::Millis => 3,
            Self::Micros => 6,
            Self::Nanos => 9,
        }
    }

    /// Smallest representable step, in nanoseconds.
    #[must_use]
    pub const fn resolution_nanos(self) -> u32 {
        match self {
            Self::Seconds => 1_000_000_000,
            Self::Millis => 1_000_000,
            Self::Micros => 1_000,
            Self::Nanos => 1,
        }
    }

    /// `chrono` format string for the offset-less part of the layout.
    #[must_use]
    pub const fn format(self) -> &'static str {
        match self {
            Self::Seconds => SECONDS_FORMAT,
            Self::Millis => MILLIS_FORMAT,
            Self::Micros => MICROS_FORMAT,
            Self::Nanos => NANOS_FORMAT,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Precision {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "seconds" | "second" | "s" => Ok(Self::Seconds),
            "millis" | "millisecond" | "ms" => Ok(Self::Millis),
            "micros" | "microsecond" | "us" => Ok(Self::Micros),
            "nanos" | "nanosecond" | "ns" => Ok(Self::Nanos),
            _ => Err(CoreError::InvalidInput(format!("unknown precision `{s}`"))),
        }
    }
}
