//! Command-line arguments.

use clap::Parser;
use isochron_core::types::Precision;

/// Re-render ISO8601 / RFC3339 date-times at a chosen precision.
///
/// Values are read from the arguments, or one per line from STDIN when no
/// arguments are given.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version)]
pub struct Args {
    /// Date-time values to re-render.
    pub values: Vec<String>,

    /// Treat each value as a JSON payload: `null` or a quoted string.
    #[arg(short, long)]
    pub json: bool,

    /// Sub-second precision of the output: seconds, millis, micros or nanos.
    /// Overrides `output.precision` from the configuration.
    #[arg(short, long)]
    pub precision: Option<Precision>,
}

impl Args {
    /// The precision to render at, falling back to `configured`.
    #[must_use]
    pub fn precision_or(&self, configured: Precision) -> Precision {
        self.precision.unwrap_or(configured)
    }
}
