//! Re-rendering of input values.

use std::io::{self, Write};

use isochron_core::types::Precision;
use isochron_rfc::error::RfcResult;
use isochron_rfc::rfc::iso8601::{decode, decode_payload, encode, encode_payload};

use crate::error::AppResult;

const NULL: &str = "null";

/// Decodes values and renders them again at a fixed precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    precision: Precision,
    json: bool,
}

impl Renderer {
    #[must_use]
    pub const fn new(precision: Precision, json: bool) -> Self {
        Self { precision, json }
    }

    #[must_use]
    pub const fn precision(&self) -> Precision {
        self.precision
    }

    /// ## Summary
    /// Decodes one value and encodes it again.
    ///
    /// In JSON mode the value is a payload and `null` renders as `null`.
    ///
    /// ## Errors
    /// Returns the decode or encode error for `input`.
    pub fn render(&self, input: &str) -> RfcResult<String> {
        if self.json {
            return Ok(match decode_payload(input.as_bytes())? {
                Some(instant) => encode_payload(instant, self.precision)?,
                None => NULL.to_string(),
            });
        }

        Ok(encode(decode(input)?, self.precision)?)
    }

    /// ## Summary
    /// Renders every input, writing results to `out` and failures to `err`.
    ///
    /// Blank lines are skipped. A value that fails to decode does not stop
    /// the run.
    ///
    /// ## Errors
    /// Returns an error if reading an input or writing either stream fails.
    pub fn render_all<I, O, E>(&self, inputs: I, out: &mut O, err: &mut E) -> AppResult<usize>
    where
        I: IntoIterator<Item = io::Result<String>>,
        O: Write,
        E: Write,
    {
        let mut failures = 0;

        for line in inputs {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }

            match self.render(input) {
                Ok(rendered) => writeln!(out, "{rendered}")?,
                Err(e) => {
                    tracing::debug!(input, error = %e, "Failed to re-render value");
                    writeln!(err, "{input}: {e}")?;
                    failures += 1;
                }
            }
        }

        out.flush()?;
        Ok(failures)
    }
}
