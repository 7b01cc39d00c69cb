//! Shared building blocks for the isochron crates.
//!
//! Holds the pieces that do not need the date-time machinery: the output
//! [`types::Precision`] selector, layout constants, configuration loading and
//! the core error type.

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
