//! Command-line front end for `isochron`.

pub mod cli;
pub mod error;
pub mod render;
