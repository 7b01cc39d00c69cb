use thiserror::Error;

use crate::rfc::iso8601::{CodecError, ParseError};

/// RFC parsing and encoding errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error(transparent)]
    ParseError(#[from] ParseError),

    #[error(transparent)]
    CodecError(#[from] CodecError),
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
