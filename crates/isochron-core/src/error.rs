use thiserror::Error;

/// Core-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<config::ConfigError> for CoreError {
    fn from(value: config::ConfigError) -> Self {
        Self::ConfigError(value.to_string())
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
