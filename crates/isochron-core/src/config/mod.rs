use anyhow::Result;
use config::Config;
use config::builder::{ConfigBuilder, DefaultState};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_STEM, ENV_PREFIX};
use crate::error::CoreResult;
use crate::types::Precision;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub precision: Precision,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("output.precision", Precision::default().as_str())?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from environment variables and an optional
    /// `isochron.toml` into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns [`CoreError::ConfigError`](crate::error::CoreError::ConfigError)
    /// if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        let builder = Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_STEM).required(false))
            // Environment
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .convert_case(config::Case::Snake)
                    .separator("_")
                    .ignore_empty(true)
                    .try_parsing(true),
            );
        Self::from_builder(builder)
    }

    /// Builds the sources collected in `builder` into a `Settings`.
    ///
    /// ## Errors
    /// Returns [`CoreError::ConfigError`](crate::error::CoreError::ConfigError)
    /// if a source fails to load or a value does not deserialize.
    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> CoreResult<Self> {
        Ok(builder.build()?.try_deserialize::<Settings>()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output: OutputConfig {
                precision: Precision::default(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables and the
/// optional config file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(
        precision = %settings.output.precision,
        level = %settings.logging.level,
        "Configuration loaded"
    );
    Ok(settings)
}
