//! For reading application configuration.

use super::error::Result;
use serde::Deserialize;

/// Application configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// The filter directive used when `RUST_LOG` is not set.
    pub level: String,
    /// Log as json instead of human readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Retrieve [`Config`] from the defaults, an optional `config` file and `APP__` environment variables.
#[tracing::instrument]
pub fn load_config() -> Result<Config> {
    load_config_with(environment())
}

fn environment() -> config::Environment {
    config::Environment::with_prefix("APP")
        .separator("__")
        .try_parsing(true)
}

fn load_config_with(env: config::Environment) -> Result<Config> {
    let defaults = LoggingConfig::default();
    let config = config::Config::builder()
        .set_default("logging.level", defaults.level)?
        .set_default("logging.json", defaults.json)?
        .add_source(config::File::with_name("config").required(false))
        .add_source(env)
        .build()?
        .try_deserialize()?;
    Ok(config)
}
