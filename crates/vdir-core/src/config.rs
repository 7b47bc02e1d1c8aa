use std::path::Path;

use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::constants::{CONFIG_FILE_NAME, DEFAULT_FOLD_WIDTH, ENV_PREFIX};
use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub codec: CodecConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Value characters per physical line before folding.
    pub fold_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from defaults, an optional config file and `VDIR_*`
    /// environment variables. Environment variables take precedence.
    ///
    /// When `path` is `None`, `vdir.toml` in the working directory is used if
    /// it exists.
    ///
    /// ## Errors
    /// Returns an error if building the configuration, deserializing it, or
    /// validating it fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name(CONFIG_FILE_NAME).required(false),
        };

        let settings = defaults()?
            .add_source(file)
            .add_source(environment())
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Builds settings from defaults overlaid with an inline TOML document.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML, does not match the
    /// settings shape, or fails validation.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let settings = defaults()?
            .add_source(config::File::from_str(contents, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;

        settings.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Checks values that deserialize fine but cannot drive the codec.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` for a zero fold width.
    pub fn validate(&self) -> CoreResult<()> {
        if self.codec.fold_width == 0 {
            return Err(CoreError::InvalidConfiguration(
                "codec.fold_width must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn defaults() -> Result<ConfigBuilder<DefaultState>> {
    let width = i64::try_from(DEFAULT_FOLD_WIDTH)?;
    Ok(Config::builder()
        .set_default("codec.fold_width", width)?
        .set_default("logging.level", "info")?)
}

/// `VDIR_CODEC__FOLD_WIDTH` sets `codec.fold_width`; nested keys are split on
/// `__` because field names contain `_`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

/// ## Summary
/// Loads `.env` into the environment, then the settings.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config(path: Option<&Path>) -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load(path)?;
    tracing::debug!(fold_width = settings.codec.fold_width, "Settings loaded");
    Ok(settings)
}
