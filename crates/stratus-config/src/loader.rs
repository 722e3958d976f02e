//! Configuration loader with layered sources.

use crate::{format_validation_errors, AppConfig, ConfigValidator, DEFAULT_SECRET_KEY};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use stratus_core::{StratusError, StratusResult};
use tracing::{debug, info, warn};

/// Conventional variables that override the layered configuration.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("REDIS_URL", "redis.url"),
    ("SECRET_KEY", "app.secret_key"),
    ("HOST", "server.host"),
    ("PORT", "server.port"),
];

/// Loads and validates the application configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
    config_dir: String,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    ///
    /// Configuration is loaded from multiple sources in order:
    /// 1. `config/default.toml` - Default values
    /// 2. `config/{environment}.toml` - Environment-specific overrides
    /// 3. `config/local.toml` - Local overrides
    /// 4. Environment variables with `STRATUS__` prefix
    /// 5. `DATABASE_URL`, `REDIS_URL`, `SECRET_KEY`, `HOST`, `PORT` and debug flags
    pub fn new(config_dir: impl Into<String>) -> StratusResult<Self> {
        let config_dir = config_dir.into();

        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment =
            std::env::var("STRATUS_ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
        let config = Self::load_config(&config_dir, &environment, |key| std::env::var(key).ok())?;

        Ok(Self { config, config_dir })
    }

    /// Loads configuration from the default location (`./config`).
    pub fn from_default_location() -> StratusResult<Self> {
        Self::new("./config")
    }

    /// Returns the loaded configuration.
    #[must_use]
    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the directory the configuration was read from.
    #[must_use]
    pub fn config_dir(&self) -> &str {
        &self.config_dir
    }

    /// Consumes the loader, returning the configuration.
    #[must_use]
    pub fn into_config(self) -> AppConfig {
        self.config
    }

    /// Loads configuration from the specified directory.
    ///
    /// `lookup` resolves the conventional override variables.
    pub fn load_config<F>(config_dir: &str, environment: &str, lookup: F) -> StratusResult<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        info!("Loading configuration for environment: {}", environment);

        let mut builder = Config::builder().set_default("app.environment", environment)
            .map_err(config_error_to_stratus_error)?;

        for name in ["default", environment, "local"] {
            let path = format!("{config_dir}/{name}.toml");
            if Path::new(&path).exists() {
                debug!("Loading config from: {}", path);
                builder = builder.add_source(File::with_name(&path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("STRATUS")
                .separator("__")
                .try_parsing(true),
        );

        builder = apply_env_overrides(builder, &lookup).map_err(config_error_to_stratus_error)?;

        let app_config: AppConfig = builder
            .build()
            .and_then(Config::try_deserialize)
            .map_err(config_error_to_stratus_error)?;

        Self::validate_config(&app_config)?;

        Ok(app_config)
    }

    /// Validates the configuration.
    fn validate_config(config: &AppConfig) -> StratusResult<()> {
        if config.app.is_production() && config.app.secret_key == DEFAULT_SECRET_KEY {
            warn!("Using default secret key in production! This is a security risk.");
        }

        ConfigValidator::validate(config)
            .map_err(|errors| StratusError::Configuration(format_validation_errors(&errors)))
    }
}

fn apply_env_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: &F,
) -> Result<ConfigBuilder<DefaultState>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in ENV_OVERRIDES {
        builder = builder.set_override_option(*key, lookup(var))?;
    }

    let debug = lookup("FLASK_ENV").is_some_and(|env| env == "development")
        || lookup("STRATUS_DEBUG").is_some_and(|flag| matches!(flag.as_str(), "1" | "true" | "yes"));
    if debug {
        builder = builder.set_override("app.debug", true)?;
    }

    Ok(builder)
}

fn config_error_to_stratus_error(err: ConfigError) -> StratusError {
    StratusError::Configuration(err.to_string())
}
