//! Configuration management

use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use validator::Validate;

use crate::constants::{
    DEFAULT_ACTIVITY_CAPACITY, DEFAULT_API_KEY_ENV, DEFAULT_GENERATION_BASE_URL,
    DEFAULT_GENERATION_MODEL, DEFAULT_GENERATION_TIMEOUT_SECS, DEFAULT_TENANTS_KEY,
};
use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub app: AppSettings,
    #[validate(nested)]
    pub storage: StorageSettings,
    #[validate(nested)]
    pub generation: GenerationSettings,
    #[validate(nested)]
    pub activity: ActivitySettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppSettings {
    pub env: String,
    #[validate(length(min = 1, message = "App name must not be empty"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct StorageSettings {
    /// Directory holding one `<key>.json` file per slot
    #[validate(length(min = 1, message = "Data directory must not be empty"))]
    pub data_dir: String,
    #[validate(length(min = 1, message = "Tenants key must not be empty"))]
    pub tenants_key: String,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct GenerationSettings {
    #[validate(url(message = "Generation base URL must be a valid URL"))]
    pub base_url: String,
    #[validate(length(min = 1, message = "Model identifier must not be empty"))]
    pub model: String,
    /// Takes precedence over `api_key_env` when set
    pub api_key: Option<String>,
    pub api_key_env: String,
    #[validate(range(min = 1, max = 600, message = "Timeout must be between 1 and 600 seconds"))]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ActivitySettings {
    #[validate(range(min = 1, message = "Activity capacity must be at least 1"))]
    pub capacity: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
    pub format: LogFormat,
    /// Daily-rolling log files are written here when set
    pub directory: Option<String>,
}

impl GenerationSettings {
    /// Raw credential: explicit `api_key` first, then the named environment variable.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(&self.api_key_env).ok())
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let builder = Self::defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::from_builder(builder)
    }

    /// Builder preloaded with every built-in default.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.env", "development")?
            .set_default("app.name", "tenant-console")?
            .set_default("storage.data_dir", "data")?
            .set_default("storage.tenants_key", DEFAULT_TENANTS_KEY)?
            .set_default("generation.base_url", DEFAULT_GENERATION_BASE_URL)?
            .set_default("generation.model", DEFAULT_GENERATION_MODEL)?
            .set_default("generation.api_key_env", DEFAULT_API_KEY_ENV)?
            .set_default("generation.timeout_seconds", DEFAULT_GENERATION_TIMEOUT_SECS)?
            .set_default("activity.capacity", DEFAULT_ACTIVITY_CAPACITY as u64)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
