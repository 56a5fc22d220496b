use crate::core::{timezone, AppError, Result};
use serde::Deserialize;
use std::env;

pub mod api;

pub use api::ApiConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub api: ApiConfig,
    pub ledger: LedgerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    /// Offset used to read timestamps and dates entered in forms
    pub timezone_offset_hours: i32,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            timezone_offset_hours: timezone::DEFAULT_OFFSET_HOURS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "pretty".to_string())
            .to_lowercase()
            .as_str()
        {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::Configuration(format!(
                    "Invalid LOG_FORMAT: {}",
                    other
                )))
            }
        };

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format,
            },
            api: ApiConfig::from_env()?,
            ledger: LedgerConfig {
                timezone_offset_hours: env::var("LEDGER_TIMEZONE_OFFSET_HOURS")
                    .unwrap_or_else(|_| timezone::DEFAULT_OFFSET_HOURS.to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid LEDGER_TIMEZONE_OFFSET_HOURS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.api.validate()?;

        if !(-12..=14).contains(&self.ledger.timezone_offset_hours) {
            return Err(AppError::Configuration(
                "Timezone offset must be between -12 and 14 hours".to_string(),
            ));
        }

        Ok(())
    }
}
