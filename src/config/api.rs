use std::env;
use std::time::Duration;

use serde::Deserialize;

use crate::core::{AppError, Result};

/// Backend REST API connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    /// Bearer token for the terminal binary's session
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: 30,
            token: None,
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(ApiConfig {
            base_url: env::var("API_BASE_URL")
                .map_err(|_| AppError::Configuration("API_BASE_URL not set".to_string()))?,
            timeout_secs: env::var("API_TIMEOUT_SECS")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .map_err(|_| AppError::Configuration("Invalid API_TIMEOUT_SECS".to_string()))?,
            token: env::var("API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Base URL without a trailing slash, so paths can be appended directly
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::Configuration(format!(
                "API_BASE_URL must be an http(s) URL, got {}",
                self.base_url
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "API timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
