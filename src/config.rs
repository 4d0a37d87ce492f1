//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honoured for local development.

use std::env;
use std::time::Duration;

const DEFAULT_SERVICE_URL: &str = "http://localhost:8000";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the activity service (no trailing slash)
    pub service_url: String,
    /// Server port
    pub port: u16,
    /// Timeout applied to every activity service request
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let service_url = env::var("ACTIVITY_SERVICE_URL")
            .unwrap_or_else(|_| DEFAULT_SERVICE_URL.to_string());

        let request_timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::Invalid("REQUEST_TIMEOUT_SECS", raw))?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            service_url: normalize_service_url(&service_url)?,
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            service_url: DEFAULT_SERVICE_URL.to_string(),
            port: DEFAULT_PORT,
            request_timeout: Duration::from_secs(2),
        }
    }
}

/// Validate the service base URL and strip any trailing slash.
fn normalize_service_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = reqwest::Url::parse(trimmed)
        .map_err(|_| ConfigError::Invalid("ACTIVITY_SERVICE_URL", raw.to_string()))?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ConfigError::Invalid(
            "ACTIVITY_SERVICE_URL",
            raw.to_string(),
        ));
    }

    Ok(trimmed.to_string())
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1:?}")]
    Invalid(&'static str, String),
}
