//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PAWSOME_API_URL` - Base URL of the REST backend (e.g., `http://localhost:5000/api`)
//!
//! ## Optional
//! - `PAWSOME_STATE_DIR` - Directory for durable local state (default: `.pawsome`)
//! - `PAWSOME_REQUEST_TIMEOUT_SECS` - HTTP request timeout (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_STATE_DIR: &str = ".pawsome";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Pawsome client configuration.
#[derive(Debug, Clone)]
pub struct PawsomeConfig {
    /// Base URL of the REST backend, without a trailing slash.
    pub api_url: Url,
    /// Directory holding the persisted `identity` and `cart` entries.
    pub state_dir: PathBuf,
    /// Timeout applied to every backend request.
    pub request_timeout: Duration,
}

impl PawsomeConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_url = get_required_env("PAWSOME_API_URL")?;
        let api_url = parse_api_url(&api_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PAWSOME_API_URL".to_string(), e))?;

        let state_dir = PathBuf::from(get_env_or_default("PAWSOME_STATE_DIR", DEFAULT_STATE_DIR));

        let timeout_secs = get_env_or_default(
            "PAWSOME_REQUEST_TIMEOUT_SECS",
            &DEFAULT_REQUEST_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("PAWSOME_REQUEST_TIMEOUT_SECS".to_string(), e.to_string())
        })?;

        Ok(Self {
            api_url,
            state_dir,
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse and validate the backend base URL.
///
/// Accepts `http`/`https` URLs with a host; a trailing slash is stripped so
/// path joining stays predictable.
fn parse_api_url(s: &str) -> Result<Url, String> {
    let trimmed = s.trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| e.to_string())?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(format!("unsupported scheme: {}", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("URL must have a host".to_string());
    }

    Ok(url)
}
