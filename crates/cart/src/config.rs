//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CATALOG_BASE_URL` - Root URL of the product catalog API
//!
//! ## Optional
//! - `CART_STORAGE_PATH` - Snapshot file path (default: dragonfruit-cart.json)
//! - `CART_STORAGE_KEY` - Key the snapshot is stored under (default: dragonfruit:cart)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Root URL of the product catalog API
    pub catalog_base_url: Url,
    /// Path of the cart snapshot file
    pub storage_path: PathBuf,
    /// Key the cart snapshot is stored under
    pub storage_key: String,
}

impl CartConfig {
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

        let catalog_base_url =
            parse_base_url("CATALOG_BASE_URL", &get_required_env("CATALOG_BASE_URL")?)?;
        let storage_path =
            PathBuf::from(get_env_or_default("CART_STORAGE_PATH", "dragonfruit-cart.json"));
        let storage_key = get_env_or_default("CART_STORAGE_KEY", "dragonfruit:cart");

        Ok(Self {
            catalog_base_url,
            storage_path,
            storage_key,
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

/// Parse and validate a base URL.
fn parse_base_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_base_url_valid() {
        let url = parse_base_url("CATALOG_BASE_URL", "http://localhost:3333").expect("parse");
        assert_eq!(url.as_str(), "http://localhost:3333/");
    }

    #[test]
    fn test_parse_base_url_invalid() {
        let err = parse_base_url("CATALOG_BASE_URL", "not a url").expect_err("should fail");
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "CATALOG_BASE_URL"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("CATALOG_BASE_URL".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: CATALOG_BASE_URL"
        );
    }
}
