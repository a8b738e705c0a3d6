//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional:
//! - `CARDAPIO_DATA_FILE` - Path of the JSON data file (default: cardapio-data.json)
//! - `CARDAPIO_DELIVERY_FEE` - Delivery fee as a decimal, e.g. `5.00` (default: 0)

use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_DATA_FILE: &str = "cardapio-data.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Where the shared store persists its data.
    pub data_file: PathBuf,
    /// Delivery fee added to the cart subtotal; zero renders as "Grátis".
    pub delivery_fee: Decimal,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_file = PathBuf::from(get_env_or_default("CARDAPIO_DATA_FILE", DEFAULT_DATA_FILE));
        let delivery_fee = match get_optional_env("CARDAPIO_DELIVERY_FEE") {
            Some(raw) => raw.parse::<Decimal>().map_err(|e| {
                ConfigError::InvalidEnvVar("CARDAPIO_DELIVERY_FEE".to_string(), e.to_string())
            })?,
            None => Decimal::ZERO,
        };

        Ok(Self {
            data_file,
            delivery_fee,
        })
    }
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            delivery_fee: Decimal::ZERO,
        }
    }
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
