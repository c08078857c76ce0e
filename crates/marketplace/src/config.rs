//! Marketplace configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `LUMINA_TAX_RATE` - Fractional sales tax rate (default: 0.08)
//! - `LUMINA_ADMIN_EMAIL` - Reserved administrator login address
//!   (default: admin@lumina.com)
//! - `LUMINA_CHECKOUT_PROCESSING_MS` - Simulated payment processing delay
//!   (default: 2000)
//! - `LUMINA_CHECKOUT_COMPLETION_MS` - Delay before the completed order screen
//!   clears back home (default: 3000)

use std::time::Duration;

use rust_decimal::Decimal;
use thiserror::Error;

const DEFAULT_ADMIN_EMAIL: &str = "admin@lumina.com";
const DEFAULT_TAX_RATE: Decimal = Decimal::from_parts(8, 0, 0, false, 2);
const DEFAULT_PROCESSING_MS: u64 = 2_000;
const DEFAULT_COMPLETION_MS: u64 = 3_000;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Marketplace engine configuration.
#[derive(Debug, Clone)]
pub struct MarketplaceConfig {
    /// Fractional sales tax rate applied to the cart subtotal.
    pub tax_rate: Decimal,
    /// Reserved administrator address; logging in with it (any casing)
    /// resolves straight to the first seeded admin.
    pub admin_email: String,
    /// How long checkout sits in the processing phase.
    pub processing_delay: Duration,
    /// How long the completed screen shows before the cart clears.
    pub completion_delay: Duration,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            admin_email: DEFAULT_ADMIN_EMAIL.to_owned(),
            processing_delay: Duration::from_millis(DEFAULT_PROCESSING_MS),
            completion_delay: Duration::from_millis(DEFAULT_COMPLETION_MS),
        }
    }
}

impl MarketplaceConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a set variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let tax_rate = parse_env_or("LUMINA_TAX_RATE", DEFAULT_TAX_RATE)?;
        let admin_email = get_env_or_default("LUMINA_ADMIN_EMAIL", DEFAULT_ADMIN_EMAIL);
        let processing_delay = Duration::from_millis(parse_env_or(
            "LUMINA_CHECKOUT_PROCESSING_MS",
            DEFAULT_PROCESSING_MS,
        )?);
        let completion_delay = Duration::from_millis(parse_env_or(
            "LUMINA_CHECKOUT_COMPLETION_MS",
            DEFAULT_COMPLETION_MS,
        )?);

        Ok(Self {
            tax_rate,
            admin_email,
            processing_delay,
            completion_delay,
        })
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, falling back to a default when unset.
fn parse_env_or<T: std::str::FromStr>(key: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string())),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MarketplaceConfig::default();
        assert_eq!(config.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.admin_email, "admin@lumina.com");
        assert_eq!(config.processing_delay, Duration::from_millis(2_000));
        assert_eq!(config.completion_delay, Duration::from_millis(3_000));
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        // None of the LUMINA_* variables are set in the test environment.
        let config = MarketplaceConfig::from_env().unwrap();
        assert_eq!(config.tax_rate, MarketplaceConfig::default().tax_rate);
        assert_eq!(config.admin_email, MarketplaceConfig::default().admin_email);
    }
}
