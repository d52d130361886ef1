use crate::core::{AppError, Result};
use rust_decimal::Decimal;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub pricing: PricingConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

/// Output format for the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct PricingConfig {
    /// Wastage added to raw weight, in percent
    pub wastage_percent: Decimal,
}

impl PricingConfig {
    /// Wastage as a fraction (10% -> 0.10)
    pub fn wastage_rate(&self) -> Decimal {
        self.wastage_percent / Decimal::ONE_HUNDRED
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let log_format = match env::var("LOG_FORMAT")
            .unwrap_or_else(|_| "text".to_string())
            .to_lowercase()
            .as_str()
        {
            "text" => LogFormat::Text,
            "json" => LogFormat::Json,
            other => {
                return Err(AppError::configuration(format!(
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
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            pricing: PricingConfig {
                wastage_percent: env::var("WASTAGE_PERCENT")
                    .unwrap_or_else(|_| "10".to_string())
                    .trim()
                    .parse()
                    .map_err(|_| AppError::configuration("Invalid WASTAGE_PERCENT"))?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::configuration(
                "Database max connections must be greater than 0",
            ));
        }

        if self.server.workers == 0 {
            return Err(AppError::configuration(
                "Server workers must be greater than 0",
            ));
        }

        if self.pricing.wastage_percent < Decimal::ZERO
            || self.pricing.wastage_percent > Decimal::ONE_HUNDRED
        {
            return Err(AppError::configuration(format!(
                "Wastage percent must be between 0 and 100, got {}",
                self.pricing.wastage_percent
            )));
        }

        Ok(())
    }
}
