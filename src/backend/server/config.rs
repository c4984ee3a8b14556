/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables and
 * opens the credential store it describes.
 *
 * # Configuration Sources
 *
 * | variable       | default          |
 * |----------------|------------------|
 * | `SERVER_PORT`  | `3000`           |
 * | `APP_ENV`      | `development`    |
 * | `JWT_SECRET`   | development only |
 * | `DATABASE_URL` | in-memory store  |
 * | `UPLOAD_DIR`   | `public/uploads` |
 * | `BCRYPT_COST`  | `10`             |
 *
 * # Error Handling
 *
 * Outside production a missing `JWT_SECRET` falls back to a fixed development
 * secret and logs a warning. With `APP_ENV=production` startup fails instead.
 */

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::password::DEFAULT_COST;
use crate::backend::server::state::Settings;
use crate::backend::store::{MemoryUserStore, PgUserStore, SharedUserStore, StoreError};

/// Signing secret used when `JWT_SECRET` is unset outside production
pub const DEV_JWT_SECRET: &str = "insecure-development-secret-change-me";

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPLOAD_DIR: &str = "public/uploads";

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "development" | "dev" | "test" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::Invalid {
                name: "APP_ENV",
                value: value.to_string(),
            }),
        }
    }

    pub fn is_production(self) -> bool {
        self == Self::Production
    }
}

/// Configuration errors raised at startup
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set when APP_ENV=production")]
    MissingSecret,

    #[error("invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub environment: Environment,
    pub jwt_secret: String,
    /// `None` selects the in-memory store
    pub database_url: Option<String>,
    pub upload_dir: PathBuf,
    pub bcrypt_cost: u32,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let environment = match get("APP_ENV") {
            Some(value) => Environment::parse(&value)?,
            None => Environment::Development,
        };

        let port = match get("SERVER_PORT") {
            Some(value) => value.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "SERVER_PORT",
                value,
            })?,
            None => DEFAULT_PORT,
        };

        let bcrypt_cost = match get("BCRYPT_COST") {
            Some(value) => match value.trim().parse::<u32>() {
                Ok(cost) if (4..=31).contains(&cost) => cost,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "BCRYPT_COST",
                        value,
                    })
                }
            },
            None => DEFAULT_COST,
        };

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None if environment.is_production() => return Err(ConfigError::MissingSecret),
            None => {
                tracing::warn!("JWT_SECRET not set. Using the insecure development secret.");
                DEV_JWT_SECRET.to_string()
            }
        };

        Ok(Self {
            port,
            environment,
            jwt_secret,
            database_url: get("DATABASE_URL"),
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_UPLOAD_DIR)),
            bcrypt_cost,
        })
    }

    /// Request-time settings derived from this configuration
    pub fn settings(&self) -> Settings {
        Settings {
            secure_cookies: self.environment.is_production(),
            upload_dir: self.upload_dir.clone(),
            bcrypt_cost: self.bcrypt_cost,
        }
    }
}

/// Open the credential store selected by the configuration
///
/// Returns `PgUserStore` when `DATABASE_URL` is set, otherwise an empty
/// `MemoryUserStore`. A configured database that cannot be reached is an
/// error rather than a silent fallback.
pub async fn open_store(config: &AppConfig) -> Result<SharedUserStore, StoreError> {
    match &config.database_url {
        Some(url) => Ok(Arc::new(PgUserStore::connect(url).await?)),
        None => {
            tracing::warn!("DATABASE_URL not set. Accounts are kept in memory and lost on restart.");
            Ok(Arc::new(MemoryUserStore::new()))
        }
    }
}
