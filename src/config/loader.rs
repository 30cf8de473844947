//! Load settings from environment variables, falling back to defaults.

use crate::config::types::*;
use crate::config::validate;
use crate::error::ConfigError;
use std::env;
use std::str::FromStr;

impl Settings {
    /// Read settings from the process environment. Call `dotenvy::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup, then validate.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let settings = Settings {
            app_name: lookup("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.into()),
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into()),
            secret_key: lookup("SECRET_KEY").unwrap_or_else(|| DEFAULT_SECRET_KEY.into()),
            algorithm: lookup("ALGORITHM").unwrap_or_else(|| DEFAULT_ALGORITHM.into()),
            access_token_expire_minutes: parse_or(
                &lookup,
                "ACCESS_TOKEN_EXPIRE_MINUTES",
                DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            )?,
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into()),
            max_body_bytes: parse_or(&lookup, "MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)?,
            debug: parse_or(&lookup, "DEBUG", false)?,
        };
        if settings.secret_key == DEFAULT_SECRET_KEY {
            tracing::warn!("SECRET_KEY not set, using development secret");
        }
        validate(&settings)?;
        Ok(settings)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidValue(key)),
        None => Ok(default),
    }
}
