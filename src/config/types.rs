//! Runtime settings passed explicitly into the application state.

use serde::{Deserialize, Serialize};

pub const DEFAULT_APP_NAME: &str = "Materials Catalog API";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://materials_catalog.db";
pub const DEFAULT_SECRET_KEY: &str = "materials-catalog-dev-secret-change-in-production";
pub const DEFAULT_ALGORITHM: &str = "HS256";
pub const DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES: i64 = 30;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    /// Reported by `GET /` and the OpenAPI document.
    pub app_name: String,
    /// sqlx SQLite URL, e.g. `sqlite://materials_catalog.db` or `sqlite::memory:`.
    pub database_url: String,
    /// HMAC secret for signing access tokens.
    #[serde(skip_serializing)]
    pub secret_key: String,
    /// JWT algorithm name; only the HMAC family is accepted.
    pub algorithm: String,
    pub access_token_expire_minutes: i64,
    pub bind_addr: String,
    pub max_body_bytes: usize,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            app_name: DEFAULT_APP_NAME.into(),
            database_url: DEFAULT_DATABASE_URL.into(),
            secret_key: DEFAULT_SECRET_KEY.into(),
            algorithm: DEFAULT_ALGORITHM.into(),
            access_token_expire_minutes: DEFAULT_ACCESS_TOKEN_EXPIRE_MINUTES,
            bind_addr: DEFAULT_BIND_ADDR.into(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            debug: false,
        }
    }
}

impl Settings {
    /// Settings for an isolated in-memory database (tests, demos).
    pub fn in_memory() -> Self {
        Settings {
            database_url: "sqlite::memory:".into(),
            ..Settings::default()
        }
    }

    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:")
    }
}
