//! SQLite pool construction. The database file is created on first connect.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use std::time::Duration;

const MAX_CONNECTIONS: u32 = 5;

/// Connection options for `database_url`: create if missing, foreign keys on, WAL for file databases.
pub fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)
        .map_err(|e| {
            tracing::error!(error = %e, "unparseable DATABASE_URL");
            AppError::Config(ConfigError::InvalidValue("DATABASE_URL"))
        })?
        .create_if_missing(true)
        .foreign_keys(true);
    if database_url.contains(":memory:") {
        return Ok(opts);
    }
    Ok(opts.journal_mode(SqliteJournalMode::Wal))
}

/// Open the pool described by `settings`. An in-memory database lives on a single
/// connection that is never recycled, otherwise each new connection would see an empty schema.
pub async fn connect(settings: &Settings) -> Result<SqlitePool, AppError> {
    let opts = connect_options(&settings.database_url)?;
    let pool_opts = if settings.is_in_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(Duration::from_secs(30))
    };
    let pool = pool_opts.connect_with(opts).await?;
    tracing::debug!(database_url = %settings.database_url, "database pool ready");
    Ok(pool)
}

/// True when the database answers a trivial query.
pub async fn ping(pool: &SqlitePool) -> bool {
    sqlx::query("SELECT 1").fetch_optional(pool).await.is_ok()
}
