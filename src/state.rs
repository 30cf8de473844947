//! Shared application state for all routes. Immutable after startup.

use crate::auth::TokenManager;
use crate::config::Settings;
use crate::error::AppError;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub settings: Arc<Settings>,
    pub tokens: Arc<TokenManager>,
}

impl AppState {
    pub fn new(pool: SqlitePool, settings: Settings) -> Result<Self, AppError> {
        let tokens = TokenManager::from_settings(&settings)?;
        Ok(AppState {
            pool,
            settings: Arc::new(settings),
            tokens: Arc::new(tokens),
        })
    }
}
