//! Materials catalog: products, suppliers, offers, and view analytics over HTTP.

pub mod auth;
pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod openapi;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod units;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{api_routes, app, common_routes};
pub use state::AppState;
pub use store::connect;

/// Open the database, apply the schema, and build the shared state.
pub async fn bootstrap(settings: Settings) -> Result<AppState, AppError> {
    let pool = connect(&settings).await?;
    apply_migrations(&pool).await?;
    AppState::new(pool, settings)
}
