//! Server: loads settings from env (and `.env`), applies the schema, serves the catalog API.

use materials_catalog::{app, bootstrap, Settings};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env()?;
    let default_level = if settings.debug {
        "materials_catalog=debug,tower_http=debug"
    } else {
        "materials_catalog=info,tower_http=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    let bind_addr = settings.bind_addr.clone();
    let state = bootstrap(settings).await?;
    let router = app(state);

    let listener = TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
