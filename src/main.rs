mod config;
mod error;
mod routes;

use catalog::{DashboardSource, Language, Region};

use crate::config::ServerConfig;
use crate::error::ServerError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "bharat-drishti stopped");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let config = ServerConfig::from_env()?;

    // Refuse to serve a dashboard with gaps in its tables.
    let catalog = catalog::shared()?;
    tracing::info!(
        regions = Region::ALL.len(),
        languages = Language::ALL.len(),
        accounts = catalog.accounts().accounts().len(),
        "catalog validated"
    );

    let app = routes::leptos_app()?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "bharat-drishti listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
