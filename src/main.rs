//! rosterd: the student records CRUD service over MongoDB

use anyhow::{Context, Result};
use mongodb::Client;
use roster::config::ServiceConfig;
use roster::server::{self, AppState};
use roster::storage::MongoStudentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServiceConfig::load().context("failed to load configuration")?;

    let client = Client::with_uri_str(&config.database.uri)
        .await
        .with_context(|| format!("failed to connect to MongoDB at {}", config.database.uri))?;
    let database = client.database(&config.database.database);

    let state = AppState {
        students: Arc::new(MongoStudentStore::new(database)),
    };
    let app = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&config.http.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.http.bind_addr))?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}
