//! HTTP surface for the roster service
//!
//! Maps the five student endpoints onto the store contract and translates
//! outcomes into message envelopes. Each request is a single stateless
//! exchange; the only shared state is the store handle in [`AppState`].

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::{build_router, build_student_routes};

/// Wait for shutdown signal (SIGTERM or Ctrl+C).
pub async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
