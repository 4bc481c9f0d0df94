//! Page server: composes the weather card and the task editor into one page.

pub mod error_mapping;
pub mod render;
pub mod routes;
pub mod state;

pub use routes::router;
pub use state::AppState;

use daypage_core::{AppError, Config};

/// Bind the configured address and serve the page until Ctrl-C.
pub async fn serve(config: &Config) -> Result<(), AppError> {
    let state = AppState::from_config(config)?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    tracing::info!("Serving on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
