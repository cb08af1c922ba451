//! Listening loop.

use crate::{AppConfig, AppState, router};
use axum::Router;
use conteur_error::{ConteurResult, ServerError, ServerErrorKind};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Builds the configured provider and serves the API until Ctrl-C.
///
/// # Errors
///
/// Fails when the pipeline settings are invalid or the address cannot be
/// bound. A missing provider credential is not an error.
#[instrument(skip_all, fields(addr = %config.bind_addr()))]
pub async fn serve(config: &AppConfig) -> ConteurResult<()> {
    let state = AppState::from_config(config)?;
    let static_dir = config.server().static_dir();
    if !static_dir.is_dir() {
        warn!(
            path = %static_dir.display(),
            "Static directory not found, front-end will not be served"
        );
    }
    serve_router(&config.bind_addr(), router(state, static_dir)).await
}

/// Serves `app` on `addr` until Ctrl-C.
pub async fn serve_router(addr: &str, app: Router) -> ConteurResult<()> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        ServerError::new(ServerErrorKind::Bind {
            addr: addr.to_string(),
            message: e.to_string(),
        })
    })?;
    info!(addr, "Conteur listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
