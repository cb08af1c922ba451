//! Server command handler.

use super::ServeArgs;
use conteur::{AppConfig, ConteurResult, serve};
use tracing::info;

/// Runs the HTTP server until Ctrl-C.
pub async fn run_serve(mut config: AppConfig, args: ServeArgs) -> ConteurResult<()> {
    if let Some(port) = args.port {
        config = config.with_port(port);
    }
    if let Some(static_dir) = args.static_dir {
        config = config.with_static_dir(static_dir);
    }
    info!(
        addr = %config.bind_addr(),
        provider = %config.provider().name(),
        dispatch = %config.pipeline().dispatch(),
        "Starting Conteur server"
    );
    serve(&config).await
}
