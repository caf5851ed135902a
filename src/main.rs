//! User management REST service entry point.

use tokio::signal;
use tracing::info;

use user_service::config::Config;
use user_service::startup::build_app;
use user_service::telemetry::setup_telemetry;

/// Build version (injected at compile time).
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::init()?;
    setup_telemetry(&config);

    info!(
        version = VERSION,
        address = %config.http_address,
        auth = config.auth_tokens.is_some(),
        pid = std::process::id(),
        "Starting user-service"
    );

    let (app, addr) = build_app(&config)?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(address = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl+C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
