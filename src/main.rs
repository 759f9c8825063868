//! tutor-gateway server binary

use tutor_gateway::config::load_dotenv;
use tutor_gateway::{build_router, AppState, GatewayConfig, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Logging reads its settings from the environment, so .env goes first.
    let dotenv_error = load_dotenv();

    LoggingConfig::from_env()?.init()?;

    if let Some(e) = dotenv_error {
        tracing::warn!(error = %e, "Ignoring unreadable .env file");
    }

    let config = GatewayConfig::from_env()?;
    tracing::debug!(config = ?config, "Loaded configuration");

    let state = AppState::from_config(&config)?;
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "tutor-gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("tutor-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
