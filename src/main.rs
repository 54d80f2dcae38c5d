use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use tracing_subscriber::{fmt, EnvFilter};

use pet_name_generator::{app, AppState, Config, OpenAiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = Config::from_env();
    match config.masked_api_key() {
        Some(masked) => tracing::info!("Using API key: {}", masked),
        None => tracing::warn!("OPENAI_API_KEY not set, pet name requests will fail"),
    }

    let state = AppState {
        completion: Arc::new(OpenAiClient::new(&config)),
    };

    let addr = SocketAddr::from(([0,0,0,0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
    tracing::info!("Shutting down");
}
