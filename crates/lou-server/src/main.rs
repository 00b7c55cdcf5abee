mod configuration;
mod error;
mod routes;
mod state;

use lou::providers::gemini::GeminiProvider;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let settings = configuration::Settings::new()?;
    let addr = settings.server.socket_addr()?;

    let provider_config = settings.provider.into_config();
    if provider_config.api_key().is_none() {
        warn!(
            "no provider API key configured, chat requests will fail until one is set ({})",
            error::credential_hint()
        );
    }
    info!(model = %provider_config.model, host = %provider_config.host, "using gemini provider");

    let provider = GeminiProvider::new(provider_config)?;
    let state = state::AppState::new(Arc::new(provider));

    let app = routes::configure(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
