use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use stylist_api::api::{create_router, AppState};
use stylist_api::config::Config;
use stylist_api::services::providers::GeminiProvider;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    if config.gemini_api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; recommendation requests will return 500");
    }

    let provider = Arc::new(GeminiProvider::new(&config));
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config, provider);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "stylist-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
