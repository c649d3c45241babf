use anyhow::Context;
use tracing_subscriber::EnvFilter;

use coach_relay::config::Config;
use coach_relay::routes;
use coach_relay::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("coach_relay=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    config.validate().context("checking configuration")?;
    if config.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; chat requests will fail until it is");
    }

    let state = AppState::shared(&config);
    let app = routes::create_router().with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;

    tracing::info!(addr = %config.bind_addr, model = %config.model, "coach relay listening");
    axum::serve(listener, app).await?;
    Ok(())
}
