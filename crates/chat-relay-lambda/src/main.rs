use tracing_subscriber::EnvFilter;

use chat_relay_lambda::config::RelayConfig;
use chat_relay_lambda::handler::ChatRelay;
use chat_relay_lambda::router::build_router;
use chat_relay_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch. Every relay stage logs at
    // info, so that is the floor when RUST_LOG is unset.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = RelayConfig::from_env();
    tracing::info!(config = ?config, "starting chat relay");

    let relay = ChatRelay::from_config(config)?;
    let app = build_router(AppState::new(relay));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
