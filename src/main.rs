use anyhow::Result;
use tracing::{info, warn};
use umeme::config::Config;
use umeme::logging::init_logging;
use umeme::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    let config =
        Config::load().map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    init_logging(&config.logging)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    info!(
        "Umeme dashboard {} starting up for zone {}",
        env!("APP_VERSION"),
        config.api.zone
    );
    if config.api.effective_api_key().is_none() {
        warn!("No API key configured; live data will likely be unavailable");
    }

    let host = config.web.host.clone();
    let port = config.web.port;
    let state = AppState::from_config(config)
        .map_err(|e| anyhow::anyhow!("Failed to build application state: {}", e))?;

    web::serve(state, &host, port)
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))
}
