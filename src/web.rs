//! Axum-based HTTP server for the dashboard page and its JSON API

use axum::response::Redirect;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono_tz::Tz;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::acquisition::{BreakdownSource, PowerBreakdownClient};
use crate::config::Config;
use crate::dashboard::build_dashboard;
use crate::error::{Result, UmemeError};
use crate::insights::insights;
use crate::mix::MixTables;

/// Read-only state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub tables: Arc<MixTables>,
    pub source: Arc<dyn BreakdownSource>,
    pub timezone: Tz,
}

impl AppState {
    /// State with an explicit breakdown source
    pub fn new(config: Config, source: Arc<dyn BreakdownSource>) -> Result<Self> {
        let timezone = config
            .display
            .timezone
            .parse::<Tz>()
            .map_err(|_| UmemeError::validation("display.timezone", "Unknown IANA timezone"))?;
        Ok(Self {
            config: Arc::new(config),
            tables: Arc::new(MixTables::kenya()),
            source,
            timezone,
        })
    }

    /// State backed by the configured power-breakdown API
    pub fn from_config(config: Config) -> Result<Self> {
        let client = PowerBreakdownClient::from_config(&config.api);
        Self::new(config, Arc::new(client))
    }
}

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

/// Runs the pipeline once per request; responses must not be cached
pub async fn snapshot(State(state): State<AppState>) -> impl IntoResponse {
    let view = build_dashboard(state.source.as_ref(), &state.tables, state.timezone).await;
    ([(header::CACHE_CONTROL, "no-store")], Json(view))
}

pub async fn get_insights() -> impl IntoResponse {
    Json(insights())
}

pub async fn get_config(State(state): State<AppState>) -> impl IntoResponse {
    let config = serde_json::to_value(state.config.redacted())
        .unwrap_or(serde_json::json!({"error":"serialization"}));
    Json(serde_json::json!({
        "version": env!("APP_VERSION"),
        "config": config,
    }))
}

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.web.static_dir.clone();

    Router::new()
        .route("/", get(|| async { Redirect::to("/ui/index.html") }))
        .route("/api/health", get(health))
        .route("/api/snapshot", get(snapshot))
        .route("/api/insights", get(get_insights))
        .route("/api/config", get(get_config))
        .nest_service(
            "/ui",
            ServeDir::new(static_dir).append_index_html_on_directories(true),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

pub async fn serve(state: AppState, host: &str, port: u16) -> Result<()> {
    let router = build_router(state);
    let logger = crate::logging::get_logger("web");

    logger.info(&format!(
        "Starting web server; requested host={}, port={}",
        host, port
    ));

    let addr = match host.parse::<IpAddr>() {
        Ok(ip) => SocketAddr::new(ip, port),
        Err(_) => {
            logger.warn(&format!(
                "Invalid host '{}'; falling back to 127.0.0.1",
                host
            ));
            ([127, 0, 0, 1], port).into()
        }
    };

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| UmemeError::web(format!("Failed to bind {}: {}", addr, e)))?;
    let local_addr = listener.local_addr()?;
    logger.info(&format!(
        "Dashboard listening at http://{}:{} (UI /ui, API /api)",
        local_addr.ip(),
        local_addr.port()
    ));

    axum::serve(listener, router)
        .await
        .map_err(|e| UmemeError::web(e.to_string()))
}
