use async_trait::async_trait;
use std::time::Duration;

use crate::acquisition::BreakdownSource;
use crate::acquisition::types::{FetchFailure, RawPayload};
use crate::config::ApiConfig;
use crate::logging::{LogContext, StructuredLogger, get_logger_with_context};

/// Header carrying the API token
pub const AUTH_TOKEN_HEADER: &str = "auth-token";

/// Issue one GET for the latest breakdown of `zone`.
///
/// Succeeds only on HTTP 200 with a decodable body that carries the
/// breakdown object. No retries.
#[cfg(feature = "live")]
pub async fn fetch_power_breakdown(
    endpoint: &str,
    zone: &str,
    api_key: Option<&str>,
    timeout: Duration,
) -> Result<RawPayload, FetchFailure> {
    use reqwest::header::{CONTENT_TYPE, USER_AGENT};

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| FetchFailure::network(format!("failed to build HTTP client: {e}")))?;

    let mut request = client
        .get(endpoint)
        .query(&[("zone", zone)])
        .header(CONTENT_TYPE, "application/json")
        .header(USER_AGENT, concat!("umeme/", env!("APP_VERSION")));
    if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
        request = request.header(AUTH_TOKEN_HEADER, key);
    }

    let resp = request.send().await?;

    let status = resp.status();
    if status != reqwest::StatusCode::OK {
        return Err(FetchFailure::status(
            status.as_u16(),
            status.canonical_reason(),
        ));
    }

    let body: serde_json::Value = resp.json().await?;
    RawPayload::from_json(&body)
}

/// Built without the `live` feature: acquisition always reports disabled
#[cfg(not(feature = "live"))]
pub async fn fetch_power_breakdown(
    _endpoint: &str,
    _zone: &str,
    _api_key: Option<&str>,
    _timeout: Duration,
) -> Result<RawPayload, FetchFailure> {
    Err(FetchFailure::disabled("live data support not compiled in"))
}

/// Power-breakdown API client for one zone
#[derive(Debug, Clone)]
pub struct PowerBreakdownClient {
    endpoint: String,
    zone: String,
    api_key: Option<String>,
    timeout: Duration,
    enabled: bool,
    logger: StructuredLogger,
}

impl PowerBreakdownClient {
    pub fn new(endpoint: String, zone: String, api_key: Option<String>, timeout: Duration) -> Self {
        let logger = get_logger_with_context(LogContext::new("acquisition").with_zone(&zone));
        Self {
            endpoint,
            zone,
            api_key,
            timeout,
            enabled: true,
            logger,
        }
    }

    pub fn from_config(cfg: &ApiConfig) -> Self {
        let mut client = Self::new(
            cfg.endpoint.clone(),
            cfg.zone.clone(),
            cfg.effective_api_key().map(str::to_string),
            cfg.timeout(),
        );
        client.enabled = cfg.enabled;
        client
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

#[async_trait]
impl BreakdownSource for PowerBreakdownClient {
    fn zone(&self) -> &str {
        &self.zone
    }

    async fn fetch(&self) -> Result<RawPayload, FetchFailure> {
        if !self.enabled {
            return Err(FetchFailure::disabled("live data disabled in configuration"));
        }

        let result = fetch_power_breakdown(
            &self.endpoint,
            &self.zone,
            self.api_key.as_deref(),
            self.timeout,
        )
        .await;

        match &result {
            Ok(payload) => self.logger.info(&format!(
                "Fetched power breakdown: {} sources, datetime={}",
                payload.breakdown.len(),
                payload.datetime.as_deref().unwrap_or("n/a")
            )),
            Err(failure) => self.logger.warn(&format!(
                "Live data unavailable ({}): {}",
                failure.kind.as_str(),
                failure.cause
            )),
        }
        result
    }
}
