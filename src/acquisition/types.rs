use serde_json::Value;
use thiserror::Error;

/// Field of the upstream body holding the per-source generation map
pub const BREAKDOWN_FIELD: &str = "powerProductionBreakdown";

/// Decoded power-breakdown response for one zone at one point in time
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPayload {
    pub zone: Option<String>,
    /// Upstream-reported datetime, kept verbatim
    pub datetime: Option<String>,
    /// Raw source code to generation value, in upstream key order.
    /// Nulls and non-numeric values decode to `None`.
    pub breakdown: Vec<(String, Option<f64>)>,
}

impl RawPayload {
    /// Extract a payload from a decoded JSON body. Fails when the breakdown
    /// field is missing or is not an object.
    pub fn from_json(body: &Value) -> Result<Self, FetchFailure> {
        let breakdown = body
            .get(BREAKDOWN_FIELD)
            .and_then(Value::as_object)
            .ok_or_else(|| {
                FetchFailure::missing_breakdown(format!("response has no {BREAKDOWN_FIELD} object"))
            })?
            .iter()
            .map(|(code, value)| (code.clone(), value.as_f64()))
            .collect();

        let text = |key: &str| {
            body.get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };

        Ok(Self {
            zone: text("zone"),
            datetime: text("datetime"),
            breakdown,
        })
    }
}

/// Why live data could not be obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailureKind {
    /// Live data switched off by configuration or build features
    Disabled,
    Timeout,
    /// Connection refused, DNS failure, TLS failure, ...
    Network,
    /// Upstream answered with something other than 200
    Status,
    /// Body was not valid JSON
    Decode,
    MissingBreakdown,
}

impl FetchFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Disabled => "disabled",
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::Status => "status",
            Self::Decode => "decode",
            Self::MissingBreakdown => "missing_breakdown",
        }
    }
}

/// Failure of a single acquisition attempt. Every kind is recoverable: the
/// dashboard falls back to estimated data and shows `cause` as a warning.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{cause}")]
pub struct FetchFailure {
    pub kind: FetchFailureKind,
    pub cause: String,
}

impl FetchFailure {
    pub fn new<S: Into<String>>(kind: FetchFailureKind, cause: S) -> Self {
        Self {
            kind,
            cause: cause.into(),
        }
    }

    pub fn disabled<S: Into<String>>(cause: S) -> Self {
        Self::new(FetchFailureKind::Disabled, cause)
    }

    pub fn timeout<S: Into<String>>(cause: S) -> Self {
        Self::new(FetchFailureKind::Timeout, cause)
    }

    pub fn network<S: Into<String>>(cause: S) -> Self {
        Self::new(FetchFailureKind::Network, cause)
    }

    /// Non-200 answer from upstream
    pub fn status(code: u16, reason: Option<&str>) -> Self {
        let cause = match reason {
            Some(r) => format!("API returned HTTP {code} {r}"),
            None => format!("API returned HTTP {code}"),
        };
        Self::new(FetchFailureKind::Status, cause)
    }

    pub fn decode<S: Into<String>>(cause: S) -> Self {
        Self::new(FetchFailureKind::Decode, cause)
    }

    pub fn missing_breakdown<S: Into<String>>(cause: S) -> Self {
        Self::new(FetchFailureKind::MissingBreakdown, cause)
    }
}

#[cfg(feature = "live")]
impl From<reqwest::Error> for FetchFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::timeout(format!("request timed out: {err}"))
        } else if err.is_decode() {
            Self::decode(format!("malformed response body: {err}"))
        } else {
            Self::network(format!("request failed: {err}"))
        }
    }
}
