//! Power-breakdown acquisition
//!
//! One HTTP GET per dashboard render against the upstream power-breakdown
//! API. Every failure mode collapses into [`FetchFailure`]; callers never see
//! a panic or a transport error type.

pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::{AUTH_TOKEN_HEADER, PowerBreakdownClient, fetch_power_breakdown};
pub use types::{BREAKDOWN_FIELD, FetchFailure, FetchFailureKind, RawPayload};

/// Anything that can produce a breakdown snapshot for one zone
#[async_trait]
pub trait BreakdownSource: Send + Sync {
    fn zone(&self) -> &str;

    async fn fetch(&self) -> Result<RawPayload, FetchFailure>;
}
