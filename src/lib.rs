//! # Umeme - Kenya electricity generation mix dashboard
//!
//! Fetches the latest power-breakdown snapshot for a grid zone, normalizes it
//! into display records, and serves a single-page dashboard with the mix,
//! the renewable share and some static background on Kenya's power sector.
//! When live data is unavailable the dashboard falls back to an estimated
//! mix and says so.
//!
//! ## Architecture
//!
//! - `acquisition`: one bounded HTTP call to the power-breakdown API
//! - `mix`: normalization into records, renewable share, display sorting
//! - `dashboard`: the per-render pipeline tying the two together
//! - `insights`: static illustrative datasets
//! - `web`: HTTP server and JSON API
//! - `config`, `logging`, `error`: YAML configuration, tracing, error types

pub mod acquisition;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod insights;
pub mod logging;
pub mod mix;
pub mod web;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, UmemeError};
pub use mix::{SnapshotResult, normalize};
