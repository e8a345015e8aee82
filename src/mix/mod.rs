//! Generation mix normalization and derived metrics
//!
//! Reshapes either a live breakdown or the static fallback table into a
//! uniform list of [`PowerRecord`]s, then derives the figures the dashboard
//! shows next to the charts.

pub mod metrics;
pub mod normalize;
pub mod tables;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use metrics::{TableRow, renewable_share, sorted_by_share, table_rows};
pub use normalize::{normalize, normalize_at};
pub use tables::{
    ASSUMED_TOTAL_CAPACITY_MW, FallbackTable, MixTables, RenewableSet, SourceMapping, title_case,
};

/// One source's contribution to a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    /// Display name
    pub source: String,
    /// Absolute generation (MW, or the upstream unit on the live path)
    pub value: f64,
    /// Share of the snapshot total, 0..=100
    pub percentage: f64,
}

/// Where a snapshot's numbers came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSource {
    #[serde(rename = "Live Data")]
    Live,
    #[serde(rename = "Estimated Data")]
    Estimated,
}

impl DataSource {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live Data",
            Self::Estimated => "Estimated Data",
        }
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized output of one pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotResult {
    pub records: Vec<PowerRecord>,
    /// ISO-8601 timestamp of the data
    pub timestamp: String,
    pub total: f64,
    pub data_source: DataSource,
}

impl SnapshotResult {
    pub fn is_live(&self) -> bool {
        self.data_source == DataSource::Live
    }

    pub fn percentage_sum(&self) -> f64 {
        self.records.iter().map(|r| r.percentage).sum()
    }
}
