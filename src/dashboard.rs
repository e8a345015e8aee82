//! Dashboard pipeline: fetch once, normalize, derive the display figures
//!
//! This is the only place that sees both the acquisition outcome and the
//! normalized snapshot, so it is also where the non-fatal warning is built.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, Utc};
use chrono_tz::Tz;
use serde::Serialize;

use crate::acquisition::{BreakdownSource, FetchFailure, RawPayload};
use crate::logging::{LogContext, get_logger_with_context};
use crate::mix::{
    DataSource, MixTables, PowerRecord, TableRow, normalize_at, renewable_share, table_rows,
};

/// Shown instead of a clock time when the timestamp cannot be parsed
pub const UNKNOWN_TIME_LABEL: &str = "Recent";

/// Everything the dashboard page renders for one load
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub zone: String,
    pub records: Vec<PowerRecord>,
    pub timestamp: String,
    pub total_mw: f64,
    pub data_source: DataSource,
    pub renewable_share: f64,
    /// Why live data is missing, if it is
    pub warning: Option<String>,
    /// Data time as HH:MM in the display timezone
    pub last_updated: String,
    /// Records sorted by share for the detail table
    pub table: Vec<TableRow>,
    pub generated_at: String,
}

/// Run the full pipeline against `source`
pub async fn build_dashboard(
    source: &dyn BreakdownSource,
    tables: &MixTables,
    timezone: Tz,
) -> DashboardView {
    let fetched = source.fetch().await;
    let view = assemble(source.zone(), fetched, tables, timezone, Utc::now());

    let logger = get_logger_with_context(
        LogContext::new("dashboard")
            .with_zone(source.zone())
            .with_field("data_source", view.data_source.label().to_string()),
    );
    logger.debug(&format!(
        "Dashboard built: {} records, total={:.0}, renewable={:.1}%",
        view.records.len(),
        view.total_mw,
        view.renewable_share
    ));
    view
}

/// Pure part of [`build_dashboard`]
pub fn assemble(
    zone: &str,
    fetched: Result<RawPayload, FetchFailure>,
    tables: &MixTables,
    timezone: Tz,
    now: DateTime<Utc>,
) -> DashboardView {
    let warning = fetched
        .as_ref()
        .err()
        .map(|failure| format!("Live data unavailable: {}", failure.cause));

    let snapshot = normalize_at(fetched, tables, now);
    let renewable = renewable_share(&snapshot, &tables.renewables);
    let table = table_rows(&snapshot.records);
    let last_updated = last_updated_label(&snapshot.timestamp, timezone);

    DashboardView {
        zone: zone.to_string(),
        table,
        renewable_share: renewable,
        last_updated,
        warning,
        timestamp: snapshot.timestamp,
        total_mw: snapshot.total,
        data_source: snapshot.data_source,
        records: snapshot.records,
        generated_at: now.to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}

/// Format a snapshot timestamp as `HH:MM` in `timezone`.
///
/// Offset-aware timestamps are converted; naive ones are shown as-is.
/// Anything unparseable yields [`UNKNOWN_TIME_LABEL`].
pub fn last_updated_label(timestamp: &str, timezone: Tz) -> String {
    let ts = timestamp.trim();
    if !ts.contains('T') {
        return UNKNOWN_TIME_LABEL.to_string();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.with_timezone(&timezone).format("%H:%M").to_string();
    }

    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M"))
        .map(|naive| naive.format("%H:%M").to_string())
        .unwrap_or_else(|_| UNKNOWN_TIME_LABEL.to_string())
}
