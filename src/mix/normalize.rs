use chrono::{DateTime, SecondsFormat, Utc};

use super::tables::MixTables;
use super::{DataSource, PowerRecord, SnapshotResult};
use crate::acquisition::{FetchFailure, RawPayload};

/// Turn a fetch result into a renderable snapshot. Never fails: a failed
/// fetch or an empty breakdown yields the estimated mix.
pub fn normalize(
    fetch_result: Result<RawPayload, FetchFailure>,
    tables: &MixTables,
) -> SnapshotResult {
    normalize_at(fetch_result, tables, Utc::now())
}

/// [`normalize`] with an explicit clock for timestamps not supplied upstream
pub fn normalize_at(
    fetch_result: Result<RawPayload, FetchFailure>,
    tables: &MixTables,
    now: DateTime<Utc>,
) -> SnapshotResult {
    match fetch_result {
        Ok(payload) if !payload.breakdown.is_empty() => live_snapshot(payload, tables, now),
        _ => estimated_snapshot(tables, now),
    }
}

fn live_snapshot(payload: RawPayload, tables: &MixTables, now: DateTime<Utc>) -> SnapshotResult {
    // Stage one: positive generation per display name, upstream order
    let generation: Vec<(String, f64)> = payload
        .breakdown
        .iter()
        .filter_map(|(code, value)| match value {
            Some(v) if v.is_finite() && *v > 0.0 => {
                Some((tables.source_names.display_name(code), *v))
            }
            _ => None,
        })
        .collect();

    // Saturate so a sum of huge finite values stays a JSON number
    let total = generation
        .iter()
        .map(|(_, v)| v)
        .sum::<f64>()
        .min(f64::MAX);

    // Stage two: shares derived from the finished set, relative to the
    // largest value so they stay finite when the raw sum overflows
    let largest = generation.iter().map(|(_, v)| *v).fold(0.0, f64::max);
    let scaled_total: f64 = generation.iter().map(|(_, v)| v / largest).sum();
    let records = generation
        .into_iter()
        .map(|(source, value)| PowerRecord {
            source,
            value,
            percentage: share_of(value / largest, scaled_total),
        })
        .collect();

    SnapshotResult {
        records,
        timestamp: payload.datetime.unwrap_or_else(|| iso_timestamp(now)),
        total,
        data_source: DataSource::Live,
    }
}

fn estimated_snapshot(tables: &MixTables, now: DateTime<Utc>) -> SnapshotResult {
    let capacity = tables.assumed_total_capacity_mw;
    let records: Vec<PowerRecord> = tables
        .fallback
        .entries()
        .iter()
        .map(|&(name, pct)| PowerRecord {
            source: name.to_string(),
            value: pct / 100.0 * capacity,
            percentage: pct,
        })
        .collect();

    // Sum of the record values, so the total matches what the charts show
    let total = records.iter().map(|r| r.value).sum();

    SnapshotResult {
        records,
        timestamp: iso_timestamp(now),
        total,
        data_source: DataSource::Estimated,
    }
}

fn share_of(value: f64, total: f64) -> f64 {
    if total > 0.0 { value / total * 100.0 } else { 0.0 }
}

fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Secs, true)
}
