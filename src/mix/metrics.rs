use serde::Serialize;

use super::tables::RenewableSet;
use super::{PowerRecord, SnapshotResult};

/// Share of generation from renewable sources, in percent.
///
/// Sums the `percentage` of every record whose source is exactly one of the
/// renewable names; clamped to 0..=100 against floating drift.
pub fn renewable_share(snapshot: &SnapshotResult, renewables: &RenewableSet) -> f64 {
    let share: f64 = snapshot
        .records
        .iter()
        .filter(|r| renewables.contains(&r.source))
        .map(|r| r.percentage)
        .sum();
    share.clamp(0.0, 100.0)
}

/// Copy of `records` ordered by share, largest first. Ties keep their
/// original order.
pub fn sorted_by_share(records: &[PowerRecord]) -> Vec<PowerRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));
    sorted
}

/// One row of the "Detailed Breakdown" table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub source: String,
    /// Share rounded to one decimal
    pub share_pct: f64,
    /// Generation rounded to whole MW
    pub generation_mw: f64,
}

pub fn table_rows(records: &[PowerRecord]) -> Vec<TableRow> {
    sorted_by_share(records)
        .into_iter()
        .map(|r| TableRow {
            share_pct: (r.percentage * 10.0).round() / 10.0,
            generation_mw: r.value.round(),
            source: r.source,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(source: &str, value: f64, percentage: f64) -> PowerRecord {
        PowerRecord {
            source: source.to_string(),
            value,
            percentage,
        }
    }

    #[test]
    fn sorting_is_descending_and_stable() {
        let records = vec![
            record("Wind", 10.0, 10.0),
            record("Hydro", 50.0, 50.0),
            record("Solar", 10.0, 10.0),
            record("Geothermal", 30.0, 30.0),
        ];
        let names: Vec<String> = sorted_by_share(&records)
            .into_iter()
            .map(|r| r.source)
            .collect();
        assert_eq!(names, ["Hydro", "Geothermal", "Wind", "Solar"]);
        // input untouched
        assert_eq!(records[0].source, "Wind");
    }

    #[test]
    fn table_rows_round_like_the_dashboard() {
        let rows = table_rows(&[
            record("Hydro", 800.4, 53.333_333),
            record("Geothermal", 699.6, 46.666_667),
        ]);
        assert_eq!(rows[0].source, "Hydro");
        assert_eq!(rows[0].share_pct, 53.3);
        assert_eq!(rows[0].generation_mw, 800.0);
        assert_eq!(rows[1].share_pct, 46.7);
        assert_eq!(rows[1].generation_mw, 700.0);
    }
}
