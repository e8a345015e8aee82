use umeme::acquisition::{FetchFailure, FetchFailureKind, RawPayload};
use umeme::mix::{DataSource, MixTables, normalize, renewable_share, sorted_by_share};

fn live(
    entries: &[(&str, Option<f64>)],
    datetime: Option<&str>,
) -> Result<RawPayload, FetchFailure> {
    Ok(RawPayload {
        zone: Some("KE".to_string()),
        datetime: datetime.map(str::to_string),
        breakdown: entries
            .iter()
            .map(|(code, v)| (code.to_string(), *v))
            .collect(),
    })
}

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn scenario_a_live_breakdown() {
    let tables = MixTables::kenya();
    let snap = normalize(
        live(
            &[
                ("hydro", Some(800.0)),
                ("geothermal", Some(700.0)),
                ("wind", Some(0.0)),
                ("solar", Some(-5.0)),
            ],
            Some("2024-05-01T12:00:00Z"),
        ),
        &tables,
    );

    assert_eq!(snap.records.len(), 2);
    assert_eq!(snap.records[0].source, "Hydro");
    assert_eq!(snap.records[0].value, 800.0);
    assert_close(snap.records[0].percentage, 53.33, 0.01);
    assert_eq!(snap.records[1].source, "Geothermal");
    assert_eq!(snap.records[1].value, 700.0);
    assert_close(snap.records[1].percentage, 46.67, 0.01);
    assert_eq!(snap.total, 1500.0);
    assert_eq!(snap.data_source, DataSource::Live);
    assert_eq!(snap.timestamp, "2024-05-01T12:00:00Z");
}

#[test]
fn scenario_b_timeout_uses_fallback() {
    let tables = MixTables::kenya();
    let snap = normalize(Err(FetchFailure::timeout("timeout")), &tables);

    assert_eq!(snap.records.len(), 8);
    for (record, (name, pct)) in snap.records.iter().zip(tables.fallback.entries()) {
        assert_eq!(record.source, *name);
        assert_eq!(record.percentage, *pct);
    }
    assert_close(snap.percentage_sum(), 100.0, 1e-9);
    assert_eq!(snap.total, 2800.0);
    assert_eq!(snap.data_source, DataSource::Estimated);
}

#[test]
fn scenario_c_empty_breakdown_matches_fallback() {
    let tables = MixTables::kenya();
    let empty = normalize(live(&[], Some("2024-05-01T12:00:00Z")), &tables);
    let failed = normalize(Err(FetchFailure::timeout("timeout")), &tables);

    assert_eq!(empty.records, failed.records);
    assert_eq!(empty.total, failed.total);
    assert_eq!(empty.data_source, DataSource::Estimated);
}

#[test]
fn scenario_d_fallback_renewable_share() {
    let tables = MixTables::kenya();
    let snap = normalize(Err(FetchFailure::timeout("timeout")), &tables);
    assert_close(renewable_share(&snap, &tables.renewables), 85.1, 1e-9);
}

#[test]
fn live_percentages_sum_to_hundred() {
    let tables = MixTables::kenya();
    let cases: [&[(&str, Option<f64>)]; 5] = [
        &[("hydro", Some(1.0))],
        &[
            ("hydro", Some(812.3)),
            ("geothermal", Some(745.9)),
            ("wind", Some(310.0)),
        ],
        &[("solar", Some(0.001)), ("oil", Some(1e6)), ("tidal", Some(3.3))],
        &[("hydro", Some(f64::MAX)), ("wind", Some(f64::MAX / 2.0))],
        &[
            ("hydro", Some(1.0 / 3.0)),
            ("geothermal", Some(1.0 / 7.0)),
            ("biomass", Some(1.0 / 11.0)),
            ("battery", Some(1.0 / 13.0)),
            ("unknown", Some(2.0 / 17.0)),
        ],
    ];
    for entries in cases {
        let snap = normalize(live(entries, None), &tables);
        let sum = snap.percentage_sum();
        assert!((sum - 100.0).abs() <= 100.0 * 1e-6, "sum was {sum}");
    }
}

#[test]
fn fallback_is_independent_of_cause() {
    let tables = MixTables::kenya();
    let failures = [
        FetchFailure::timeout("timeout"),
        FetchFailure::status(401, Some("Unauthorized")),
        FetchFailure::network("connection refused"),
        FetchFailure::decode("expected value at line 1 column 1"),
        FetchFailure::missing_breakdown("no breakdown"),
        FetchFailure::new(FetchFailureKind::Disabled, ""),
    ];
    let reference = normalize(Err(failures[0].clone()), &tables).records;
    for failure in failures {
        assert_eq!(normalize(Err(failure), &tables).records, reference);
    }
}

#[test]
fn zero_negative_and_absent_values_are_excluded() {
    let tables = MixTables::kenya();
    let snap = normalize(
        live(
            &[
                ("hydro", Some(0.0)),
                ("geothermal", Some(-1.0)),
                ("oil", None),
                ("wind", Some(42.0)),
            ],
            None,
        ),
        &tables,
    );
    let names: Vec<&str> = snap.records.iter().map(|r| r.source.as_str()).collect();
    assert_eq!(names, ["Wind"]);
    assert_eq!(snap.total, 42.0);
}

#[test]
fn unknown_source_is_title_cased() {
    let tables = MixTables::kenya();
    let snap = normalize(
        live(&[("tidal", Some(5.0)), ("oil", Some(5.0))], None),
        &tables,
    );
    assert_eq!(snap.records[0].source, "Tidal");
    assert_eq!(snap.records[1].source, "Thermal (Oil)");
}

#[test]
fn renewable_share_bounded_and_exact() {
    let tables = MixTables::kenya();
    let snap = normalize(
        live(
            &[
                ("hydro", Some(400.0)),
                ("geothermal", Some(300.0)),
                ("oil", Some(200.0)),
                ("battery", Some(50.0)),
                ("tidal", Some(50.0)),
            ],
            None,
        ),
        &tables,
    );
    let share = renewable_share(&snap, &tables.renewables);
    assert!((0.0..=100.0).contains(&share));
    assert_close(share, 70.0, 1e-9);

    let all_renewable = normalize(
        live(&[("hydro", Some(1.0 / 3.0)), ("wind", Some(2.0 / 3.0))], None),
        &tables,
    );
    let share = renewable_share(&all_renewable, &tables.renewables);
    assert!(share <= 100.0);
    assert_close(share, 100.0, 1e-9);

    let none_renewable = normalize(live(&[("oil", Some(10.0))], None), &tables);
    assert_eq!(renewable_share(&none_renewable, &tables.renewables), 0.0);
}

#[test]
fn display_sort_leaves_snapshot_order_alone() {
    let tables = MixTables::kenya();
    let snap = normalize(
        live(
            &[("wind", Some(1.0)), ("hydro", Some(3.0)), ("solar", Some(2.0))],
            None,
        ),
        &tables,
    );
    let sorted: Vec<String> = sorted_by_share(&snap.records)
        .into_iter()
        .map(|r| r.source)
        .collect();
    assert_eq!(sorted, ["Hydro", "Solar", "Wind"]);
    assert_eq!(snap.records[0].source, "Wind");
}
