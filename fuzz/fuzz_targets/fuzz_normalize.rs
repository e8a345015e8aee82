#![no_main]
use libfuzzer_sys::fuzz_target;
use umeme::acquisition::RawPayload;
use umeme::dashboard::last_updated_label;
use umeme::mix::{MixTables, normalize, renewable_share};

fuzz_target!(|data: &[u8]| {
    let Ok(body) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };

    let tables = MixTables::kenya();
    let snap = normalize(RawPayload::from_json(&body), &tables);

    assert!(snap.total.is_finite());
    if !snap.records.is_empty() {
        let sum = snap.percentage_sum();
        assert!((sum - 100.0).abs() <= 1e-6 * 100.0);
    }

    let share = renewable_share(&snap, &tables.renewables);
    assert!((0.0..=100.0).contains(&share));

    let _ = last_updated_label(&snap.timestamp, chrono_tz::Africa::Nairobi);
});
