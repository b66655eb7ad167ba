use trendview::{RawRecord, derive_working_set};
use trendview::utils::parse_timestamp_ms;

const JAN_1_2024_MS: i64 = 1_704_067_200_000;
const JAN_2_2024_MS: i64 = JAN_1_2024_MS + 86_400_000;

fn record(timestamp: &str, value: f64) -> RawRecord {
    RawRecord {
        timestamp: timestamp.to_string(),
        value,
    }
}

#[test]
fn threshold_keeps_only_passing_points() {
    let records = vec![record("2024-01-01", 5.0), record("2024-01-02", 15.0)];

    let working = derive_working_set(&records, Some(10.0));

    assert_eq!(working.len(), 1);
    assert_eq!(working[0].timestamp_ms, JAN_2_2024_MS);
    assert_eq!(working[0].value, 15.0);
}

#[test]
fn no_threshold_keeps_everything() {
    let records = vec![
        record("2024-01-01", -3.0),
        record("2024-01-02", 0.0),
        record("2024-01-03", 42.5),
    ];

    let working = derive_working_set(&records, None);
    assert_eq!(working.len(), 3);
}

#[test]
fn stricter_threshold_yields_subset() {
    let records: Vec<RawRecord> = (0..20)
        .map(|i| record(&format!("2024-01-{:02}", i + 1), (i as f64) * 1.5 - 4.0))
        .collect();

    for (t1, t2) in [(-10.0, 0.0), (0.0, 5.0), (5.0, 100.0)] {
        let loose = derive_working_set(&records, Some(t1));
        let strict = derive_working_set(&records, Some(t2));
        for point in &strict {
            assert!(
                loose.contains(point),
                "point {:?} passed {} but not {}",
                point,
                t2,
                t1
            );
        }
    }
}

#[test]
fn source_order_is_preserved() {
    let records = vec![
        record("2024-01-01", 9.0),
        record("2024-01-02", 1.0),
        record("2024-01-03", 9.0),
    ];

    let working = derive_working_set(&records, None);
    let timestamps: Vec<i64> = working.iter().map(|p| p.timestamp_ms).collect();
    let mut sorted = timestamps.clone();
    sorted.sort();
    assert_eq!(timestamps, sorted);
}

#[test]
fn normalization_is_idempotent_on_numeric_epochs() {
    assert_eq!(
        parse_timestamp_ms(&JAN_1_2024_MS.to_string()),
        Some(JAN_1_2024_MS)
    );

    // The numeric form survives a trip through the pipeline unchanged
    let records = vec![record(&JAN_1_2024_MS.to_string(), 1.0)];
    let working = derive_working_set(&records, None);
    assert_eq!(working[0].timestamp_ms, JAN_1_2024_MS);
}

#[test]
fn calendar_and_rfc3339_forms_parse() {
    assert_eq!(parse_timestamp_ms("2024-01-01"), Some(JAN_1_2024_MS));
    assert_eq!(
        parse_timestamp_ms("2024-01-01T12:00:00+00:00"),
        Some(JAN_1_2024_MS + 12 * 3_600_000)
    );
    assert_eq!(parse_timestamp_ms("not a date"), None);
    assert_eq!(parse_timestamp_ms(""), None);
}

#[test]
fn unparsable_timestamps_are_skipped() {
    let records = vec![record("2024-01-01", 1.0), record("garbage", 2.0)];
    let working = derive_working_set(&records, None);
    assert_eq!(working.len(), 1);
}
