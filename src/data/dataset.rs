use anyhow::{Context, Result};
use serde::Deserialize;

use crate::utils::parse_timestamp_ms;

// Embed the bundled dataset
const DATASET_JSON: &str = include_str!("../../assets/data.json");

/// One record as it appears in the JSON document. The timestamp stays in its
/// raw string form here; normalization to epoch milliseconds happens in the
/// transform pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecord {
    pub timestamp: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
struct DataFile {
    data: Vec<serde_json::Value>,
}

/// The full, immutable collection of loaded records. Built once per session.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<RawRecord>,
}

impl Dataset {
    pub fn from_records(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse the embedded JSON document into a [`Dataset`].
///
/// Records that do not deserialize, whose timestamp does not parse, or whose
/// value is not finite are dropped here with a warning - they never reach the
/// chart. Only a document that fails to parse at the top level is an error.
pub fn load_embedded() -> Result<Dataset> {
    let file: DataFile =
        serde_json::from_str(DATASET_JSON).context("Failed to parse embedded dataset")?;
    Ok(Dataset::from_records(sanitize_records(file.data)))
}

fn sanitize_records(raw: Vec<serde_json::Value>) -> Vec<RawRecord> {
    let total = raw.len();
    let records: Vec<RawRecord> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let record: RawRecord = match serde_json::from_value(entry) {
                Ok(record) => record,
                Err(err) => {
                    log::warn!("Dropping malformed record #{}: {}", index, err);
                    return None;
                }
            };
            if parse_timestamp_ms(&record.timestamp).is_none() {
                log::warn!(
                    "Dropping record #{}: unparsable timestamp {:?}",
                    index,
                    record.timestamp
                );
                return None;
            }
            if !record.value.is_finite() {
                log::warn!("Dropping record #{}: non-finite value", index);
                return None;
            }
            Some(record)
        })
        .collect();

    if records.len() < total {
        log::warn!("Kept {} of {} records", records.len(), total);
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_drops_bad_records_and_keeps_good_ones() {
        let raw = vec![
            serde_json::json!({"timestamp": "2024-01-01", "value": 5.0}),
            serde_json::json!({"timestamp": "not a date", "value": 1.0}),
            serde_json::json!({"timestamp": "2024-01-02", "value": "oops"}),
            serde_json::json!({"timestamp": "2024-01-03", "value": 7.5}),
        ];
        let records = sanitize_records(raw);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, "2024-01-01");
        assert_eq!(records[1].value, 7.5);
    }

    #[test]
    fn embedded_dataset_loads() {
        let dataset = load_embedded().expect("bundled dataset must parse");
        assert!(!dataset.is_empty());
    }
}
