//! Pure derivation of the working set from the loaded dataset.
//!
//! Recomputed wholesale whenever the filter threshold changes; callers never
//! patch the previous result.

use crate::data::RawRecord;
use crate::domain::DataPoint;
use crate::utils::parse_timestamp_ms;

/// Normalize every record and apply the optional minimum-value filter.
///
/// Source order is preserved; the records are assumed to already be in
/// non-decreasing timestamp order and are not re-sorted.
pub fn derive_working_set(records: &[RawRecord], threshold: Option<f64>) -> Vec<DataPoint> {
    records
        .iter()
        .filter(|record| threshold.is_none_or(|min| record.value >= min))
        .filter_map(|record| {
            // Unparsable timestamps were already dropped at load time
            let timestamp_ms = parse_timestamp_ms(&record.timestamp)?;
            Some(DataPoint::new(timestamp_ms, record.value))
        })
        .collect()
}
