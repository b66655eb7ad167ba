use crate::utils::epoch_ms_to_date_string;

/// One normalized chart point. Timestamps are epoch milliseconds (UTC).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl DataPoint {
    pub fn new(timestamp_ms: i64, value: f64) -> Self {
        Self {
            timestamp_ms,
            value,
        }
    }

    /// Display date for tooltips and the detail dialog.
    pub fn date_string(&self) -> String {
        epoch_ms_to_date_string(self.timestamp_ms)
    }

    /// Display value, fixed to two decimals.
    pub fn value_string(&self) -> String {
        format!("{:.2}", self.value)
    }
}
