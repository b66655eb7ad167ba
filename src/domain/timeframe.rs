use strum_macros::{Display, EnumIter};

use crate::utils::{epoch_ms_to_date_string, month_abbrev, month_year_string, week_of_month};

/// Axis label formatting mode.
///
/// This controls tick-label text only. Selecting `Weekly` or `Monthly` does
/// NOT bucket or resample the series; every loaded point stays on the chart.
/// Known limitation, kept deliberately (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter)]
pub enum Timeframe {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// Format one X-axis tick at `epoch_ms`.
    ///
    /// Returns an empty string for timestamps outside chrono's representable
    /// range - the axis can probe arbitrary x values when zoomed far out.
    pub fn format_tick(&self, epoch_ms: i64) -> String {
        match self {
            Timeframe::Daily => epoch_ms_to_date_string(epoch_ms),
            Timeframe::Weekly => match (week_of_month(epoch_ms), month_abbrev(epoch_ms)) {
                (Some(week), Some(month)) => format!("Week {} - {}", week, month),
                _ => String::new(),
            },
            Timeframe::Monthly => month_year_string(epoch_ms).unwrap_or_default(),
        }
    }
}
