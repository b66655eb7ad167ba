use crate::app::ChartController;

/// Outcome of the one-time dataset load. There is no recovery path from a
/// failed load; the app stays on the error screen.
pub(crate) enum AppState {
    Running(ChartController),
    LoadFailed(String),
}
