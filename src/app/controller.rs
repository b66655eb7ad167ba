//! Interaction state for the chart: filter, zoom window, point selection and
//! the detail dialog. Pure state transitions - no rendering concerns - so the
//! whole surface is testable without a UI.

use crate::data::{Dataset, derive_working_set};
use crate::domain::{DataPoint, Timeframe};
use crate::export::ImageFormat;

/// Everything the render layer can report back to the application. Widgets
/// return these instead of mutating state directly.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    TimeframeSelected(Timeframe),
    FilterChanged(Option<f64>),
    FilterCleared,
    BrushChanged { start_index: usize, end_index: usize },
    BrushCleared,
    PointClicked { point: DataPoint, index: Option<usize> },
    DetailClosed,
    ExportRequested(ImageFormat),
}

pub struct ChartController {
    dataset: Dataset,
    working: Vec<DataPoint>,
    timeframe: Timeframe,
    filter_threshold: Option<f64>,
    zoom_domain: Option<(i64, i64)>,
    selected: Option<(DataPoint, usize)>,
    detail_open: bool,
}

impl ChartController {
    pub fn new(dataset: Dataset) -> Self {
        let working = derive_working_set(dataset.records(), None);
        Self {
            dataset,
            working,
            timeframe: Timeframe::default(),
            filter_threshold: None,
            zoom_domain: None,
            selected: None,
            detail_open: false,
        }
    }

    // --- READ SIDE ---

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn working_set(&self) -> &[DataPoint] {
        &self.working
    }

    pub fn timeframe(&self) -> Timeframe {
        self.timeframe
    }

    pub fn filter_threshold(&self) -> Option<f64> {
        self.filter_threshold
    }

    pub fn zoom_domain(&self) -> Option<(i64, i64)> {
        self.zoom_domain
    }

    pub fn selected_point(&self) -> Option<&DataPoint> {
        self.selected.as_ref().map(|(point, _)| point)
    }

    pub fn detail_open(&self) -> bool {
        self.detail_open
    }

    /// Map the zoom domain back to working-set indices for the brush window.
    /// The working set is in non-decreasing timestamp order.
    pub fn zoom_index_range(&self) -> Option<(usize, usize)> {
        let (start_ts, end_ts) = self.zoom_domain?;
        if self.working.is_empty() {
            return None;
        }
        let start = self
            .working
            .partition_point(|p| p.timestamp_ms < start_ts)
            .min(self.working.len() - 1);
        let end = self
            .working
            .partition_point(|p| p.timestamp_ms <= end_ts)
            .saturating_sub(1);
        Some((start, end.max(start)))
    }

    // --- STATE TRANSITIONS ---

    pub fn apply(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::TimeframeSelected(timeframe) => self.set_timeframe(timeframe),
            ChartEvent::FilterChanged(threshold) => self.set_filter(threshold),
            ChartEvent::FilterCleared => self.clear_filter(),
            ChartEvent::BrushChanged {
                start_index,
                end_index,
            } => self.zoom(Some((start_index, end_index))),
            ChartEvent::BrushCleared => self.zoom(None),
            ChartEvent::PointClicked { point, index } => self.select_point(point, index),
            ChartEvent::DetailClosed => self.close_detail(),
            // Routed to the exporter by the app shell before it reaches us
            ChartEvent::ExportRequested(_) => {}
        }
    }

    /// Label formatting only; the working set is untouched.
    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    /// Replace the filter threshold and rebuild the working set. Any change,
    /// including back to "no filter", invalidates the zoom window.
    pub fn set_filter(&mut self, threshold: Option<f64>) {
        self.filter_threshold = threshold;
        self.recompute_working_set();
    }

    pub fn clear_filter(&mut self) {
        self.set_filter(None);
    }

    /// Translate a brushed index range into a timestamp window. Out-of-range
    /// indices and an empty working set clear the window instead.
    pub fn zoom(&mut self, range: Option<(usize, usize)>) {
        self.zoom_domain = range.and_then(|(a, b)| {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let start = self.working.get(lo)?.timestamp_ms;
            let end = self.working.get(hi)?.timestamp_ms;
            Some((start, end))
        });
    }

    /// A click that resolved to a point opens the detail dialog. A click that
    /// did not (no index) is a no-op.
    pub fn select_point(&mut self, point: DataPoint, index: Option<usize>) {
        let Some(index) = index else {
            return;
        };
        self.selected = Some((point, index));
        self.detail_open = true;
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
        self.selected = None;
    }

    fn recompute_working_set(&mut self) {
        self.working = derive_working_set(self.dataset.records(), self.filter_threshold);
        self.zoom_domain = None;
    }
}
