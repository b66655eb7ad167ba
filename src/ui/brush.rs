use eframe::egui::{Rect, Sense, Shape, Stroke, StrokeKind, Ui, pos2, vec2};

use crate::app::ChartEvent;
use crate::config::PLOT_CONFIG;
use crate::domain::DataPoint;

/// Full-width drag-select strip under the plot. Reports the selected index
/// range into the working set; double-click clears the selection.
pub(crate) struct BrushStrip<'a> {
    points: &'a [DataPoint],
    selection: Option<(usize, usize)>,
}

impl<'a> BrushStrip<'a> {
    pub fn new(points: &'a [DataPoint], selection: Option<(usize, usize)>) -> Self {
        Self { points, selection }
    }

    pub fn render(&self, ui: &mut Ui) -> Option<ChartEvent> {
        let width = ui.available_width();
        let (response, painter) =
            ui.allocate_painter(vec2(width, PLOT_CONFIG.brush_height), Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 2.0, PLOT_CONFIG.brush_background);

        if self.points.is_empty() {
            return None;
        }

        self.paint_sparkline(&painter, rect);

        if let Some((start, end)) = self.selection {
            let left = rect.left() + self.index_to_frac(start) * rect.width();
            let right = rect.left() + self.index_to_frac(end) * rect.width();
            let window = Rect::from_min_max(pos2(left, rect.top()), pos2(right, rect.bottom()));
            painter.rect(
                window,
                0.0,
                PLOT_CONFIG.brush_selection_fill,
                Stroke::new(1.0, PLOT_CONFIG.brush_selection_stroke),
                StrokeKind::Inside,
            );
        }

        let mut event = None;

        // Drag anchor survives across frames in temp memory
        let anchor_id = response.id.with("drag_anchor");
        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                ui.data_mut(|d| d.insert_temp(anchor_id, pos.x));
            }
        }

        if response.dragged() || response.drag_stopped() {
            let anchor: Option<f32> = ui.data(|d| d.get_temp(anchor_id));
            if let (Some(anchor_x), Some(pos)) = (anchor, response.interact_pointer_pos()) {
                let a = self.index_at(rect, anchor_x);
                let b = self.index_at(rect, pos.x);
                let (start_index, end_index) = if a <= b { (a, b) } else { (b, a) };
                event = Some(ChartEvent::BrushChanged {
                    start_index,
                    end_index,
                });
            }
        }
        if response.drag_stopped() {
            ui.data_mut(|d| d.remove_temp::<f32>(anchor_id));
        }

        if response.double_clicked() {
            event = Some(ChartEvent::BrushCleared);
        }

        event
    }

    fn paint_sparkline(&self, painter: &eframe::egui::Painter, rect: Rect) {
        let (min_v, max_v) = self
            .points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.value), hi.max(p.value))
            });
        let span = (max_v - min_v).max(f64::EPSILON);

        let line = self
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let fx = self.index_to_frac(i);
                let fy = ((p.value - min_v) / span) as f32;
                pos2(
                    rect.left() + fx * rect.width(),
                    rect.bottom() - 2.0 - fy * (rect.height() - 4.0),
                )
            })
            .collect();
        painter.add(Shape::line(
            line,
            Stroke::new(1.0, PLOT_CONFIG.brush_line_color),
        ));
    }

    fn index_to_frac(&self, index: usize) -> f32 {
        let last = self.points.len().saturating_sub(1);
        if last == 0 {
            0.5
        } else {
            index.min(last) as f32 / last as f32
        }
    }

    fn index_at(&self, rect: Rect, x: f32) -> usize {
        let last = self.points.len().saturating_sub(1);
        let frac = ((x - rect.left()) / rect.width()).clamp(0.0, 1.0);
        (frac * last as f32).round() as usize
    }
}
