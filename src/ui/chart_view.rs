use eframe::egui::{Id, LayerId, Order, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{
    Axis, AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotPoint, PlotPoints, PlotUi,
    Points, VPlacement,
};

use crate::app::ChartEvent;
use crate::config::PLOT_CONFIG;
use crate::domain::{DataPoint, Timeframe};
use crate::ui::ui_text::UI_TEXT;

// Fallback half-window when the zoom domain collapses to a single timestamp
const SINGLE_POINT_WINDOW_MS: f64 = 3_600_000.0;

/// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    nice_step * mag
}

// Helper to build the time axis with timeframe-aware labels
fn create_time_axis(timeframe: Timeframe) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.x_axis_label)
        .formatter(move |mark, _range| timeframe.format_tick(mark.value.round() as i64))
        .placement(VPlacement::Bottom)
}

fn create_value_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.y_axis_label)
        .formatter(|mark, _range| format!("{:.2}", mark.value))
        .placement(HPlacement::Left)
}

/// Draw the main chart. Returns a click event when the pointer resolved to a
/// marker; a click on empty chart area resolves to nothing and stays silent.
pub(crate) fn render_plot(
    ui: &mut Ui,
    working: &[DataPoint],
    timeframe: Timeframe,
    zoom_domain: Option<(i64, i64)>,
    height: f32,
) -> Option<ChartEvent> {
    let (x_min, x_max) = x_bounds(working, zoom_domain);
    let (y_min, y_max) = y_bounds(working);

    let coords: Vec<[f64; 2]> = working
        .iter()
        .map(|p| [p.timestamp_ms as f64, p.value])
        .collect();

    let response = Plot::new("chart")
        .height(height)
        .legend(Legend::default())
        .custom_x_axes(vec![create_time_axis(timeframe)])
        .custom_y_axes(vec![create_value_axis()])
        .label_formatter(|_, _| String::new())
        .x_grid_spacer(|input| {
            let mut marks = Vec::new();
            let (min, max) = input.bounds;
            if max <= min {
                return marks;
            }
            let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_axis_tick_target);

            let start = (min / step).ceil() as i64;
            let end = (max / step).floor() as i64;
            for i in start..=end {
                marks.push(GridMark {
                    value: i as f64 * step,
                    step_size: step,
                });
            }
            marks
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(x_min..=x_max);
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            plot_ui.line(
                Line::new(UI_TEXT.series_name, PlotPoints::new(coords.clone()))
                    .color(PLOT_CONFIG.line_color)
                    .width(PLOT_CONFIG.line_width),
            );
            // Unnamed so the legend carries a single entry for the series
            plot_ui.points(
                Points::new("", PlotPoints::new(coords.clone()))
                    .radius(PLOT_CONFIG.marker_radius)
                    .color(PLOT_CONFIG.marker_color),
            );

            let hovered = find_hovered_point(plot_ui, working);
            if let Some((_, point)) = hovered {
                plot_ui.points(
                    Points::new("", PlotPoints::new(vec![[point.timestamp_ms as f64, point.value]]))
                        .radius(PLOT_CONFIG.active_marker_radius)
                        .color(PLOT_CONFIG.active_marker_color),
                );

                let tooltip_layer = LayerId::new(Order::Tooltip, Id::new("point_tooltips"));
                #[allow(deprecated)]
                show_tooltip_at_pointer(
                    plot_ui.ctx(),
                    tooltip_layer,
                    Id::new("hovered_point"),
                    |ui: &mut Ui| {
                        ui.label(
                            RichText::new(format!(
                                "{}{}",
                                UI_TEXT.tooltip_date_prefix,
                                point.date_string()
                            ))
                            .strong()
                            .color(PLOT_CONFIG.color_text_primary),
                        );
                        ui.label(format!(
                            "{}{}",
                            UI_TEXT.tooltip_value_prefix,
                            point.value_string()
                        ));
                    },
                );
            }
            hovered
        });

    if response.response.clicked() {
        if let Some((index, point)) = response.inner {
            return Some(ChartEvent::PointClicked {
                point,
                index: Some(index),
            });
        }
    }
    None
}

fn x_bounds(working: &[DataPoint], zoom_domain: Option<(i64, i64)>) -> (f64, f64) {
    let (mut x_min, mut x_max) = match zoom_domain {
        Some((start, end)) => (start as f64, end as f64),
        None => {
            let lo = working.first().map_or(0.0, |p| p.timestamp_ms as f64);
            let hi = working.last().map_or(1.0, |p| p.timestamp_ms as f64);
            let pad = (hi - lo).max(1.0) * PLOT_CONFIG.plot_x_padding_pct;
            (lo - pad, hi + pad)
        }
    };
    if x_max - x_min < f64::EPSILON {
        x_min -= SINGLE_POINT_WINDOW_MS;
        x_max += SINGLE_POINT_WINDOW_MS;
    }
    (x_min, x_max)
}

fn y_bounds(working: &[DataPoint]) -> (f64, f64) {
    let (lo, hi) = working
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        });
    let pad = ((hi - lo) * PLOT_CONFIG.plot_y_padding_pct).max(1.0);
    (lo - pad, hi + pad)
}

/// Nearest marker within snapping distance of the pointer, in screen space.
fn find_hovered_point(plot_ui: &PlotUi<'_>, working: &[DataPoint]) -> Option<(usize, DataPoint)> {
    let pointer = plot_ui.pointer_coordinate()?;
    let pointer_screen = plot_ui.screen_from_plot(pointer);

    let mut best: Option<(usize, DataPoint, f32)> = None;
    for (index, point) in working.iter().enumerate() {
        let screen =
            plot_ui.screen_from_plot(PlotPoint::new(point.timestamp_ms as f64, point.value));
        let distance = screen.distance(pointer_screen);
        if distance > PLOT_CONFIG.hover_snap_px {
            continue;
        }
        if best.is_none_or(|(_, _, closest)| distance < closest) {
            best = Some((index, *point, distance));
        }
    }
    best.map(|(index, point, _)| (index, point))
}
