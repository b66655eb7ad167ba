//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Stroke color of the data line.
    pub line_color: Color32,
    /// Width of the data line.
    pub line_width: f32,
    /// Radius of the per-point markers.
    pub marker_radius: f32,
    /// Radius of the marker under the cursor (hover emphasis).
    pub active_marker_radius: f32,
    /// Marker fill.
    pub marker_color: Color32,
    /// Marker fill for the hovered point.
    pub active_marker_color: Color32,

    /// X-axis padding applied either side of the data extent (fraction of range).
    pub plot_x_padding_pct: f64,
    /// Y-axis padding above and below the data extent (fraction of range).
    pub plot_y_padding_pct: f64,
    /// Target number of X-axis tick labels.
    pub x_axis_tick_target: f64,

    /// Max pointer distance (pixels) for hover/click snapping to a marker.
    pub hover_snap_px: f32,

    /// Height of the brush strip under the plot.
    pub brush_height: f32,
    /// Sparkline color inside the brush strip.
    pub brush_line_color: Color32,
    /// Fill of the active brush selection window.
    pub brush_selection_fill: Color32,
    /// Outline of the active brush selection window.
    pub brush_selection_stroke: Color32,
    /// Brush strip background.
    pub brush_background: Color32,

    // --- SEMANTIC COLORS ---
    pub color_text_primary: Color32,
    pub color_text_subdued: Color32,
    pub color_warning: Color32,
    pub color_success: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    line_color: Color32::from_rgb(100, 170, 255),
    line_width: 1.6,
    marker_radius: 2.5,
    active_marker_radius: 4.0,
    marker_color: Color32::from_rgb(100, 170, 255),
    active_marker_color: Color32::from_rgb(255, 210, 80),

    plot_x_padding_pct: 0.015,
    plot_y_padding_pct: 0.05,
    x_axis_tick_target: 5.0,

    hover_snap_px: 24.0,

    brush_height: 30.0,
    brush_line_color: Color32::from_rgb(100, 170, 255),
    brush_selection_fill: Color32::from_rgba_premultiplied(60, 100, 150, 60),
    brush_selection_stroke: Color32::from_rgb(140, 190, 255),
    brush_background: Color32::from_rgb(20, 20, 24),

    color_text_primary: Color32::from_rgb(220, 220, 220),
    color_text_subdued: Color32::from_rgb(140, 140, 140),
    color_warning: Color32::from_rgb(255, 140, 80),
    color_success: Color32::from_rgb(120, 200, 120),
};
