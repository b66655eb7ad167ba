use eframe::egui::{Align2, Context, Order, Window, vec2};

use crate::app::ChartEvent;
use crate::config::PLOT_CONFIG;
use crate::domain::DataPoint;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_text::UI_TEXT;

/// Centered detail dialog for the clicked point. Emits `DetailClosed` for the
/// close button as well as the title-bar close control.
pub(crate) fn render_detail_dialog(ctx: &Context, point: &DataPoint) -> Option<ChartEvent> {
    let mut open = true;
    let mut close_clicked = false;

    Window::new(UI_TEXT.detail_title)
        .collapsible(false)
        .resizable(false)
        .order(Order::Tooltip)
        .anchor(Align2::CENTER_CENTER, vec2(0.0, 0.0))
        .open(&mut open)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.metric(
                UI_TEXT.detail_date_label,
                &point.date_string(),
                PLOT_CONFIG.color_text_primary,
            );
            ui.metric(
                UI_TEXT.detail_value_label,
                &point.value_string(),
                PLOT_CONFIG.color_text_primary,
            );
            ui.add_space(8.0);
            if ui.button(UI_TEXT.detail_close).clicked() {
                close_clicked = true;
            }
        });

    (!open || close_clicked).then_some(ChartEvent::DetailClosed)
}
