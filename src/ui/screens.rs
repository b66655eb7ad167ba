use eframe::egui::{RichText, Ui};

use crate::app::ChartEvent;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

/// Shown when the filter removed every point. Offers the way back.
pub(crate) fn render_empty_state(ui: &mut Ui) -> Option<ChartEvent> {
    let mut event = None;
    ui.centered_and_justified(|ui| {
        ui.set_max_width(300.0);
        ui.vertical(|ui| {
            ui.heading(RichText::new(UI_TEXT.empty_title).color(UI_CONFIG.colors.heading));
            ui.add_space(10.0);
            if ui.button(UI_TEXT.empty_back).clicked() {
                event = Some(ChartEvent::FilterCleared);
            }
        });
    });
    event
}

/// Shown when the bundled dataset itself was unusable.
pub(crate) fn render_load_failed(ui: &mut Ui, message: &str) {
    ui.centered_and_justified(|ui| {
        ui.set_max_width(420.0);
        ui.vertical(|ui| {
            ui.heading(RichText::new(UI_TEXT.load_failed_title).color(UI_CONFIG.colors.heading));
            ui.add_space(10.0);
            ui.label_subdued(message);
        });
    });
}
