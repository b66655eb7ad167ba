use eframe::egui::{Align, Button, Layout, RichText, TextEdit, Ui};
use strum::IntoEnumIterator;

use crate::app::ChartEvent;
use crate::domain::Timeframe;
use crate::export::ImageFormat;
use crate::ui::ui_config::UI_CONFIG;
use crate::ui::ui_text::UI_TEXT;

/// Title row with the timeframe selector, then the filter/export row.
pub(crate) fn render_header(
    ui: &mut Ui,
    active_timeframe: Timeframe,
    filter_input: &mut String,
    events: &mut Vec<ChartEvent>,
) {
    ui.horizontal(|ui| {
        ui.heading(RichText::new(UI_TEXT.app_title).color(UI_CONFIG.colors.heading));

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            // right_to_left lays widgets out from the right edge, so add in
            // reverse to keep the Daily / Weekly / Monthly reading order
            for timeframe in Timeframe::iter().collect::<Vec<_>>().into_iter().rev() {
                let is_active = timeframe == active_timeframe;
                let label = timeframe.to_string();
                let button = if is_active {
                    Button::new(label)
                        .fill(ui.visuals().selection.bg_fill)
                        .stroke(ui.visuals().selection.stroke)
                } else {
                    Button::new(label)
                };
                // Re-selecting the active timeframe is a no-op
                if ui.add(button).clicked() && !is_active {
                    events.push(ChartEvent::TimeframeSelected(timeframe));
                }
            }
        });
    });

    ui.add_space(4.0);

    ui.horizontal(|ui| {
        ui.label(UI_TEXT.filter_label);
        let response = ui.add(
            TextEdit::singleline(filter_input)
                .hint_text(UI_TEXT.filter_placeholder)
                .desired_width(90.0),
        );
        if response.changed() {
            match parse_filter_input(filter_input) {
                Some(threshold) => events.push(ChartEvent::FilterChanged(threshold)),
                // Partially-typed numbers apply no change until they parse
                None => {}
            }
        }

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if ui.button(UI_TEXT.export_png).clicked() {
                events.push(ChartEvent::ExportRequested(ImageFormat::Png));
            }
            if ui.button(UI_TEXT.export_jpg).clicked() {
                events.push(ChartEvent::ExportRequested(ImageFormat::Jpg));
            }
        });
    });
}

/// Empty input clears the filter; a finite number sets it; anything else is
/// not a filter change at all.
fn parse_filter_input(input: &str) -> Option<Option<f64>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(Some(value)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_filter_input;

    #[test]
    fn filter_input_parsing() {
        assert_eq!(parse_filter_input(""), Some(None));
        assert_eq!(parse_filter_input("  "), Some(None));
        assert_eq!(parse_filter_input("12.5"), Some(Some(12.5)));
        assert_eq!(parse_filter_input("-3"), Some(Some(-3.0)));
        assert_eq!(parse_filter_input("12."), Some(Some(12.0)));
        assert_eq!(parse_filter_input("abc"), None);
        assert_eq!(parse_filter_input("NaN"), None);
    }
}
