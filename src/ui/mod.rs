mod brush;
mod chart_view;
mod detail_dialog;
mod header;
mod screens;
mod styles;
mod ui_config;
mod ui_text;

pub(crate) use brush::BrushStrip;
pub(crate) use chart_view::render_plot;
pub(crate) use detail_dialog::render_detail_dialog;
pub(crate) use header::render_header;
pub(crate) use screens::{render_empty_state, render_load_failed};
pub(crate) use styles::{UiStyleExt, setup_custom_visuals};
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
