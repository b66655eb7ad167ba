use eframe::egui::{Align, CentralPanel, Context, Key, Layout, RichText, TopBottomPanel};

use crate::app::state::AppState;
use crate::app::{ChartController, ChartEvent};
use crate::config::PLOT_CONFIG;
use crate::data;
use crate::export::{ExportStatus, Exporter};
use crate::ui::{
    BrushStrip, UI_CONFIG, UI_TEXT, UiStyleExt, render_detail_dialog, render_empty_state,
    render_header, render_load_failed, render_plot, setup_custom_visuals,
};

pub struct App {
    state: AppState,
    // Raw text in the filter box; parsed values flow through ChartEvent
    filter_input: String,
    exporter: Exporter,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let state = match data::load_embedded() {
            Ok(dataset) => {
                log::info!("Loaded {} records from the bundled dataset", dataset.len());
                AppState::Running(ChartController::new(dataset))
            }
            Err(err) => {
                log::error!("Dataset load failed: {:#}", err);
                AppState::LoadFailed(format!("{:#}", err))
            }
        };

        Self {
            state,
            filter_input: String::new(),
            exporter: Exporter::default(),
        }
    }

    fn handle_global_shortcuts(controller: &mut ChartController, ctx: &Context) {
        // Typing in the filter box must not trigger global hotkeys
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            if i.key_pressed(Key::Escape) && controller.detail_open() {
                controller.close_detail();
            }
        });
    }

    fn render_status_panel(exporter: &Exporter, ctx: &Context, shown: usize, total: usize) {
        TopBottomPanel::bottom("status_bar")
            .frame(UI_CONFIG.bottom_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_subdued(format!(
                        "{} / {} {}",
                        shown, total, UI_TEXT.status_points_shown
                    ));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        match exporter.status() {
                            ExportStatus::Idle => {}
                            ExportStatus::Pending(format) => {
                                ui.label_subdued(format!(
                                    "{} {}...",
                                    UI_TEXT.status_export_pending,
                                    format.file_name()
                                ));
                            }
                            ExportStatus::Done(path) => {
                                ui.label(
                                    RichText::new(format!(
                                        "{} {}",
                                        UI_TEXT.status_export_done, path
                                    ))
                                    .color(PLOT_CONFIG.color_success),
                                );
                            }
                            ExportStatus::Failed(message) => {
                                ui.label(
                                    RichText::new(format!(
                                        "{} {}",
                                        UI_TEXT.status_export_failed, message
                                    ))
                                    .color(PLOT_CONFIG.color_warning),
                                );
                            }
                        }
                    });
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.exporter.poll(ctx);

        match &mut self.state {
            AppState::LoadFailed(message) => {
                let message = message.clone();
                CentralPanel::default()
                    .frame(UI_CONFIG.central_panel_frame())
                    .show(ctx, |ui| render_load_failed(ui, &message));
            }
            AppState::Running(controller) => {
                Self::handle_global_shortcuts(controller, ctx);

                let mut events: Vec<ChartEvent> = Vec::new();
                let filter_input = &mut self.filter_input;

                TopBottomPanel::top("header")
                    .frame(UI_CONFIG.top_panel_frame())
                    .show(ctx, |ui| {
                        render_header(ui, controller.timeframe(), filter_input, &mut events);
                    });

                Self::render_status_panel(
                    &self.exporter,
                    ctx,
                    controller.working_set().len(),
                    controller.dataset().len(),
                );

                CentralPanel::default()
                    .frame(UI_CONFIG.central_panel_frame())
                    .show(ctx, |ui| {
                        if controller.working_set().is_empty() {
                            if let Some(event) = render_empty_state(ui) {
                                events.push(event);
                            }
                            return;
                        }

                        let plot_height = (ui.available_height()
                            - PLOT_CONFIG.brush_height
                            - ui.spacing().item_spacing.y)
                            .max(120.0);
                        if let Some(event) = render_plot(
                            ui,
                            controller.working_set(),
                            controller.timeframe(),
                            controller.zoom_domain(),
                            plot_height,
                        ) {
                            events.push(event);
                        }

                        let brush =
                            BrushStrip::new(controller.working_set(), controller.zoom_index_range());
                        if let Some(event) = brush.render(ui) {
                            events.push(event);
                        }
                    });

                if controller.detail_open() {
                    if let Some(point) = controller.selected_point().copied() {
                        if let Some(event) = render_detail_dialog(ctx, &point) {
                            events.push(event);
                        }
                    }
                }

                for event in events {
                    match event {
                        // Capture is an app-shell concern; everything else is
                        // chart state
                        ChartEvent::ExportRequested(format) => self.exporter.request(ctx, format),
                        ChartEvent::FilterCleared => {
                            self.filter_input.clear();
                            controller.apply(ChartEvent::FilterCleared);
                        }
                        other => controller.apply(other),
                    }
                }
            }
        }
    }
}
