#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate
pub use app::{App, ChartController, ChartEvent};
pub use data::{Dataset, RawRecord, derive_working_set, load_embedded};
pub use domain::{DataPoint, Timeframe};
pub use export::{ExportStatus, Exporter, ImageFormat};

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>) -> App {
    App::new(cc)
}
