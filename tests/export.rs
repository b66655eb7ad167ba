use eframe::egui::Context;
use trendview::{ExportStatus, Exporter, ImageFormat};

#[test]
fn file_names_follow_the_format() {
    assert_eq!(ImageFormat::Jpg.file_name(), "chart.jpg");
    assert_eq!(ImageFormat::Png.file_name(), "chart.png");
}

#[test]
fn display_form_is_lowercase() {
    assert_eq!(ImageFormat::Jpg.to_string(), "jpg");
    assert_eq!(ImageFormat::Png.to_string(), "png");
}

#[test]
fn status_starts_idle() {
    assert_eq!(ExportStatus::default(), ExportStatus::Idle);
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn second_request_while_one_is_pending_is_refused() {
    let ctx = Context::default();
    let mut exporter = Exporter::default();

    exporter.request(&ctx, ImageFormat::Png);
    assert_eq!(exporter.status(), &ExportStatus::Pending(ImageFormat::Png));

    exporter.request(&ctx, ImageFormat::Jpg);
    assert_eq!(exporter.status(), &ExportStatus::Pending(ImageFormat::Png));
}
