//! Chart image export.
//!
//! Capture is a screenshot round-trip through the viewport: the request goes
//! out as a viewport command and the pixels arrive as an input event on a
//! later frame. The caller never blocks; the outcome is observable through
//! [`ExportStatus`].

use eframe::egui::Context;
use strum_macros::{Display, EnumIter};

#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::{Context as _, Result},
    eframe::egui::{ColorImage, Event, UserData, ViewportCommand},
    std::sync::Arc,
};

/// Raster formats the chart can be exported as. The lowercase display form
/// drives the output file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    Png,
}

impl ImageFormat {
    pub fn file_name(&self) -> String {
        format!("chart.{}", self)
    }
}

/// Outcome of the most recent export request, shown in the status bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ExportStatus {
    #[default]
    Idle,
    Pending(ImageFormat),
    Done(String),
    Failed(String),
}

#[derive(Default)]
pub struct Exporter {
    status: ExportStatus,
}

impl Exporter {
    pub fn status(&self) -> &ExportStatus {
        &self.status
    }

    /// Ask the viewport for a screenshot. At most one capture is in flight;
    /// further requests are refused until it settles.
    pub fn request(&mut self, ctx: &Context, format: ImageFormat) {
        if let ExportStatus::Pending(pending) = &self.status {
            log::warn!(
                "Ignoring {} export request: {} export still in flight",
                format,
                pending
            );
            return;
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            self.status = ExportStatus::Pending(format);
            ctx.send_viewport_cmd(ViewportCommand::Screenshot(UserData::new(format)));
        }

        #[cfg(target_arch = "wasm32")]
        {
            let _ = ctx;
            self.status =
                ExportStatus::Failed("image export is not available in the browser build".into());
        }
    }

    /// Drain any screenshot event delivered this frame and finish the export.
    /// Call once per frame before rendering.
    pub fn poll(&mut self, ctx: &Context) {
        #[cfg(not(target_arch = "wasm32"))]
        {
            if !matches!(self.status, ExportStatus::Pending(_)) {
                return;
            }

            let shot: Option<(Arc<ColorImage>, Option<ImageFormat>)> = ctx.input(|i| {
                i.events.iter().find_map(|event| match event {
                    Event::Screenshot {
                        image, user_data, ..
                    } => {
                        let format = user_data
                            .data
                            .as_ref()
                            .and_then(|data| data.downcast_ref::<ImageFormat>())
                            .copied();
                        Some((image.clone(), format))
                    }
                    _ => None,
                })
            });

            let Some((image, tagged_format)) = shot else {
                return;
            };
            let format = match (tagged_format, &self.status) {
                (Some(format), _) => format,
                (None, ExportStatus::Pending(format)) => *format,
                _ => return,
            };

            self.status = match write_image(&image, format) {
                Ok(path) => {
                    log::info!("Exported chart to {}", path);
                    ExportStatus::Done(path)
                }
                Err(err) => {
                    log::error!("Chart export failed: {:#}", err);
                    ExportStatus::Failed(format!("{:#}", err))
                }
            };
        }

        #[cfg(target_arch = "wasm32")]
        let _ = ctx;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_image(capture: &ColorImage, format: ImageFormat) -> Result<String> {
    let [width, height] = capture.size;
    let rgba: Vec<u8> = capture
        .pixels
        .iter()
        .flat_map(|pixel| pixel.to_array())
        .collect();

    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .context("Screenshot buffer has unexpected dimensions")?;

    let path = format.file_name();
    match format {
        ImageFormat::Png => buffer
            .save_with_format(&path, image::ImageFormat::Png)
            .with_context(|| format!("Failed to write {}", path))?,
        // JPEG carries no alpha channel
        ImageFormat::Jpg => image::DynamicImage::ImageRgba8(buffer)
            .to_rgb8()
            .save_with_format(&path, image::ImageFormat::Jpeg)
            .with_context(|| format!("Failed to write {}", path))?,
    }
    Ok(path)
}
