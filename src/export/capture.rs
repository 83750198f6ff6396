//! Snapshot-Capturer: fordert Screenshots des Viewports an, ordnet sie über
//! einen Tag dem wartenden Abschnitt zu und schneidet sie auf den
//! Seitenbereich zu.
//!
//! Das Raster kommt in der nativen Pixeldichte des Backends an
//! (`pixels_per_point`); der Zuschnitt rechnet Points in Pixel um.

use anyhow::Context;
use std::sync::Arc;

/// Markiert einen Screenshot als Capture für genau einen Abschnitt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureTag {
    /// Index des Abschnitts in der Export-Reihenfolge
    pub section_index: usize,
}

/// Ein eingetroffener, getaggter Screenshot.
#[derive(Clone)]
pub struct CapturedFrame {
    /// Index des Abschnitts, für den der Screenshot angefordert wurde
    pub section_index: usize,
    /// Voller Viewport-Inhalt
    pub image: Arc<egui::ColorImage>,
    /// Pixeldichte zum Zeitpunkt der Aufnahme
    pub pixels_per_point: f32,
}

/// Fordert einen getaggten Screenshot des Viewports an.
/// Das Backend liefert ihn in einem späteren Frame als Event zurück.
pub fn request_capture(ctx: &egui::Context, section_index: usize) {
    ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(egui::UserData::new(
        CaptureTag { section_index },
    )));
}

/// Sammelt alle in diesem Frame eingetroffenen, getaggten Screenshots ein.
pub fn drain_captures(ctx: &egui::Context) -> Vec<CapturedFrame> {
    let pixels_per_point = ctx.pixels_per_point();
    ctx.input(|input| {
        input
            .events
            .iter()
            .filter_map(|event| match event {
                egui::Event::Screenshot {
                    user_data, image, ..
                } => {
                    let tag = user_data.data.as_ref()?.downcast_ref::<CaptureTag>()?;
                    Some(CapturedFrame {
                        section_index: tag.section_index,
                        image: image.clone(),
                        pixels_per_point,
                    })
                }
                _ => None,
            })
            .collect()
    })
}

/// Schneidet den Seitenbereich aus dem Viewport-Screenshot und encodiert
/// ihn verlustfrei als PNG.
pub fn crop_and_encode(
    image: &egui::ColorImage,
    page_rect: egui::Rect,
    pixels_per_point: f32,
) -> anyhow::Result<Vec<u8>> {
    let raster = crop_to_rect(image, page_rect, pixels_per_point)?;
    encode_png(&raster)
}

/// Zuschnitt in Pixelkoordinaten (Points × Pixeldichte, an die
/// Bildgrenzen geklemmt).
pub(crate) fn crop_to_rect(
    image: &egui::ColorImage,
    rect: egui::Rect,
    pixels_per_point: f32,
) -> anyhow::Result<image::RgbaImage> {
    let [image_width, image_height] = image.size;

    let x_min = ((rect.min.x * pixels_per_point).round().max(0.0) as usize).min(image_width);
    let y_min = ((rect.min.y * pixels_per_point).round().max(0.0) as usize).min(image_height);
    let x_max = ((rect.max.x * pixels_per_point).round().max(0.0) as usize).min(image_width);
    let y_max = ((rect.max.y * pixels_per_point).round().max(0.0) as usize).min(image_height);

    let width = x_max.saturating_sub(x_min);
    let height = y_max.saturating_sub(y_min);
    anyhow::ensure!(
        width > 0 && height > 0,
        "Seitenbereich liegt außerhalb des Screenshots"
    );

    let mut raster = image::RgbaImage::new(width as u32, height as u32);
    for y in 0..height {
        for x in 0..width {
            let pixel = image.pixels[(y_min + y) * image_width + (x_min + x)];
            raster.put_pixel(x as u32, y as u32, image::Rgba(pixel.to_array()));
        }
    }
    Ok(raster)
}

/// Verlustfreie PNG-Encodierung des zugeschnittenen Rasters.
pub(crate) fn encode_png(raster: &image::RgbaImage) -> anyhow::Result<Vec<u8>> {
    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(raster.clone())
        .write_to(
            &mut std::io::Cursor::new(&mut png),
            image::ImageFormat::Png,
        )
        .context("PNG-Encodierung des Snapshots fehlgeschlagen")?;
    Ok(png)
}
