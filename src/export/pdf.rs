//! Seiten-Assembler: baut aus den Abschnitts-Rastern ein mehrseitiges PDF.
//!
//! Jedes Raster wird zu genau einer Seite mit fester Breite; die Höhe folgt
//! dem Seitenverhältnis des Rasters. Geschrieben wird erst in `finalize` —
//! ein abgebrochener Export hinterlässt keine Teil-Datei.

use anyhow::Context;
use printpdf::{ImageTransform, Mm, PdfDocument, PdfDocumentReference};
use std::path::Path;

const MM_PER_INCH: f64 = 25.4;

/// Wachsendes PDF-Dokument, eine Seite pro übergebenem Raster.
pub struct PageAssembler {
    doc: PdfDocumentReference,
    page_width_mm: f32,
    pages: usize,
}

impl PageAssembler {
    /// Beginnt ein leeres Dokument mit dem angegebenen Titel.
    pub fn new(title: &str, page_width_mm: f32) -> Self {
        Self {
            doc: PdfDocument::empty(title),
            page_width_mm,
            pages: 0,
        }
    }

    /// Hängt das Raster als neue Seite an. Das erste Raster erzeugt die
    /// erste Seite, jedes weitere eine frische Folgeseite — Seitenumbrüche
    /// entstehen also vor jeder Seite außer der ersten.
    pub fn push_page(&mut self, png: &[u8]) -> anyhow::Result<()> {
        let decoded = printpdf::image_crate::load_from_memory_with_format(
            png,
            printpdf::image_crate::ImageFormat::Png,
        )
        .context("Snapshot-Raster nicht dekodierbar")?
        .to_rgb8();
        let (width_px, height_px) = decoded.dimensions();

        let height_mm = page_height_mm(self.page_width_mm, width_px, height_px);
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(self.page_width_mm as f32),
            Mm(height_mm as f32),
            format!("Seite {}", self.pages),
        );

        // DPI so, dass das Raster exakt die Seitenbreite füllt; die Höhe
        // folgt dem Seitenverhältnis und damit der Seitenhöhe.
        let dpi = width_px as f64 * MM_PER_INCH / self.page_width_mm as f64;
        let image = printpdf::Image::from_dynamic_image(
            &printpdf::image_crate::DynamicImage::ImageRgb8(decoded),
        );
        image.add_to_layer(
            self.doc.get_page(page).get_layer(layer),
            ImageTransform {
                dpi: Some(dpi as f32),
                ..Default::default()
            },
        );
        Ok(())
    }

    /// Anzahl der bisher angehängten Seiten.
    pub fn page_count(&self) -> usize {
        self.pages
    }

    /// Serialisiert das Dokument in die Zieldatei und beendet die Session.
    pub fn finalize(self, path: &Path) -> anyhow::Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Zieldatei '{}' nicht anlegbar", path.display()))?;
        let mut writer = std::io::BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .context("PDF-Serialisierung fehlgeschlagen")?;
        Ok(())
    }
}

/// Seitenhöhe aus fester Seitenbreite und Raster-Seitenverhältnis:
/// `page_width * raster_height / raster_width`.
pub fn page_height_mm(page_width_mm: f32, raster_width: u32, raster_height: u32) -> f32 {
    page_width_mm * raster_height as f32 / raster_width as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let raster = image::RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(raster)
            .write_to(
                &mut std::io::Cursor::new(&mut png),
                image::ImageFormat::Png,
            )
            .expect("PNG-Encodierung sollte gelingen");
        png
    }

    #[test]
    fn test_page_height_follows_aspect_ratio() {
        assert_relative_eq!(page_height_mm(210.0, 800, 400), 105.0);
        assert_relative_eq!(
            page_height_mm(210.0, 793, 1122),
            210.0 * 1122.0 / 793.0,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_push_page_counts_pages() {
        let mut assembler = PageAssembler::new("Testdokument", 210.0);
        assert_eq!(assembler.page_count(), 0);

        assembler
            .push_page(&sample_png(40, 30))
            .expect("Seite 1 sollte angehängt werden");
        assembler
            .push_page(&sample_png(40, 60))
            .expect("Seite 2 sollte angehängt werden");

        assert_eq!(assembler.page_count(), 2);
    }

    #[test]
    fn test_push_page_rejects_garbage() {
        let mut assembler = PageAssembler::new("Testdokument", 210.0);

        assert!(assembler.push_page(b"kein png").is_err());
        assert_eq!(assembler.page_count(), 0);
    }

    #[test]
    fn test_finalize_writes_pdf_file() {
        let mut assembler = PageAssembler::new("Testdokument", 210.0);
        assembler
            .push_page(&sample_png(32, 24))
            .expect("Seite sollte angehängt werden");

        let path = std::env::temp_dir().join("portfolio_studio_assembler_test.pdf");
        assembler
            .finalize(&path)
            .expect("Finalisieren sollte gelingen");

        let bytes = std::fs::read(&path).expect("Datei sollte existieren");
        assert!(bytes.starts_with(b"%PDF"));
        let _ = std::fs::remove_file(&path);
    }
}
