// SPDX-License-Identifier: MPL-2.0
//! Encoding and file naming for exported compositions.

use crate::error::{Error, Result};
use image_rs::{ImageBuffer, ImageFormat, Rgba};
use std::fs;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;

/// Supported output formats for exported images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// PNG (lossless). Default.
    #[default]
    Png,
    /// JPEG (lossy, honors the quality setting).
    Jpeg,
}

impl ExportFormat {
    /// Returns the file extension for this format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }

    /// Detects format from a file extension.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<ExportFormat> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ExportFormat::Png),
            "jpg" | "jpeg" => Some(ExportFormat::Jpeg),
            _ => None,
        }
    }

    /// Detects format from a file path, falling back to the default.
    #[must_use]
    pub fn from_path_or_default(path: &Path) -> ExportFormat {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }
}

/// A composed image ready to be written to disk.
///
/// Pixels are shared via `Arc` so the image can cross task boundaries
/// without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedImage {
    /// RGBA pixel data.
    pub rgba: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
}

impl ExportedImage {
    #[must_use]
    pub fn new(rgba: Arc<Vec<u8>>, width: u32, height: u32) -> Self {
        Self {
            rgba,
            width,
            height,
        }
    }

    /// Writes the image to `path` in the given format.
    ///
    /// JPEG output drops the alpha channel and honors `quality` (1-100);
    /// PNG is always lossless and ignores it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] if encoding or writing fails.
    pub fn save_to_file(&self, path: &Path, format: ExportFormat, quality: u8) -> Result<()> {
        let img: ImageBuffer<Rgba<u8>, _> =
            ImageBuffer::from_raw(self.width, self.height, (*self.rgba).clone())
                .ok_or_else(|| Error::Save("pixel buffer does not match dimensions".to_string()))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::Save(e.to_string()))?;
        }

        match format {
            ExportFormat::Png => img
                .save_with_format(path, ImageFormat::Png)
                .map_err(|e| Error::Save(e.to_string()))?,
            ExportFormat::Jpeg => {
                let rgb = image_rs::DynamicImage::ImageRgba8(img).to_rgb8();
                let file = fs::File::create(path).map_err(|e| Error::Save(e.to_string()))?;
                let writer = BufWriter::new(file);
                let encoder = image_rs::codecs::jpeg::JpegEncoder::new_with_quality(
                    writer,
                    quality.clamp(1, 100),
                );
                rgb.write_with_encoder(encoder)
                    .map_err(|e| Error::Save(e.to_string()))?;
            }
        }

        Ok(())
    }
}

/// Generates a timestamped default filename for an export.
///
/// Format: `sticker-smash_YYYYMMDD-HHMMSS.{ext}` so repeated exports never
/// clobber each other.
#[must_use]
pub fn generate_default_filename(format: ExportFormat) -> String {
    let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    format!("sticker-smash_{}.{}", stamp, format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn solid_image(width: u32, height: u32) -> ExportedImage {
        ExportedImage::new(Arc::new(vec![200u8; (width * height * 4) as usize]), width, height)
    }

    #[test]
    fn export_format_extensions() {
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
    }

    #[test]
    fn export_format_from_extension() {
        assert_eq!(ExportFormat::from_extension("PNG"), Some(ExportFormat::Png));
        assert_eq!(ExportFormat::from_extension("jpeg"), Some(ExportFormat::Jpeg));
        assert_eq!(ExportFormat::from_extension("webp"), None);
    }

    #[test]
    fn from_path_falls_back_to_png() {
        assert_eq!(
            ExportFormat::from_path_or_default(&PathBuf::from("out.dat")),
            ExportFormat::Png
        );
        assert_eq!(
            ExportFormat::from_path_or_default(&PathBuf::from("out.JPG")),
            ExportFormat::Jpeg
        );
    }

    #[test]
    fn default_filename_has_stem_and_extension() {
        let name = generate_default_filename(ExportFormat::Jpeg);
        assert!(name.starts_with("sticker-smash_"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn save_rejects_mismatched_buffer() {
        let image = ExportedImage::new(Arc::new(vec![0u8; 7]), 10, 10);
        let dir = tempfile::tempdir().expect("temp dir");
        let err = image
            .save_to_file(&dir.path().join("bad.png"), ExportFormat::Png, 100)
            .unwrap_err();
        assert!(matches!(err, Error::Save(_)));
    }

    #[test]
    fn save_writes_png_and_jpeg() {
        let image = solid_image(16, 20);
        let dir = tempfile::tempdir().expect("temp dir");

        let png_path = dir.path().join("out.png");
        image
            .save_to_file(&png_path, ExportFormat::Png, 100)
            .expect("png save");
        let reloaded = image_rs::open(&png_path).expect("png reopen");
        assert_eq!(reloaded.width(), 16);
        assert_eq!(reloaded.height(), 20);

        let jpg_path = dir.path().join("out.jpg");
        image
            .save_to_file(&jpg_path, ExportFormat::Jpeg, 90)
            .expect("jpeg save");
        assert!(jpg_path.exists());
    }

    #[test]
    fn save_creates_parent_directories() {
        let image = solid_image(4, 4);
        let dir = tempfile::tempdir().expect("temp dir");
        let nested = dir.path().join("deep").join("path").join("out.png");
        image
            .save_to_file(&nested, ExportFormat::Png, 100)
            .expect("save should create parents");
        assert!(nested.exists());
    }
}
