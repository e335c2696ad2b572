// SPDX-License-Identifier: MPL-2.0
//! Offscreen composition of the photo frame.
//!
//! This is the native rendition of "capture the composed view": the base
//! image is cover-scaled into the 320x440 frame geometry, the sticker is
//! rasterized from its SVG source, and both are flattened into one RGBA
//! buffer at the requested output height.

use super::{
    CaptureOptions, Composition, ExportSurface, FRAME_HEIGHT, FRAME_WIDTH, STICKER_ANCHOR,
    STICKER_SIZE,
};
use crate::assets;
use crate::error::{Error, Result};
use crate::export::ExportedImage;
use image_rs::imageops;
use std::sync::Arc;

/// [`ExportSurface`] adapter backed by the `image` crate.
#[derive(Debug, Default)]
pub struct ComposeSurface;

impl ComposeSurface {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Loads the base layer at `width` x `height`: the selected photo
    /// cover-scaled and center-cropped, or the rasterized placeholder.
    fn base_layer(
        composition: &Composition,
        width: u32,
        height: u32,
    ) -> Result<image_rs::RgbaImage> {
        match &composition.photo {
            Some(path) => {
                let photo = image_rs::open(path)?;
                Ok(photo
                    .resize_to_fill(width, height, imageops::FilterType::Lanczos3)
                    .to_rgba8())
            }
            None => {
                let raster = assets::rasterize_svg(assets::PLACEHOLDER_SVG.as_bytes(), width, height)?;
                image_rs::RgbaImage::from_raw(raster.width, raster.height, raster.pixels)
                    .ok_or_else(|| Error::Capture("placeholder raster mismatch".to_string()))
            }
        }
    }
}

impl ExportSurface for ComposeSurface {
    fn capture(
        &self,
        composition: &Composition,
        options: &CaptureOptions,
    ) -> Result<ExportedImage> {
        if options.height == 0 {
            return Err(Error::Capture("capture height must be positive".to_string()));
        }

        // Output keeps the frame aspect ratio; everything else scales with it.
        let scale = options.height as f64 / FRAME_HEIGHT as f64;
        let out_height = options.height;
        let out_width = ((FRAME_WIDTH as f64) * scale).round().max(1.0) as u32;

        let mut canvas = Self::base_layer(composition, out_width, out_height)?;

        if let Some(sticker) = composition.sticker {
            let sticker_size = ((STICKER_SIZE as f64) * scale).round().max(1.0) as u32;
            let raster = sticker.rasterize(sticker_size)?;
            let overlay =
                image_rs::RgbaImage::from_raw(raster.width, raster.height, raster.pixels)
                    .ok_or_else(|| Error::Capture("sticker raster mismatch".to_string()))?;

            let x = ((STICKER_ANCHOR.0 as f64) * scale).round() as i64;
            let y = ((STICKER_ANCHOR.1 as f64) * scale).round() as i64;
            imageops::overlay(&mut canvas, &overlay, x, y);
        }

        let (width, height) = canvas.dimensions();
        Ok(ExportedImage::new(Arc::new(canvas.into_raw()), width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sticker::StickerId;
    use std::path::PathBuf;

    fn write_test_photo(dir: &std::path::Path, width: u32, height: u32) -> PathBuf {
        let path = dir.join("photo.png");
        let img = image_rs::RgbaImage::from_pixel(width, height, image_rs::Rgba([10, 120, 60, 255]));
        img.save(&path).expect("write test photo");
        path
    }

    #[test]
    fn capture_without_photo_uses_placeholder_at_frame_aspect() {
        let surface = ComposeSurface::new();
        let image = surface
            .capture(&Composition::default(), &CaptureOptions::default())
            .expect("capture");
        assert_eq!(image.height, FRAME_HEIGHT);
        assert_eq!(image.width, FRAME_WIDTH);
    }

    #[test]
    fn capture_scales_output_to_requested_height() {
        let surface = ComposeSurface::new();
        let options = CaptureOptions {
            height: 880,
            quality: 100,
        };
        let image = surface
            .capture(&Composition::default(), &options)
            .expect("capture");
        assert_eq!(image.height, 880);
        assert_eq!(image.width, 640); // 320/440 aspect, doubled
    }

    #[test]
    fn capture_cover_crops_the_photo_to_the_frame() {
        let dir = tempfile::tempdir().expect("temp dir");
        // Wide landscape photo; cover-scaling must crop it to 320x440.
        let photo = write_test_photo(dir.path(), 1000, 200);

        let surface = ComposeSurface::new();
        let composition = Composition {
            photo: Some(photo),
            sticker: None,
        };
        let image = surface
            .capture(&composition, &CaptureOptions::default())
            .expect("capture");
        assert_eq!((image.width, image.height), (FRAME_WIDTH, FRAME_HEIGHT));
    }

    #[test]
    fn sticker_overlay_changes_pixels_at_the_anchor() {
        let dir = tempfile::tempdir().expect("temp dir");
        let photo = write_test_photo(dir.path(), 320, 440);
        let surface = ComposeSurface::new();

        let plain = surface
            .capture(
                &Composition {
                    photo: Some(photo.clone()),
                    sticker: None,
                },
                &CaptureOptions::default(),
            )
            .expect("plain capture");
        let decorated = surface
            .capture(
                &Composition {
                    photo: Some(photo),
                    sticker: Some(StickerId::Grin),
                },
                &CaptureOptions::default(),
            )
            .expect("decorated capture");

        assert_eq!(plain.width, decorated.width);
        assert_ne!(plain.rgba, decorated.rgba);

        // Center of the sticker square must differ from the flat photo color.
        let cx = STICKER_ANCHOR.0 + STICKER_SIZE / 2;
        let cy = STICKER_ANCHOR.1 + STICKER_SIZE / 2;
        let idx = ((cy * decorated.width + cx) * 4) as usize;
        assert_ne!(&decorated.rgba[idx..idx + 3], &plain.rgba[idx..idx + 3]);
    }

    #[test]
    fn capture_reports_decode_error_for_missing_photo() {
        let surface = ComposeSurface::new();
        let composition = Composition {
            photo: Some(PathBuf::from("/nonexistent/photo.png")),
            sticker: None,
        };
        let err = surface
            .capture(&composition, &CaptureOptions::default())
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn capture_rejects_zero_height() {
        let surface = ComposeSurface::new();
        let options = CaptureOptions {
            height: 0,
            quality: 100,
        };
        let err = surface
            .capture(&Composition::default(), &options)
            .unwrap_err();
        assert!(matches!(err, Error::Capture(_)));
    }
}
