// SPDX-License-Identifier: MPL-2.0
//! Embedded image assets and SVG rasterization.
//!
//! Sticker art and the placeholder background ship as SVG inside the binary
//! so packaging never needs to locate files on disk. The same sources back
//! both the on-screen widgets (via `iced::widget::svg`) and the offscreen
//! composition used for export (rasterized here through `resvg`).

use crate::error::{Error, Result};
use resvg::usvg;
use rust_embed::RustEmbed;

/// Sticker SVG sources, embedded from `assets/stickers/`.
#[derive(RustEmbed)]
#[folder = "assets/stickers/"]
pub struct StickerAsset;

/// Placeholder background shown (and composited) when no photo is selected.
pub const PLACEHOLDER_SVG: &str = include_str!("../assets/backgrounds/placeholder.svg");

/// An RGBA pixel buffer produced by rasterizing an SVG source.
#[derive(Debug, Clone)]
pub struct RasterizedSvg {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Rasterizes SVG data to an RGBA buffer of exactly `width` x `height`.
///
/// The source is stretched to the target size; all bundled assets declare
/// the aspect ratio they are rendered at, so no letterboxing is needed.
pub fn rasterize_svg(data: &[u8], width: u32, height: u32) -> Result<RasterizedSvg> {
    if width == 0 || height == 0 {
        return Err(Error::Capture(format!(
            "invalid raster target {}x{}",
            width, height
        )));
    }

    let tree = usvg::Tree::from_data(data, &usvg::Options::default())
        .map_err(|e| Error::Decode(format!("invalid SVG: {e}")))?;

    let orig_size = tree.size();
    let scale_x = width as f32 / orig_size.width();
    let scale_y = height as f32 / orig_size.height();
    let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Capture("could not allocate pixmap".to_string()))?;

    resvg::render(&tree, transform, &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; the compositor blends straight
    // alpha, so demultiply before handing the buffer over.
    let pixels = pixmap
        .pixels()
        .iter()
        .flat_map(|px| {
            let straight = px.demultiply();
            [
                straight.red(),
                straight.green(),
                straight.blue(),
                straight.alpha(),
            ]
        })
        .collect();

    Ok(RasterizedSvg {
        pixels,
        width,
        height,
    })
}

/// Loads an embedded sticker asset by file name.
pub fn sticker_bytes(file: &str) -> Result<Vec<u8>> {
    StickerAsset::get(file)
        .map(|f| f.data.into_owned())
        .ok_or_else(|| Error::Decode(format!("missing embedded sticker asset: {file}")))
}
