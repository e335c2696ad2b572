// SPDX-License-Identifier: MPL-2.0
//! Window/application icon loading.
//! Rasterizes the embedded branding SVG at runtime to produce the RGBA icon
//! for the window title bar. Falls back to `None` if rendering fails.

use crate::assets;
use iced::window::{icon, Icon};

const ICON_SIZE: u32 = 128;

/// Rasterize the embedded SVG icon to a 128x128 RGBA buffer.
/// Returns `None` if parsing or rendering fails.
pub fn load_window_icon() -> Option<Icon> {
    const SVG_SOURCE: &str = include_str!("../assets/branding/iced_sticker.svg");

    let raster = assets::rasterize_svg(SVG_SOURCE.as_bytes(), ICON_SIZE, ICON_SIZE).ok()?;
    icon::from_rgba(raster.pixels, raster.width, raster.height).ok()
}
