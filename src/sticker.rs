// SPDX-License-Identifier: MPL-2.0
//! The fixed sticker catalog.
//!
//! Five bundled emoji stickers, identified by [`StickerId`]. Display handles
//! are cached per variant so repeated view calls never re-read the embedded
//! asset.

use crate::assets;
use crate::error::Result;
use iced::widget::svg;
use std::sync::OnceLock;

/// Identifier for one of the bundled sticker assets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickerId {
    Grin,
    Wink,
    Cool,
    HeartEyes,
    Party,
}

/// The catalog, in display order.
pub const CATALOG: [StickerId; 5] = [
    StickerId::Grin,
    StickerId::Wink,
    StickerId::Cool,
    StickerId::HeartEyes,
    StickerId::Party,
];

impl StickerId {
    /// File name of the embedded SVG asset.
    #[must_use]
    pub fn asset_file(self) -> &'static str {
        match self {
            StickerId::Grin => "grin.svg",
            StickerId::Wink => "wink.svg",
            StickerId::Cool => "cool.svg",
            StickerId::HeartEyes => "heart_eyes.svg",
            StickerId::Party => "party.svg",
        }
    }

    /// i18n key for the sticker's accessible name.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            StickerId::Grin => "sticker-grin",
            StickerId::Wink => "sticker-wink",
            StickerId::Cool => "sticker-cool",
            StickerId::HeartEyes => "sticker-heart-eyes",
            StickerId::Party => "sticker-party",
        }
    }

    /// Cached SVG handle for the on-screen widget.
    ///
    /// Falls back to an empty handle if the embedded asset is missing, which
    /// cannot happen for catalog variants (covered by tests).
    pub fn svg_handle(self) -> svg::Handle {
        fn cached(cell: &'static OnceLock<svg::Handle>, file: &str) -> svg::Handle {
            cell.get_or_init(|| {
                let bytes = assets::sticker_bytes(file).unwrap_or_default();
                svg::Handle::from_memory(bytes)
            })
            .clone()
        }

        static GRIN: OnceLock<svg::Handle> = OnceLock::new();
        static WINK: OnceLock<svg::Handle> = OnceLock::new();
        static COOL: OnceLock<svg::Handle> = OnceLock::new();
        static HEART_EYES: OnceLock<svg::Handle> = OnceLock::new();
        static PARTY: OnceLock<svg::Handle> = OnceLock::new();

        match self {
            StickerId::Grin => cached(&GRIN, self.asset_file()),
            StickerId::Wink => cached(&WINK, self.asset_file()),
            StickerId::Cool => cached(&COOL, self.asset_file()),
            StickerId::HeartEyes => cached(&HEART_EYES, self.asset_file()),
            StickerId::Party => cached(&PARTY, self.asset_file()),
        }
    }

    /// Rasterizes the sticker to an RGBA square of `size` pixels, for
    /// offscreen composition.
    pub fn rasterize(self, size: u32) -> Result<assets::RasterizedSvg> {
        let bytes = assets::sticker_bytes(self.asset_file())?;
        assets::rasterize_svg(&bytes, size, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_five_distinct_entries() {
        assert_eq!(CATALOG.len(), 5);
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn asset_files_are_unique() {
        let mut files: Vec<_> = CATALOG.iter().map(|s| s.asset_file()).collect();
        files.sort_unstable();
        files.dedup();
        assert_eq!(files.len(), CATALOG.len());
    }

    #[test]
    fn every_catalog_entry_rasterizes() {
        for sticker in CATALOG {
            let raster = sticker.rasterize(80).expect("sticker should rasterize");
            assert_eq!(raster.width, 80);
            assert_eq!(raster.height, 80);
            assert!(raster.pixels.iter().any(|&b| b != 0));
        }
    }

    #[test]
    fn i18n_keys_follow_sticker_prefix() {
        for sticker in CATALOG {
            assert!(sticker.i18n_key().starts_with("sticker-"));
        }
    }
}
