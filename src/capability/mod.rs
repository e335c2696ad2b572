// SPDX-License-Identifier: MPL-2.0
//! Capability seams for platform collaborators.
//!
//! The app root drives export and permission handling through these traits
//! instead of branching on the platform inline. Concrete adapters are
//! resolved once at startup by [`resolve`] and injected as trait objects;
//! tests substitute their own implementations.
//!
//! The photo-pick and save-as dialogs stay inline `rfd` tasks in the update
//! handlers; only the capabilities with meaningful alternate
//! implementations live behind a trait.

mod compose;
mod library;

pub use compose::ComposeSurface;
pub use library::{FsPermissionGate, PicturesStore};

use crate::error::Result;
use crate::export::ExportedImage;
use crate::sticker::StickerId;
use std::path::PathBuf;
use std::sync::Arc;

/// Display frame geometry, shared by the on-screen view and the offscreen
/// composition so the export matches what the user sees.
pub const FRAME_WIDTH: u32 = 320;
/// Display frame height.
pub const FRAME_HEIGHT: u32 = 440;
/// Sticker edge length at display scale.
pub const STICKER_SIZE: u32 = 80;
/// Sticker anchor inset from the frame's top-left corner, at display scale.
pub const STICKER_ANCHOR: (u32, u32) = (40, 40);

/// The view to be captured: the base photo (placeholder when `None`) plus
/// an optional sticker overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Composition {
    pub photo: Option<PathBuf>,
    pub sticker: Option<StickerId>,
}

/// Options for [`ExportSurface::capture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureOptions {
    /// Output height in pixels; width follows the frame aspect ratio.
    pub height: u32,
    /// JPEG quality (1-100), carried through to the encoder.
    pub quality: u8,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            height: FRAME_HEIGHT,
            quality: 100,
        }
    }
}

/// Library access permission, probed rather than assumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionStatus {
    /// Not yet probed.
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// Renders a [`Composition`] to pixels, offscreen.
pub trait ExportSurface: Send + Sync {
    /// Composes the base image and sticker overlay at the requested size.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::Capture`] when composition fails and
    /// [`crate::error::Error::Decode`] when the base photo cannot be read.
    fn capture(&self, composition: &Composition, options: &CaptureOptions)
        -> Result<ExportedImage>;
}

/// Stores an exported image in the platform pictures library.
pub trait LibraryStore: Send + Sync {
    /// Writes `image` under the given file name and returns the final path.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::PermissionDenied`] when the library
    /// location is unavailable and [`crate::error::Error::Save`] on write
    /// failure.
    fn save(&self, image: &ExportedImage, filename: &str, quality: u8) -> Result<PathBuf>;
}

/// Reports and requests library access.
pub trait PermissionGate: Send + Sync {
    /// Current status without triggering a probe.
    fn status(&self) -> PermissionStatus;

    /// Probes for access and returns the resulting status. Idempotent; the
    /// app root calls it exactly once per `Unknown` state.
    fn request(&self) -> PermissionStatus;
}

/// The resolved set of collaborators, injected into the app root at startup.
#[derive(Clone)]
pub struct Capabilities {
    pub surface: Arc<dyn ExportSurface>,
    pub library: Arc<dyn LibraryStore>,
    pub permissions: Arc<dyn PermissionGate>,
}

/// Resolves the platform adapters once, at startup.
#[must_use]
pub fn resolve() -> Capabilities {
    let pictures_root = dirs::picture_dir().map(|dir| dir.join("IcedSticker"));
    Capabilities {
        surface: Arc::new(ComposeSurface::new()),
        library: Arc::new(PicturesStore::new(pictures_root.clone())),
        permissions: Arc::new(FsPermissionGate::new(pictures_root)),
    }
}
