// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::capability::PermissionStatus;
use crate::error::Error;
use crate::ui::emoji_picker;
use crate::ui::notifications;
use std::path::PathBuf;
use std::time::Instant;

use super::LoadedPhoto;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// The one-shot startup timer elapsed; drop the splash layer.
    SplashElapsed,
    /// Periodic tick for notification auto-dismiss.
    Tick(Instant),
    /// "Choose a photo" pressed.
    PickImage,
    /// Result from the system photo pick dialog.
    PickDialogResult(Option<PathBuf>),
    /// Result from decoding the picked photo off the UI thread.
    PhotoLoaded(Result<LoadedPhoto, Error>),
    /// "Use this photo" pressed: keep the current base image.
    UseThisPhoto,
    /// Reset pressed: back to the initial footer.
    Reset,
    /// The round add-sticker button pressed: open the picker sheet.
    AddSticker,
    /// Interactions inside the sticker picker sheet.
    Picker(emoji_picker::Message),
    /// Save pressed: capture and store the composition.
    ExportImage,
    /// Result of the whole export flow (capture, store, fallback dialog).
    ExportCompleted(Result<PathBuf, Error>),
    /// Result of the one-shot library permission probe.
    PermissionChecked(PermissionStatus),
    Notification(notifications::NotificationMessage),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo path to preload on startup.
    pub file_path: Option<String>,
}
