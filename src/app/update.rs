// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers driven by
//! `App::update`. Handlers that suspend (photo pick, export) acquire the
//! session busy guard before spawning their task and release it when the
//! completion message arrives.

use super::{LoadedPhoto, Message};
use crate::capability::{Capabilities, CaptureOptions, Composition};
use crate::config;
use crate::error::{Error, Result};
use crate::export::{self, ExportFormat};
use crate::session::{Busy, Session};
use crate::ui::emoji_list;
use crate::ui::emoji_picker;
use crate::ui::notifications::{Manager, Notification};
use iced::widget::image;
use iced::Task;
use std::path::PathBuf;

/// File extensions offered by the photo pick dialog.
const PICK_FILTER: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "gif"];

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub session: &'a mut Session,
    pub photo: &'a mut Option<LoadedPhoto>,
    pub notifications: &'a mut Manager,
    pub capabilities: &'a Capabilities,
    pub config: &'a config::Config,
}

/// Opens the system photo pick dialog.
///
/// Refuses (with a toast) when another suspending operation is in flight.
pub fn handle_pick_image(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.session.begin(Busy::PickingPhoto) {
        ctx.notifications.push(Notification::info("notification-busy"));
        return Task::none();
    }

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .add_filter("Images", PICK_FILTER)
                .pick_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        Message::PickDialogResult,
    )
}

/// Handles the pick dialog outcome: decode the chosen file off the UI
/// thread, or release the busy guard on cancellation.
pub fn handle_pick_dialog_result(
    ctx: &mut UpdateContext<'_>,
    path: Option<PathBuf>,
) -> Task<Message> {
    match path {
        Some(path) => Task::perform(async move { load_photo(path) }, Message::PhotoLoaded),
        None => {
            ctx.session.finish();
            ctx.notifications
                .push(Notification::info("notification-pick-cancelled"));
            Task::none()
        }
    }
}

/// Applies the decoded photo, or surfaces the decode failure. Either way
/// the pick operation is over and the busy guard is released.
pub fn handle_photo_loaded(
    ctx: &mut UpdateContext<'_>,
    result: std::result::Result<LoadedPhoto, Error>,
) -> Task<Message> {
    ctx.session.finish();

    match result {
        Ok(photo) => {
            ctx.session.pick_succeeded(photo.path.clone());
            *ctx.photo = Some(photo);
        }
        Err(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }

    Task::none()
}

/// Routes picker sheet interactions into session transitions.
pub fn handle_picker_message(
    ctx: &mut UpdateContext<'_>,
    message: emoji_picker::Message,
) -> Task<Message> {
    match message {
        emoji_picker::Message::CloseRequested => {
            ctx.session.close_picker();
        }
        emoji_picker::Message::List(list_message) => {
            for event in emoji_list::update(list_message) {
                match event {
                    emoji_list::Event::Selected(id) => {
                        ctx.session.select_sticker(id);
                    }
                    emoji_list::Event::CloseRequested => {
                        ctx.session.close_picker();
                    }
                }
            }
        }
    }

    Task::none()
}

/// Starts the export flow: capture the composition, store it in the
/// pictures library, fall back to a save dialog when the library is
/// unavailable.
pub fn handle_export_image(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if !ctx.session.begin(Busy::Exporting) {
        ctx.notifications.push(Notification::info("notification-busy"));
        return Task::none();
    }

    let composition = Composition {
        photo: ctx.session.selected_image().cloned(),
        sticker: ctx.session.picked_sticker(),
    };
    let options = CaptureOptions {
        height: ctx
            .config
            .export_height
            .unwrap_or(config::DEFAULT_EXPORT_HEIGHT),
        ..CaptureOptions::default()
    };
    let quality = ctx
        .config
        .jpeg_quality
        .unwrap_or(config::DEFAULT_JPEG_QUALITY);
    let capabilities = ctx.capabilities.clone();

    Task::perform(
        async move { export_composition(&capabilities, &composition, &options, quality).await },
        Message::ExportCompleted,
    )
}

/// Applies the export outcome. Success collapses back to the initial
/// footer; any failure keeps the action row so the user can retry.
pub fn handle_export_completed(
    ctx: &mut UpdateContext<'_>,
    result: Result<PathBuf>,
) -> Task<Message> {
    ctx.session.finish();

    match result {
        Ok(path) => {
            ctx.session.reset();
            ctx.notifications.push(
                Notification::success("notification-export-saved")
                    .with_arg("path", path.display().to_string()),
            );
        }
        Err(Error::Cancelled) => {
            ctx.notifications
                .push(Notification::info(Error::Cancelled.i18n_key()));
        }
        Err(error) => {
            ctx.notifications.push(Notification::error(error.i18n_key()));
        }
    }

    Task::none()
}

/// Decodes a picked photo into a display handle.
pub(super) fn load_photo(path: PathBuf) -> std::result::Result<LoadedPhoto, Error> {
    let decoded = image_rs::open(&path)?.to_rgba8();
    let (width, height) = decoded.dimensions();

    Ok(LoadedPhoto {
        handle: image::Handle::from_rgba(width, height, decoded.into_raw()),
        path,
        width,
        height,
    })
}

/// The full export pipeline, run inside a single task.
async fn export_composition(
    capabilities: &Capabilities,
    composition: &Composition,
    options: &CaptureOptions,
    quality: u8,
) -> Result<PathBuf> {
    let image = capabilities.surface.capture(composition, options)?;

    let format = ExportFormat::default();
    let filename = export::generate_default_filename(format);

    match capabilities.library.save(&image, &filename, quality) {
        Ok(path) => Ok(path),
        Err(Error::PermissionDenied) => {
            // Library unavailable: let the user pick a destination instead.
            let picked = rfd::AsyncFileDialog::new()
                .set_file_name(&filename)
                .add_filter("PNG", &["png"])
                .add_filter("JPEG", &["jpg", "jpeg"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf());

            match picked {
                Some(path) => {
                    let format = ExportFormat::from_path_or_default(&path);
                    image.save_to_file(&path, format, quality)?;
                    Ok(path)
                }
                None => Err(Error::Cancelled),
            }
        }
        Err(error) => Err(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn load_photo_decodes_a_real_image() {
        use image_rs::{Rgba, RgbaImage};

        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("photo.png");
        RgbaImage::from_pixel(6, 4, Rgba([10, 20, 30, 255]))
            .save(&path)
            .expect("write png");

        let photo = load_photo(path.clone()).expect("photo should decode");
        assert_eq!(photo.path, path);
        assert_eq!(photo.width, 6);
        assert_eq!(photo.height, 4);
    }

    #[test]
    fn load_photo_reports_decode_errors() {
        let err = load_photo(Path::new("/nonexistent/photo.png").to_path_buf()).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
