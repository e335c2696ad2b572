// SPDX-License-Identifier: MPL-2.0
use iced_sticker::capability::{
    CaptureOptions, ComposeSurface, Composition, ExportSurface, FsPermissionGate, LibraryStore,
    PermissionGate, PermissionStatus, PicturesStore, FRAME_HEIGHT, FRAME_WIDTH,
};
use iced_sticker::config::{self, Config, DEFAULT_EXPORT_HEIGHT, DEFAULT_JPEG_QUALITY};
use iced_sticker::i18n::fluent::I18n;
use iced_sticker::session::{Busy, Mode, Session};
use iced_sticker::sticker::StickerId;
use iced_sticker::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        theme_mode: ThemeMode::System,
        export_height: Some(DEFAULT_EXPORT_HEIGHT),
        jpeg_quality: Some(DEFAULT_JPEG_QUALITY),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("button-choose-photo"), "Choose a photo");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        theme_mode: ThemeMode::System,
        export_height: Some(DEFAULT_EXPORT_HEIGHT),
        jpeg_quality: Some(DEFAULT_JPEG_QUALITY),
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_compose_and_store_full_pipeline() {
    use image_rs::{Rgba, RgbaImage};

    let dir = tempdir().expect("Failed to create temporary directory");

    // A real photo on disk to use as the base image.
    let photo_path = dir.path().join("photo.png");
    RgbaImage::from_pixel(640, 880, Rgba([40, 90, 160, 255]))
        .save(&photo_path)
        .expect("Failed to write base photo");

    // Session walks through the whole flow.
    let mut session = Session::new();
    session.pick_succeeded(photo_path.clone());
    session.open_picker();
    assert!(session.select_sticker(StickerId::Cool));
    assert!(session.begin(Busy::Exporting));

    // Capture at the display frame size.
    let surface = ComposeSurface::new();
    let composition = Composition {
        photo: session.selected_image().cloned(),
        sticker: session.picked_sticker(),
    };
    let image = surface
        .capture(&composition, &CaptureOptions::default())
        .expect("Failed to capture composition");
    assert_eq!(image.width, FRAME_WIDTH);
    assert_eq!(image.height, FRAME_HEIGHT);

    // Store it in a library rooted in the temp directory.
    let library_root = dir.path().join("Pictures");
    let store = PicturesStore::new(Some(library_root.clone()));
    let saved_path = store
        .save(&image, "sticker-smash_test.png", DEFAULT_JPEG_QUALITY)
        .expect("Failed to store export");

    assert!(saved_path.starts_with(&library_root));
    let reloaded = image_rs::open(&saved_path).expect("Failed to reopen export");
    assert_eq!(reloaded.width(), FRAME_WIDTH);
    assert_eq!(reloaded.height(), FRAME_HEIGHT);

    session.finish();
    session.reset();
    assert_eq!(session.mode(), Mode::Initial);
}

#[test]
fn test_permission_probe_is_cached() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let gate = FsPermissionGate::new(Some(dir.path().join("Pictures")));

    assert_eq!(gate.status(), PermissionStatus::Unknown);
    assert_eq!(gate.request(), PermissionStatus::Granted);
    assert_eq!(gate.status(), PermissionStatus::Granted);

    // A second request returns the cached outcome without probing again.
    assert_eq!(gate.request(), PermissionStatus::Granted);
}
