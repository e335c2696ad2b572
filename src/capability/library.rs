// SPDX-License-Identifier: MPL-2.0
//! Filesystem adapters for the pictures library.

use super::{LibraryStore, PermissionGate, PermissionStatus};
use crate::error::{Error, Result};
use crate::export::{ExportFormat, ExportedImage};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Probes write access to the pictures directory.
///
/// Desktop platforms have no modal permission prompt; "requesting" access
/// means creating the app's library folder and verifying it is writable.
/// The result is cached so the probe runs once per `Unknown` state.
pub struct FsPermissionGate {
    root: Option<PathBuf>,
    state: Mutex<PermissionStatus>,
}

impl FsPermissionGate {
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root,
            state: Mutex::new(PermissionStatus::Unknown),
        }
    }

    fn probe(&self) -> PermissionStatus {
        let Some(root) = &self.root else {
            return PermissionStatus::Denied;
        };
        if fs::create_dir_all(root).is_err() {
            return PermissionStatus::Denied;
        }
        let probe_path = root.join(".write-probe");
        match fs::write(&probe_path, b"probe") {
            Ok(()) => {
                let _ = fs::remove_file(&probe_path);
                PermissionStatus::Granted
            }
            Err(_) => PermissionStatus::Denied,
        }
    }
}

impl PermissionGate for FsPermissionGate {
    fn status(&self) -> PermissionStatus {
        *self.state.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn request(&self) -> PermissionStatus {
        let mut state = self
            .state
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if *state == PermissionStatus::Unknown {
            *state = self.probe();
        }
        *state
    }
}

/// Writes exports into the platform pictures directory.
pub struct PicturesStore {
    root: Option<PathBuf>,
}

impl PicturesStore {
    #[must_use]
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }
}

impl LibraryStore for PicturesStore {
    fn save(&self, image: &ExportedImage, filename: &str, quality: u8) -> Result<PathBuf> {
        let root = self.root.as_ref().ok_or(Error::PermissionDenied)?;
        fs::create_dir_all(root).map_err(|_| Error::PermissionDenied)?;

        let path = root.join(filename);
        let format = ExportFormat::from_path_or_default(&path);
        image.save_to_file(&path, format, quality)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn tiny_image() -> ExportedImage {
        ExportedImage::new(Arc::new(vec![255u8; 4 * 8 * 8]), 8, 8)
    }

    #[test]
    fn gate_without_root_denies() {
        let gate = FsPermissionGate::new(None);
        assert_eq!(gate.status(), PermissionStatus::Unknown);
        assert_eq!(gate.request(), PermissionStatus::Denied);
        assert_eq!(gate.status(), PermissionStatus::Denied);
    }

    #[test]
    fn gate_grants_on_writable_directory() {
        let dir = tempfile::tempdir().expect("temp dir");
        let gate = FsPermissionGate::new(Some(dir.path().join("library")));
        assert_eq!(gate.request(), PermissionStatus::Granted);
    }

    #[test]
    fn gate_probe_result_is_cached() {
        let dir = tempfile::tempdir().expect("temp dir");
        let root = dir.path().join("library");
        let gate = FsPermissionGate::new(Some(root.clone()));

        assert_eq!(gate.request(), PermissionStatus::Granted);

        // Removing the directory after the probe must not flip the cached
        // status; request() is one-shot per Unknown state.
        fs::remove_dir_all(&root).expect("remove library dir");
        assert_eq!(gate.request(), PermissionStatus::Granted);
        assert_eq!(gate.status(), PermissionStatus::Granted);
    }

    #[test]
    fn store_saves_into_root_and_returns_path() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = PicturesStore::new(Some(dir.path().join("IcedSticker")));

        let path = store
            .save(&tiny_image(), "sticker-smash_test.png", 100)
            .expect("save");
        assert!(path.exists());
        assert!(path.ends_with("IcedSticker/sticker-smash_test.png"));
    }

    #[test]
    fn store_without_root_reports_permission_denied() {
        let store = PicturesStore::new(None);
        let err = store.save(&tiny_image(), "out.png", 100).unwrap_err();
        assert_eq!(err, Error::PermissionDenied);
    }

    #[test]
    fn store_picks_format_from_filename() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = PicturesStore::new(Some(dir.path().to_path_buf()));
        let path = store
            .save(&tiny_image(), "out.jpg", 80)
            .expect("jpeg save");
        let reloaded = image_rs::open(&path).expect("reopen");
        assert_eq!(reloaded.width(), 8);
    }
}
