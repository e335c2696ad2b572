// SPDX-License-Identifier: MPL-2.0
//! Pure session state for the editing flow.
//!
//! The `Session` owns the four pieces of ephemeral state described by the UI:
//! the selected photo, the picked sticker, the mode gating the action row,
//! and the picker modal visibility. It also carries the busy guard that
//! serializes the two suspending operations (photo pick and export), so the
//! serialization is a real invariant rather than an accident of which
//! controls happen to be visible.
//!
//! The struct is deliberately free of Iced types so the whole state machine
//! can be exercised in plain unit tests.

use crate::sticker::StickerId;
use std::path::PathBuf;

/// Which action row is visible below the photo frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Startup state: footer with "Choose a photo" / "Use this photo".
    #[default]
    Initial,
    /// A photo (or the placeholder, confirmed as-is) is in use: reset /
    /// add-sticker / save row.
    PhotoChosen,
}

/// The operation currently awaiting an external collaborator, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Busy {
    PickingPhoto,
    Exporting,
}

/// Session state owned exclusively by the app root. Never persisted.
#[derive(Debug, Default)]
pub struct Session {
    selected_image: Option<PathBuf>,
    picked_sticker: Option<StickerId>,
    mode: Mode,
    picker_open: bool,
    busy: Option<Busy>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn selected_image(&self) -> Option<&PathBuf> {
        self.selected_image.as_ref()
    }

    #[must_use]
    pub fn picked_sticker(&self) -> Option<StickerId> {
        self.picked_sticker
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[must_use]
    pub fn picker_open(&self) -> bool {
        self.picker_open
    }

    #[must_use]
    pub fn busy(&self) -> Option<Busy> {
        self.busy
    }

    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_some()
    }

    /// Marks the start of a suspending operation.
    ///
    /// Returns `false` (and changes nothing) if another operation is already
    /// in flight; callers must refuse the user action in that case.
    pub fn begin(&mut self, op: Busy) -> bool {
        if self.busy.is_some() {
            return false;
        }
        self.busy = Some(op);
        true
    }

    /// Clears the busy guard once the in-flight operation completed or failed.
    pub fn finish(&mut self) {
        self.busy = None;
    }

    /// Applies a successful photo pick: the photo becomes the base image and
    /// the action row is revealed. The picker modal is left untouched.
    pub fn pick_succeeded(&mut self, path: PathBuf) {
        self.selected_image = Some(path);
        self.mode = Mode::PhotoChosen;
    }

    /// Confirms the current base image (selected photo or placeholder)
    /// without opening the system picker.
    pub fn use_current_photo(&mut self) {
        self.mode = Mode::PhotoChosen;
    }

    /// Returns to the initial footer. The selected photo and the picked
    /// sticker are both retained so the user can try again on the same base.
    pub fn reset(&mut self) {
        self.mode = Mode::Initial;
    }

    pub fn open_picker(&mut self) {
        self.picker_open = true;
    }

    pub fn close_picker(&mut self) {
        self.picker_open = false;
    }

    /// Records the chosen sticker and closes the picker modal.
    ///
    /// Sticker placement requires a base photo: while the mode is still
    /// `Initial` the call is ignored and reports `false`.
    pub fn select_sticker(&mut self, id: StickerId) -> bool {
        if self.mode != Mode::PhotoChosen {
            return false;
        }
        self.picked_sticker = Some(id);
        self.picker_open = false;
        true
    }
}
