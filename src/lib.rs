// SPDX-License-Identifier: MPL-2.0
//! `iced_sticker` is a small photo decoration app built with the Iced GUI
//! framework.
//!
//! Pick a photo, drop one of the bundled emoji stickers on it, and save the
//! composite to the pictures library. The crate demonstrates
//! internationalization with Fluent, user preference management, and modular
//! UI design.

#![doc(html_root_url = "https://docs.rs/iced_sticker/0.1.0")]

pub mod app;
pub mod assets;
pub mod capability;
pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod icon;
pub mod session;
pub mod sticker;
pub mod ui;
