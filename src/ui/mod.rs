// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Screens and Components
//!
//! - [`image_viewer`] - The framed photo (or placeholder) at the center
//! - [`emoji_sticker`] - Sticker overlay drawn on top of the photo
//! - [`emoji_picker`] - Bottom sheet the sticker is chosen from
//! - [`emoji_list`] - Horizontal catalog row inside the picker
//! - [`controls`] - Footer and options-row buttons
//! - [`splash`] - Startup splash surface
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod controls;
pub mod design_tokens;
pub mod emoji_list;
pub mod emoji_picker;
pub mod emoji_sticker;
pub mod image_viewer;
pub mod notifications;
pub mod splash;
pub mod styles;
pub mod theming;
