// SPDX-License-Identifier: MPL-2.0
//! Sticker overlay drawn on top of the photo.
//!
//! The sticker sits at a fixed anchor inside the frame, mirroring where the
//! export pipeline composites it, so the preview matches the saved file.

use crate::capability::{STICKER_ANCHOR, STICKER_SIZE};
use crate::sticker::StickerId;
use iced::widget::{svg, Container};
use iced::{Element, Length, Padding};

/// Renders the sticker overlay layer for the frame stack.
pub fn view<'a, M: 'a>(sticker: StickerId) -> Element<'a, M> {
    let (x, y) = STICKER_ANCHOR;

    let glyph = svg::Svg::new(sticker.svg_handle())
        .width(Length::Fixed(STICKER_SIZE as f32))
        .height(Length::Fixed(STICKER_SIZE as f32));

    Container::new(glyph)
        .padding(Padding {
            top: y as f32,
            left: x as f32,
            ..Padding::ZERO
        })
        .into()
}
