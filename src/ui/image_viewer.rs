// SPDX-License-Identifier: MPL-2.0
//! The framed photo at the center of the screen.
//!
//! Shows the chosen photo scaled to cover the fixed frame, or the bundled
//! placeholder scene while no photo has been picked yet.

use crate::assets;
use crate::capability::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::ui::styles;
use iced::widget::{image, svg, Container};
use iced::{ContentFit, Element, Length};

/// Renders the photo frame.
///
/// `photo` is the decoded handle of the currently selected image, if any.
pub fn view<'a, M: 'a>(photo: Option<&image::Handle>) -> Element<'a, M> {
    let content: Element<'a, M> = match photo {
        Some(handle) => image(handle.clone())
            .width(Length::Fixed(FRAME_WIDTH as f32))
            .height(Length::Fixed(FRAME_HEIGHT as f32))
            .content_fit(ContentFit::Cover)
            .into(),
        None => svg::Svg::new(svg::Handle::from_memory(
            assets::PLACEHOLDER_SVG.as_bytes(),
        ))
        .width(Length::Fixed(FRAME_WIDTH as f32))
        .height(Length::Fixed(FRAME_HEIGHT as f32))
        .content_fit(ContentFit::Cover)
        .into(),
    };

    Container::new(content)
        .width(Length::Fixed(FRAME_WIDTH as f32))
        .height(Length::Fixed(FRAME_HEIGHT as f32))
        .clip(true)
        .style(styles::container::photo_frame)
        .into()
}
