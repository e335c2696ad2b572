// SPDX-License-Identifier: MPL-2.0
//! Startup splash surface.
//!
//! An opaque layer with the app mark, stacked above everything until the
//! one-shot startup timer elapses.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{svg, Column, Container, Text};
use iced::{alignment, Element, Length};

const BRANDING_SVG: &str = include_str!("../../assets/branding/iced_sticker.svg");
const MARK_SIZE: f32 = 96.0;

/// Renders the splash layer.
pub fn view<'a, M: 'a>(i18n: &I18n) -> Element<'a, M> {
    let mark = svg::Svg::new(svg::Handle::from_memory(BRANDING_SVG.as_bytes()))
        .width(Length::Fixed(MARK_SIZE))
        .height(Length::Fixed(MARK_SIZE));

    let title = Text::new(i18n.tr("app-title")).size(typography::TITLE);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(mark)
        .push(title);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::splash)
        .into()
}
