// SPDX-License-Identifier: MPL-2.0
//! Bottom sheet the sticker is chosen from.
//!
//! Rendered as a full-window layer: a dimming scrim that closes the sheet
//! when clicked, with the sheet itself anchored to the bottom edge.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::emoji_list;
use crate::ui::styles;
use iced::widget::{button, mouse_area, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    CloseRequested,
    List(emoji_list::Message),
}

/// Renders the picker layer: scrim plus bottom sheet.
pub fn view<'a>(i18n: &I18n) -> Element<'a, Message> {
    let close_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(styles::button::picker_close)
        .on_press(Message::CloseRequested);

    let title_row = Row::new()
        .align_y(alignment::Vertical::Center)
        .push(
            Container::new(Text::new(i18n.tr("picker-title")).size(typography::TITLE))
                .width(Length::Fill),
        )
        .push(close_button);

    let sheet_content = Column::new()
        .spacing(spacing::SM)
        .push(title_row)
        .push(emoji_list::view().map(Message::List));

    let sheet = Container::new(sheet_content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::PICKER_HEIGHT))
        .padding(spacing::MD)
        .style(styles::container::picker_sheet);

    // Clicking the dimmed area above the sheet dismisses it.
    let scrim = mouse_area(
        Container::new(iced::widget::Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::scrim),
    )
    .on_press(Message::CloseRequested);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrim)
        .push(sheet)
        .into()
}
