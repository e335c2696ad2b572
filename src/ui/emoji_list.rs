// SPDX-License-Identifier: MPL-2.0
//! Horizontal sticker catalog row inside the picker sheet.
//!
//! Pressing a sticker both selects it and asks the picker to close, in that
//! order, so the selection always lands before the sheet disappears.

use crate::sticker::{StickerId, CATALOG};
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::styles;
use iced::widget::scrollable::{Direction, Scrollbar, Scrollable};
use iced::widget::{button, svg, Row};
use iced::{Element, Length};

/// Raw interactions emitted by the catalog row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    StickerPressed(StickerId),
}

/// Effects the parent applies in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Selected(StickerId),
    CloseRequested,
}

/// Maps a raw interaction into the ordered effects the parent applies.
pub fn update(message: Message) -> Vec<Event> {
    match message {
        Message::StickerPressed(id) => vec![Event::Selected(id), Event::CloseRequested],
    }
}

/// Renders the horizontally scrollable catalog row.
pub fn view<'a>() -> Element<'a, Message> {
    let mut row = Row::new().spacing(spacing::MD).padding(spacing::MD);

    for id in CATALOG {
        let glyph = svg::Svg::new(id.svg_handle())
            .width(Length::Fixed(sizing::PICKER_ITEM))
            .height(Length::Fixed(sizing::PICKER_ITEM));

        row = row.push(
            button(glyph)
                .padding(spacing::XS)
                .style(styles::button::sticker_cell)
                .on_press(Message::StickerPressed(id)),
        );
    }

    Scrollable::new(row)
        .direction(Direction::Horizontal(Scrollbar::new()))
        .width(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressing_a_sticker_selects_then_closes() {
        let events = update(Message::StickerPressed(StickerId::Wink));

        assert_eq!(
            events,
            vec![Event::Selected(StickerId::Wink), Event::CloseRequested]
        );
    }

    #[test]
    fn selection_always_precedes_close() {
        for id in CATALOG {
            let events = update(Message::StickerPressed(id));
            let selected = events
                .iter()
                .position(|e| matches!(e, Event::Selected(_)))
                .unwrap();
            let close = events
                .iter()
                .position(|e| matches!(e, Event::CloseRequested))
                .unwrap();
            assert!(selected < close);
        }
    }
}
