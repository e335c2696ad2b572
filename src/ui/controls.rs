// SPDX-License-Identifier: MPL-2.0
//! Footer and options-row buttons.
//!
//! Two footer shapes exist: the full-width labeled button pair shown before a
//! photo is decorated, and the Reset / add-sticker / Save options row shown
//! while editing. Both are stateless render helpers; the caller supplies the
//! messages to emit.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

/// Full-width primary footer button with the yellow emphasis ring.
pub fn primary_button<'a, M: Clone + 'a>(label: String, on_press: Option<M>) -> Element<'a, M> {
    let content = Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut widget = button(content)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::primary);

    if let Some(message) = on_press {
        widget = widget.on_press(message);
    }

    widget.into()
}

/// Full-width secondary footer button, a plain label on the dark surface.
pub fn secondary_button<'a, M: Clone + 'a>(label: String, on_press: Option<M>) -> Element<'a, M> {
    let content = Container::new(Text::new(label).size(typography::BODY))
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center);

    let mut widget = button(content)
        .width(Length::Fixed(sizing::BUTTON_WIDTH))
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .style(styles::button::secondary);

    if let Some(message) = on_press {
        widget = widget.on_press(message);
    }

    widget.into()
}

/// Round yellow button at the center of the options row.
pub fn circle_button<'a, M: Clone + 'a>(on_press: Option<M>) -> Element<'a, M> {
    let glyph = Container::new(Text::new("+").size(sizing::ICON_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let mut widget = button(glyph)
        .width(Length::Fixed(sizing::CIRCLE_BUTTON))
        .height(Length::Fixed(sizing::CIRCLE_BUTTON))
        .style(styles::button::circle);

    if let Some(message) = on_press {
        widget = widget.on_press(message);
    }

    widget.into()
}

/// Icon-above-label button flanking the circle button (Reset, Save).
pub fn icon_button<'a, M: Clone + 'a>(
    glyph: &'a str,
    label: String,
    on_press: Option<M>,
) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(glyph).size(sizing::ICON_MD))
        .push(Text::new(label).size(typography::BODY_SM));

    let mut widget = button(content)
        .padding(spacing::XS)
        .style(styles::button::icon_action);

    if let Some(message) = on_press {
        widget = widget.on_press(message);
    }

    widget.into()
}

/// Footer shown before the photo has been decorated.
pub fn footer<'a, M: Clone + 'a>(
    i18n: &I18n,
    on_choose: Option<M>,
    on_use_photo: Option<M>,
) -> Element<'a, M> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(primary_button(i18n.tr("button-choose-photo"), on_choose))
        .push(secondary_button(
            i18n.tr("button-use-this-photo"),
            on_use_photo,
        ))
        .into()
}

/// Reset / add-sticker / Save row shown while editing.
pub fn options_row<'a, M: Clone + 'a>(
    i18n: &I18n,
    on_reset: Option<M>,
    on_add_sticker: Option<M>,
    on_save: Option<M>,
) -> Element<'a, M> {
    Row::new()
        .spacing(spacing::XL)
        .align_y(alignment::Vertical::Center)
        .push(icon_button("\u{21BA}", i18n.tr("button-reset"), on_reset))
        .push(circle_button(on_add_sticker))
        .push(icon_button("\u{1F4BE}", i18n.tr("button-save"), on_save))
        .into()
}
