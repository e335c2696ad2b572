// SPDX-License-Identifier: MPL-2.0
//! Top-level view composition.
//!
//! Stacks, bottom to top: the main screen (frame + sticker overlay + action
//! row), the picker sheet layer, the toast overlay, and finally the splash
//! surface while the startup timer runs.

use super::{LoadedPhoto, Message};
use crate::capability::{FRAME_HEIGHT, FRAME_WIDTH};
use crate::i18n::fluent::I18n;
use crate::session::{Mode, Session};
use crate::ui::controls;
use crate::ui::design_tokens::spacing;
use crate::ui::emoji_picker;
use crate::ui::emoji_sticker;
use crate::ui::image_viewer;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::splash;
use crate::ui::styles;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Read-only state snapshot the view renders from.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a Session,
    pub photo: Option<&'a LoadedPhoto>,
    pub notifications: &'a Manager,
    pub splash_visible: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(main_screen(&ctx));

    if ctx.session.picker_open() {
        layers = layers.push(emoji_picker::view(ctx.i18n).map(Message::Picker));
    }

    layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));

    if ctx.splash_visible {
        layers = layers.push(splash::view(ctx.i18n));
    }

    layers.into()
}

/// Photo frame plus the action row matching the session mode.
fn main_screen<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let busy = ctx.session.is_busy();

    // Frame with the sticker layered on top at its fixed anchor.
    let mut frame = Stack::new()
        .width(Length::Fixed(FRAME_WIDTH as f32))
        .height(Length::Fixed(FRAME_HEIGHT as f32))
        .push(image_viewer::view(ctx.photo.map(|photo| &photo.handle)));
    if let Some(sticker) = ctx.session.picked_sticker() {
        frame = frame.push(emoji_sticker::view(sticker));
    }

    let actions: Element<'a, Message> = match ctx.session.mode() {
        Mode::Initial => controls::footer(
            ctx.i18n,
            (!busy).then_some(Message::PickImage),
            (!busy).then_some(Message::UseThisPhoto),
        ),
        Mode::PhotoChosen => controls::options_row(
            ctx.i18n,
            (!busy).then_some(Message::Reset),
            (!busy).then_some(Message::AddSticker),
            (!busy).then_some(Message::ExportImage),
        ),
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .push(frame)
        .push(actions);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::root)
        .into()
}
