// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary footer button: white pill inside a yellow emphasis ring.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(WHITE)),
            text_color: palette::SURFACE_900,
            border: Border {
                color: palette::ACCENT_500,
                width: border::WIDTH_LG,
                radius: radius::MD.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GRAY_100)),
            text_color: palette::SURFACE_900,
            border: Border {
                color: palette::ACCENT_300,
                width: border::WIDTH_LG,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(palette::GRAY_200)),
            text_color: palette::GRAY_400,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::MD.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Secondary footer button: borderless label on the dark surface.
pub fn secondary(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::ACCENT_300,
        button::Status::Disabled => palette::GRAY_400,
        _ => WHITE,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round yellow "add sticker" button at the center of the options row.
pub fn circle(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::ACCENT_300,
        button::Status::Pressed => palette::ACCENT_600,
        button::Status::Disabled => palette::GRAY_400,
        _ => palette::ACCENT_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::SURFACE_900,
        border: Border {
            color: WHITE,
            width: border::WIDTH_MD,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Icon-above-label buttons flanking the circle button (Reset, Save).
pub fn icon_action(_theme: &Theme, status: button::Status) -> button::Style {
    let text_color = match status {
        button::Status::Hovered => palette::ACCENT_500,
        button::Status::Disabled => palette::GRAY_400,
        _ => WHITE,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Sticker cells inside the picker sheet: transparent, a subtle halo on hover.
pub fn sticker_cell(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_SUBTLE,
        button::Status::Pressed => opacity::OVERLAY_MEDIUM,
        _ => opacity::TRANSPARENT,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..WHITE })),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Dim close affordance in the picker title row.
pub fn picker_close(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_carries_the_yellow_ring() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        assert_eq!(style.border.color, palette::ACCENT_500);
        assert_eq!(style.border.width, border::WIDTH_LG);
    }

    #[test]
    fn circle_button_darkens_when_pressed() {
        let theme = Theme::Dark;
        let active = circle(&theme, button::Status::Active);
        let pressed = circle(&theme, button::Status::Pressed);

        assert_ne!(active.background, pressed.background);
    }

    #[test]
    fn sticker_cell_is_transparent_until_hovered() {
        let theme = Theme::Dark;
        let idle = sticker_cell(&theme, button::Status::Active);
        let hover = sticker_cell(&theme, button::Status::Hovered);

        assert_ne!(idle.background, hover.background);
    }
}
