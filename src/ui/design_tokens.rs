// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens.
//!
//! Base colors, spacing, sizing and typography scales shared by every view
//! component. The brand palette follows the app's dark slate surface with a
//! yellow accent.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.45, 0.45, 0.45);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.9);

    // Surface (dark slate, `#25292e`)
    pub const SURFACE_900: Color = Color::from_rgb(0.145, 0.161, 0.18);
    pub const SURFACE_800: Color = Color::from_rgb(0.19, 0.21, 0.235);
    pub const SURFACE_700: Color = Color::from_rgb(0.275, 0.298, 0.333);

    // Brand colors (yellow scale, `#ffd33d` accent)
    pub const ACCENT_300: Color = Color::from_rgb(1.0, 0.89, 0.55);
    pub const ACCENT_500: Color = Color::from_rgb(1.0, 0.827, 0.239);
    pub const ACCENT_600: Color = Color::from_rgb(0.9, 0.72, 0.13);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 38.0;

    // Interactive elements
    pub const BUTTON_WIDTH: f32 = 320.0;
    pub const BUTTON_HEIGHT: f32 = 68.0;
    pub const CIRCLE_BUTTON: f32 = 84.0;

    // Sticker picker
    pub const PICKER_HEIGHT: f32 = 180.0;
    pub const PICKER_ITEM: f32 = 100.0;

    pub const TOAST_WIDTH: f32 = 320.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Modal and splash titles.
    pub const TITLE: f32 = 20.0;

    /// Button labels and most UI text.
    pub const BODY: f32 = 16.0;

    /// Toast messages, secondary labels.
    pub const BODY_SM: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
    /// Emphasis ring around the primary footer button.
    pub const WIDTH_LG: f32 = 4.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 18.0;
    pub const FULL: f32 = 9999.0; // Pill / circle shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::PICKER_ITEM < sizing::PICKER_HEIGHT);

    assert!(typography::TITLE > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);

    assert!(border::WIDTH_LG > border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn accent_is_a_yellow() {
        assert!(palette::ACCENT_500.r > 0.9);
        assert!(palette::ACCENT_500.g > 0.7);
        assert!(palette::ACCENT_500.b < 0.4);
    }
}
