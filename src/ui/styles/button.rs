// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (brand colored).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: palette::WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
    }
}

/// Gallery card on the grid page.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let (background, border_color) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (palette.background.weak.color, palette.primary.base.color)
        }
        _ => (palette.background.base.color, palette.background.strong.color),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette.background.base.text,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Gallery card holding keyboard focus: a brand-colored ring.
pub fn card_focused(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..card(theme, status)
    }
}

/// Thumbnail in the modal strip.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered => palette::GRAY_200,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: palette::WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Thumbnail of the image currently shown.
pub fn thumbnail_active(theme: &Theme, status: button::Status) -> button::Style {
    button::Style {
        border: Border {
            color: palette::PRIMARY_400,
            width: border::WIDTH_MD,
            radius: radius::SM.into(),
        },
        ..thumbnail(theme, status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn focused_card_has_thicker_brand_border() {
        let plain = card(&Theme::Light, button::Status::Active);
        let focused = card_focused(&Theme::Light, button::Status::Active);

        assert!(focused.border.width > plain.border.width);
        assert_eq!(focused.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn only_active_thumbnail_is_outlined() {
        let idle = thumbnail(&Theme::Dark, button::Status::Active);
        let active = thumbnail_active(&Theme::Dark, button::Status::Active);

        assert_eq!(idle.border.color, Color::TRANSPARENT);
        assert_eq!(active.border.color, palette::PRIMARY_400);
    }
}
