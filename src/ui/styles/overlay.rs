// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox backdrop.

use crate::ui::design_tokens::{opacity, palette::BLACK};
use iced::widget::container;
use iced::{Background, Color, Theme};

/// Darkened layer behind the modal card; same in light and dark themes.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backdrop_ignores_theme() {
        assert_eq!(
            backdrop(&Theme::Light).background,
            backdrop(&Theme::Dark).background
        );
    }
}
