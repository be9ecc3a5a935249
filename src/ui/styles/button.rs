// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

/// Primary action (the fetch button).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::NASA_BLUE_LIGHT,
        button::Status::Disabled => palette::GRAY_700,
        button::Status::Active | button::Status::Pressed => palette::NASA_BLUE,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::NASA_RED,
            width: if matches!(status, button::Status::Hovered) {
                1.0
            } else {
                0.0
            },
            radius: radius::SM.into(),
        },
        shadow: shadow::MD,
        ..button::Style::default()
    }
}

/// Gallery card: transparent surface that lifts on hover.
pub fn card(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let (background, lifted) = match status {
        button::Status::Hovered | button::Status::Pressed => {
            (extended.background.strong.color, true)
        }
        _ => (extended.background.weak.color, false),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: extended.background.base.text,
        border: Border {
            color: if lifted {
                palette::NASA_RED
            } else {
                Color::TRANSPARENT
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: if lifted { shadow::LG } else { Shadow::default() },
        ..button::Style::default()
    }
}

/// Small borderless control (stepper arrows, modal close).
pub fn subtle(theme: &Theme, status: button::Status) -> button::Style {
    let extended = theme.extended_palette();
    let text_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::NASA_RED,
        button::Status::Disabled => extended.background.strong.color,
        button::Status::Active => extended.background.base.text,
    };

    button::Style {
        background: None,
        text_color,
        ..button::Style::default()
    }
}
